//! Delivery schedule document loaded from the settings provider.
//!
//! The hosted backend stores the order cutoff and the non-delivery calendar
//! as one JSON document; deployments without the backend (tests, previews)
//! point this loader at a file with the same shape:
//!
//! ```json
//! {
//!   "settings": { "cutoffHour": 14, "cutoffMinute": 0, "processingDays": 2 },
//!   "nonDeliveryDays": [
//!     { "date": "2025-01-01", "reason": "Шинэ жил", "isRecurringYearly": true }
//!   ]
//! }
//! ```

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

use super::{DeliverySettings, NonDeliveryDay, calculate_delivery_date};

/// Errors loading the delivery schedule document.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("failed to read delivery schedule: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid delivery schedule: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Cutoff settings plus the non-delivery calendar, fetched together.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverySchedule {
    pub settings: DeliverySettings,
    #[serde(default)]
    pub non_delivery_days: Vec<NonDeliveryDay>,
}

impl DeliverySchedule {
    /// Load the schedule from a JSON document on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if the file cannot be read or does not
    /// match the schedule shape.
    pub fn load(path: &Path) -> Result<Self, ScheduleError> {
        let raw = std::fs::read_to_string(path)?;
        let schedule: Self = serde_json::from_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            non_delivery_days = schedule.non_delivery_days.len(),
            "loaded delivery schedule"
        );
        Ok(schedule)
    }

    /// The next valid delivery date for an order placed at `now`.
    #[must_use]
    pub fn next_delivery_date(&self, now: NaiveDateTime) -> NaiveDate {
        calculate_delivery_date(&self.settings, &self.non_delivery_days, now)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_document() {
        let json = r#"{
            "settings": { "cutoffHour": 14, "cutoffMinute": 0, "processingDays": 2 },
            "nonDeliveryDays": [
                { "date": "2025-01-01", "reason": "Шинэ жил", "isRecurringYearly": true },
                { "date": "2025-03-12", "reason": "warehouse move", "isRecurringYearly": false }
            ]
        }"#;
        let schedule: DeliverySchedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.settings.cutoff_hour, 14);
        assert_eq!(schedule.non_delivery_days.len(), 2);
        assert!(schedule.non_delivery_days.first().unwrap().is_recurring_yearly);
    }

    #[test]
    fn test_missing_calendar_defaults_to_empty() {
        let json = r#"{ "settings": { "cutoffHour": 10, "cutoffMinute": 30, "processingDays": 1 } }"#;
        let schedule: DeliverySchedule = serde_json::from_str(json).unwrap();
        assert!(schedule.non_delivery_days.is_empty());
    }

    #[test]
    fn test_malformed_document_errors() {
        let result: Result<DeliverySchedule, _> = serde_json::from_str(r#"{"settings":{}}"#);
        assert!(result.is_err());
    }
}

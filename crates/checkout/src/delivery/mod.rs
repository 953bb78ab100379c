//! Delivery date scheduling.
//!
//! Orders placed before the daily cutoff ship after the configured number of
//! processing days; orders placed at or after the cutoff lose a day. The
//! resulting date is then pushed past any non-delivery days (public holidays
//! recur yearly, one-off closures match an exact date).

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

pub mod format;
pub mod schedule;

pub use format::format_delivery_date;
pub use schedule::{DeliverySchedule, ScheduleError};

/// Order cutoff and processing configuration.
///
/// Read from the site settings provider and used as-is. Out-of-range cutoff
/// fields are a caller contract violation, not a runtime failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverySettings {
    /// Hour of the daily order cutoff, 0-23.
    pub cutoff_hour: u32,
    /// Minute of the daily order cutoff, 0-59.
    pub cutoff_minute: u32,
    /// Calendar days needed to prepare an order before dispatch.
    pub processing_days: u32,
}

impl DeliverySettings {
    /// The cutoff instant on the given date.
    ///
    /// An out-of-range hour/minute degrades to midnight, keeping the
    /// calculation total.
    #[must_use]
    pub fn cutoff_on(&self, date: NaiveDate) -> NaiveDateTime {
        let time = NaiveTime::from_hms_opt(self.cutoff_hour, self.cutoff_minute, 0)
            .unwrap_or(NaiveTime::MIN);
        date.and_time(time)
    }
}

/// A calendar date on which delivery cannot occur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonDeliveryDay {
    /// The blocked date. For recurring entries the year is ignored.
    pub date: NaiveDate,
    /// Human-readable reason, shown in the admin calendar.
    pub reason: String,
    /// Whether this entry recurs every year (e.g., public holidays).
    pub is_recurring_yearly: bool,
}

impl NonDeliveryDay {
    /// Whether this entry blocks delivery on `date`.
    #[must_use]
    pub fn blocks(&self, date: NaiveDate) -> bool {
        if self.is_recurring_yearly {
            self.date.month() == date.month() && self.date.day() == date.day()
        } else {
            self.date == date
        }
    }
}

/// Compute the next valid delivery date for an order placed at `now`.
///
/// Pure and deterministic: no I/O, no clock access. The returned date is
/// never a non-delivery day. A calendar dense enough to block every
/// remaining date stops at the end of the representable calendar instead of
/// looping forever.
#[must_use]
pub fn calculate_delivery_date(
    settings: &DeliverySettings,
    non_delivery_days: &[NonDeliveryDay],
    now: NaiveDateTime,
) -> NaiveDate {
    let mut offset = u64::from(settings.processing_days);
    if now >= settings.cutoff_on(now.date()) {
        offset += 1;
    }

    let mut date = now
        .date()
        .checked_add_days(Days::new(offset))
        .unwrap_or(NaiveDate::MAX);

    while non_delivery_days.iter().any(|day| day.blocks(date)) {
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    date
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn settings() -> DeliverySettings {
        DeliverySettings {
            cutoff_hour: 14,
            cutoff_minute: 0,
            processing_days: 2,
        }
    }

    fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_before_cutoff_ships_after_processing_days() {
        let date = calculate_delivery_date(&settings(), &[], at(2025, 3, 10, 13, 0));
        assert_eq!(date, day(2025, 3, 12));
    }

    #[test]
    fn test_after_cutoff_loses_a_day() {
        let date = calculate_delivery_date(&settings(), &[], at(2025, 3, 10, 15, 0));
        assert_eq!(date, day(2025, 3, 13));
    }

    #[test]
    fn test_exactly_at_cutoff_counts_as_after() {
        let date = calculate_delivery_date(&settings(), &[], at(2025, 3, 10, 14, 0));
        assert_eq!(date, day(2025, 3, 13));
    }

    #[test]
    fn test_one_minute_before_cutoff_counts_as_before() {
        let date = calculate_delivery_date(&settings(), &[], at(2025, 3, 10, 13, 59));
        assert_eq!(date, day(2025, 3, 12));
    }

    #[test]
    fn test_zero_processing_days() {
        let zero = DeliverySettings {
            processing_days: 0,
            ..settings()
        };
        assert_eq!(
            calculate_delivery_date(&zero, &[], at(2025, 3, 10, 9, 0)),
            day(2025, 3, 10)
        );
        assert_eq!(
            calculate_delivery_date(&zero, &[], at(2025, 3, 10, 20, 0)),
            day(2025, 3, 11)
        );
    }

    #[test]
    fn test_recurring_holiday_matches_any_year() {
        // New Year's Day entered years ago still blocks this year
        let new_year = NonDeliveryDay {
            date: day(2020, 1, 1),
            reason: "Шинэ жил".to_string(),
            is_recurring_yearly: true,
        };
        let date = calculate_delivery_date(&settings(), &[new_year], at(2024, 12, 30, 10, 0));
        assert_eq!(date, day(2025, 1, 2));
    }

    #[test]
    fn test_one_off_closure_matches_exact_date_only() {
        let closure = NonDeliveryDay {
            date: day(2025, 3, 12),
            reason: "warehouse move".to_string(),
            is_recurring_yearly: false,
        };
        // Blocks the matching date...
        assert_eq!(
            calculate_delivery_date(&settings(), std::slice::from_ref(&closure), at(2025, 3, 10, 10, 0)),
            day(2025, 3, 13)
        );
        // ...but not the same month/day a year later
        assert_eq!(
            calculate_delivery_date(&settings(), &[closure], at(2026, 3, 10, 10, 0)),
            day(2026, 3, 12)
        );
    }

    #[test]
    fn test_consecutive_blackouts_advance_past_all() {
        let days: Vec<NonDeliveryDay> = (12..=14)
            .map(|d| NonDeliveryDay {
                date: day(2025, 3, d),
                reason: "Tsagaan Sar".to_string(),
                is_recurring_yearly: false,
            })
            .collect();
        let date = calculate_delivery_date(&settings(), &days, at(2025, 3, 10, 10, 0));
        assert_eq!(date, day(2025, 3, 15));
    }

    #[test]
    fn test_cutoff_shift_can_land_on_blackout() {
        // Before cutoff clears the holiday, after cutoff lands on it
        let holiday = NonDeliveryDay {
            date: day(2025, 3, 13),
            reason: "holiday".to_string(),
            is_recurring_yearly: false,
        };
        assert_eq!(
            calculate_delivery_date(&settings(), std::slice::from_ref(&holiday), at(2025, 3, 10, 13, 0)),
            day(2025, 3, 12)
        );
        assert_eq!(
            calculate_delivery_date(&settings(), &[holiday], at(2025, 3, 10, 15, 0)),
            day(2025, 3, 14)
        );
    }

    #[test]
    fn test_non_delivery_day_blocks() {
        let recurring = NonDeliveryDay {
            date: day(2023, 7, 11),
            reason: "Naadam".to_string(),
            is_recurring_yearly: true,
        };
        assert!(recurring.blocks(day(2026, 7, 11)));
        assert!(!recurring.blocks(day(2026, 7, 12)));

        let one_off = NonDeliveryDay {
            date: day(2023, 7, 11),
            reason: "Naadam".to_string(),
            is_recurring_yearly: false,
        };
        assert!(one_off.blocks(day(2023, 7, 11)));
        assert!(!one_off.blocks(day(2026, 7, 11)));
    }

    #[test]
    fn test_settings_deserialize_camel_case() {
        let json = r#"{"cutoffHour":14,"cutoffMinute":30,"processingDays":2}"#;
        let settings: DeliverySettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.cutoff_hour, 14);
        assert_eq!(settings.cutoff_minute, 30);
        assert_eq!(settings.processing_days, 2);
    }
}

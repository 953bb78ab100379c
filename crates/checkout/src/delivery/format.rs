//! Localized rendering of the computed delivery date.

use chrono::{Datelike, NaiveDate};
use makh_market_core::Language;

// Weekday abbreviations indexed Sunday-first, matching
// `Weekday::num_days_from_sunday`.
const WEEKDAYS_MN: [&str; 7] = ["Ня", "Да", "Мя", "Лх", "Пү", "Ба", "Бя"];
const WEEKDAYS_KO: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];
const WEEKDAYS_RU: [&str; 7] = ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"];
const WEEKDAYS_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn weekday_abbrev(date: NaiveDate, language: Language) -> &'static str {
    let table = match language {
        Language::Mn => &WEEKDAYS_MN,
        Language::Ko => &WEEKDAYS_KO,
        Language::Ru => &WEEKDAYS_RU,
        Language::En => &WEEKDAYS_EN,
    };
    let index = date.weekday().num_days_from_sunday() as usize;
    table.get(index).copied().unwrap_or("")
}

/// Render a delivery date as month/day plus localized weekday abbreviation.
///
/// Template ordering is locale-specific; unknown locale codes are mapped to
/// [`Language::Mn`] by [`Language::parse`] before reaching this function.
#[must_use]
pub fn format_delivery_date(date: NaiveDate, language: Language) -> String {
    let month = date.month();
    let day = date.day();
    let weekday = weekday_abbrev(date, language);

    match language {
        Language::Ko => format!("{month}월/{day}({weekday})"),
        Language::En => format!("{month}/{day}({weekday})"),
        Language::Ru => format!("{day}.{month}({weekday})"),
        Language::Mn => format!("{month} сар/{day}({weekday})"),
    }
}

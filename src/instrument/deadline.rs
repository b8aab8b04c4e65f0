// ABOUTME: Calendar-day deadline arithmetic and date formatting helpers
// ABOUTME: Computes response windows and formats dates for instrument bodies

use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Add a number of calendar days to a start date.
///
/// Calendar days, not business days; weekends and holidays count. Saturates
/// at the chrono date range boundary instead of overflowing.
pub fn deadline_after(start: NaiveDate, days: i64) -> NaiveDate {
    start
        .checked_add_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Format as "Month D, YYYY" (letterhead date stamp)
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format as "Weekday, Month D, YYYY" (deadline interpolation)
pub fn weekday_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Both standard response windows computed from a notice date
#[derive(Debug, Clone, Serialize)]
pub struct ResponseWindows {
    pub notice_date: NaiveDate,
    pub ten_day: NaiveDate,
    pub twenty_eight_day: NaiveDate,
}

impl ResponseWindows {
    pub fn from_notice_date(notice_date: NaiveDate) -> Self {
        Self {
            notice_date,
            ten_day: deadline_after(notice_date, 10),
            twenty_eight_day: deadline_after(notice_date, 28),
        }
    }
}

use crate::constants::{DATE_FORMAT, DAYS_TO_BACK_LOOK};
use chrono::{Duration, NaiveDate, Utc};

/// Computes a date window ending at `today` and starting `days` earlier
///
/// # Arguments
/// * `today` - The end of the window
/// * `days` - Number of days to look back
///
/// # Returns
/// A `(from, to)` pair of dates
pub fn lookback_window(today: NaiveDate, days: i64) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(days), today)
}

/// Computes the default 35-day window ending today (UTC)
///
/// Callers that want a different window pass explicit dates to the query
/// builders instead; the window is never an implicit per-method default.
pub fn default_lookback_window() -> (NaiveDate, NaiveDate) {
    lookback_window(Utc::now().date_naive(), DAYS_TO_BACK_LOOK)
}

/// Formats a date the way the orders and transactions endpoints expect (YYYY-MM-DD)
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Current time as epoch milliseconds, the unit the price history endpoint uses
pub fn now_epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}

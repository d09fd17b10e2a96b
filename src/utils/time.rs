//! Time utilities
//!
//! Entity timestamps are Unix milliseconds (`i64`), written by the
//! repository layer. Date strings from the API are parsed here.

use chrono::NaiveDate;

use crate::utils::AppError;

/// Current time as Unix milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Parse a date string (YYYY-MM-DD).
pub fn parse_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {date}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert!(parse_date("2026-02-28").is_ok());
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_date("28/02/2026").is_err());
    }
}

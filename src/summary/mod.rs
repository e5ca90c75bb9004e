//! Daily summary aggregation: dashboard statistics and the emailed digest.

pub mod digest;
pub mod stats;

use chrono::{Local, NaiveDate};

/// Storage format for record dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in storage format.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Format a stored date for display ("Mar 05, 2026"). Unparsable input
/// renders verbatim.
pub fn format_display_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2026-08-06"), "Aug 06, 2026");
        assert_eq!(format_display_date("not-a-date"), "not-a-date");
        assert_eq!(format_display_date(""), "");
    }
}

//! Purchase-date format handling.
//!
//! Item records store the purchase date as text. Three representations are
//! accepted, checked in order: the date-only form, RFC 3339, and a plain
//! offset-datetime pattern that covers near-RFC 3339 strings coming back
//! from storage.

use chrono::{DateTime, NaiveDate};

/// The human, date-only form item records settle on: `2024-03-15`.
pub const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Offset datetime without the RFC 3339 extras, e.g. `2024-03-15T09:30:00+09:00`.
const OFFSET_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// True when `value` matches one of the accepted purchase-date forms.
pub fn is_supported_format(value: &str) -> bool {
    NaiveDate::parse_from_str(value, DATE_ONLY_FORMAT).is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
        || DateTime::parse_from_str(value, OFFSET_DATETIME_FORMAT).is_ok()
}

/// Rewrite an RFC 3339 timestamp into the date-only form.
///
/// The date is rendered in the timestamp's own offset. Returns `None` for
/// anything that is not RFC 3339 (including values that are already
/// date-only); the caller keeps the stored value unchanged in that case.
pub fn normalize_date_only(value: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|ts| ts.format(DATE_ONLY_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_date_only_form() {
        assert!(is_supported_format("2024-03-15"));
    }

    #[test]
    fn accepts_rfc3339_timestamps() {
        assert!(is_supported_format("2024-03-15T09:30:00Z"));
        assert!(is_supported_format("2024-03-15T09:30:00+09:00"));
        assert!(is_supported_format("2024-03-15T09:30:00.250-05:00"));
    }

    #[test]
    fn accepts_the_plain_offset_datetime_form() {
        assert!(is_supported_format("2024-03-15T09:30:00+00:00"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_supported_format(""));
        assert!(!is_supported_format("15/03/2024"));
        assert!(!is_supported_format("2024-03-15 09:30:00"));
        assert!(!is_supported_format("March 15, 2024"));
    }

    #[test]
    fn normalize_rewrites_a_utc_timestamp() {
        assert_eq!(
            normalize_date_only("2024-03-15T09:30:00Z").as_deref(),
            Some("2024-03-15")
        );
    }

    #[test]
    fn normalize_renders_the_date_in_the_timestamps_own_offset() {
        // 23:00 on Dec 31 in +09:00 is already Jan 1 in UTC; the stored
        // date keeps the offset's view.
        assert_eq!(
            normalize_date_only("2024-12-31T23:00:00+09:00").as_deref(),
            Some("2024-12-31")
        );
    }

    #[test]
    fn normalize_ignores_date_only_values() {
        assert_eq!(normalize_date_only("2024-03-15"), None);
        assert_eq!(normalize_date_only("not a date"), None);
    }
}

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::fmt::Display;

pub const INVALID_DATE: &str = "Invalid date";
pub const TIMESTAMP_FORMAT: &str = "%b %d, %Y %H:%M:%S";

/// Seconds rendered as whole milliseconds, e.g. `0.123` -> `"123ms"`.
pub fn format_processing_time(seconds: f64) -> String {
    format!("{}ms", (seconds * 1000.0).round() as i64)
}

pub fn format_timestamp(iso: &str) -> String {
    format_timestamp_in(iso, &Local)
}

/// A missing timestamp renders like an unparsable one.
pub fn format_optional_timestamp(iso: Option<&str>) -> String {
    iso.map(format_timestamp).unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Formats an ISO-8601 timestamp in `tz`. Timestamps without an offset are
/// taken to be in `tz` already. Anything unparsable yields [`INVALID_DATE`].
pub fn format_timestamp_in<Tz: TimeZone>(iso: &str, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    match parse_in(iso.trim(), tz) {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_in<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(tz));
    }
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()?;
    tz.from_local_datetime(&naive).earliest()
}

/// `"11–20 of 42"` style range label for the pagination footer.
pub fn format_page_range(page: usize, rows_per_page: usize, shown: usize, total: u64) -> String {
    if shown == 0 {
        return format!("0 of {total}");
    }
    let from = page.saturating_mul(rows_per_page).saturating_add(1);
    let to = from.saturating_add(shown - 1);
    format!("{from}–{to} of {total}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn processing_time_rounds_to_whole_ms() {
        assert_eq!(format_processing_time(0.123), "123ms");
        assert_eq!(format_processing_time(0.0), "0ms");
        assert_eq!(format_processing_time(0.0015), "2ms");
        assert_eq!(format_processing_time(1.5), "1500ms");
    }

    #[test]
    fn formats_offset_timestamps_in_target_zone() {
        assert_eq!(
            format_timestamp_in("2025-03-01T10:05:09Z", &Utc),
            "Mar 01, 2025 10:05:09"
        );
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(
            format_timestamp_in("2025-03-01T10:05:09+00:00", &cet),
            "Mar 01, 2025 11:05:09"
        );
    }

    #[test]
    fn naive_timestamps_are_local_to_target_zone() {
        assert_eq!(
            format_timestamp_in("2025-12-24T18:30:00.123456", &Utc),
            "Dec 24, 2025 18:30:00"
        );
        assert_eq!(
            format_timestamp_in("2025-12-24 18:30:00", &Utc),
            "Dec 24, 2025 18:30:00"
        );
    }

    #[test]
    fn malformed_dates_render_placeholder() {
        for bad in ["", "yesterday", "2025-13-40T99:00:00", "not-a-date"] {
            assert_eq!(format_timestamp_in(bad, &Utc), INVALID_DATE);
        }
        assert_eq!(format_timestamp("garbage"), INVALID_DATE);
    }

    #[test]
    fn missing_timestamp_renders_placeholder() {
        assert_eq!(format_optional_timestamp(None), INVALID_DATE);
        assert_eq!(format_optional_timestamp(Some("nope")), INVALID_DATE);
        assert_ne!(format_optional_timestamp(Some("2025-03-01T10:05:09Z")), INVALID_DATE);
    }

    #[test]
    fn page_range_label() {
        assert_eq!(format_page_range(0, 10, 10, 42), "1–10 of 42");
        assert_eq!(format_page_range(4, 10, 2, 42), "41–42 of 42");
        assert_eq!(format_page_range(0, 10, 0, 0), "0 of 0");
        assert_eq!(
            format_page_range(usize::MAX, 100, 1, 5),
            format!("{max}–{max} of 5", max = usize::MAX)
        );
    }
}

use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 in UTC with millisecond precision, e.g. `2026-10-17T09:30:00.000Z`.
pub fn to_iso_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses any RFC 3339 timestamp and normalises it to UTC.
pub fn parse_iso_timestamp(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Local-time rendering for the status bar.
pub fn format_launch_time(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn iso_timestamp_uses_millis_and_z_suffix() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
        assert_eq!(to_iso_timestamp(dt), "2026-10-17T09:30:00.000Z");
    }

    #[test]
    fn parse_normalises_offsets_to_utc() {
        let parsed = parse_iso_timestamp("2026-10-17T11:30:00.000+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap());
        assert_eq!(parse_iso_timestamp("yesterday"), None);
    }
}

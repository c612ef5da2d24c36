/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application.
/// All values are rendered in a caller-supplied IANA time zone.
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Shape of the rendered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// Relative to now: "3 hours ago", "in a day"
    Ago,
    /// "March 15, 2024 02:02:26 PM"
    #[default]
    DateTime,
    /// "March 15, 2024"
    Date,
    /// "02:02:26 PM"
    Time,
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an IANA zone name, falling back to UTC for unknown names.
pub fn parse_time_zone(name: &str) -> Tz {
    name.trim().parse::<Tz>().unwrap_or(Tz::UTC)
}

/// Format `value` in `tz`. Missing input renders "N/A", unparsable input
/// renders "Invalid Date".
pub fn format_date_time(value: Option<&str>, format: DateFormat, tz: Tz) -> String {
    format_date_time_at(value, format, tz, Utc::now())
}

/// Same as [`format_date_time`] with an explicit "now" for relative output.
pub fn format_date_time_at(
    value: Option<&str>,
    format: DateFormat,
    tz: Tz,
    now: DateTime<Utc>,
) -> String {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "N/A".to_string();
    };
    let Some(moment) = parse_in_zone(value, tz) else {
        return "Invalid Date".to_string();
    };

    match format {
        DateFormat::Ago => humanize((moment.with_timezone(&Utc) - now).num_seconds()),
        DateFormat::Date => moment.format("%B %-d, %Y").to_string(),
        DateFormat::Time => moment.format("%I:%M:%S %p").to_string(),
        DateFormat::DateTime => moment.format("%B %-d, %Y %I:%M:%S %p").to_string(),
    }
}

/// Values with an offset are converted into `tz`; naive values are taken
/// as wall-clock time in `tz`.
fn parse_in_zone(value: &str, tz: Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&tz));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return resolve_local(naive, tz);
        }
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    resolve_local(date.and_hms_opt(0, 0, 0)?, tz)
}

/// Wall time in `tz`. Ambiguous times take the earlier instant; times in a
/// spring-forward gap are shifted forward by the gap (one hour).
fn resolve_local(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&naive).earliest().or_else(|| {
        tz.from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
    })
}

/// Humanised distance; positive `delta_seconds` lies in the future.
fn humanize(delta_seconds: i64) -> String {
    let abs = delta_seconds.unsigned_abs() as f64;
    let days_exact = abs / 86_400.0;

    let seconds = abs.round();
    let minutes = (abs / 60.0).round();
    let hours = (abs / 3_600.0).round();
    let days = days_exact.round();
    let months = (days_exact * 4_800.0 / 146_097.0).round();
    let years = (days_exact / 365.2425).round();

    let phrase = if seconds < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes)
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{} hours", hours)
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{} days", days)
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{} months", months)
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{} years", years)
    };

    if delta_seconds > 0 {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_datetime() {
        let utc = Tz::UTC;
        assert_eq!(
            format_date_time_at(Some("2024-03-15T14:02:26.123Z"), DateFormat::DateTime, utc, now()),
            "March 15, 2024 02:02:26 PM"
        );
        assert_eq!(
            format_date_time_at(Some("2024-03-15T14:02:26Z"), DateFormat::Date, utc, now()),
            "March 15, 2024"
        );
        assert_eq!(
            format_date_time_at(Some("2024-03-15T14:02:26Z"), DateFormat::Time, utc, now()),
            "02:02:26 PM"
        );
    }

    #[test]
    fn test_converts_into_zone() {
        let dhaka = parse_time_zone("Asia/Dhaka");
        assert_eq!(
            format_date_time_at(Some("2024-03-15T14:02:26Z"), DateFormat::DateTime, dhaka, now()),
            "March 15, 2024 08:02:26 PM"
        );
    }

    #[test]
    fn test_naive_value_is_wall_time() {
        let ny = parse_time_zone("America/New_York");
        assert_eq!(
            format_date_time_at(Some("2024-03-05 09:07:00"), DateFormat::DateTime, ny, now()),
            "March 5, 2024 09:07:00 AM"
        );
        assert_eq!(
            format_date_time_at(Some("2024-03-05"), DateFormat::Date, ny, now()),
            "March 5, 2024"
        );
    }

    #[test]
    fn test_wall_time_in_dst_gap_shifts_forward() {
        let ny = parse_time_zone("America/New_York");
        assert_eq!(
            format_date_time_at(Some("2024-03-10 02:30:00"), DateFormat::DateTime, ny, now()),
            "March 10, 2024 03:30:00 AM"
        );
    }

    #[test]
    fn test_ambiguous_wall_time_takes_earlier_instant() {
        let ny = parse_time_zone("America/New_York");
        // 01:30 occurs twice on 2024-11-03; the first one is EDT (UTC-4)
        let out = format_date_time_at(Some("2024-11-03 01:30:00"), DateFormat::DateTime, ny, now());
        assert_eq!(out, "November 3, 2024 01:30:00 AM");
        let moment = parse_in_zone("2024-11-03 01:30:00", ny).unwrap();
        assert_eq!(moment.with_timezone(&Utc).format("%H:%M").to_string(), "05:30");
    }

    #[test]
    fn test_missing_and_invalid() {
        assert_eq!(format_date_time_at(None, DateFormat::DateTime, Tz::UTC, now()), "N/A");
        assert_eq!(format_date_time_at(Some("  "), DateFormat::Ago, Tz::UTC, now()), "N/A");
        assert_eq!(
            format_date_time_at(Some("not a date"), DateFormat::Date, Tz::UTC, now()),
            "Invalid Date"
        );
    }

    #[test]
    fn test_unknown_zone_falls_back_to_utc() {
        assert_eq!(parse_time_zone("Mars/Olympus"), Tz::UTC);
        assert_eq!(parse_time_zone(""), Tz::UTC);
    }

    #[test]
    fn test_relative() {
        let ago = |v: &str| format_date_time_at(Some(v), DateFormat::Ago, Tz::UTC, now());
        assert_eq!(ago("2024-03-20T11:59:30Z"), "a few seconds ago");
        assert_eq!(ago("2024-03-20T11:59:00Z"), "a minute ago");
        assert_eq!(ago("2024-03-20T11:55:00Z"), "5 minutes ago");
        assert_eq!(ago("2024-03-20T11:00:00Z"), "an hour ago");
        assert_eq!(ago("2024-03-20T09:00:00Z"), "3 hours ago");
        assert_eq!(ago("2024-03-19T12:00:00Z"), "a day ago");
        assert_eq!(ago("2024-03-15T12:00:00Z"), "5 days ago");
        assert_eq!(ago("2024-02-09T12:00:00Z"), "a month ago");
        assert_eq!(ago("2023-11-20T12:00:00Z"), "4 months ago");
        assert_eq!(ago("2023-02-20T12:00:00Z"), "a year ago");
        assert_eq!(ago("2021-03-20T12:00:00Z"), "3 years ago");
        assert_eq!(ago("2024-03-20T15:00:00Z"), "in 3 hours");
    }
}

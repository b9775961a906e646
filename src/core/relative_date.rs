//! French relative date labels ("Il y a 2 mois")

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Label used when no usable date is available
pub const FALLBACK_LABEL: &str = "Récemment";

const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Datetimes without an offset, read as UTC
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an RFC 3339 timestamp, an ISO datetime without offset or a bare
/// `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let input = input.trim();
    let rfc_err = match DateTime::parse_from_rfc3339(input) {
        Ok(date) => return Ok(date.with_timezone(&Utc)),
        Err(err) => err,
    };

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| rfc_err)
}

/// Whole days between two instants, rounded up
fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    let ms = (a - b).num_milliseconds().abs();
    (ms + MS_PER_DAY - 1) / MS_PER_DAY
}

/// Relative label for a review date as seen at `now`.
///
/// Never fails: missing or unparseable input yields `Récemment`.
pub fn format_relative_date(input: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(input) = input.filter(|s| !s.trim().is_empty()) else {
        return FALLBACK_LABEL.to_string();
    };
    let Ok(date) = parse_date(input) else {
        return FALLBACK_LABEL.to_string();
    };

    let days = days_between(now, date);
    match days {
        d if d < 7 => "Il y a quelques jours".to_string(),
        d if d < 30 => "Il y a quelques semaines".to_string(),
        d if d < 60 => "Il y a 1 mois".to_string(),
        d if d < 90 => "Il y a 2 mois".to_string(),
        d if d < 180 => format!("Il y a {} mois", d / 30),
        d if d < 365 => "Il y a 6 mois".to_string(),
        d => {
            let years = d / 365;
            format!("Il y a {} an{}", years, if years > 1 { "s" } else { "" })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 11, 12, 0, 0).unwrap()
    }

    fn label_days_ago(days: i64) -> String {
        let date = (now() - Duration::days(days)).to_rfc3339();
        format_relative_date(Some(&date), now())
    }

    #[test]
    fn test_invalid_date_falls_back() {
        assert_eq!(format_relative_date(Some("not a date"), now()), "Récemment");
        assert_eq!(format_relative_date(Some("2025-13-45"), now()), "Récemment");
    }

    #[test]
    fn test_missing_date_falls_back() {
        assert_eq!(format_relative_date(None, now()), "Récemment");
        assert_eq!(format_relative_date(Some("  "), now()), "Récemment");
    }

    #[test]
    fn test_day_and_week_buckets() {
        assert_eq!(label_days_ago(0), "Il y a quelques jours");
        assert_eq!(label_days_ago(6), "Il y a quelques jours");
        assert_eq!(label_days_ago(7), "Il y a quelques semaines");
        assert_eq!(label_days_ago(29), "Il y a quelques semaines");
    }

    #[test]
    fn test_month_buckets() {
        assert_eq!(label_days_ago(30), "Il y a 1 mois");
        assert_eq!(label_days_ago(60), "Il y a 2 mois");
        assert_eq!(label_days_ago(90), "Il y a 3 mois");
        assert_eq!(label_days_ago(150), "Il y a 5 mois");
        assert_eq!(label_days_ago(200), "Il y a 6 mois");
    }

    #[test]
    fn test_year_buckets() {
        assert_eq!(label_days_ago(365), "Il y a 1 an");
        assert_eq!(label_days_ago(800), "Il y a 2 ans");
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let date = (now() - Duration::hours(6 * 24 + 1)).to_rfc3339();
        assert_eq!(format_relative_date(Some(&date), now()), "Il y a quelques semaines");
    }

    #[test]
    fn test_plain_date_is_accepted() {
        assert_eq!(
            format_relative_date(Some("2025-12-01"), now()),
            "Il y a quelques semaines"
        );
    }

    #[test]
    fn test_datetime_without_offset_is_accepted() {
        assert_eq!(
            format_relative_date(Some("2025-12-01T10:00:00"), now()),
            "Il y a quelques semaines"
        );
        assert_eq!(
            format_relative_date(Some("2025-12-10T08:30:00.250"), now()),
            "Il y a quelques jours"
        );
        assert_eq!(
            parse_date("2025-12-09T12:00").unwrap(),
            Utc.with_ymd_and_hms(2025, 12, 9, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_future_dates_use_absolute_distance() {
        let date = (now() + Duration::days(40)).to_rfc3339();
        assert_eq!(format_relative_date(Some(&date), now()), "Il y a 1 mois");
    }
}

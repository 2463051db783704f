use chrono::{DateTime, Datelike, Utc};

/// Format a record date for the results list:
/// - under a week old: "just now", "5m ago", "3h ago", "2d ago"
/// - older: "Jan 15" this year, "Dec 3, 2024" otherwise
pub fn format_timestamp(date: &DateTime<Utc>) -> String {
    format_timestamp_at(date, &Utc::now())
}

fn format_timestamp_at(date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let age = now.signed_duration_since(*date);

    if age.num_days() >= 7 {
        return if date.year() == now.year() {
            date.format("%b %-d").to_string()
        } else {
            date.format("%b %-d, %Y").to_string()
        };
    }

    // Dates slightly in the future (clock skew) count as "just now"
    let minutes = age.num_minutes().max(0);
    match (minutes / (60 * 24), minutes / 60, minutes) {
        (days, _, _) if days > 0 => format!("{}d ago", days),
        (_, hours, _) if hours > 0 => format!("{}h ago", hours),
        (_, _, minutes) if minutes > 0 => format!("{}m ago", minutes),
        _ => "just now".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_just_now() {
        assert_eq!(format_timestamp_at(&(now() - Duration::seconds(30)), &now()), "just now");
        assert_eq!(format_timestamp_at(&(now() + Duration::seconds(30)), &now()), "just now");
    }

    #[test]
    fn test_relative() {
        assert_eq!(format_timestamp_at(&(now() - Duration::minutes(45)), &now()), "45m ago");
        assert_eq!(format_timestamp_at(&(now() - Duration::hours(3)), &now()), "3h ago");
        assert_eq!(format_timestamp_at(&(now() - Duration::days(5)), &now()), "5d ago");
    }

    #[test]
    fn test_absolute_same_year() {
        let date = Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap();
        assert_eq!(format_timestamp_at(&date, &now()), "Jan 15");
    }

    #[test]
    fn test_absolute_other_year() {
        let date = Utc.with_ymd_and_hms(2024, 12, 3, 8, 0, 0).unwrap();
        assert_eq!(format_timestamp_at(&date, &now()), "Dec 3, 2024");
    }

    #[test]
    fn test_format_timestamp_uses_current_time() {
        assert_eq!(format_timestamp(&Utc::now()), "just now");
    }
}

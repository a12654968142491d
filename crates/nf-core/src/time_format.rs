//! Relative "time ago" labels for article timestamps.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

const CLOCK_AND_DATE: &str = "%-I:%M %p  %d-%m-%Y";
const CLOCK_AND_DATE_COMPACT: &str = "%-I:%M %p %d-%m-%Y";

/// Render `updated_at` relative to `now`, in `now`'s time zone.
///
/// Timestamps in the future are treated as "just now".
pub fn format_time_ago<Tz>(updated_at: DateTime<Utc>, now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = updated_at.with_timezone(&now.timezone());
    let elapsed = now.with_timezone(&Utc) - updated_at;
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();

    if minutes < 1 {
        format!("Just now  •  {}", local.format(CLOCK_AND_DATE))
    } else if minutes < 60 {
        format!("{minutes} min ago  •  {}", local.format(CLOCK_AND_DATE))
    } else if hours < 24 {
        let plural = if hours > 1 { "s" } else { "" };
        format!(
            "{hours} hour{plural} ago  •  {}",
            local.format(CLOCK_AND_DATE)
        )
    } else {
        local.format(CLOCK_AND_DATE_COMPACT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 15, h, m, 0).unwrap()
    }

    #[test]
    fn under_a_minute_is_just_now() {
        let t = at(12, 44);
        assert_eq!(
            format_time_ago(t, t + Duration::seconds(30)),
            "Just now  •  12:44 PM  15-12-2024"
        );
    }

    #[test]
    fn future_timestamps_are_just_now() {
        let t = at(12, 44);
        assert!(format_time_ago(t, t - Duration::minutes(5)).starts_with("Just now"));
    }

    #[test]
    fn minutes_and_hours() {
        let t = at(9, 5);
        assert_eq!(
            format_time_ago(t, t + Duration::minutes(59)),
            "59 min ago  •  9:05 AM  15-12-2024"
        );
        assert_eq!(
            format_time_ago(t, t + Duration::minutes(61)),
            "1 hour ago  •  9:05 AM  15-12-2024"
        );
        assert_eq!(
            format_time_ago(t, t + Duration::hours(23)),
            "23 hours ago  •  9:05 AM  15-12-2024"
        );
    }

    #[test]
    fn a_day_or_more_shows_only_the_date() {
        let t = at(12, 44);
        assert_eq!(
            format_time_ago(t, t + Duration::hours(24)),
            "12:44 PM 15-12-2024"
        );
    }
}

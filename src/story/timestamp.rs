//! Relative time labels for the story header.

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;

/// Formats how long ago `time_stamp_ms` was, seen from `now_ms`.
///
/// `"now"` under a minute (and for timestamps in the future), then whole
/// minutes, hours, days and weeks: `"5m"`, `"3h"`, `"2d"`, `"1w"`.
pub fn format_story_timestamp(now_ms: i64, time_stamp_ms: i64) -> String {
    let age = now_ms.saturating_sub(time_stamp_ms);
    match age {
        a if a < MINUTE_MS => "now".to_string(),
        a if a < HOUR_MS => format!("{}m", a / MINUTE_MS),
        a if a < DAY_MS => format!("{}h", a / HOUR_MS),
        a if a < WEEK_MS => format!("{}d", a / DAY_MS),
        a => format!("{}w", a / WEEK_MS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_719_840_723_950;

    #[test]
    fn test_labels() {
        assert_eq!(format_story_timestamp(NOW, NOW), "now");
        assert_eq!(format_story_timestamp(NOW, NOW + 10_000), "now");
        assert_eq!(format_story_timestamp(NOW, NOW - 59_999), "now");
        assert_eq!(format_story_timestamp(NOW, NOW - 5 * MINUTE_MS), "5m");
        assert_eq!(format_story_timestamp(NOW, NOW - 3 * HOUR_MS - 1), "3h");
        assert_eq!(format_story_timestamp(NOW, NOW - 2 * DAY_MS), "2d");
        assert_eq!(format_story_timestamp(NOW, NOW - 15 * DAY_MS), "2w");
    }
}

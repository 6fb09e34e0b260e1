//! Elapsed-time decomposition with pause accounting.

use serde::{Deserialize, Serialize};

/// Calendar/clock decomposition of a goal's effective elapsed time.
///
/// `days`, `hours`, `minutes`, and `seconds` are the display fields;
/// the `total_*` fields are running totals consumed by badge and
/// milestone classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBreakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_hours: i64,
    pub total_minutes: i64,
    pub total_seconds: i64,
}

/// Decomposes a streak into days/hours/minutes/seconds at the instant `now`.
///
/// Effective elapsed time is `now - start_time - paused_time`, minus the
/// current pause window when the goal is paused. All arguments are epoch
/// milliseconds.
///
/// The result is not clamped: a `start_time` in the future (clock skew) or
/// corrupted pause bookkeeping yields negative fields. Callers treat that as
/// a bookkeeping problem, not a value to correct here.
pub fn compute_elapsed(
    start_time: i64,
    paused_time: i64,
    is_paused: bool,
    paused_at: Option<i64>,
    now: i64,
) -> TimeBreakdown {
    let mut elapsed = now - start_time - paused_time;

    // A paused streak's clock stops at paused_at.
    if is_paused {
        if let Some(paused_at) = paused_at {
            elapsed -= now - paused_at;
        }
    }

    // Floor division for the running totals, truncated remainder for the
    // display fields, so negative elapsed decomposes into negative fields.
    let total_seconds = elapsed.div_euclid(1000);
    let total_minutes = total_seconds.div_euclid(60);
    let total_hours = total_minutes.div_euclid(60);
    let days = total_hours.div_euclid(24);

    TimeBreakdown {
        days,
        hours: total_hours % 24,
        minutes: total_minutes % 60,
        seconds: total_seconds % 60,
        total_hours,
        total_minutes,
        total_seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DAY_MS: i64 = 86_400_000;
    const HOUR_MS: i64 = 3_600_000;
    const MINUTE_MS: i64 = 60_000;

    #[test]
    fn test_zero_elapsed() {
        let t = compute_elapsed(1_000, 0, false, None, 1_000);
        assert_eq!(t.days, 0);
        assert_eq!(t.hours, 0);
        assert_eq!(t.minutes, 0);
        assert_eq!(t.seconds, 0);
        assert_eq!(t.total_seconds, 0);
    }

    #[test]
    fn test_decomposition() {
        // 2 days, 3 hours, 4 minutes, 5 seconds
        let elapsed = 2 * DAY_MS + 3 * HOUR_MS + 4 * MINUTE_MS + 5_000;
        let t = compute_elapsed(0, 0, false, None, elapsed);
        assert_eq!(t.days, 2);
        assert_eq!(t.hours, 3);
        assert_eq!(t.minutes, 4);
        assert_eq!(t.seconds, 5);
        assert_eq!(t.total_hours, 51);
        assert_eq!(t.total_minutes, 51 * 60 + 4);
    }

    #[test]
    fn test_sub_second_remainder_floors() {
        let t = compute_elapsed(0, 0, false, None, 1_999);
        assert_eq!(t.seconds, 1);
        assert_eq!(t.total_seconds, 1);
    }

    #[test]
    fn test_accumulated_pause_is_excluded() {
        let start = 0;
        let now = 3 * DAY_MS;
        let t = compute_elapsed(start, DAY_MS, false, None, now);
        assert_eq!(t.days, 2);
    }

    #[test]
    fn test_active_pause_freezes_the_clock() {
        let start = 0;
        let paused_at = 2 * HOUR_MS;
        // Wall clock keeps moving; reported elapsed stays at the pause point.
        let at_pause = compute_elapsed(start, 0, true, Some(paused_at), paused_at);
        let much_later = compute_elapsed(start, 0, true, Some(paused_at), paused_at + 5 * DAY_MS);
        assert_eq!(at_pause, much_later);
        assert_eq!(much_later.total_hours, 2);
    }

    #[test]
    fn test_future_start_time_goes_negative() {
        // Known edge case: no clamping when the start is clock-skewed into
        // the future.
        let t = compute_elapsed(10_000, 0, false, None, 8_500);
        assert_eq!(t.total_seconds, -2);
        assert_eq!(t.seconds, -2);
        assert!(t.days <= 0);
    }

    proptest! {
        #[test]
        fn prop_fields_recompose_to_total_seconds(
            start in 0i64..2_000_000_000_000,
            paused in 0i64..DAY_MS,
            offset in 0i64..500 * DAY_MS,
        ) {
            let now = start + paused + offset;
            let t = compute_elapsed(start, paused, false, None, now);
            prop_assert_eq!(
                t.days * 86_400 + t.hours * 3_600 + t.minutes * 60 + t.seconds,
                t.total_seconds
            );
        }

        #[test]
        fn prop_total_seconds_bounded_by_wall_clock(
            start in 0i64..2_000_000_000_000,
            paused in 0i64..DAY_MS,
            offset in 0i64..500 * DAY_MS,
        ) {
            let now = start + paused + offset;
            let t = compute_elapsed(start, paused, false, None, now);
            let wall_ms = now - start - paused;
            prop_assert!(t.total_seconds * 1000 <= wall_ms);
            prop_assert!(t.total_seconds * 1000 > wall_ms - 1000);
        }

        #[test]
        fn prop_display_fields_stay_in_range(
            start in 0i64..2_000_000_000_000,
            offset in 0i64..500 * DAY_MS,
        ) {
            let t = compute_elapsed(start, 0, false, None, start + offset);
            prop_assert!((0..24).contains(&t.hours));
            prop_assert!((0..60).contains(&t.minutes));
            prop_assert!((0..60).contains(&t.seconds));
        }
    }
}

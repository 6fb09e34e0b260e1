//! Next-milestone lookup and progress.

use serde::{Deserialize, Serialize};

use super::TimeBreakdown;

/// Minute thresholds scanned before a streak's first full day.
const MINUTE_MILESTONES: [i64; 8] = [5, 15, 30, 60, 180, 360, 720, 1440];

/// Day thresholds; also the day counts that trigger a celebration when a
/// streak lands on them.
pub const DAY_MILESTONES: [i64; 10] = [1, 2, 3, 7, 14, 21, 30, 60, 100, 365];

/// Progress toward the next milestone.
///
/// `next` is the upcoming threshold (minutes or days depending on streak
/// age) or `None` once every milestone is behind the streak. `progress` is
/// a percentage and is deliberately not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextMilestone {
    pub next: Option<i64>,
    pub progress: f64,
    pub label: String,
}

/// Finds the first milestone ahead of the given breakdown.
///
/// Under one day the minute thresholds apply, labeled in minutes below an
/// hour and in hours from there; afterwards the day thresholds apply. When
/// nothing is ahead, the terminal state is `{next: None, progress: 100,
/// label: "max"}`.
pub fn next_milestone(time: &TimeBreakdown) -> NextMilestone {
    if time.days == 0 {
        for &threshold in &MINUTE_MILESTONES {
            if time.total_minutes < threshold {
                let label = if threshold < 60 {
                    format!("{threshold} min")
                } else {
                    format!("{} hr", threshold / 60)
                };
                return NextMilestone {
                    next: Some(threshold),
                    progress: time.total_minutes as f64 / threshold as f64 * 100.0,
                    label,
                };
            }
        }
    }

    for &threshold in &DAY_MILESTONES {
        if time.days < threshold {
            let plural = if threshold > 1 { "s" } else { "" };
            return NextMilestone {
                next: Some(threshold),
                progress: time.days as f64 / threshold as f64 * 100.0,
                label: format!("{threshold} day{plural}"),
            };
        }
    }

    NextMilestone {
        next: None,
        progress: 100.0,
        label: "max".to_string(),
    }
}

/// True when a goal's day count advanced onto one of the day milestones
/// since the last observation. Drives celebration effects in the shell.
pub fn milestone_reached(previous_days: i64, days: i64) -> bool {
    days > previous_days && DAY_MILESTONES.contains(&days)
}

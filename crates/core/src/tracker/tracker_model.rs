//! View models assembled for the presentation shell.

use serde::{Deserialize, Serialize};

use crate::goals::Goal;
use crate::streak::{format_clock, NextMilestone, StreakBadge, TimeBreakdown};

/// Everything the shell needs to render one goal card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCard {
    pub goal: Goal,
    pub time: TimeBreakdown,
    pub badge: StreakBadge,
    pub milestone: NextMilestone,
    /// Celebratory or motivational line shown under the card.
    pub message: String,
    /// Hex accent color for the card border and progress fill.
    pub accent: String,
}

impl GoalCard {
    /// Zero-padded hours/minutes/seconds for the card's stat boxes.
    /// Days are shown unpadded.
    pub fn clock_fields(&self) -> (String, String, String) {
        (
            format_clock(self.time.hours),
            format_clock(self.time.minutes),
            format_clock(self.time.seconds),
        )
    }
}

/// Aggregate figures across the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_goals: usize,
    /// Goals that are not paused.
    pub active_goals: usize,
    /// Sum of every goal's current streak days.
    pub total_days: i64,
    pub longest_streak: i64,
}

/// One full recomputation of the tracker state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSnapshot {
    pub cards: Vec<GoalCard>,
    /// Absent while the collection is empty.
    pub stats: Option<OverallStats>,
}

//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations and
/// during tracker ticks.
///
/// These events represent facts about tracker data changes. The shell
/// translates them into platform-specific actions (re-render, celebration
/// overlay, sound cues).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Goals were created, updated, or deleted.
    GoalsChanged { goal_ids: Vec<i64> },

    /// A running goal's day count landed on a day milestone during a tick.
    MilestoneReached { goal_id: i64, days: i64 },

    /// Settings values changed.
    SettingsChanged { keys: Vec<String> },
}

impl DomainEvent {
    /// Creates a GoalsChanged event.
    pub fn goals_changed(goal_ids: Vec<i64>) -> Self {
        Self::GoalsChanged { goal_ids }
    }

    /// Creates a MilestoneReached event.
    pub fn milestone_reached(goal_id: i64, days: i64) -> Self {
        Self::MilestoneReached { goal_id, days }
    }

    /// Creates a SettingsChanged event.
    pub fn settings_changed(keys: Vec<String>) -> Self {
        Self::SettingsChanged { keys }
    }
}

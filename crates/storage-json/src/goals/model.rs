//! Persisted goal record shape.

use serde::{Deserialize, Serialize};
use streakfolio_core::goals::{Goal, GoalColor};

/// On-disk representation of a goal.
///
/// Field names match the historical persisted data. Records written before
/// the color, notes, and best-streak features existed omit those fields and
/// load with the serde defaults (gray, empty, zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecord {
    pub id: i64,
    pub name: String,
    pub start_time: i64,
    #[serde(default)]
    pub color: GoalColor,
    #[serde(default)]
    pub is_paused: bool,
    #[serde(default)]
    pub paused_time: i64,
    #[serde(default)]
    pub paused_at: Option<i64>,
    #[serde(default)]
    pub best_streak: i64,
    #[serde(default)]
    pub notes: String,
}

impl From<GoalRecord> for Goal {
    fn from(record: GoalRecord) -> Self {
        Goal {
            id: record.id,
            name: record.name,
            start_time: record.start_time,
            color: record.color,
            is_paused: record.is_paused,
            paused_time: record.paused_time,
            paused_at: record.paused_at,
            best_streak: record.best_streak,
            notes: record.notes,
        }
    }
}

impl From<Goal> for GoalRecord {
    fn from(goal: Goal) -> Self {
        GoalRecord {
            id: goal.id,
            name: goal.name,
            start_time: goal.start_time,
            color: goal.color,
            is_paused: goal.is_paused,
            paused_time: goal.paused_time,
            paused_at: goal.paused_at,
            best_streak: goal.best_streak,
            notes: goal.notes,
        }
    }
}

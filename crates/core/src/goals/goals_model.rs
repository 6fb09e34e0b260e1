//! Goals domain models.

use serde::{Deserialize, Serialize};

use crate::streak::compute_elapsed;

/// Card accent colors available for a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalColor {
    #[default]
    Gray,
    Blue,
    Green,
    Amber,
    Rose,
    Purple,
}

impl GoalColor {
    /// Hex value used for card accents and progress-bar fills.
    pub fn hex(&self) -> &'static str {
        match self {
            GoalColor::Gray => "#6b7280",
            GoalColor::Blue => "#3b82f6",
            GoalColor::Green => "#10b981",
            GoalColor::Amber => "#f59e0b",
            GoalColor::Rose => "#f43f5e",
            GoalColor::Purple => "#8b5cf6",
        }
    }
}

/// Domain model representing a tracked goal.
///
/// `id` is the creation instant in epoch milliseconds and doubles as the
/// default sort key. Two goals created within the same millisecond collide;
/// accepted as a known limitation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    pub name: String,
    /// Start of the current streak, epoch milliseconds.
    pub start_time: i64,
    pub color: GoalColor,
    pub is_paused: bool,
    /// Milliseconds accumulated across finished pause windows. Only grows
    /// at resume time.
    pub paused_time: i64,
    /// Start of the active pause window; set iff `is_paused`.
    pub paused_at: Option<i64>,
    /// Longest streak in days ever recorded across resets.
    pub best_streak: i64,
    pub notes: String,
}

impl Goal {
    /// Current streak length in days at the instant `now` (epoch ms).
    pub fn streak_days(&self, now: i64) -> i64 {
        compute_elapsed(
            self.start_time,
            self.paused_time,
            self.is_paused,
            self.paused_at,
            now,
        )
        .days
    }
}

/// Input model for creating a new goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    #[serde(default)]
    pub color: GoalColor,
    #[serde(default)]
    pub notes: String,
}

/// Orderings for the goal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Longest,
    Shortest,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Longest => "longest",
            SortOrder::Shortest => "shortest",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "longest" => Ok(SortOrder::Longest),
            "shortest" => Ok(SortOrder::Shortest),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Sorts the goal collection in place.
///
/// `Newest`/`Oldest` order by creation id; `Longest`/`Shortest` compare
/// streak day counts at the instant `now`. The sort is stable, so goals
/// with equal day counts keep their relative order.
pub fn sort_goals(goals: &mut [Goal], sort: SortOrder, now: i64) {
    match sort {
        SortOrder::Newest => goals.sort_by(|a, b| b.id.cmp(&a.id)),
        SortOrder::Oldest => goals.sort_by(|a, b| a.id.cmp(&b.id)),
        SortOrder::Longest => {
            goals.sort_by(|a, b| b.streak_days(now).cmp(&a.streak_days(now)))
        }
        SortOrder::Shortest => {
            goals.sort_by(|a, b| a.streak_days(now).cmp(&b.streak_days(now)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 86_400_000;

    fn goal(id: i64, start_time: i64) -> Goal {
        Goal {
            id,
            name: format!("goal-{id}"),
            start_time,
            color: GoalColor::Gray,
            is_paused: false,
            paused_time: 0,
            paused_at: None,
            best_streak: 0,
            notes: String::new(),
        }
    }

    #[test]
    fn test_default_color_is_gray() {
        let record: Goal = serde_json::from_str(
            r#"{"id":1,"name":"read","startTime":0,"color":"gray","isPaused":false,
                "pausedTime":0,"pausedAt":null,"bestStreak":0,"notes":""}"#,
        )
        .unwrap();
        assert_eq!(record.color, GoalColor::Gray);
        assert_eq!(GoalColor::default(), GoalColor::Gray);
    }

    #[test]
    fn test_goal_serializes_camel_case() {
        let json = serde_json::to_string(&goal(5, 0)).unwrap();
        assert!(json.contains("\"startTime\""));
        assert!(json.contains("\"isPaused\""));
        assert!(json.contains("\"bestStreak\""));
    }

    #[test]
    fn test_sort_by_id() {
        let now = 10 * DAY_MS;
        let mut goals = vec![goal(2, 0), goal(3, 0), goal(1, 0)];

        sort_goals(&mut goals, SortOrder::Newest, now);
        assert_eq!(goals.iter().map(|g| g.id).collect::<Vec<_>>(), [3, 2, 1]);

        sort_goals(&mut goals, SortOrder::Oldest, now);
        assert_eq!(goals.iter().map(|g| g.id).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn test_sort_by_streak_length() {
        let now = 10 * DAY_MS;
        let mut goals = vec![
            goal(1, 9 * DAY_MS), // 1 day
            goal(2, 2 * DAY_MS), // 8 days
            goal(3, 7 * DAY_MS), // 3 days
        ];

        sort_goals(&mut goals, SortOrder::Longest, now);
        assert_eq!(goals.iter().map(|g| g.id).collect::<Vec<_>>(), [2, 3, 1]);

        sort_goals(&mut goals, SortOrder::Shortest, now);
        assert_eq!(goals.iter().map(|g| g.id).collect::<Vec<_>>(), [1, 3, 2]);
    }

    #[test]
    fn test_sort_order_round_trips_through_str() {
        for sort in [
            SortOrder::Newest,
            SortOrder::Oldest,
            SortOrder::Longest,
            SortOrder::Shortest,
        ] {
            assert_eq!(sort.as_str().parse::<SortOrder>().unwrap(), sort);
        }
        assert!("by-color".parse::<SortOrder>().is_err());
    }
}

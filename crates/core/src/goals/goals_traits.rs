use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalColor, NewGoal, SortOrder};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: i64) -> Result<Goal>;
    async fn insert_new_goal(&self, goal: Goal) -> Result<Goal>;
    async fn update_goal(&self, goal_update: Goal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id_to_delete: i64) -> Result<usize>;
}

/// Trait for goal service operations.
///
/// Time-dependent operations take the current instant explicitly (epoch
/// milliseconds) so the service stays a pure function of its inputs.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: i64) -> Result<Goal>;
    fn get_goals_sorted(&self, sort: SortOrder, now_ms: i64) -> Result<Vec<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal, now_ms: i64) -> Result<Goal>;
    async fn toggle_pause(&self, goal_id: i64, now_ms: i64) -> Result<Goal>;
    async fn reset_goal(&self, goal_id: i64, now_ms: i64) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: i64) -> Result<usize>;
    async fn change_color(&self, goal_id: i64, color: GoalColor) -> Result<Goal>;
    async fn update_notes(&self, goal_id: i64, notes: String) -> Result<Goal>;
}

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::{Error, Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};
use crate::goals::goals_model::{sort_goals, Goal, GoalColor, NewGoal, SortOrder};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl GoalService {
    pub fn new(
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        GoalService {
            goal_repo,
            event_sink,
        }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    fn get_goal(&self, goal_id: i64) -> Result<Goal> {
        self.goal_repo.get_goal(goal_id)
    }

    fn get_goals_sorted(&self, sort: SortOrder, now_ms: i64) -> Result<Vec<Goal>> {
        let mut goals = self.goal_repo.load_goals()?;
        sort_goals(&mut goals, sort, now_ms);
        Ok(goals)
    }

    async fn create_goal(&self, new_goal: NewGoal, now_ms: i64) -> Result<Goal> {
        let name = new_goal.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }

        let goal = Goal {
            id: now_ms,
            name,
            start_time: now_ms,
            color: new_goal.color,
            is_paused: false,
            paused_time: 0,
            paused_at: None,
            best_streak: 0,
            notes: new_goal.notes.trim().to_string(),
        };

        let created = self.goal_repo.insert_new_goal(goal).await?;
        debug!("Created goal '{}' ({})", created.name, created.id);
        self.event_sink
            .emit(DomainEvent::goals_changed(vec![created.id]));
        Ok(created)
    }

    async fn toggle_pause(&self, goal_id: i64, now_ms: i64) -> Result<Goal> {
        let mut goal = self.goal_repo.get_goal(goal_id)?;

        if goal.is_paused {
            // Resume: fold the finished pause window into the accumulator.
            let pause_duration = now_ms - goal.paused_at.unwrap_or(now_ms);
            goal.paused_time += pause_duration;
            goal.is_paused = false;
            goal.paused_at = None;
        } else {
            goal.is_paused = true;
            goal.paused_at = Some(now_ms);
        }

        let updated = self.goal_repo.update_goal(goal).await?;
        self.event_sink
            .emit(DomainEvent::goals_changed(vec![updated.id]));
        Ok(updated)
    }

    async fn reset_goal(&self, goal_id: i64, now_ms: i64) -> Result<Goal> {
        let mut goal = self.goal_repo.get_goal(goal_id)?;

        // The in-progress streak survives as best_streak if it beats it.
        let current_streak = goal.streak_days(now_ms);
        if current_streak > goal.best_streak {
            goal.best_streak = current_streak;
        }

        goal.start_time = now_ms;
        goal.paused_time = 0;
        goal.is_paused = false;
        goal.paused_at = None;

        let updated = self.goal_repo.update_goal(goal).await?;
        debug!(
            "Reset goal {} (best streak now {} days)",
            updated.id, updated.best_streak
        );
        self.event_sink
            .emit(DomainEvent::goals_changed(vec![updated.id]));
        Ok(updated)
    }

    async fn delete_goal(&self, goal_id: i64) -> Result<usize> {
        let deleted = self.goal_repo.delete_goal(goal_id).await?;
        if deleted > 0 {
            self.event_sink
                .emit(DomainEvent::goals_changed(vec![goal_id]));
        }
        Ok(deleted)
    }

    async fn change_color(&self, goal_id: i64, color: GoalColor) -> Result<Goal> {
        let mut goal = self.goal_repo.get_goal(goal_id)?;
        goal.color = color;

        let updated = self.goal_repo.update_goal(goal).await?;
        self.event_sink
            .emit(DomainEvent::goals_changed(vec![updated.id]));
        Ok(updated)
    }

    async fn update_notes(&self, goal_id: i64, notes: String) -> Result<Goal> {
        let mut goal = self.goal_repo.get_goal(goal_id)?;
        goal.notes = notes.trim().to_string();

        let updated = self.goal_repo.update_goal(goal).await?;
        self.event_sink
            .emit(DomainEvent::goals_changed(vec![updated.id]));
        Ok(updated)
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use streakfolio_core::constants::GOALS_STORE_KEY;
use streakfolio_core::errors::{Error, Result, StoreError};
use streakfolio_core::goals::{Goal, GoalRepositoryTrait};

use super::model::GoalRecord;
use crate::errors::IntoCore;
use crate::store::JsonStore;

/// Goal repository over the JSON document store.
///
/// The whole collection is one document under `goalTrackerData`; every
/// mutation rewrites it in full (read-modify-replace), and a missing
/// document reads as the empty collection.
pub struct GoalRepository {
    store: Arc<JsonStore>,
}

impl GoalRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        GoalRepository { store }
    }

    fn load_records(&self) -> Result<Vec<GoalRecord>> {
        let Some(contents) = self.store.read(GOALS_STORE_KEY).into_core()? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&contents).into_core()
    }

    fn replace_records(&self, records: &[GoalRecord]) -> Result<()> {
        let contents = serde_json::to_string(records).into_core()?;
        self.store.replace(GOALS_STORE_KEY, &contents).into_core()
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.load_records()?.into_iter().map(Goal::from).collect())
    }

    fn get_goal(&self, goal_id: i64) -> Result<Goal> {
        self.load_records()?
            .into_iter()
            .find(|record| record.id == goal_id)
            .map(Goal::from)
            .ok_or_else(|| Error::Store(StoreError::NotFound(format!("goal {goal_id}"))))
    }

    async fn insert_new_goal(&self, goal: Goal) -> Result<Goal> {
        let mut records = self.load_records()?;
        records.push(GoalRecord::from(goal.clone()));
        self.replace_records(&records)?;

        debug!("Inserted goal {} ({} goals total)", goal.id, records.len());
        Ok(goal)
    }

    async fn update_goal(&self, goal_update: Goal) -> Result<Goal> {
        let mut records = self.load_records()?;
        let slot = records
            .iter_mut()
            .find(|record| record.id == goal_update.id)
            .ok_or_else(|| {
                Error::Store(StoreError::NotFound(format!("goal {}", goal_update.id)))
            })?;
        *slot = GoalRecord::from(goal_update.clone());
        self.replace_records(&records)?;

        Ok(goal_update)
    }

    async fn delete_goal(&self, goal_id_to_delete: i64) -> Result<usize> {
        let mut records = self.load_records()?;
        let before = records.len();
        records.retain(|record| record.id != goal_id_to_delete);

        let deleted = before - records.len();
        if deleted > 0 {
            self.replace_records(&records)?;
            debug!("Deleted goal {goal_id_to_delete}");
        }
        Ok(deleted)
    }
}

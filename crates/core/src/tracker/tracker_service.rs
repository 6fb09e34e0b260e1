use std::sync::Arc;

use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::goals::{sort_goals, Goal, GoalRepositoryTrait, SortOrder};
use crate::streak::{
    classify_badge, compute_elapsed, milestone_reached, motivational_message, next_milestone,
};
use crate::tracker::tracker_model::{GoalCard, OverallStats, TrackerSnapshot};

/// Assembles render-ready snapshots from the goal collection.
///
/// The shell calls [`TrackerService::refresh`] after explicit user actions
/// (full rebuild with the chosen sort order) and [`TrackerService::tick`]
/// once per second (numeric refresh preserving card order).
pub struct TrackerService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl TrackerService {
    pub fn new(
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        TrackerService {
            goal_repo,
            event_sink,
        }
    }

    fn build_card(goal: Goal, now_ms: i64) -> GoalCard {
        let time = compute_elapsed(
            goal.start_time,
            goal.paused_time,
            goal.is_paused,
            goal.paused_at,
            now_ms,
        );
        let badge = classify_badge(&time);
        let message = if badge.message.is_empty() {
            motivational_message(time.days).to_string()
        } else {
            badge.message.clone()
        };
        let accent = goal.color.hex().to_string();

        GoalCard {
            milestone: next_milestone(&time),
            goal,
            time,
            badge,
            message,
            accent,
        }
    }

    fn build_stats(cards: &[GoalCard]) -> Option<OverallStats> {
        if cards.is_empty() {
            return None;
        }

        let mut total_days = 0;
        let mut longest_streak = 0;
        let mut active_goals = 0;
        for card in cards {
            total_days += card.time.days;
            if card.time.days > longest_streak {
                longest_streak = card.time.days;
            }
            if !card.goal.is_paused {
                active_goals += 1;
            }
        }

        Some(OverallStats {
            total_goals: cards.len(),
            active_goals,
            total_days,
            longest_streak,
        })
    }

    /// Full rebuild: loads, sorts, and recomputes every card.
    pub fn refresh(&self, sort: SortOrder, now_ms: i64) -> Result<TrackerSnapshot> {
        let mut goals = self.goal_repo.load_goals()?;
        sort_goals(&mut goals, sort, now_ms);

        let cards: Vec<GoalCard> = goals
            .into_iter()
            .map(|goal| Self::build_card(goal, now_ms))
            .collect();
        let stats = Self::build_stats(&cards);

        Ok(TrackerSnapshot { cards, stats })
    }

    /// Periodic refresh: recomputes card figures in the previous snapshot's
    /// order and emits [`DomainEvent::MilestoneReached`] for every running
    /// goal whose day count landed on a day milestone since then. Paused
    /// goals never trigger a celebration.
    pub fn tick(&self, previous: &TrackerSnapshot, now_ms: i64) -> Result<TrackerSnapshot> {
        let mut remaining = self.goal_repo.load_goals()?;
        let mut cards = Vec::with_capacity(remaining.len());
        let mut celebrations = Vec::new();

        for prev in &previous.cards {
            let Some(pos) = remaining.iter().position(|g| g.id == prev.goal.id) else {
                // Deleted since the previous snapshot.
                continue;
            };
            let card = Self::build_card(remaining.remove(pos), now_ms);
            if !card.goal.is_paused && milestone_reached(prev.time.days, card.time.days) {
                celebrations.push(DomainEvent::milestone_reached(card.goal.id, card.time.days));
            }
            cards.push(card);
        }

        // Goals created since the previous snapshot append in collection
        // order; the next full refresh slots them in properly.
        for goal in remaining {
            cards.push(Self::build_card(goal, now_ms));
        }

        let stats = Self::build_stats(&cards);
        if !celebrations.is_empty() {
            self.event_sink.emit_batch(celebrations);
        }

        Ok(TrackerSnapshot { cards, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, StoreError};
    use crate::events::MockDomainEventSink;
    use crate::goals::GoalColor;
    use async_trait::async_trait;
    use std::sync::RwLock;

    const DAY_MS: i64 = 86_400_000;

    struct MockGoalRepository {
        goals: RwLock<Vec<Goal>>,
    }

    impl MockGoalRepository {
        fn with_goals(goals: Vec<Goal>) -> Self {
            Self {
                goals: RwLock::new(goals),
            }
        }

        fn remove(&self, goal_id: i64) {
            self.goals.write().unwrap().retain(|g| g.id != goal_id);
        }

        fn push(&self, goal: Goal) {
            self.goals.write().unwrap().push(goal);
        }
    }

    #[async_trait]
    impl GoalRepositoryTrait for MockGoalRepository {
        fn load_goals(&self) -> Result<Vec<Goal>> {
            Ok(self.goals.read().unwrap().clone())
        }

        fn get_goal(&self, goal_id: i64) -> Result<Goal> {
            self.goals
                .read()
                .unwrap()
                .iter()
                .find(|g| g.id == goal_id)
                .cloned()
                .ok_or_else(|| Error::Store(StoreError::NotFound(format!("goal {goal_id}"))))
        }

        async fn insert_new_goal(&self, goal: Goal) -> Result<Goal> {
            self.push(goal.clone());
            Ok(goal)
        }

        async fn update_goal(&self, goal_update: Goal) -> Result<Goal> {
            let mut goals = self.goals.write().unwrap();
            if let Some(slot) = goals.iter_mut().find(|g| g.id == goal_update.id) {
                *slot = goal_update.clone();
            }
            Ok(goal_update)
        }

        async fn delete_goal(&self, goal_id_to_delete: i64) -> Result<usize> {
            let mut goals = self.goals.write().unwrap();
            let before = goals.len();
            goals.retain(|g| g.id != goal_id_to_delete);
            Ok(before - goals.len())
        }
    }

    fn goal(id: i64, start_time: i64, color: GoalColor) -> Goal {
        Goal {
            id,
            name: format!("goal-{id}"),
            start_time,
            color,
            is_paused: false,
            paused_time: 0,
            paused_at: None,
            best_streak: 0,
            notes: String::new(),
        }
    }

    fn make_service(
        goals: Vec<Goal>,
    ) -> (TrackerService, Arc<MockGoalRepository>, Arc<MockDomainEventSink>) {
        let repo = Arc::new(MockGoalRepository::with_goals(goals));
        let sink = Arc::new(MockDomainEventSink::new());
        let service = TrackerService::new(repo.clone(), sink.clone());
        (service, repo, sink)
    }

    #[test]
    fn test_refresh_builds_cards_and_stats() {
        let now = 10 * DAY_MS;
        let mut paused = goal(2, 7 * DAY_MS, GoalColor::Blue);
        paused.is_paused = true;
        paused.paused_at = Some(9 * DAY_MS);

        let (service, _, _) = make_service(vec![goal(1, 2 * DAY_MS, GoalColor::Green), paused]);

        let snapshot = service.refresh(SortOrder::Newest, now).unwrap();
        assert_eq!(snapshot.cards.len(), 2);
        // Newest first: id 2 before id 1.
        assert_eq!(snapshot.cards[0].goal.id, 2);
        assert_eq!(snapshot.cards[0].accent, "#3b82f6");
        assert_eq!(snapshot.cards[1].time.days, 8);
        assert!(!snapshot.cards[1].message.is_empty());
        assert_eq!(
            snapshot.cards[1].clock_fields(),
            ("00".to_string(), "00".to_string(), "00".to_string())
        );

        let stats = snapshot.stats.unwrap();
        assert_eq!(stats.total_goals, 2);
        assert_eq!(stats.active_goals, 1);
        // 8 running days + 2 frozen days.
        assert_eq!(stats.total_days, 10);
        assert_eq!(stats.longest_streak, 8);
    }

    #[test]
    fn test_refresh_empty_collection_has_no_stats() {
        let (service, _, _) = make_service(vec![]);

        let snapshot = service.refresh(SortOrder::Newest, 0).unwrap();
        assert!(snapshot.cards.is_empty());
        assert!(snapshot.stats.is_none());
    }

    #[test]
    fn test_tick_emits_celebration_on_milestone_day() {
        let (service, _, sink) = make_service(vec![goal(1, 0, GoalColor::Gray)]);

        let before = service.refresh(SortOrder::Newest, 7 * DAY_MS - 1_000).unwrap();
        assert_eq!(before.cards[0].time.days, 6);
        assert!(sink.is_empty());

        let after = service.tick(&before, 7 * DAY_MS).unwrap();
        assert_eq!(after.cards[0].time.days, 7);
        assert_eq!(
            sink.events(),
            vec![DomainEvent::milestone_reached(1, 7)]
        );
    }

    #[test]
    fn test_tick_does_not_celebrate_ordinary_days_or_paused_goals() {
        let mut frozen = goal(2, 0, GoalColor::Gray);
        frozen.is_paused = true;
        frozen.paused_at = Some(1_000);

        let (service, _, sink) = make_service(vec![goal(1, 3 * DAY_MS, GoalColor::Gray), frozen]);

        let before = service.refresh(SortOrder::Newest, 7 * DAY_MS - 1_000).unwrap();
        service.tick(&before, 7 * DAY_MS + 1_000).unwrap();

        // Goal 1 advanced onto day 4 (not a milestone); goal 2 is paused.
        assert!(sink.is_empty());
    }

    #[test]
    fn test_tick_preserves_previous_order_and_appends_new_goals() {
        let now = 10 * DAY_MS;
        let (service, repo, _) = make_service(vec![
            goal(1, 9 * DAY_MS, GoalColor::Gray),
            goal(2, 2 * DAY_MS, GoalColor::Gray),
        ]);

        let before = service.refresh(SortOrder::Longest, now).unwrap();
        assert_eq!(
            before.cards.iter().map(|c| c.goal.id).collect::<Vec<_>>(),
            [2, 1]
        );

        repo.push(goal(3, now, GoalColor::Rose));
        let after = service.tick(&before, now + 1_000).unwrap();
        assert_eq!(
            after.cards.iter().map(|c| c.goal.id).collect::<Vec<_>>(),
            [2, 1, 3]
        );
    }

    #[test]
    fn test_tick_drops_deleted_goals() {
        let (service, repo, _) = make_service(vec![
            goal(1, 0, GoalColor::Gray),
            goal(2, 0, GoalColor::Gray),
        ]);

        let before = service.refresh(SortOrder::Newest, 1_000).unwrap();
        repo.remove(1);
        let after = service.tick(&before, 2_000).unwrap();

        assert_eq!(after.cards.len(), 1);
        assert_eq!(after.cards[0].goal.id, 2);
        assert_eq!(after.stats.unwrap().total_goals, 1);
    }
}

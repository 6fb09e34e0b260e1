//! Tracker view assembly - the snapshots a presentation shell renders.

mod tracker_model;
mod tracker_service;

pub use tracker_model::{GoalCard, OverallStats, TrackerSnapshot};
pub use tracker_service::TrackerService;

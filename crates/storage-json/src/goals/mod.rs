mod model;
mod repository;

pub use model::GoalRecord;
pub use repository::GoalRepository;

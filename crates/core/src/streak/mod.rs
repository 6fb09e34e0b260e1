//! Pure streak calculations: elapsed time, badges, and milestones.
//!
//! Everything in this module is a total function over a time breakdown;
//! nothing here performs I/O or can fail.

mod badge;
mod display;
mod elapsed;
mod milestone;
mod motivation;

pub use badge::{classify_badge, BadgeClass, StreakBadge};
pub use display::format_clock;
pub use elapsed::{compute_elapsed, TimeBreakdown};
pub use milestone::{milestone_reached, next_milestone, NextMilestone, DAY_MILESTONES};
pub use motivation::motivational_message;

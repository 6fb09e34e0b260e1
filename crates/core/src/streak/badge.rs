//! Streak badge classification.
//!
//! Tiers are ordered boundary tables: the sub-day ladder is checked with
//! strict less-than against ascending minute boundaries, and the day ladder
//! consults exact-match milestone days before the ranges between them.

use serde::{Deserialize, Serialize};

use super::TimeBreakdown;

/// Styling bucket for a badge tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeClass {
    New,
    Building,
    Strong,
    Fire,
}

impl BadgeClass {
    /// Class name as used for card styling.
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeClass::New => "new",
            BadgeClass::Building => "building",
            BadgeClass::Strong => "strong",
            BadgeClass::Fire => "fire",
        }
    }
}

/// A streak's display badge: emoji, short label, styling class, and the
/// celebratory message shown with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakBadge {
    pub emoji: String,
    pub text: String,
    pub class: BadgeClass,
    pub message: String,
}

impl StreakBadge {
    fn fixed(emoji: &str, text: &str, class: BadgeClass, message: &str) -> Self {
        StreakBadge {
            emoji: emoji.to_string(),
            text: text.to_string(),
            class,
            message: message.to_string(),
        }
    }
}

/// A sub-day tier: applies while `total_minutes` is below the boundary.
struct SubDayTier {
    below_minutes: i64,
    emoji: &'static str,
    text: &'static str,
    class: BadgeClass,
    message: &'static str,
}

/// Ascending boundaries for the first 24 hours; the final `>= 12 h` tier is
/// the fallthrough in `sub_day_badge`.
const SUB_DAY_TIERS: [SubDayTier; 7] = [
    SubDayTier {
        below_minutes: 5,
        emoji: "🌱",
        text: "Just Started!",
        class: BadgeClass::New,
        message: "Every journey begins with a single step! 🌟",
    },
    SubDayTier {
        below_minutes: 15,
        emoji: "🌿",
        text: "5+ Minutes!",
        class: BadgeClass::New,
        message: "Great momentum! Keep that energy flowing! 💫",
    },
    SubDayTier {
        below_minutes: 30,
        emoji: "🍀",
        text: "15+ Minutes!",
        class: BadgeClass::New,
        message: "You're building something amazing! 🌈",
    },
    SubDayTier {
        below_minutes: 60,
        emoji: "🌳",
        text: "30+ Minutes!",
        class: BadgeClass::Building,
        message: "Half an hour of dedication! You're unstoppable! ⚡",
    },
    SubDayTier {
        below_minutes: 180,
        emoji: "💪",
        text: "1+ Hour!",
        class: BadgeClass::Building,
        message: "An hour of focus! Your determination shines! ✨",
    },
    SubDayTier {
        below_minutes: 360,
        emoji: "💫",
        text: "3+ Hours!",
        class: BadgeClass::Building,
        message: "Three hours of commitment! You're a force! 🚀",
    },
    SubDayTier {
        below_minutes: 720,
        emoji: "⭐",
        text: "6+ Hours!",
        class: BadgeClass::Building,
        message: "Six hours of dedication! You're incredible! 🌟",
    },
];

/// An exact-match day milestone with its own copy.
struct ExactDayTier {
    day: i64,
    emoji: &'static str,
    text: &'static str,
    class: BadgeClass,
    message: &'static str,
}

const EXACT_DAY_TIERS: [ExactDayTier; 9] = [
    ExactDayTier {
        day: 1,
        emoji: "🎯",
        text: "1 Day!",
        class: BadgeClass::Strong,
        message: "Your first full day! A beautiful beginning! 🌅",
    },
    ExactDayTier {
        day: 2,
        emoji: "🚀",
        text: "2 Days!",
        class: BadgeClass::Strong,
        message: "Two days strong! Your momentum is building! 💪",
    },
    ExactDayTier {
        day: 3,
        emoji: "⚡",
        text: "3 Days!",
        class: BadgeClass::Strong,
        message: "Three days of dedication! You're on fire! 🔥",
    },
    ExactDayTier {
        day: 7,
        emoji: "🌟",
        text: "1 Week!",
        class: BadgeClass::Strong,
        message: "One full week! You're building real habits! 🌟",
    },
    ExactDayTier {
        day: 14,
        emoji: "⚡",
        text: "2 Weeks!",
        class: BadgeClass::Fire,
        message: "Two weeks of consistency! You're electric! ⚡",
    },
    ExactDayTier {
        day: 21,
        emoji: "🎆",
        text: "3 Weeks!",
        class: BadgeClass::Fire,
        message: "Three weeks! You're a celebration of consistency! 🎆",
    },
    ExactDayTier {
        day: 30,
        emoji: "👑",
        text: "1 Month!",
        class: BadgeClass::Fire,
        message: "One month of dedication! You're royalty! 👑",
    },
    ExactDayTier {
        day: 60,
        emoji: "🥈",
        text: "2 Months!",
        class: BadgeClass::Fire,
        message: "Two months of excellence! Silver medal worthy! 🥈",
    },
    ExactDayTier {
        day: 100,
        emoji: "💯",
        text: "100 Days!",
        class: BadgeClass::Fire,
        message: "100 DAYS! You're absolutely legendary! 💯",
    },
];

/// A range between milestone days; the message interpolates the live day
/// count.
struct DayRangeTier {
    below_days: i64,
    emoji: &'static str,
    class: BadgeClass,
    text: fn(i64) -> String,
    message: fn(i64) -> String,
}

fn days_text(days: i64) -> String {
    format!("{days} Days!")
}

fn legend_text(days: i64) -> String {
    format!("{days} Days LEGEND!")
}

const DAY_RANGE_TIERS: [DayRangeTier; 7] = [
    DayRangeTier {
        below_days: 7,
        emoji: "💎",
        class: BadgeClass::Strong,
        text: days_text,
        message: |days| format!("Day {days} and still going! You're a diamond! 💎"),
    },
    DayRangeTier {
        below_days: 14,
        emoji: "🔥",
        class: BadgeClass::Fire,
        text: days_text,
        message: |days| format!("Day {days} of your streak! Keep that fire burning! 🔥"),
    },
    DayRangeTier {
        below_days: 21,
        emoji: "💥",
        class: BadgeClass::Fire,
        text: days_text,
        message: |days| format!("Day {days} - you're exploding with progress! 💥"),
    },
    DayRangeTier {
        below_days: 30,
        emoji: "🔥",
        class: BadgeClass::Fire,
        text: days_text,
        message: |days| format!("Day {days} of your amazing streak! 🔥"),
    },
    DayRangeTier {
        below_days: 60,
        emoji: "🏅",
        class: BadgeClass::Fire,
        text: days_text,
        message: |days| format!("Day {days} - you're earning your medal! 🏅"),
    },
    DayRangeTier {
        below_days: 100,
        emoji: "🏆",
        class: BadgeClass::Fire,
        text: days_text,
        message: |days| format!("Day {days} - you're a champion in the making! 🏆"),
    },
    DayRangeTier {
        below_days: 365,
        emoji: "👑",
        class: BadgeClass::Fire,
        text: legend_text,
        message: |days| format!("Day {days} - you're a living legend! 👑"),
    },
];

/// Classifies a time breakdown into its badge tier.
///
/// Streaks under one day use the minute ladder; from the first full day on,
/// the day ladder applies with exact milestones taking precedence over the
/// ranges between them.
pub fn classify_badge(time: &TimeBreakdown) -> StreakBadge {
    if time.days == 0 {
        sub_day_badge(time.total_minutes)
    } else {
        day_badge(time.days)
    }
}

fn sub_day_badge(total_minutes: i64) -> StreakBadge {
    for tier in &SUB_DAY_TIERS {
        if total_minutes < tier.below_minutes {
            return StreakBadge::fixed(tier.emoji, tier.text, tier.class, tier.message);
        }
    }
    StreakBadge::fixed(
        "✨",
        "12+ Hours!",
        BadgeClass::Strong,
        "Half a day of consistency! You're amazing! 🎯",
    )
}

fn day_badge(days: i64) -> StreakBadge {
    if let Some(tier) = EXACT_DAY_TIERS.iter().find(|tier| tier.day == days) {
        return StreakBadge::fixed(tier.emoji, tier.text, tier.class, tier.message);
    }

    for tier in &DAY_RANGE_TIERS {
        if days < tier.below_days {
            return StreakBadge {
                emoji: tier.emoji.to_string(),
                text: (tier.text)(days),
                class: tier.class,
                message: (tier.message)(days),
            };
        }
    }

    StreakBadge {
        emoji: "🌟".to_string(),
        text: format!("{days} Days CHAMPION!"),
        class: BadgeClass::Fire,
        message: format!("Day {days} - you're an eternal champion! 🌟"),
    }
}

//! Motivational copy shown under a goal card.

/// Rotation of generic encouragement, indexed by day count.
const MESSAGES: [&str; 12] = [
    "You're doing amazing! 🌟",
    "Keep up the great work! 💪",
    "Every day counts! 🎯",
    "You've got this! 🚀",
    "Consistency is key! 🔑",
    "Stay strong! 💎",
    "You're unstoppable! ⚡",
    "One day at a time! 🌈",
    "You're on fire! 🔥",
    "Believe in yourself! ✨",
    "Progress over perfection! 🎨",
    "You're a champion! 🏆",
];

/// Returns the motivational line for a given day count.
///
/// Notable days carry fixed copy; every other day rotates through the
/// generic message list.
pub fn motivational_message(days: i64) -> &'static str {
    match days {
        0 => "Great start! The first step is always the hardest! 🌱",
        1 => "You made it one full day! Incredible! 🎉",
        7 => "One full week! You're building a real habit! 🌟",
        30 => "30 days! You're a habit-building machine! 👑",
        100 => "100 DAYS! You're absolutely legendary! 💯",
        _ => MESSAGES[days.rem_euclid(MESSAGES.len() as i64) as usize],
    }
}

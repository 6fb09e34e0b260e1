/// Store key holding the persisted goal collection.
pub const GOALS_STORE_KEY: &str = "goalTrackerData";

/// Store key for the sound-effects toggle.
pub const SETTING_SOUND_ENABLED: &str = "soundEnabled";

/// Store key for the dark-mode toggle.
pub const SETTING_DARK_MODE: &str = "darkMode";

/// Store key for the goal list sort order.
pub const SETTING_SORT_BY: &str = "sortBy";

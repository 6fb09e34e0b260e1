//! Application settings models.

use serde::{Deserialize, Serialize};

use crate::goals::SortOrder;

/// User-facing application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub sound_enabled: bool,
    pub dark_mode: bool,
    pub sort_by: SortOrder,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            sound_enabled: true,
            dark_mode: false,
            sort_by: SortOrder::Newest,
        }
    }
}

/// Partial settings update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub sound_enabled: Option<bool>,
    pub dark_mode: Option<bool>,
    pub sort_by: Option<SortOrder>,
}

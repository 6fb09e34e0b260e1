//! Repository traits for settings.

use async_trait::async_trait;

use crate::errors::Result;

/// Repository trait for the settings key-value store.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value by key. Absent keys are a NotFound store
    /// error.
    fn get_setting(&self, setting_key: &str) -> Result<String>;

    /// Update a single setting.
    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()>;
}

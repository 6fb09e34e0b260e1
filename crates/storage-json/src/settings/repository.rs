use std::sync::Arc;

use async_trait::async_trait;

use streakfolio_core::errors::{Error, Result, StoreError};
use streakfolio_core::settings::SettingsRepositoryTrait;

use crate::errors::IntoCore;
use crate::store::JsonStore;

/// Settings repository storing each setting as its own document, raw string
/// contents.
pub struct SettingsRepository {
    store: Arc<JsonStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        SettingsRepository { store }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_setting(&self, setting_key: &str) -> Result<String> {
        self.store
            .read(setting_key)
            .into_core()?
            .ok_or_else(|| Error::Store(StoreError::NotFound(format!("setting {setting_key}"))))
    }

    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()> {
        self.store.replace(setting_key, setting_value).into_core()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streakfolio_core::constants::{SETTING_DARK_MODE, SETTING_SOUND_ENABLED};
    use tempfile::TempDir;

    fn make_repository() -> (TempDir, SettingsRepository) {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonStore::open(dir.path()).unwrap());
        (dir, SettingsRepository::new(store))
    }

    #[test]
    fn test_missing_setting_is_not_found() {
        let (_dir, repo) = make_repository();

        let result = repo.get_setting(SETTING_SOUND_ENABLED);
        assert!(matches!(
            result,
            Err(Error::Store(StoreError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_update_then_get_round_trips() {
        let (_dir, repo) = make_repository();

        repo.update_setting(SETTING_DARK_MODE, "true").await.unwrap();
        assert_eq!(repo.get_setting(SETTING_DARK_MODE).unwrap(), "true");

        repo.update_setting(SETTING_DARK_MODE, "false").await.unwrap();
        assert_eq!(repo.get_setting(SETTING_DARK_MODE).unwrap(), "false");
    }
}

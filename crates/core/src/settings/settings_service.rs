use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::constants::{SETTING_DARK_MODE, SETTING_SORT_BY, SETTING_SOUND_ENABLED};
use crate::errors::{Error, Result, StoreError};
use crate::events::{DomainEvent, DomainEventSink};
use crate::goals::SortOrder;
use crate::settings::settings_model::{Settings, SettingsUpdate};
use crate::settings::settings_traits::SettingsRepositoryTrait;

// Define the trait for SettingsService
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()>;

    fn is_sound_enabled(&self) -> Result<bool>;

    fn is_dark_mode(&self) -> Result<bool>;

    fn get_sort_by(&self) -> Result<SortOrder>;

    /// Flip the sound toggle and return the new value.
    async fn toggle_sound(&self) -> Result<bool>;

    /// Flip the dark-mode toggle and return the new value.
    async fn toggle_dark_mode(&self) -> Result<bool>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl SettingsService {
    pub fn new(
        settings_repository: Arc<dyn SettingsRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        SettingsService {
            settings_repository,
            event_sink,
        }
    }

    /// Reads a setting, falling back to `default` when the key is absent or
    /// the stored value does not parse.
    fn get_or_default<T: FromStr>(&self, key: &str, default: T) -> Result<T> {
        match self.settings_repository.get_setting(key) {
            Ok(value) => Ok(value.parse().unwrap_or(default)),
            Err(Error::Store(StoreError::NotFound(_))) => Ok(default),
            Err(e) => Err(e),
        }
    }
}

// Implement the trait for SettingsService
#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        Ok(Settings {
            sound_enabled: self.is_sound_enabled()?,
            dark_mode: self.is_dark_mode()?,
            sort_by: self.get_sort_by()?,
        })
    }

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()> {
        let mut changed_keys = Vec::new();

        if let Some(sound_enabled) = new_settings.sound_enabled {
            self.settings_repository
                .update_setting(SETTING_SOUND_ENABLED, &sound_enabled.to_string())
                .await?;
            changed_keys.push(SETTING_SOUND_ENABLED.to_string());
        }

        if let Some(dark_mode) = new_settings.dark_mode {
            self.settings_repository
                .update_setting(SETTING_DARK_MODE, &dark_mode.to_string())
                .await?;
            changed_keys.push(SETTING_DARK_MODE.to_string());
        }

        if let Some(sort_by) = new_settings.sort_by {
            self.settings_repository
                .update_setting(SETTING_SORT_BY, sort_by.as_str())
                .await?;
            changed_keys.push(SETTING_SORT_BY.to_string());
        }

        if !changed_keys.is_empty() {
            debug!("Updated settings: {:?}", changed_keys);
            self.event_sink
                .emit(DomainEvent::settings_changed(changed_keys));
        }
        Ok(())
    }

    fn is_sound_enabled(&self) -> Result<bool> {
        self.get_or_default(SETTING_SOUND_ENABLED, true)
    }

    fn is_dark_mode(&self) -> Result<bool> {
        self.get_or_default(SETTING_DARK_MODE, false)
    }

    fn get_sort_by(&self) -> Result<SortOrder> {
        self.get_or_default(SETTING_SORT_BY, SortOrder::Newest)
    }

    async fn toggle_sound(&self) -> Result<bool> {
        let new_value = !self.is_sound_enabled()?;
        self.settings_repository
            .update_setting(SETTING_SOUND_ENABLED, &new_value.to_string())
            .await?;
        self.event_sink.emit(DomainEvent::settings_changed(vec![
            SETTING_SOUND_ENABLED.to_string(),
        ]));
        Ok(new_value)
    }

    async fn toggle_dark_mode(&self) -> Result<bool> {
        let new_value = !self.is_dark_mode()?;
        self.settings_repository
            .update_setting(SETTING_DARK_MODE, &new_value.to_string())
            .await?;
        self.event_sink.emit(DomainEvent::settings_changed(vec![
            SETTING_DARK_MODE.to_string(),
        ]));
        Ok(new_value)
    }
}

//! JSON file implementation of the `SettingsRepository` trait.

use async_trait::async_trait;
use std::path::PathBuf;

use stylemate_core::{RepositoryError, Settings, SettingsRepository};

use crate::document::JsonDocument;

/// Settings stored as `settings.json`.
///
/// A missing file loads as `Settings::with_defaults()`.
pub struct JsonSettingsRepository {
    doc: JsonDocument<Option<Settings>>,
}

impl JsonSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: JsonDocument::new(path),
        }
    }
}

#[async_trait]
impl SettingsRepository for JsonSettingsRepository {
    async fn load(&self) -> Result<Settings, RepositoryError> {
        Ok(self.doc.read().await?.unwrap_or_else(Settings::with_defaults))
    }

    async fn save(&self, settings: &Settings) -> Result<(), RepositoryError> {
        self.doc
            .write(&Some(settings.clone()))
            .await
            .map_err(RepositoryError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylemate_core::StylePreference;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_returns_defaults_when_empty() {
        let tmp = TempDir::new().unwrap();
        let repo = JsonSettingsRepository::new(tmp.path().join("settings.json"));

        assert_eq!(repo.load().await.unwrap(), Settings::with_defaults());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let repo = JsonSettingsRepository::new(tmp.path().join("settings.json"));

        let settings = Settings {
            default_temperature: Some(12),
            default_style: Some(StylePreference::Sport),
            ..Settings::with_defaults()
        };
        repo.save(&settings).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.default_temperature, Some(12));
        assert_eq!(loaded.default_style, Some(StylePreference::Sport));
    }

    #[tokio::test]
    async fn test_partial_file_keeps_missing_fields_unset() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        std::fs::write(&path, r#"{"user_id":"alice"}"#).unwrap();

        let loaded = JsonSettingsRepository::new(&path).load().await.unwrap();
        assert_eq!(loaded.effective_user_id(), "alice");
        assert_eq!(loaded.default_temperature, None);
        assert_eq!(loaded.default_preferences().temperature, 20);
    }
}

//! Composition utilities for building `AppCore` with file-backed repositories.
//!
//! Construction only, no domain logic.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use stylemate_core::paths::{SETTINGS_FILE, ensure_directory};
use stylemate_core::{AppCore, Repos};

use crate::repositories::{
    JsonClothingRepository, JsonOutfitRepository, JsonSettingsRepository, LocalImageStore,
};

/// Wardrobe document name inside the data directory.
pub const CLOTHES_FILE: &str = "clothes.json";
/// Saved outfits document name inside the data directory.
pub const OUTFITS_FILE: &str = "outfits.json";
/// Image directory name inside the data directory.
pub const IMAGES_DIR: &str = "images";

/// Factory for creating repository instances rooted at a data directory.
pub struct StoreFactory;

impl StoreFactory {
    /// Build all repositories, creating the data directory if needed.
    pub fn build_repos(data_dir: &Path) -> anyhow::Result<Repos> {
        ensure_directory(data_dir)?;
        debug!(data_dir = %data_dir.display(), "Opening file store");

        Ok(Repos::new(
            Arc::new(JsonClothingRepository::new(data_dir.join(CLOTHES_FILE))),
            Arc::new(JsonOutfitRepository::new(data_dir.join(OUTFITS_FILE))),
            Arc::new(LocalImageStore::new(data_dir.join(IMAGES_DIR))),
            Arc::new(JsonSettingsRepository::new(data_dir.join(SETTINGS_FILE))),
        ))
    }

    /// Build a complete `AppCore` over the data directory.
    ///
    /// ```ignore
    /// let core = StoreFactory::build_app_core(&data_dir)?;
    /// let saved = core.outfits().list_saved("local").await?;
    /// ```
    pub fn build_app_core(data_dir: &Path) -> anyhow::Result<AppCore> {
        Ok(AppCore::new(Self::build_repos(data_dir)?))
    }

    /// Every file the store may create, for display.
    pub fn store_files(data_dir: &Path) -> Vec<PathBuf> {
        [CLOTHES_FILE, OUTFITS_FILE, SETTINGS_FILE, IMAGES_DIR]
            .into_iter()
            .map(|name| data_dir.join(name))
            .collect()
    }
}

/// Temporary store for integration tests.
///
/// Everything lives in a temp directory removed on drop.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestStore {
    dir: tempfile::TempDir,
    core: AppCore,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestStore {
    pub fn new() -> anyhow::Result<Self> {
        let dir = tempfile::TempDir::new()?;
        let core = StoreFactory::build_app_core(dir.path())?;
        Ok(Self { dir, core })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub const fn core(&self) -> &AppCore {
        &self.core
    }
}

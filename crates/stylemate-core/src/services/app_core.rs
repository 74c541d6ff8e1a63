//! `AppCore` - the primary application facade.
//!
//! Adapters receive an `AppCore` instance and use it to reach every
//! service; it is constructed once at the adapter's composition root.

use crate::ports::Repos;

use super::{OutfitService, SettingsService, WardrobeService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repos = stylemate_store::StoreFactory::build_repos(&data_dir).await?;
/// let core = AppCore::new(repos);
///
/// let items = core.wardrobe().list("local").await?;
/// ```
pub struct AppCore {
    wardrobe: WardrobeService,
    outfits: OutfitService,
    settings: SettingsService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            wardrobe: WardrobeService::new(repos.clothes.clone(), repos.images),
            outfits: OutfitService::new(repos.clothes, repos.outfits),
            settings: SettingsService::new(repos.settings),
        }
    }

    /// Access the wardrobe service.
    pub const fn wardrobe(&self) -> &WardrobeService {
        &self.wardrobe
    }

    /// Access the outfit service.
    pub const fn outfits(&self) -> &OutfitService {
        &self.outfits
    }

    /// Access the settings service.
    pub const fn settings(&self) -> &SettingsService {
        &self.settings
    }
}

//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure: the wardrobe store, the outfit store, image storage and
//! settings. They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No storage-specific types in any signature
//! - Traits are minimal and CRUD-focused
//! - Every operation is scoped to a user id where ownership applies

pub mod clothing_repository;
pub mod image_store;
pub mod outfit_repository;
pub mod settings_repository;

use std::sync::Arc;
use thiserror::Error;

pub use clothing_repository::ClothingRepository;
pub use image_store::{ImageStore, NoopImageStore};
pub use outfit_repository::OutfitRepository;
pub use settings_repository::SettingsRepository;

use crate::recommend::InsufficientInventory;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across adapters
/// without coupling them to concrete implementations. It lives in
/// `stylemate-core` so that `AppCore` can accept it without depending on
/// `stylemate-store`.
///
/// # Example
///
/// ```ignore
/// let repos = stylemate_store::StoreFactory::build_repos(&data_dir).await?;
/// let core = AppCore::new(repos);
/// ```
#[derive(Clone)]
pub struct Repos {
    /// Inventory source for clothing items.
    pub clothes: Arc<dyn ClothingRepository>,
    /// Persistence sink for saved outfits.
    pub outfits: Arc<dyn OutfitRepository>,
    /// Storage for clothing photos.
    pub images: Arc<dyn ImageStore>,
    /// User settings.
    pub settings: Arc<dyn SettingsRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        clothes: Arc<dyn ClothingRepository>,
        outfits: Arc<dyn OutfitRepository>,
        images: Arc<dyn ImageStore>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            clothes,
            outfits,
            images,
            settings,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (I/O,
/// remote API failures) and gives services one shape to handle.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (filesystem, remote service, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core services.
/// Adapters should map this to their own error types (CLI exit codes,
/// HTTP statuses).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// The wardrobe can't produce an outfit for the request.
    #[error(transparent)]
    Recommendation(#[from] InsufficientInventory),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}

//! File-backed repository implementations for stylemate.
//!
//! Each port from `stylemate-core` gets a JSON document (or, for images, a
//! directory) under the data directory. `StoreFactory` wires them into a
//! `Repos` container.
#![deny(unsafe_code)]

mod document;
pub mod factory;
pub mod repositories;

pub use document::{DocumentError, JsonDocument};
pub use factory::{CLOTHES_FILE, IMAGES_DIR, OUTFITS_FILE, StoreFactory};

#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestStore;

pub use repositories::{
    JsonClothingRepository, JsonOutfitRepository, JsonSettingsRepository, LocalImageStore,
};

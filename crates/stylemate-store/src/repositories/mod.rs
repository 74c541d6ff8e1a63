//! Repository implementations backed by JSON files.
//!
//! File layout and serialization are confined to this module and never
//! exposed through the port trait signatures.

mod json_clothing_repository;
mod json_outfit_repository;
mod json_settings_repository;
mod local_image_store;

pub use json_clothing_repository::JsonClothingRepository;
pub use json_outfit_repository::JsonOutfitRepository;
pub use json_settings_repository::JsonSettingsRepository;
pub use local_image_store::LocalImageStore;

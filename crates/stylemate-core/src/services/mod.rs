//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain logic. They don't know
//! about concrete implementations.

mod app_core;
mod outfit_service;
mod settings_service;
mod wardrobe_service;

pub use app_core::AppCore;
pub use outfit_service::OutfitService;
pub use settings_service::SettingsService;
pub use wardrobe_service::{StyleProfile, WardrobeHint, WardrobeService};

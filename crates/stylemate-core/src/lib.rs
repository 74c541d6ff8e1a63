//! Core domain, outfit recommender and port definitions for stylemate.
//!
//! `stylemate-core` holds everything that doesn't touch storage: wardrobe
//! and preference types, the rule-based recommender, the traits adapters
//! implement, and the services built on them.
//!
//! ```ignore
//! use stylemate_core::{OutfitPreferences, RngPicker, recommend_outfit};
//!
//! let rec = recommend_outfit(&inventory, &OutfitPreferences::default(), &mut RngPicker::seeded(7))?;
//! println!("{}", rec.actual_style);
//! ```
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod recommend;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    Category, ClothingItem, Color, DEFAULT_OUTFIT_STYLE, DEFAULT_TEMPERATURE, GeneratedOutfit,
    NewClothingItem, NewOutfitRecord, Occasion, OutfitPreferences, OutfitRecord, Season, Slot,
    StylePreference, WeatherCondition, outfit_display_name, style_label,
};
pub use paths::{DataDirSource, PathError, ResolvedPaths, data_root, ensure_directory};
pub use ports::{
    ClothingRepository, CoreError, ImageStore, NoopImageStore, OutfitRepository, Repos,
    RepositoryError, SettingsRepository,
};
pub use recommend::{
    InsufficientInventory, Picker, Recommendation, RngPicker, StyleBucket, recommend_outfit,
};
pub use services::{
    AppCore, OutfitService, SettingsService, StyleProfile, WardrobeHint, WardrobeService,
};
pub use settings::{Settings, SettingsError, SettingsUpdate, validate_settings};

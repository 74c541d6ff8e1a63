//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (storage, images, etc.).
//!
//! # Structure
//!
//! - `clothing` - Wardrobe items (`ClothingItem`, `NewClothingItem`) and their enums
//! - `preferences` - Per-request outfit preferences and display labels
//! - `outfit` - Generated outfits and their stored records

mod clothing;
mod outfit;
mod preferences;

pub use clothing::{Category, ClothingItem, Color, NewClothingItem, Season};
pub use outfit::{DEFAULT_OUTFIT_STYLE, GeneratedOutfit, NewOutfitRecord, OutfitRecord, Slot};
pub use preferences::{
    DEFAULT_TEMPERATURE, Occasion, OutfitPreferences, StylePreference, WeatherCondition,
    outfit_display_name, style_label,
};

//! Outfit domain types.
//!
//! A `GeneratedOutfit` is what the recommender produces. An `OutfitRecord`
//! is the stored form of an outfit the user chose to keep.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::clothing::{Category, ClothingItem};
use super::preferences::{Occasion, OutfitPreferences, WeatherCondition, outfit_display_name};

/// Style reported when no item carries a style tag.
pub const DEFAULT_OUTFIT_STYLE: &str = "casual";

/// One of the five outfit positions.
pub type Slot = Category;

/// An outfit assembled by the recommender, one item per slot at most.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedOutfit {
    pub top: Option<ClothingItem>,
    pub bottom: Option<ClothingItem>,
    pub shoes: Option<ClothingItem>,
    pub outerwear: Option<ClothingItem>,
    pub accessory: Option<ClothingItem>,
}

impl GeneratedOutfit {
    /// Item in the given slot, if any.
    #[must_use]
    pub const fn slot(&self, slot: Slot) -> Option<&ClothingItem> {
        match slot {
            Category::Top => self.top.as_ref(),
            Category::Bottom => self.bottom.as_ref(),
            Category::Shoes => self.shoes.as_ref(),
            Category::Outerwear => self.outerwear.as_ref(),
            Category::Accessory => self.accessory.as_ref(),
        }
    }

    /// Present items in slot order.
    pub fn items(&self) -> impl Iterator<Item = (Slot, &ClothingItem)> {
        Category::ALL
            .into_iter()
            .filter_map(|slot| self.slot(slot).map(|item| (slot, item)))
    }

    /// An outfit is acceptable once it has both a top and a bottom.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.top.is_some() && self.bottom.is_some()
    }

    /// Dominant style tag among the present items.
    ///
    /// Tags are compared trimmed and lower-cased. Ties go to the tag met first while
    /// scanning top, bottom, shoes, outerwear, accessory. Falls back to
    /// [`DEFAULT_OUTFIT_STYLE`] when no item has a tag.
    #[must_use]
    pub fn actual_style(&self) -> String {
        // First-seen order is kept by the Vec; at most five entries.
        let mut counts: Vec<(String, usize)> = Vec::with_capacity(5);
        for (_, item) in self.items() {
            let tag = item.style.trim().to_lowercase();
            if tag.is_empty() {
                continue;
            }
            match counts.iter_mut().find(|(seen, _)| *seen == tag) {
                Some((_, count)) => *count += 1,
                None => counts.push((tag, 1)),
            }
        }

        let mut best: Option<(String, usize)> = None;
        for (tag, count) in counts {
            if best.as_ref().is_none_or(|(_, max)| count > *max) {
                best = Some((tag, count));
            }
        }
        best.map_or_else(|| DEFAULT_OUTFIT_STYLE.to_string(), |(tag, _)| tag)
    }

    /// Build the record to hand to the persistence sink.
    #[must_use]
    pub fn to_record(&self, preferences: &OutfitPreferences) -> NewOutfitRecord {
        let style = self.actual_style();
        let id_of = |slot: Slot| self.slot(slot).map(|item| item.id.clone());
        NewOutfitRecord {
            name: outfit_display_name(&style, preferences.occasion),
            top_id: id_of(Category::Top),
            bottom_id: id_of(Category::Bottom),
            shoes_id: id_of(Category::Shoes),
            outerwear_id: id_of(Category::Outerwear),
            accessory_id: id_of(Category::Accessory),
            occasion: preferences.occasion,
            style,
            temperature: preferences.temperature,
            weather_condition: preferences.weather_condition,
            created_at: Utc::now(),
        }
    }
}

/// An outfit the user chose to keep, before the sink assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOutfitRecord {
    /// Display name, `"<StyleLabel> <OccasionLabel>"`.
    pub name: String,
    pub top_id: Option<String>,
    pub bottom_id: Option<String>,
    pub shoes_id: Option<String>,
    pub outerwear_id: Option<String>,
    pub accessory_id: Option<String>,
    pub occasion: Occasion,
    /// Detected style of the outfit, not the requested one.
    pub style: String,
    pub temperature: i32,
    pub weather_condition: WeatherCondition,
    pub created_at: DateTime<Utc>,
}

impl NewOutfitRecord {
    #[must_use]
    pub fn into_record(self, id: String) -> OutfitRecord {
        OutfitRecord {
            id,
            name: self.name,
            top_id: self.top_id,
            bottom_id: self.bottom_id,
            shoes_id: self.shoes_id,
            outerwear_id: self.outerwear_id,
            accessory_id: self.accessory_id,
            occasion: self.occasion,
            style: self.style,
            temperature: self.temperature,
            weather_condition: self.weather_condition,
            created_at: self.created_at,
        }
    }
}

/// A stored outfit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRecord {
    pub id: String,
    pub name: String,
    pub top_id: Option<String>,
    pub bottom_id: Option<String>,
    pub shoes_id: Option<String>,
    pub outerwear_id: Option<String>,
    pub accessory_id: Option<String>,
    pub occasion: Occasion,
    pub style: String,
    pub temperature: i32,
    pub weather_condition: WeatherCondition,
    pub created_at: DateTime<Utc>,
}

impl OutfitRecord {
    /// Ids of every referenced item, in slot order.
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        [
            &self.top_id,
            &self.bottom_id,
            &self.shoes_id,
            &self.outerwear_id,
            &self.accessory_id,
        ]
        .into_iter()
        .filter_map(|id| id.as_deref())
    }
}

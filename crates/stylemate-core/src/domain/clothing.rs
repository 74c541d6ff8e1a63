//! Clothing domain types.
//!
//! These types represent wardrobe items, independent of where the
//! inventory is actually stored.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Category
// ─────────────────────────────────────────────────────────────────────────────

/// Garment category. Every item belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Outerwear,
    Accessory,
}

impl Category {
    /// All categories in slot order.
    pub const ALL: [Self; 5] = [
        Self::Top,
        Self::Bottom,
        Self::Shoes,
        Self::Outerwear,
        Self::Accessory,
    ];

    /// Parse a category from its wire name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "shoes" => Some(Self::Shoes),
            "outerwear" => Some(Self::Outerwear),
            "accessory" => Some(Self::Accessory),
            _ => None,
        }
    }

    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
            Self::Outerwear => "outerwear",
            Self::Accessory => "accessory",
        }
    }

    /// Position of the category in slot order.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
            Self::Shoes => 2,
            Self::Outerwear => 3,
            Self::Accessory => 4,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown category: {s}"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Season
// ─────────────────────────────────────────────────────────────────────────────

/// Season band, also used to tag which seasons an item suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Derive the season band for a temperature in °C.
    ///
    /// Bands are half-open: `< 10` winter, `[10, 18)` autumn,
    /// `[18, 25)` spring, `>= 25` summer.
    #[must_use]
    pub const fn from_temperature(celsius: i32) -> Self {
        if celsius < 10 {
            Self::Winter
        } else if celsius < 18 {
            Self::Autumn
        } else if celsius < 25 {
            Self::Spring
        } else {
            Self::Summer
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "autumn" | "fall" => Some(Self::Autumn),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown season: {s}"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed color palette offered when registering an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    Black,
    White,
    Gray,
    LightGray,
    DarkGray,
    Red,
    Pink,
    Fuchsia,
    Purple,
    Violet,
    Indigo,
    Blue,
    LightBlue,
    Navy,
    Cyan,
    Teal,
    Green,
    LightGreen,
    DarkGreen,
    Lime,
    Yellow,
    Amber,
    Orange,
    DarkOrange,
    Brown,
    Beige,
    Cream,
    Gold,
    Silver,
    Multicolor,
}

impl Color {
    /// Every palette entry, in display order.
    pub const PALETTE: [Self; 30] = [
        Self::Black,
        Self::White,
        Self::Gray,
        Self::LightGray,
        Self::DarkGray,
        Self::Red,
        Self::Pink,
        Self::Fuchsia,
        Self::Purple,
        Self::Violet,
        Self::Indigo,
        Self::Blue,
        Self::LightBlue,
        Self::Navy,
        Self::Cyan,
        Self::Teal,
        Self::Green,
        Self::LightGreen,
        Self::DarkGreen,
        Self::Lime,
        Self::Yellow,
        Self::Amber,
        Self::Orange,
        Self::DarkOrange,
        Self::Brown,
        Self::Beige,
        Self::Cream,
        Self::Gold,
        Self::Silver,
        Self::Multicolor,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Gray => "gray",
            Self::LightGray => "light-gray",
            Self::DarkGray => "dark-gray",
            Self::Red => "red",
            Self::Pink => "pink",
            Self::Fuchsia => "fuchsia",
            Self::Purple => "purple",
            Self::Violet => "violet",
            Self::Indigo => "indigo",
            Self::Blue => "blue",
            Self::LightBlue => "light-blue",
            Self::Navy => "navy",
            Self::Cyan => "cyan",
            Self::Teal => "teal",
            Self::Green => "green",
            Self::LightGreen => "light-green",
            Self::DarkGreen => "dark-green",
            Self::Lime => "lime",
            Self::Yellow => "yellow",
            Self::Amber => "amber",
            Self::Orange => "orange",
            Self::DarkOrange => "dark-orange",
            Self::Brown => "brown",
            Self::Beige => "beige",
            Self::Cream => "cream",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Multicolor => "multicolor",
        }
    }

    /// Parse a palette entry from its wire name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::PALETTE.into_iter().find(|c| c.as_str() == wanted)
    }

    /// Hex swatch used by front ends. `None` for multicolor.
    #[must_use]
    pub const fn hex(&self) -> Option<&'static str> {
        match self {
            Self::Black => Some("#000000"),
            Self::White => Some("#FFFFFF"),
            Self::Gray => Some("#6B7280"),
            Self::LightGray => Some("#D1D5DB"),
            Self::DarkGray => Some("#374151"),
            Self::Red => Some("#EF4444"),
            Self::Pink => Some("#EC4899"),
            Self::Fuchsia => Some("#D946EF"),
            Self::Purple => Some("#8B5CF6"),
            Self::Violet => Some("#7C3AED"),
            Self::Indigo => Some("#6366F1"),
            Self::Blue => Some("#3B82F6"),
            Self::LightBlue => Some("#0EA5E9"),
            Self::Navy => Some("#1E3A8A"),
            Self::Cyan => Some("#06B6D4"),
            Self::Teal => Some("#14B8A6"),
            Self::Green => Some("#22C55E"),
            Self::LightGreen => Some("#84CC16"),
            Self::DarkGreen => Some("#15803D"),
            Self::Lime => Some("#65A30D"),
            Self::Yellow => Some("#EAB308"),
            Self::Amber => Some("#F59E0B"),
            Self::Orange => Some("#F97316"),
            Self::DarkOrange => Some("#EA580C"),
            Self::Brown => Some("#A16207"),
            Self::Beige => Some("#D2B48C"),
            Self::Cream => Some("#FEF3C7"),
            Self::Gold => Some("#D4AF37"),
            Self::Silver => Some("#C0C0C0"),
            Self::Multicolor => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown color: {s}"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clothing Items
// ─────────────────────────────────────────────────────────────────────────────

/// A clothing item owned by a user.
///
/// Items are immutable once stored; the only lifecycle transition is
/// deletion. Use `NewClothingItem` for items that haven't been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    /// Store-assigned identifier.
    pub id: String,
    /// Free-text name given by the user (e.g. "Racing Jersey").
    pub name: String,
    pub category: Category,
    /// Free-text subtype (e.g. "t-shirt", "jeans").
    #[serde(rename = "type", default)]
    pub item_type: String,
    /// Free-text style tag (e.g. "casual", "sport", "formal").
    #[serde(default)]
    pub style: String,
    pub color: Color,
    /// Seasons the item suits. Empty means all seasons.
    #[serde(default)]
    pub seasons: Vec<Season>,
    /// Opaque reference to the stored image.
    #[serde(default)]
    pub image_ref: String,
}

impl ClothingItem {
    /// Whether the item may be worn in the given season.
    #[must_use]
    pub fn suits_season(&self, season: Season) -> bool {
        self.seasons.is_empty() || self.seasons.contains(&season)
    }

    /// Whether any of the searchable text fields contains `needle`.
    ///
    /// `needle` must already be lower-case.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        [&self.name, &self.style, &self.item_type]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// A clothing item that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClothingItem {
    pub name: String,
    pub category: Category,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub style: String,
    pub color: Color,
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub image_ref: String,
}

impl NewClothingItem {
    /// Attach a store-assigned id, producing the persisted form.
    #[must_use]
    pub fn into_item(self, id: String) -> ClothingItem {
        ClothingItem {
            id,
            name: self.name,
            category: self.category,
            item_type: self.item_type,
            style: self.style,
            color: self.color,
            seasons: self.seasons,
            image_ref: self.image_ref,
        }
    }

    /// Check the required free-text fields are filled in.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Item name cannot be empty".to_string());
        }
        if self.item_type.trim().is_empty() {
            return Err("Item type cannot be empty".to_string());
        }
        if self.style.trim().is_empty() {
            return Err("Item style cannot be empty".to_string());
        }
        Ok(())
    }
}

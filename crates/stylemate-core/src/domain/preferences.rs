//! Outfit preference types.
//!
//! Preferences are built per generation request and never stored on their
//! own; only the outfit they produce may be persisted.

use serde::{Deserialize, Serialize};

/// Weather condition reported alongside the temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl WeatherCondition {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sunny" => Some(Self::Sunny),
            "cloudy" => Some(Self::Cloudy),
            "rainy" => Some(Self::Rainy),
            "snowy" => Some(Self::Snowy),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Snowy => "Snowy",
        }
    }
}

/// What the outfit is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    #[default]
    Casual,
    Formal,
    Sport,
    Party,
}

impl Occasion {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "casual" => Some(Self::Casual),
            "formal" => Some(Self::Formal),
            "sport" => Some(Self::Sport),
            "party" => Some(Self::Party),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Sport => "sport",
            Self::Party => "party",
        }
    }

    /// Human-readable label used in outfit names.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Casual => "Casual",
            Self::Formal => "Formal",
            Self::Sport => "Sport",
            Self::Party => "Party",
        }
    }
}

/// Requested overall look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreference {
    #[default]
    Urban,
    Casual,
    Formal,
    Sport,
}

impl StylePreference {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "urban" => Some(Self::Urban),
            "casual" => Some(Self::Casual),
            "formal" => Some(Self::Formal),
            "sport" => Some(Self::Sport),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Urban => "urban",
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Sport => "sport",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Urban => "Urban",
            Self::Casual => "Casual",
            Self::Formal => "Formal",
            Self::Sport => "Sport",
        }
    }
}

macro_rules! impl_display_from_str {
    ($ty:ty, $what:literal) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| format!("unknown {}: {s}", $what))
            }
        }
    };
}

impl_display_from_str!(WeatherCondition, "weather condition");
impl_display_from_str!(Occasion, "occasion");
impl_display_from_str!(StylePreference, "style");

/// Default temperature offered before the user picks one.
pub const DEFAULT_TEMPERATURE: i32 = 20;

/// Inputs for one outfit generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitPreferences {
    /// Temperature in °C. Front ends offer 0–40 but any value is accepted.
    pub temperature: i32,
    pub weather_condition: WeatherCondition,
    pub occasion: Occasion,
    /// Advisory refinement of the occasion (e.g. "wedding"). Not used for matching.
    #[serde(default)]
    pub occasion_subtype: String,
    pub style: StylePreference,
}

impl Default for OutfitPreferences {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            weather_condition: WeatherCondition::default(),
            occasion: Occasion::default(),
            occasion_subtype: String::new(),
            style: StylePreference::default(),
        }
    }
}

impl OutfitPreferences {
    /// Whether either the style or the occasion asks for sportswear.
    #[must_use]
    pub fn wants_sport(&self) -> bool {
        self.style == StylePreference::Sport || self.occasion == Occasion::Sport
    }

    /// Whether either the style or the occasion asks for formalwear.
    #[must_use]
    pub fn wants_formal(&self) -> bool {
        self.style == StylePreference::Formal || self.occasion == Occasion::Formal
    }
}

/// Map a detected style tag to its display label.
///
/// Known aliases collapse onto the four canonical labels; anything else is
/// shown with its first letter upper-cased.
#[must_use]
pub fn style_label(style: &str) -> String {
    let lowered = style.trim().to_lowercase();
    match lowered.as_str() {
        "urban" | "urbano" => "Urban".to_string(),
        "casual" => "Casual".to_string(),
        "formal" | "clásico" | "classic" => "Formal".to_string(),
        "sport" | "deportivo" => "Sport".to_string(),
        _ => {
            let mut chars = lowered.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        }
    }
}

/// Display name for a saved outfit: `"<StyleLabel> <OccasionLabel>"`.
#[must_use]
pub fn outfit_display_name(actual_style: &str, occasion: Occasion) -> String {
    format!("{} {}", style_label(actual_style), occasion.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_front_end() {
        let prefs = OutfitPreferences::default();
        assert_eq!(prefs.temperature, 20);
        assert_eq!(prefs.weather_condition, WeatherCondition::Sunny);
        assert_eq!(prefs.occasion, Occasion::Casual);
        assert_eq!(prefs.style, StylePreference::Urban);
        assert!(prefs.occasion_subtype.is_empty());
    }

    #[test]
    fn test_sport_and_formal_wishes() {
        let prefs = OutfitPreferences {
            occasion: Occasion::Sport,
            style: StylePreference::Formal,
            ..Default::default()
        };
        assert!(prefs.wants_sport());
        assert!(prefs.wants_formal());
        assert!(!OutfitPreferences::default().wants_sport());
    }

    #[test]
    fn test_style_label_aliases() {
        assert_eq!(style_label("urbano"), "Urban");
        assert_eq!(style_label("Classic"), "Formal");
        assert_eq!(style_label("clásico"), "Formal");
        assert_eq!(style_label("deportivo"), "Sport");
        assert_eq!(style_label("vintage"), "Vintage");
        assert_eq!(style_label(""), "");
    }

    #[test]
    fn test_outfit_display_name() {
        assert_eq!(outfit_display_name("sport", Occasion::Party), "Sport Party");
        assert_eq!(outfit_display_name("bohemian", Occasion::Casual), "Bohemian Casual");
    }

    #[test]
    fn test_preferences_use_camel_case_on_the_wire() {
        let value = serde_json::to_value(OutfitPreferences::default()).unwrap();
        assert_eq!(value["weatherCondition"], "sunny");
        assert_eq!(value["occasionSubtype"], "");
    }
}

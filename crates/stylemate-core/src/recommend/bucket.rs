//! Style buckets and their keyword tables.

use serde::{Deserialize, Serialize};

use crate::domain::{ClothingItem, OutfitPreferences};

/// Coarse style classification applied to a whole filtering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleBucket {
    Sport,
    Formal,
    Casual,
}

/// How a bucket decides whether an item belongs to it.
#[derive(Debug, Clone, Copy)]
pub enum BucketRule {
    /// Item matches when any searched field contains one of the keywords.
    AnyOf(&'static [&'static str]),
    /// Item matches unless a searched field contains one of the keywords.
    NoneOf(&'static [&'static str]),
}

const SPORT_KEYWORDS: &[&str] = &[
    "sport",
    "deportivo",
    "racing",
    "futbol",
    "deporte",
    "training",
    "gym",
];

const FORMAL_KEYWORDS: &[&str] = &[
    "formal", "elegante", "classic", "clásico", "camisa", "traje", "blazer",
];

/// Clearly sporty or clearly formal markers; anything else counts as casual.
const NOT_CASUAL_KEYWORDS: &[&str] = &["racing", "futbol", "sport", "traje", "blazer"];

/// Keyword table, one rule per bucket.
pub const BUCKET_RULES: [(StyleBucket, BucketRule); 3] = [
    (StyleBucket::Sport, BucketRule::AnyOf(SPORT_KEYWORDS)),
    (StyleBucket::Formal, BucketRule::AnyOf(FORMAL_KEYWORDS)),
    (StyleBucket::Casual, BucketRule::NoneOf(NOT_CASUAL_KEYWORDS)),
];

impl StyleBucket {
    /// Pick the bucket for a request. Sport takes precedence over formal.
    #[must_use]
    pub fn for_preferences(preferences: &OutfitPreferences) -> Self {
        if preferences.wants_sport() {
            Self::Sport
        } else if preferences.wants_formal() {
            Self::Formal
        } else {
            Self::Casual
        }
    }

    /// The keyword rule this bucket applies.
    #[must_use]
    pub fn rule(self) -> BucketRule {
        BUCKET_RULES
            .iter()
            .find(|(bucket, _)| *bucket == self)
            .map(|(_, rule)| *rule)
            .unwrap_or(BucketRule::NoneOf(&[]))
    }

    /// Whether `item` passes this bucket's predicate.
    #[must_use]
    pub fn matches(self, item: &ClothingItem) -> bool {
        match self.rule() {
            BucketRule::AnyOf(keywords) => keywords.iter().any(|k| item.mentions(k)),
            BucketRule::NoneOf(keywords) => !keywords.iter().any(|k| item.mentions(k)),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sport => "sport",
            Self::Formal => "formal",
            Self::Casual => "casual",
        }
    }
}

impl std::fmt::Display for StyleBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Color, Occasion, StylePreference};

    fn item(name: &str, style: &str, item_type: &str) -> ClothingItem {
        ClothingItem {
            id: name.to_string(),
            name: name.to_string(),
            category: Category::Top,
            item_type: item_type.to_string(),
            style: style.to_string(),
            color: Color::White,
            seasons: vec![],
            image_ref: String::new(),
        }
    }

    #[test]
    fn test_bucket_selection() {
        let sport_occasion = OutfitPreferences {
            occasion: Occasion::Sport,
            style: StylePreference::Formal,
            ..Default::default()
        };
        assert_eq!(StyleBucket::for_preferences(&sport_occasion), StyleBucket::Sport);

        let formal_occasion = OutfitPreferences {
            occasion: Occasion::Formal,
            ..Default::default()
        };
        assert_eq!(StyleBucket::for_preferences(&formal_occasion), StyleBucket::Formal);

        let party = OutfitPreferences {
            occasion: Occasion::Party,
            style: StylePreference::Urban,
            ..Default::default()
        };
        assert_eq!(StyleBucket::for_preferences(&party), StyleBucket::Casual);
    }

    #[test]
    fn test_sport_bucket_matches_any_field() {
        assert!(StyleBucket::Sport.matches(&item("Gym Tank", "", "")));
        assert!(StyleBucket::Sport.matches(&item("Tee", "Deportivo", "")));
        assert!(StyleBucket::Sport.matches(&item("Tee", "", "training top")));
        assert!(!StyleBucket::Sport.matches(&item("Linen Shirt", "casual", "shirt")));
    }

    #[test]
    fn test_formal_bucket_matches_any_field() {
        assert!(StyleBucket::Formal.matches(&item("Camisa blanca", "", "")));
        assert!(StyleBucket::Formal.matches(&item("Jacket", "Clásico", "")));
        assert!(StyleBucket::Formal.matches(&item("Jacket", "", "blazer")));
        assert!(!StyleBucket::Formal.matches(&item("Hoodie", "urban", "sweatshirt")));
    }

    #[test]
    fn test_casual_bucket_excludes_obvious_sport_and_formal() {
        assert!(StyleBucket::Casual.matches(&item("Hoodie", "urban", "sweatshirt")));
        assert!(StyleBucket::Casual.matches(&item("Gym Tank", "casual", "")));
        assert!(!StyleBucket::Casual.matches(&item("Racing Jersey", "", "")));
        assert!(!StyleBucket::Casual.matches(&item("Tee", "sport", "")));
        assert!(!StyleBucket::Casual.matches(&item("Traje gris", "", "")));
        assert!(!StyleBucket::Casual.matches(&item("Jacket", "", "Blazer")));
    }

    #[test]
    fn test_every_bucket_has_a_rule() {
        for bucket in [StyleBucket::Sport, StyleBucket::Formal, StyleBucket::Casual] {
            assert!(BUCKET_RULES.iter().any(|(b, _)| *b == bucket));
        }
    }
}

//! Integration tests for the recommender through the public API.
//!
//! Builds a realistic wardrobe and checks the properties front ends rely on
//! across the whole temperature range.

use stylemate_core::{
    Category, ClothingItem, Color, Occasion, OutfitPreferences, RngPicker, Season, StyleBucket,
    StylePreference, WeatherCondition, outfit_display_name, recommend_outfit,
};

fn piece(
    id: u32,
    category: Category,
    name: &str,
    item_type: &str,
    style: &str,
    seasons: &[Season],
) -> ClothingItem {
    ClothingItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        item_type: item_type.to_string(),
        style: style.to_string(),
        color: Color::Black,
        seasons: seasons.to_vec(),
        image_ref: String::new(),
    }
}

fn wardrobe() -> Vec<ClothingItem> {
    vec![
        piece(1, Category::Top, "White Camisa", "shirt", "formal", &[]),
        piece(
            2,
            Category::Top,
            "Grey Hoodie",
            "hoodie",
            "urban",
            &[Season::Autumn, Season::Winter],
        ),
        piece(3, Category::Top, "Racing Jersey", "jersey", "sport", &[Season::Summer]),
        piece(4, Category::Bottom, "Chinos", "trousers", "casual", &[]),
        piece(5, Category::Bottom, "Training Shorts", "shorts", "sport", &[Season::Summer]),
        piece(6, Category::Bottom, "Suit Trousers", "traje", "formal", &[]),
        piece(7, Category::Shoes, "Sneakers", "sneakers", "urban", &[]),
        piece(8, Category::Shoes, "Oxfords", "shoes", "classic", &[]),
        piece(9, Category::Outerwear, "Navy Blazer", "blazer", "formal", &[Season::Autumn]),
        piece(10, Category::Outerwear, "Parka", "coat", "urban", &[Season::Winter]),
        piece(11, Category::Accessory, "Watch", "watch", "classic", &[]),
    ]
}

fn prefs(temperature: i32, occasion: Occasion, style: StylePreference) -> OutfitPreferences {
    OutfitPreferences {
        temperature,
        weather_condition: WeatherCondition::Cloudy,
        occasion,
        occasion_subtype: String::new(),
        style,
    }
}

#[test]
fn test_every_temperature_yields_complete_outfit() {
    let inventory = wardrobe();
    let mut picker = RngPicker::seeded(2024);
    for t in 0..=40 {
        let rec = recommend_outfit(
            &inventory,
            &prefs(t, Occasion::Casual, StylePreference::Urban),
            &mut picker,
        )
        .unwrap_or_else(|e| panic!("no outfit at {t}: {e}"));
        assert!(rec.outfit.is_complete());
        assert_eq!(rec.season, Season::from_temperature(t));
        // The parka is the only casual outerwear and it's a winter piece.
        assert_eq!(rec.outfit.outerwear.is_some(), t < 20, "outerwear at {t}");
    }
}

#[test]
fn test_sport_request_prefers_racing_pieces() {
    let rec = recommend_outfit(
        &wardrobe(),
        &prefs(28, Occasion::Sport, StylePreference::Urban),
        &mut RngPicker::seeded(1),
    )
    .unwrap();
    assert_eq!(rec.bucket, StyleBucket::Sport);
    assert_eq!(rec.outfit.top.as_ref().map(|i| i.id.as_str()), Some("3"));
    // No bottom mentions "racing": the first sport bottom is taken.
    assert_eq!(rec.outfit.bottom.as_ref().map(|i| i.id.as_str()), Some("5"));
    assert_eq!(rec.actual_style, "sport");
}

#[test]
fn test_formal_request_stays_in_formal_bucket() {
    let inventory = wardrobe();
    let mut picker = RngPicker::seeded(99);
    for _ in 0..20 {
        let rec = recommend_outfit(
            &inventory,
            &prefs(22, Occasion::Formal, StylePreference::Formal),
            &mut picker,
        )
        .unwrap();
        assert_eq!(rec.bucket, StyleBucket::Formal);
        assert!(!rec.widened);
        for (_, item) in rec.outfit.items() {
            assert!(
                ["formal", "classic", "camisa", "traje", "blazer"]
                    .iter()
                    .any(|k| item.mentions(k)),
                "{} is not formal",
                item.name
            );
        }
    }
}

#[test]
fn test_extreme_cold_drops_summer_pieces() {
    // Both sport pieces are summer-only.
    let err = recommend_outfit(
        &wardrobe(),
        &prefs(2, Occasion::Sport, StylePreference::Sport),
        &mut RngPicker::seeded(3),
    )
    .unwrap_err();
    assert_eq!(err.missing, vec![Category::Top, Category::Bottom]);

    let inventory = wardrobe();
    let mut picker = RngPicker::seeded(3);
    for _ in 0..20 {
        let rec = recommend_outfit(
            &inventory,
            &prefs(2, Occasion::Casual, StylePreference::Casual),
            &mut picker,
        )
        .unwrap();
        for (_, item) in rec.outfit.items() {
            assert!(item.suits_season(Season::Winter), "{} in winter", item.name);
        }
    }
}

#[test]
fn test_error_message_names_request() {
    let tops_only: Vec<ClothingItem> = wardrobe()
        .into_iter()
        .filter(|i| i.category == Category::Top)
        .collect();
    let err = recommend_outfit(
        &tops_only,
        &prefs(15, Occasion::Party, StylePreference::Casual),
        &mut RngPicker::seeded(0),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "not enough casual clothes for a party outfit (missing bottom); try a different style"
    );
}

#[test]
fn test_same_seed_same_outfit() {
    let inventory = wardrobe();
    let request = prefs(12, Occasion::Casual, StylePreference::Casual);
    let a = recommend_outfit(&inventory, &request, &mut RngPicker::seeded(42)).unwrap();
    let b = recommend_outfit(&inventory, &request, &mut RngPicker::seeded(42)).unwrap();
    assert_eq!(a.outfit, b.outfit);
    assert_eq!(
        outfit_display_name(&a.actual_style, request.occasion),
        outfit_display_name(&b.actual_style, request.occasion)
    );
}

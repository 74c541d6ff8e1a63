//! Rendering of clothing items, outfits and recommendations.

use stylemate_core::{
    Category, ClothingItem, Occasion, Recommendation, Season, outfit_display_name,
};

use super::tables::{print_separator, short_id, truncate_string};

/// Comma-separated season list; "all" when the item suits every season.
pub fn seasons_label(seasons: &[Season]) -> String {
    if seasons.is_empty() {
        return "all".to_string();
    }
    seasons
        .iter()
        .map(Season::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// One-line summary of an item.
pub fn item_line(item: &ClothingItem) -> String {
    format!("{} ({}, {})", item.name, item.style, item.color)
}

/// Print the wardrobe table.
pub fn print_items_table(items: &[ClothingItem]) {
    println!(
        "{:<9} {:<24} {:<10} {:<14} {:<10} {:<12} Seasons",
        "ID", "Name", "Category", "Type", "Style", "Color"
    );
    print_separator(100);
    for item in items {
        println!(
            "{:<9} {:<24} {:<10} {:<14} {:<10} {:<12} {}",
            short_id(&item.id),
            truncate_string(&item.name, 23),
            item.category,
            truncate_string(&item.item_type, 13),
            truncate_string(&item.style, 9),
            item.color,
            seasons_label(&item.seasons),
        );
    }
}

/// Print a recommendation.
pub fn print_recommendation(rec: &Recommendation, occasion: Occasion) {
    println!(
        "{}  (season: {}, style: {})",
        outfit_display_name(&rec.actual_style, occasion),
        rec.season,
        rec.actual_style
    );
    print_separator(50);
    for slot in Category::ALL {
        let shown = rec
            .outfit
            .slot(slot)
            .map_or_else(|| "--".to_string(), item_line);
        println!("  {:<10} {}", slot.as_str(), shown);
    }

    if rec.widened {
        println!();
        println!(
            "Few {} pieces in your wardrobe, so the whole wardrobe was considered.",
            rec.bucket
        );
    }
    if !rec.hints.is_empty() {
        println!();
        for slot in &rec.hints {
            println!("Tip: add some {slot} to complete this look.");
        }
    }
}

//! Filter-and-pick outfit assembly.
//!
//! The pipeline runs in one synchronous pass over a borrowed inventory:
//!
//! 1. derive the season band from the temperature
//! 2. keep the items matching the request's style bucket
//! 3. widen back to the whole inventory when fewer than two items match
//! 4. at extreme temperatures, drop items tagged for other seasons
//! 5. group by category and require a top and a bottom
//! 6. pick one item per slot
//! 7. classify the outfit's dominant style

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bucket::StyleBucket;
use super::error::InsufficientInventory;
use super::picker::Picker;
use crate::domain::{Category, ClothingItem, GeneratedOutfit, OutfitPreferences, Season, Slot};

/// Fewer bucket matches than this and the bucket filter is discarded.
pub const MIN_BUCKET_MATCHES: usize = 2;

/// Below this temperature items are narrowed to the current season.
pub const EXTREME_COLD_CELSIUS: i32 = 5;

/// Above this temperature items are narrowed to the current season.
pub const EXTREME_HEAT_CELSIUS: i32 = 35;

/// Outerwear is only picked below this temperature.
pub const OUTERWEAR_BELOW_CELSIUS: i32 = 20;

/// Name fragment preferred for top and bottom in sport outfits.
const SPORT_PREFERRED_NAME: &str = "racing";

/// Successful recommender output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub outfit: GeneratedOutfit,
    /// Dominant style tag of the selected items.
    pub actual_style: String,
    /// Season band derived from the requested temperature.
    pub season: Season,
    /// Bucket the request was filtered with.
    pub bucket: StyleBucket,
    /// True when the bucket filter matched too little and was discarded.
    pub widened: bool,
    /// Optional slots that were wanted but had no candidate.
    pub hints: Vec<Slot>,
}

/// Candidates grouped by category, each group in inventory order.
#[derive(Debug, Default)]
pub struct CandidatePool<'a> {
    groups: [Vec<&'a ClothingItem>; 5],
}

impl<'a> CandidatePool<'a> {
    /// Group items by category in a single pass.
    pub fn group(items: impl IntoIterator<Item = &'a ClothingItem>) -> Self {
        let mut pool = Self::default();
        for item in items {
            pool.groups[item.category.index()].push(item);
        }
        pool
    }

    #[must_use]
    pub fn get(&self, category: Category) -> &[&'a ClothingItem] {
        &self.groups[category.index()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of steps 1 to 4: the items still eligible for selection.
#[derive(Debug)]
pub struct Candidates<'a> {
    pub items: Vec<&'a ClothingItem>,
    pub season: Season,
    pub bucket: StyleBucket,
    pub widened: bool,
}

/// Run the filtering steps without selecting anything.
pub fn filter_candidates<'a>(
    inventory: &'a [ClothingItem],
    preferences: &OutfitPreferences,
) -> Candidates<'a> {
    let season = Season::from_temperature(preferences.temperature);
    let bucket = StyleBucket::for_preferences(preferences);
    debug!(
        temperature = preferences.temperature,
        %season,
        %bucket,
        inventory = inventory.len(),
        "Filtering wardrobe"
    );

    let mut items: Vec<&ClothingItem> = inventory.iter().filter(|i| bucket.matches(i)).collect();
    debug!(matches = items.len(), "Bucket filter applied");

    let widened = items.len() < MIN_BUCKET_MATCHES;
    if widened {
        debug!("Too few bucket matches, using the whole wardrobe");
        items = inventory.iter().collect();
    }

    let t = preferences.temperature;
    if !(EXTREME_COLD_CELSIUS..=EXTREME_HEAT_CELSIUS).contains(&t) {
        items.retain(|item| item.suits_season(season));
        debug!(remaining = items.len(), %season, "Narrowed to seasonal items");
    }

    Candidates {
        items,
        season,
        bucket,
        widened,
    }
}

/// Assemble an outfit from `inventory` for `preferences`.
///
/// Top and bottom are mandatory; shoes, outerwear and accessory are filled
/// when candidates exist (outerwear only below 20 °C). All random choices go
/// through `picker`, so a deterministic picker gives a deterministic result.
pub fn recommend_outfit<P: Picker + ?Sized>(
    inventory: &[ClothingItem],
    preferences: &OutfitPreferences,
    picker: &mut P,
) -> Result<Recommendation, InsufficientInventory> {
    let candidates = filter_candidates(inventory, preferences);
    let pool = CandidatePool::group(candidates.items.iter().copied());

    let missing: Vec<Category> = [Category::Top, Category::Bottom]
        .into_iter()
        .filter(|c| pool.get(*c).is_empty())
        .collect();
    if !missing.is_empty() {
        debug!(?missing, "Not enough clothes for an outfit");
        return Err(InsufficientInventory {
            style: preferences.style,
            occasion: preferences.occasion,
            missing,
        });
    }

    let sport = candidates.bucket == StyleBucket::Sport;
    let mut choose = |category: Category| -> Option<ClothingItem> {
        let group = pool.get(category);
        if group.is_empty() {
            return None;
        }
        let chosen = if sport && matches!(category, Category::Top | Category::Bottom) {
            group
                .iter()
                .find(|i| i.name.to_lowercase().contains(SPORT_PREFERRED_NAME))
                .unwrap_or(&group[0])
        } else {
            &group[picker.pick(group.len())]
        };
        Some((*chosen).clone())
    };

    let top = choose(Category::Top);
    let bottom = choose(Category::Bottom);
    let shoes = choose(Category::Shoes);
    let wants_outerwear = preferences.temperature < OUTERWEAR_BELOW_CELSIUS;
    let outerwear = if wants_outerwear {
        choose(Category::Outerwear)
    } else {
        None
    };
    let accessory = choose(Category::Accessory);

    let outfit = GeneratedOutfit {
        top,
        bottom,
        shoes,
        outerwear,
        accessory,
    };

    let mut hints = Vec::new();
    if outfit.shoes.is_none() {
        hints.push(Category::Shoes);
    }
    if wants_outerwear && outfit.outerwear.is_none() {
        hints.push(Category::Outerwear);
    }
    if outfit.accessory.is_none() {
        hints.push(Category::Accessory);
    }

    let actual_style = outfit.actual_style();
    debug!(
        top = outfit.top.as_ref().map(|i| i.name.as_str()),
        bottom = outfit.bottom.as_ref().map(|i| i.name.as_str()),
        shoes = outfit.shoes.as_ref().map(|i| i.name.as_str()),
        %actual_style,
        "Outfit assembled"
    );

    Ok(Recommendation {
        outfit,
        actual_style,
        season: candidates.season,
        bucket: candidates.bucket,
        widened: candidates.widened,
        hints,
    })
}

//! Generate command handler.
//!
//! Builds the request from the command line on top of the stored defaults,
//! runs the recommender and optionally saves the result.

use anyhow::Result;
use tracing::debug;

use stylemate_core::{
    Occasion, OutfitPreferences, Recommendation, RngPicker, Settings, StylePreference,
    WeatherCondition, outfit_display_name,
};

use crate::bootstrap::CliContext;
use crate::presentation::{print_recommendation, short_id};

/// Arguments for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub temperature: Option<i32>,
    pub weather: Option<WeatherCondition>,
    pub occasion: Option<Occasion>,
    pub subtype: Option<String>,
    pub style: Option<StylePreference>,
    pub seed: Option<u64>,
    pub save: bool,
    pub json: bool,
}

impl GenerateArgs {
    /// Preferences from these arguments, unset ones taken from `settings`.
    pub fn preferences(&self, settings: &Settings) -> OutfitPreferences {
        let defaults = settings.default_preferences();
        OutfitPreferences {
            temperature: self.temperature.unwrap_or(defaults.temperature),
            weather_condition: self.weather.unwrap_or(defaults.weather_condition),
            occasion: self.occasion.unwrap_or(defaults.occasion),
            occasion_subtype: self.subtype.clone().unwrap_or_default(),
            style: self.style.unwrap_or(defaults.style),
        }
    }
}

/// One recommender run together with the seed that reproduces it.
#[derive(Debug, Clone)]
pub struct GeneratedRun {
    pub seed: u64,
    pub preferences: OutfitPreferences,
    pub recommendation: Recommendation,
}

/// Run the recommender for `args`.
///
/// Every run goes through a seeded picker. Without `--seed` a fresh seed is
/// drawn, so the outfit on screen can be saved later with `--seed N --save`.
pub async fn recommend(ctx: &CliContext, args: &GenerateArgs) -> Result<GeneratedRun> {
    let settings = ctx.app().settings().get().await?;
    let preferences = args.preferences(&settings);
    let seed = args.seed.unwrap_or_else(rand::random);
    debug!(prefs = ?preferences, seed, "Generate request");

    let recommendation = ctx
        .app()
        .outfits()
        .generate_with(ctx.user_id(), &preferences, &mut RngPicker::seeded(seed))
        .await?;
    Ok(GeneratedRun {
        seed,
        preferences,
        recommendation,
    })
}

/// Execute the generate command.
pub async fn execute(ctx: &CliContext, args: GenerateArgs) -> Result<()> {
    let GeneratedRun {
        seed,
        preferences: prefs,
        recommendation: rec,
    } = recommend(ctx, &args).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
    } else {
        print_recommendation(&rec, prefs.occasion);
    }

    if args.save {
        let saved = ctx
            .app()
            .outfits()
            .save(ctx.user_id(), &rec.outfit, &prefs)
            .await?;
        if !args.json {
            println!();
            println!("✓ Saved as '{}' (ID {})", saved.name, short_id(&saved.id));
        }
    } else if !args.json {
        println!();
        println!(
            "Run again with --seed {seed} --save to keep this {} outfit.",
            outfit_display_name(&rec.actual_style, prefs.occasion)
        );
    }
    Ok(())
}

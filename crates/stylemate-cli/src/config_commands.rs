//! Configuration management subcommands.

use clap::Subcommand;

use stylemate_core::{Occasion, StylePreference, WeatherCondition};

/// Configuration commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current settings
    Show,
    /// Update settings
    Set {
        /// Default temperature in °C (0-40)
        #[arg(long, allow_negative_numbers = true)]
        temperature: Option<i32>,
        /// Default style
        #[arg(long)]
        style: Option<StylePreference>,
        /// Default occasion
        #[arg(long)]
        occasion: Option<Occasion>,
        /// Default weather condition
        #[arg(long)]
        weather: Option<WeatherCondition>,
        /// Wardrobe owner
        #[arg(long)]
        user: Option<String>,
    },
    /// Reset all settings to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

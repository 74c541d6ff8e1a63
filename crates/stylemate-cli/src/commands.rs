//! Main commands enum and primary subcommands.

use clap::Subcommand;

use stylemate_core::{
    Category, Color, Occasion, Season, StylePreference, WeatherCondition,
};

use crate::config_commands::ConfigCommand;
use crate::outfit_commands::OutfitsCommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the resolved data directory and store files
    Paths,

    /// Add a clothing item to the wardrobe
    Add {
        /// Item name (e.g. "Racing Jersey")
        #[arg(long)]
        name: String,
        /// top, bottom, shoes, outerwear or accessory
        #[arg(short, long)]
        category: Category,
        /// Item type (e.g. "t-shirt", "jeans")
        #[arg(long = "type")]
        item_type: String,
        /// Style tag (e.g. "casual", "sport", "formal")
        #[arg(short, long)]
        style: String,
        /// Palette color (see `stylemate colors`)
        #[arg(long)]
        color: Color,
        /// Season the item suits; repeat for several, omit for all seasons
        #[arg(long = "season")]
        seasons: Vec<Season>,
        /// Image reference inside the data directory's images folder
        #[arg(long)]
        image: Option<String>,
    },

    /// List clothing items
    List {
        /// Only show one category
        #[arg(short, long)]
        category: Option<Category>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Remove a clothing item (and its image)
    Remove {
        /// Item id or a unique id prefix
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Suggest an outfit; unset options fall back to `config` defaults
    Generate {
        /// Temperature in °C
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: Option<i32>,
        /// sunny, cloudy, rainy or snowy
        #[arg(short, long)]
        weather: Option<WeatherCondition>,
        /// casual, formal, sport or party
        #[arg(short, long)]
        occasion: Option<Occasion>,
        /// Free-text detail about the occasion
        #[arg(long)]
        subtype: Option<String>,
        /// urban, casual, formal or sport
        #[arg(short, long)]
        style: Option<StylePreference>,
        /// Seed for reproducible suggestions
        #[arg(long)]
        seed: Option<u64>,
        /// Save the suggested outfit
        #[arg(long)]
        save: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Manage saved outfits
    Outfits {
        #[command(subcommand)]
        command: OutfitsCommand,
    },

    /// Summarize the wardrobe and show what is missing
    Profile,

    /// List the color palette
    Colors,

    /// View or change default preferences
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

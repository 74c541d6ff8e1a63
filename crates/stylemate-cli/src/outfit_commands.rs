//! Saved outfit subcommands.

use clap::Subcommand;

/// Saved outfit command variants.
#[derive(Subcommand)]
pub enum OutfitsCommand {
    /// List saved outfits, newest first
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete a saved outfit
    Remove {
        /// Outfit id or a unique id prefix
        id: String,
    },
}

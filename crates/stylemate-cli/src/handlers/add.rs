//! Add command handler.

use anyhow::Result;

use stylemate_core::NewClothingItem;

use crate::bootstrap::CliContext;
use crate::presentation::{seasons_label, short_id};

/// Execute the add command.
pub async fn execute(ctx: &CliContext, item: NewClothingItem) -> Result<()> {
    let stored = ctx.app().wardrobe().add(ctx.user_id(), item).await?;

    println!(
        "✓ Added '{}' as {} (ID {}, seasons: {})",
        stored.name,
        stored.category,
        short_id(&stored.id),
        seasons_label(&stored.seasons)
    );
    Ok(())
}

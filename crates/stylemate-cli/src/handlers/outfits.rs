//! Saved outfits command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::outfit_commands::OutfitsCommand;
use crate::presentation::{print_separator, short_id, truncate_string};
use crate::utils::ids::resolve_id;

/// Execute an outfits subcommand.
pub async fn execute(ctx: &CliContext, command: OutfitsCommand) -> Result<()> {
    match command {
        OutfitsCommand::List { json } => list(ctx, json).await,
        OutfitsCommand::Remove { id } => remove(ctx, &id).await,
    }
}

async fn list(ctx: &CliContext, json: bool) -> Result<()> {
    let outfits = ctx.app().outfits().list_saved(ctx.user_id()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outfits)?);
        return Ok(());
    }
    if outfits.is_empty() {
        println!("No saved outfits yet.");
        println!("Use 'stylemate generate --save' to keep one.");
        return Ok(());
    }

    println!(
        "{:<9} {:<20} {:<6} {:<8} {:<17} Items",
        "ID", "Name", "Temp", "Weather", "Saved"
    );
    print_separator(80);
    for outfit in &outfits {
        println!(
            "{:<9} {:<20} {:<6} {:<8} {:<17} {}",
            short_id(&outfit.id),
            truncate_string(&outfit.name, 19),
            format!("{}°C", outfit.temperature),
            outfit.weather_condition,
            outfit
                .created_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M"),
            outfit.item_ids().count()
        );
    }
    Ok(())
}

async fn remove(ctx: &CliContext, id: &str) -> Result<()> {
    let outfits = ctx.app().outfits().list_saved(ctx.user_id()).await?;
    let outfit = resolve_id(&outfits, id, |o| o.id.as_str(), "outfit")?;

    ctx.app()
        .outfits()
        .remove_saved(ctx.user_id(), &outfit.id)
        .await?;
    println!("✓ Removed saved outfit '{}'.", outfit.name);
    Ok(())
}

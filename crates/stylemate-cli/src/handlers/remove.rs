//! Remove command handler.
//!
//! Removes a clothing item from the wardrobe. The item's image is deleted
//! too when the store can reach it.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::item_line;
use crate::utils::ids::resolve_id;
use crate::utils::input;

/// Execute the remove command.
pub async fn execute(ctx: &CliContext, id: &str, force: bool) -> Result<()> {
    let items = ctx.app().wardrobe().list(ctx.user_id()).await?;
    let item = resolve_id(&items, id, |i| i.id.as_str(), "item")?;

    if !force {
        println!("{} [{}]", item_line(item), item.category);
        let confirm = input::prompt_confirmation("Remove this item from your wardrobe?")?;
        if !confirm {
            println!("Remove operation cancelled.");
            return Ok(());
        }
    }

    let removed = ctx.app().wardrobe().remove(ctx.user_id(), &item.id).await?;
    println!("✓ Removed '{}'.", removed.name);
    Ok(())
}

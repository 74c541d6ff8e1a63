//! List command handler.

use anyhow::Result;

use stylemate_core::Category;

use crate::bootstrap::CliContext;
use crate::presentation::print_items_table;

/// Execute the list command.
pub async fn execute(ctx: &CliContext, category: Option<Category>, json: bool) -> Result<()> {
    let wardrobe = ctx.app().wardrobe();
    let items = match category {
        Some(c) => wardrobe.list_by_category(ctx.user_id(), c).await?,
        None => wardrobe.list(ctx.user_id()).await?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        match category {
            Some(c) => println!("No {c} items in your wardrobe."),
            None => {
                println!("Your wardrobe is empty.");
                println!("Use 'stylemate add' to add your first item.");
            }
        }
        return Ok(());
    }

    println!("Found {} item(s):\n", items.len());
    print_items_table(&items);
    Ok(())
}

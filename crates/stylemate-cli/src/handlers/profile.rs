//! Profile command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::print_separator;

/// Execute the profile command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let wardrobe = ctx.app().wardrobe();
    let profile = wardrobe.style_profile(ctx.user_id()).await?;

    println!("Wardrobe of '{}': {} item(s)", ctx.user_id(), profile.total_items);
    print_separator(40);
    for (category, count) in &profile.per_category {
        println!("  {:<10} {count}", category.as_str());
    }
    println!();
    println!(
        "Dominant style: {}",
        profile.dominant_style.as_deref().unwrap_or("--")
    );
    if !profile.top_colors.is_empty() {
        let colors: Vec<String> = profile
            .top_colors
            .iter()
            .map(|(color, n)| format!("{color} ({n})"))
            .collect();
        println!("Top colors:     {}", colors.join(", "));
    }

    let hints = wardrobe.hints(ctx.user_id()).await?;
    if !hints.is_empty() {
        println!();
        for hint in hints {
            println!("• {}", hint.message());
        }
    }
    Ok(())
}

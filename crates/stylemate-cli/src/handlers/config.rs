//! Config command handler.

use anyhow::Result;

use stylemate_core::{Settings, SettingsUpdate};

use crate::bootstrap::CliContext;
use crate::config_commands::ConfigCommand;
use crate::error::CliError;
use crate::presentation::format_optional;
use crate::utils::input;

/// Execute a config subcommand.
pub async fn execute(ctx: &CliContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let settings = ctx.app().settings().get().await?;
            print_settings(&settings);
            Ok(())
        }
        ConfigCommand::Set {
            temperature,
            style,
            occasion,
            weather,
            user,
        } => {
            let update = SettingsUpdate {
                user_id: user.map(Some),
                default_temperature: temperature.map(Some),
                default_style: style.map(Some),
                default_occasion: occasion.map(Some),
                default_weather: weather.map(Some),
            };
            if is_empty_update(&update) {
                return Err(CliError::Arguments(
                    "nothing to set; pass at least one option (see --help)".to_string(),
                )
                .into());
            }
            let settings = ctx.app().settings().update(update).await?;
            println!("✓ Settings updated.");
            print_settings(&settings);
            Ok(())
        }
        ConfigCommand::Reset { force } => {
            if !force && !input::prompt_confirmation("Reset all settings to defaults?")? {
                println!("Reset cancelled.");
                return Ok(());
            }
            let settings = ctx.app().settings().reset().await?;
            println!("✓ Settings reset to defaults.");
            print_settings(&settings);
            Ok(())
        }
    }
}

const fn is_empty_update(update: &SettingsUpdate) -> bool {
    update.user_id.is_none()
        && update.default_temperature.is_none()
        && update.default_style.is_none()
        && update.default_occasion.is_none()
        && update.default_weather.is_none()
}

fn print_settings(settings: &Settings) {
    println!("  user:         {}", settings.effective_user_id());
    println!(
        "  temperature:  {}",
        format_optional(settings.default_temperature.as_ref(), "(default)")
    );
    println!(
        "  style:        {}",
        format_optional(settings.default_style.as_ref(), "(default)")
    );
    println!(
        "  occasion:     {}",
        format_optional(settings.default_occasion.as_ref(), "(default)")
    );
    println!(
        "  weather:      {}",
        format_optional(settings.default_weather.as_ref(), "(default)")
    );
}

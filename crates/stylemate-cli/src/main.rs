//! CLI entry point - the composition root.
//!
//! Infrastructure is wired in `bootstrap`; this file only sets up logging,
//! parses arguments and routes each command to its handler.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use stylemate_cli::handlers::generate::GenerateArgs;
use stylemate_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use stylemate_core::NewClothingItem;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads `env` defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let err = CliError::from_anyhow(e);
            eprintln!("Error: {err}");
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    if matches!(command, Commands::Colors) {
        handlers::colors::execute();
        return Ok(());
    }

    let ctx = bootstrap(CliConfig {
        data_dir: cli.data_dir,
        user: cli.user,
    })
    .await?;

    match command {
        Commands::Paths => handlers::paths::execute(&ctx),
        Commands::Add {
            name,
            category,
            item_type,
            style,
            color,
            seasons,
            image,
        } => {
            let item = NewClothingItem {
                name,
                category,
                item_type,
                style,
                color,
                seasons,
                image_ref: image.unwrap_or_default(),
            };
            handlers::add::execute(&ctx, item).await?;
        }
        Commands::List { category, json } => {
            handlers::list::execute(&ctx, category, json).await?;
        }
        Commands::Remove { id, force } => {
            handlers::remove::execute(&ctx, &id, force).await?;
        }
        Commands::Generate {
            temperature,
            weather,
            occasion,
            subtype,
            style,
            seed,
            save,
            json,
        } => {
            let args = GenerateArgs {
                temperature,
                weather,
                occasion,
                subtype,
                style,
                seed,
                save,
                json,
            };
            handlers::generate::execute(&ctx, args).await?;
        }
        Commands::Outfits { command } => {
            handlers::outfits::execute(&ctx, command).await?;
        }
        Commands::Profile => {
            handlers::profile::execute(&ctx).await?;
        }
        Commands::Config { command } => {
            handlers::config::execute(&ctx, command).await?;
        }
        Commands::Colors => handlers::colors::execute(),
    }
    Ok(())
}

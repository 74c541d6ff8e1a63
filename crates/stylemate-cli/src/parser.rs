//! Main CLI parser and top-level argument handling.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;

/// Command-line interface for the wardrobe and outfit generator.
#[derive(Parser)]
#[command(name = "stylemate")]
#[command(about = "Keep a wardrobe and get outfit suggestions for the weather")]
#[command(version)]
pub struct Cli {
    /// Override the data directory for this invocation
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Act on this user's wardrobe instead of the configured one
    #[arg(long, global = true, env = "STYLEMATE_USER")]
    pub user: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Commands;
    use clap::CommandFactory;
    use stylemate_core::{Category, Occasion, Season, StylePreference};

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "stylemate",
            "--verbose",
            "--data-dir",
            "/tmp/wardrobe",
            "list",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/wardrobe")));
        assert!(matches!(cli.command, Some(Commands::List { category: None, json: false })));
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::parse_from([
            "stylemate",
            "generate",
            "--temperature",
            "3",
            "--occasion",
            "sport",
            "--style",
            "SPORT",
            "--seed",
            "42",
            "--save",
        ]);
        match cli.command {
            Some(Commands::Generate {
                temperature,
                occasion,
                style,
                seed,
                save,
                weather,
                ..
            }) => {
                assert_eq!(temperature, Some(3));
                assert_eq!(occasion, Some(Occasion::Sport));
                assert_eq!(style, Some(StylePreference::Sport));
                assert_eq!(seed, Some(42));
                assert!(save);
                assert_eq!(weather, None);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_negative_temperature() {
        let cli = Cli::parse_from(["stylemate", "generate", "--temperature=-4"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Generate { temperature: Some(-4), .. })
        ));
    }

    #[test]
    fn test_add_args() {
        let cli = Cli::parse_from([
            "stylemate",
            "add",
            "--name",
            "Grey Hoodie",
            "--category",
            "top",
            "--type",
            "hoodie",
            "--style",
            "urban",
            "--color",
            "gray",
            "--season",
            "autumn",
            "--season",
            "fall",
        ]);
        match cli.command {
            Some(Commands::Add {
                category, seasons, ..
            }) => {
                assert_eq!(category, Category::Top);
                assert_eq!(seasons, vec![Season::Autumn, Season::Autumn]);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(Cli::try_parse_from(["stylemate", "list", "--category", "hat"]).is_err());
    }
}

//! Command-line adapter for stylemate.
//!
//! `main.rs` parses arguments, calls [`bootstrap`] and dispatches each
//! [`Commands`] variant to its handler in [`handlers`].
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by main.rs only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod config_commands;
pub mod error;
pub mod handlers;
pub mod outfit_commands;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::Commands;
pub use config_commands::ConfigCommand;
pub use error::CliError;
pub use outfit_commands::OutfitsCommand;
pub use parser::Cli;

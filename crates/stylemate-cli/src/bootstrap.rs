//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the data directory is resolved, the file store is
//! opened and `AppCore` is assembled on top of it.

use std::path::PathBuf;

use anyhow::Result;
use stylemate_core::paths::ResolvedPaths;
use stylemate_core::{AppCore, Repos};
use stylemate_store::StoreFactory;
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Data directory override (`--data-dir`).
    pub data_dir: Option<PathBuf>,
    /// User override (`--user` / `STYLEMATE_USER`).
    pub user: Option<String>,
}

impl CliConfig {
    /// Take the global options from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_dir: cli.data_dir.clone(),
            user: cli.user.clone(),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// Where the store lives.
    pub paths: ResolvedPaths,
    /// Owner of the wardrobe every command acts on.
    pub user_id: String,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Access the resolved paths.
    pub const fn paths(&self) -> &ResolvedPaths {
        &self.paths
    }

    /// The active user id.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// Bootstrap the CLI application.
///
/// Resolves the data directory, opens the file store and settles which
/// user the invocation acts for.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let paths = ResolvedPaths::resolve(config.data_dir.as_deref())?;
    debug!(data_dir = %paths.data_dir.display(), source = ?paths.source, "Resolved data directory");
    let repos = StoreFactory::build_repos(&paths.data_dir)?;
    bootstrap_with(repos, paths, config.user).await
}

/// Bootstrap with custom repos (for testing).
pub async fn bootstrap_with(
    repos: Repos,
    paths: ResolvedPaths,
    user: Option<String>,
) -> Result<CliContext> {
    let app = AppCore::new(repos);

    let user_id = match user {
        Some(u) if u.trim().is_empty() => {
            return Err(CliError::Arguments("user cannot be empty".to_string()).into());
        }
        Some(u) => u.trim().to_string(),
        None => app.settings().get().await?.effective_user_id().to_string(),
    };
    debug!(user = %user_id, "Active user");

    Ok(CliContext {
        app,
        paths,
        user_id,
    })
}

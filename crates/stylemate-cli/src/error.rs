//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use stylemate_core::{CoreError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Invalid arguments or input.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The requested item or outfit doesn't exist.
    #[error("{0}")]
    NotFound(String),

    /// The wardrobe can't satisfy the request.
    #[error("{0}")]
    Wardrobe(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store error.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,
            Self::Wardrobe(_) => 65, // EX_DATAERR
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Storage(_) => 73,  // EX_CANTCREAT
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }

    /// Classify an error coming out of a handler.
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        let err = match err.downcast::<Self>() {
            Ok(cli) => return cli,
            Err(other) => other,
        };
        let err = match err.downcast::<CoreError>() {
            Ok(core) => return core.into(),
            Err(other) => other,
        };
        match err.downcast::<std::io::Error>() {
            Ok(io) => io.into(),
            Err(other) => Self::Core(format!("{other:#}")),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(RepositoryError::NotFound(what)) => {
                Self::NotFound(format!("Not found: {what}"))
            }
            CoreError::Repository(repo_err) => Self::Storage(repo_err.to_string()),
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Recommendation(inner) => Self::Wardrobe(inner.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylemate_core::{Category, InsufficientInventory, Occasion, SettingsError, StylePreference};

    #[test]
    fn test_insufficient_inventory_maps_to_data_error() {
        let core = CoreError::Recommendation(InsufficientInventory {
            style: StylePreference::Formal,
            occasion: Occasion::Formal,
            missing: vec![Category::Bottom],
        });
        let cli = CliError::from(core);
        assert_eq!(cli.exit_code(), 65);
        assert_eq!(
            cli.to_string(),
            "not enough formal clothes for a formal outfit (missing bottom); try a different style"
        );
    }

    #[test]
    fn test_exit_codes() {
        let cases = [
            (CoreError::Validation("x".into()), 2),
            (CoreError::Settings(SettingsError::EmptyUserId), 78),
            (
                CoreError::Repository(RepositoryError::NotFound("item 1".into())),
                66,
            ),
            (
                CoreError::Repository(RepositoryError::Storage("disk".into())),
                73,
            ),
        ];
        for (core, code) in cases {
            assert_eq!(CliError::from(core).exit_code(), code);
        }
    }

    #[test]
    fn test_from_anyhow_finds_core_error() {
        let err = anyhow::Error::new(CoreError::Validation("bad".into()));
        assert!(matches!(CliError::from_anyhow(err), CliError::Arguments(_)));

        let err = anyhow::anyhow!("something odd");
        assert_eq!(CliError::from_anyhow(err).exit_code(), 1);
    }
}

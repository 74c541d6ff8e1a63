//! Data directory resolution.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "STYLEMATE_DATA_DIR";

/// Directory name under the platform data directory.
pub const APP_DIR_NAME: &str = "stylemate";

/// Settings document name inside the data directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// How the data directory was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDirSource {
    /// Passed by the caller (e.g. `--data-dir`).
    Explicit,
    /// Read from `STYLEMATE_DATA_DIR`.
    EnvVar,
    /// Platform default (`dirs::data_dir()/stylemate`).
    Default,
}

/// Resolved locations of everything stylemate stores on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub data_dir: PathBuf,
    pub source: DataDirSource,
}

impl ResolvedPaths {
    /// Resolve from an explicit override, the environment, or the platform default.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, PathError> {
        Self::resolve_with(explicit, env::var(DATA_DIR_ENV).ok())
    }

    /// Resolution with the environment value passed in.
    pub fn resolve_with(
        explicit: Option<&Path>,
        env_value: Option<String>,
    ) -> Result<Self, PathError> {
        if let Some(path) = explicit {
            return Ok(Self {
                data_dir: normalize_user_path(&path.to_string_lossy())?,
                source: DataDirSource::Explicit,
            });
        }

        if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
            return Ok(Self {
                data_dir: normalize_user_path(&value)?,
                source: DataDirSource::EnvVar,
            });
        }

        let base = dirs::data_dir().ok_or(PathError::NoDataDir)?;
        Ok(Self {
            data_dir: base.join(APP_DIR_NAME),
            source: DataDirSource::Default,
        })
    }

    /// Path of the settings document.
    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    /// Directory holding clothing photos.
    #[must_use]
    pub fn images_dir(&self) -> PathBuf {
        self.data_dir.join("images")
    }
}

/// Get the data directory, honouring `STYLEMATE_DATA_DIR`.
pub fn data_root(explicit: Option<&Path>) -> Result<PathBuf, PathError> {
    ResolvedPaths::resolve(explicit).map(|p| p.data_dir)
}

/// Expand `~` and make the path absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed == "~" {
        dirs::home_dir().ok_or(PathError::NoHomeDir)?
    } else if let Some(rest) = trimmed.strip_prefix("~/") {
        dirs::home_dir().ok_or(PathError::NoHomeDir)?.join(rest)
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

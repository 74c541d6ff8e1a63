//! Path utilities for the stylemate data directory.
//!
//! No interactive I/O here; adapters decide what to show the user.

mod ensure;
mod error;
mod resolver;

pub use ensure::ensure_directory;
pub use error::PathError;
pub use resolver::{
    APP_DIR_NAME, DATA_DIR_ENV, DataDirSource, ResolvedPaths, SETTINGS_FILE, data_root,
};

//! Filesystem implementation of the `ImageStore` trait.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

use stylemate_core::{ImageStore, RepositoryError};

/// Clothing photos kept under a single directory.
///
/// An image reference is a relative path inside that directory
/// (e.g. `"alice/1700000000.jpg"`).
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, image_ref: &str) -> Result<PathBuf, RepositoryError> {
        let rel = Path::new(image_ref);
        if image_ref.is_empty() || !rel.components().all(|c| matches!(c, Component::Normal(_))) {
            return Err(RepositoryError::Storage(format!(
                "invalid image reference: {image_ref}"
            )));
        }
        Ok(self.root.join(rel))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn delete(&self, image_ref: &str) -> Result<(), RepositoryError> {
        let path = self.resolve(image_ref)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(path = %path.display(), "Deleted image");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(RepositoryError::NotFound(format!("image {image_ref}")))
            }
            Err(e) => Err(RepositoryError::Storage(e.to_string())),
        }
    }
}

//! Image store trait definition.

use async_trait::async_trait;

use super::RepositoryError;

/// Storage for clothing photos.
///
/// Only deletion is modelled; uploads happen outside the core.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Delete the image behind `image_ref`.
    ///
    /// Deleting a reference that no longer exists is not an error.
    async fn delete(&self, image_ref: &str) -> Result<(), RepositoryError>;
}

/// Image store that keeps nothing and deletes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopImageStore;

#[async_trait]
impl ImageStore for NoopImageStore {
    async fn delete(&self, _image_ref: &str) -> Result<(), RepositoryError> {
        Ok(())
    }
}

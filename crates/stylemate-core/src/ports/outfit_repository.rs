//! Outfit repository trait definition.
//!
//! This port is the persistence sink for outfits the user chose to keep.
//! Write semantics, retries and uniqueness belong to the implementation.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewOutfitRecord, OutfitRecord};

/// Repository for saved outfits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OutfitRepository: Send + Sync {
    /// Store an outfit for `user_id`, returning it with its assigned id.
    async fn insert(
        &self,
        user_id: &str,
        outfit: &NewOutfitRecord,
    ) -> Result<OutfitRecord, RepositoryError>;

    /// List saved outfits, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<OutfitRecord>, RepositoryError>;

    /// Delete a saved outfit.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the outfit doesn't exist.
    async fn delete(&self, user_id: &str, id: &str) -> Result<(), RepositoryError>;
}

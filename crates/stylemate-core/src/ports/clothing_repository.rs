//! Clothing repository trait definition.
//!
//! This port is the inventory source: it supplies a user's wardrobe as a
//! fully materialized list. Implementations handle all storage details.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{ClothingItem, NewClothingItem};

/// Repository for clothing item persistence.
///
/// # Design Rules
///
/// - No storage-specific types in signatures
/// - Items are immutable: there is no update operation
/// - Listing is scoped to one owner and returns items in insertion order
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClothingRepository: Send + Sync {
    /// List every item owned by `user_id`.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<ClothingItem>, RepositoryError>;

    /// Get an item by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the item doesn't exist
    /// or belongs to another user.
    async fn get(&self, user_id: &str, id: &str) -> Result<ClothingItem, RepositoryError>;

    /// Store a new item for `user_id`.
    ///
    /// Returns the stored item with its assigned id.
    async fn insert(
        &self,
        user_id: &str,
        item: &NewClothingItem,
    ) -> Result<ClothingItem, RepositoryError>;

    /// Delete an item by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the item doesn't exist.
    async fn delete(&self, user_id: &str, id: &str) -> Result<(), RepositoryError>;
}

//! JSON file implementation of the `ClothingRepository` trait.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

use stylemate_core::{ClothingItem, ClothingRepository, NewClothingItem, RepositoryError};

use crate::document::JsonDocument;

/// Items keyed by owner, each list in insertion order.
type Wardrobes = BTreeMap<String, Vec<ClothingItem>>;

/// Clothing items stored in a single `clothes.json` document.
pub struct JsonClothingRepository {
    doc: JsonDocument<Wardrobes>,
}

impl JsonClothingRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: JsonDocument::new(path),
        }
    }
}

#[async_trait]
impl ClothingRepository for JsonClothingRepository {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<ClothingItem>, RepositoryError> {
        let mut all = self.doc.read().await?;
        Ok(all.remove(user_id).unwrap_or_default())
    }

    async fn get(&self, user_id: &str, id: &str) -> Result<ClothingItem, RepositoryError> {
        self.list_for_user(user_id)
            .await?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("clothing item {id}")))
    }

    async fn insert(
        &self,
        user_id: &str,
        item: &NewClothingItem,
    ) -> Result<ClothingItem, RepositoryError> {
        let stored = item.clone().into_item(uuid::Uuid::new_v4().to_string());
        let copy = stored.clone();
        self.doc
            .update(|all| {
                all.entry(user_id.to_string()).or_default().push(copy);
                Ok::<_, RepositoryError>(())
            })
            .await?;
        debug!(user = user_id, id = %stored.id, "Stored clothing item");
        Ok(stored)
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<(), RepositoryError> {
        self.doc
            .update(|all| -> Result<(), RepositoryError> {
                let items = all
                    .get_mut(user_id)
                    .ok_or_else(|| RepositoryError::NotFound(format!("clothing item {id}")))?;
                let pos = items
                    .iter()
                    .position(|item| item.id == id)
                    .ok_or_else(|| RepositoryError::NotFound(format!("clothing item {id}")))?;
                items.remove(pos);
                Ok(())
            })
            .await
    }
}

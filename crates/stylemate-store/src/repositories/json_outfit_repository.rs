//! JSON file implementation of the `OutfitRepository` trait.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

use stylemate_core::{NewOutfitRecord, OutfitRecord, OutfitRepository, RepositoryError};

use crate::document::JsonDocument;

type SavedOutfits = BTreeMap<String, Vec<OutfitRecord>>;

/// Saved outfits stored in a single `outfits.json` document.
pub struct JsonOutfitRepository {
    doc: JsonDocument<SavedOutfits>,
}

impl JsonOutfitRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: JsonDocument::new(path),
        }
    }
}

#[async_trait]
impl OutfitRepository for JsonOutfitRepository {
    async fn insert(
        &self,
        user_id: &str,
        outfit: &NewOutfitRecord,
    ) -> Result<OutfitRecord, RepositoryError> {
        let stored = outfit.clone().into_record(uuid::Uuid::new_v4().to_string());
        let copy = stored.clone();
        self.doc
            .update(|all| {
                all.entry(user_id.to_string()).or_default().push(copy);
                Ok::<_, RepositoryError>(())
            })
            .await?;
        debug!(user = user_id, id = %stored.id, "Stored outfit");
        Ok(stored)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<OutfitRecord>, RepositoryError> {
        let mut outfits = self.doc.read().await?.remove(user_id).unwrap_or_default();
        // Reverse first so equal timestamps list the later insert first.
        outfits.reverse();
        outfits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(outfits)
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<(), RepositoryError> {
        self.doc
            .update(|all| -> Result<(), RepositoryError> {
                let outfits = all
                    .get_mut(user_id)
                    .ok_or_else(|| RepositoryError::NotFound(format!("outfit {id}")))?;
                let before = outfits.len();
                outfits.retain(|o| o.id != id);
                if outfits.len() == before {
                    return Err(RepositoryError::NotFound(format!("outfit {id}")));
                }
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use stylemate_core::{Occasion, WeatherCondition};
    use tempfile::TempDir;

    fn record(name: &str, minutes_ago: i64) -> NewOutfitRecord {
        NewOutfitRecord {
            name: name.to_string(),
            top_id: Some("t".to_string()),
            bottom_id: Some("b".to_string()),
            shoes_id: None,
            outerwear_id: None,
            accessory_id: None,
            occasion: Occasion::Casual,
            style: "urban".to_string(),
            temperature: 20,
            weather_condition: WeatherCondition::Sunny,
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let tmp = TempDir::new().unwrap();
        let repo = JsonOutfitRepository::new(tmp.path().join("outfits.json"));

        repo.insert("u", &record("old", 30)).await.unwrap();
        repo.insert("u", &record("new", 1)).await.unwrap();
        repo.insert("u", &record("middle", 10)).await.unwrap();

        let names: Vec<String> = repo
            .list_for_user("u")
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(names, vec!["new", "middle", "old"]);
    }

    #[tokio::test]
    async fn test_delete_missing_outfit() {
        let tmp = TempDir::new().unwrap();
        let repo = JsonOutfitRepository::new(tmp.path().join("outfits.json"));

        let saved = repo.insert("u", &record("a", 0)).await.unwrap();
        assert!(matches!(
            repo.delete("u", "nope").await,
            Err(RepositoryError::NotFound(_))
        ));
        repo.delete("u", &saved.id).await.unwrap();
        assert!(repo.list_for_user("u").await.unwrap().is_empty());
    }
}

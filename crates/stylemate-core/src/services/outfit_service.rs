//! Outfit service - generates outfits from the wardrobe and keeps the
//! ones the user saves.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::{GeneratedOutfit, OutfitPreferences, OutfitRecord};
use crate::ports::{ClothingRepository, CoreError, OutfitRepository};
use crate::recommend::{Picker, Recommendation, RngPicker, recommend_outfit};

/// Service for outfit generation and saved outfits.
pub struct OutfitService {
    clothes: Arc<dyn ClothingRepository>,
    outfits: Arc<dyn OutfitRepository>,
}

impl OutfitService {
    /// Create a new outfit service.
    pub fn new(clothes: Arc<dyn ClothingRepository>, outfits: Arc<dyn OutfitRepository>) -> Self {
        Self { clothes, outfits }
    }

    /// Generate an outfit using an entropy-seeded picker.
    pub async fn generate(
        &self,
        user_id: &str,
        preferences: &OutfitPreferences,
    ) -> Result<Recommendation, CoreError> {
        self.generate_with(user_id, preferences, &mut RngPicker::from_entropy())
            .await
    }

    /// Generate an outfit with a caller-supplied picker.
    pub async fn generate_with<P: Picker + ?Sized>(
        &self,
        user_id: &str,
        preferences: &OutfitPreferences,
        picker: &mut P,
    ) -> Result<Recommendation, CoreError> {
        let inventory = self.clothes.list_for_user(user_id).await?;
        if inventory.is_empty() {
            return Err(CoreError::Validation(
                "Your wardrobe is empty. Add some clothes first.".to_string(),
            ));
        }
        debug!(user = user_id, items = inventory.len(), "Generating outfit");

        let recommendation = recommend_outfit(&inventory, preferences, picker)?;
        info!(
            style = %recommendation.actual_style,
            occasion = %preferences.occasion,
            "Outfit generated"
        );
        Ok(recommendation)
    }

    /// Save an outfit under its derived display name.
    ///
    /// The sink may fail; the outfit is untouched and the call can be retried.
    pub async fn save(
        &self,
        user_id: &str,
        outfit: &GeneratedOutfit,
        preferences: &OutfitPreferences,
    ) -> Result<OutfitRecord, CoreError> {
        if !outfit.is_complete() {
            return Err(CoreError::Validation(
                "An outfit needs at least a top and a bottom".to_string(),
            ));
        }
        let record = outfit.to_record(preferences);
        let stored = self.outfits.insert(user_id, &record).await?;
        info!(id = %stored.id, name = %stored.name, "Outfit saved");
        Ok(stored)
    }

    /// List saved outfits, newest first.
    pub async fn list_saved(&self, user_id: &str) -> Result<Vec<OutfitRecord>, CoreError> {
        self.outfits
            .list_for_user(user_id)
            .await
            .map_err(CoreError::from)
    }

    /// Delete a saved outfit.
    pub async fn remove_saved(&self, user_id: &str, id: &str) -> Result<(), CoreError> {
        self.outfits
            .delete(user_id, id)
            .await
            .map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ClothingItem, Color, Occasion, StylePreference};
    use crate::ports::RepositoryError;
    use crate::ports::clothing_repository::MockClothingRepository;
    use crate::ports::outfit_repository::MockOutfitRepository;

    fn item(id: &str, category: Category, name: &str, style: &str) -> ClothingItem {
        ClothingItem {
            id: id.to_string(),
            name: name.to_string(),
            category,
            item_type: String::new(),
            style: style.to_string(),
            color: Color::Navy,
            seasons: vec![],
            image_ref: String::new(),
        }
    }

    fn wardrobe() -> Vec<ClothingItem> {
        vec![
            item("1", Category::Top, "Racing Jersey", "sport"),
            item("2", Category::Bottom, "Racing Shorts", "sport"),
        ]
    }

    fn sport_prefs() -> OutfitPreferences {
        OutfitPreferences {
            temperature: 22,
            occasion: Occasion::Sport,
            style: StylePreference::Sport,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_generate_uses_inventory_source() {
        let mut clothes = MockClothingRepository::new();
        clothes
            .expect_list_for_user()
            .times(1)
            .returning(|_| Ok(wardrobe()));
        let service = OutfitService::new(Arc::new(clothes), Arc::new(MockOutfitRepository::new()));

        let rec = service
            .generate_with("u", &sport_prefs(), &mut RngPicker::seeded(5))
            .await
            .unwrap();
        assert_eq!(rec.actual_style, "sport");
        assert_eq!(rec.outfit.top.unwrap().id, "1");
    }

    #[tokio::test]
    async fn test_generate_on_empty_wardrobe() {
        let mut clothes = MockClothingRepository::new();
        clothes.expect_list_for_user().returning(|_| Ok(vec![]));
        let service = OutfitService::new(Arc::new(clothes), Arc::new(MockOutfitRepository::new()));

        let err = service
            .generate("u", &OutfitPreferences::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_generate_reports_insufficient_inventory() {
        let mut clothes = MockClothingRepository::new();
        clothes
            .expect_list_for_user()
            .returning(|_| Ok(vec![item("1", Category::Top, "Tee", "casual")]));
        let service = OutfitService::new(Arc::new(clothes), Arc::new(MockOutfitRepository::new()));

        let err = service
            .generate("u", &OutfitPreferences::default())
            .await
            .unwrap_err();
        match err {
            CoreError::Recommendation(inner) => {
                assert_eq!(inner.missing, vec![Category::Bottom]);
                assert!(inner.to_string().contains("urban"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_save_builds_named_record() {
        let mut outfits = MockOutfitRepository::new();
        outfits
            .expect_insert()
            .withf(|user, record| {
                user.to_string() == "u"
                    && record.name == "Sport Sport"
                    && record.top_id.as_deref() == Some("1")
            })
            .times(1)
            .returning(|_, record| Ok(record.clone().into_record("o1".to_string())));
        let service = OutfitService::new(
            Arc::new(MockClothingRepository::new()),
            Arc::new(outfits),
        );

        let outfit = GeneratedOutfit {
            top: Some(wardrobe()[0].clone()),
            bottom: Some(wardrobe()[1].clone()),
            ..Default::default()
        };
        let stored = service.save("u", &outfit, &sport_prefs()).await.unwrap();
        assert_eq!(stored.id, "o1");
        assert_eq!(stored.style, "sport");
    }

    #[tokio::test]
    async fn test_save_rejects_incomplete_outfit() {
        let mut outfits = MockOutfitRepository::new();
        outfits.expect_insert().never();
        let service = OutfitService::new(
            Arc::new(MockClothingRepository::new()),
            Arc::new(outfits),
        );

        let outfit = GeneratedOutfit {
            top: Some(wardrobe()[0].clone()),
            ..Default::default()
        };
        let err = service
            .save("u", &outfit, &sport_prefs())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_save_surfaces_sink_failure() {
        let mut outfits = MockOutfitRepository::new();
        outfits
            .expect_insert()
            .returning(|_, _| Err(RepositoryError::Storage("timeout".to_string())));
        let service = OutfitService::new(
            Arc::new(MockClothingRepository::new()),
            Arc::new(outfits),
        );

        let outfit = GeneratedOutfit {
            top: Some(wardrobe()[0].clone()),
            bottom: Some(wardrobe()[1].clone()),
            ..Default::default()
        };
        let err = service
            .save("u", &outfit, &sport_prefs())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Repository(RepositoryError::Storage(_))));
    }
}

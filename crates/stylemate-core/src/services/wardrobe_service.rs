//! Wardrobe service - orchestrates clothing item operations.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{Category, ClothingItem, Color, NewClothingItem};
use crate::ports::{ClothingRepository, CoreError, ImageStore};

/// How many colors a style profile reports.
const PROFILE_TOP_COLORS: usize = 3;

/// Aggregate view of a user's wardrobe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub total_items: usize,
    /// Item count per category, in slot order. Every category is listed.
    pub per_category: Vec<(Category, usize)>,
    /// Most common style tag (lower-cased), first-seen on ties.
    pub dominant_style: Option<String>,
    /// Most common colors, most frequent first.
    pub top_colors: Vec<(Color, usize)>,
}

impl StyleProfile {
    fn from_items(items: &[ClothingItem]) -> Self {
        let per_category = Category::ALL
            .into_iter()
            .map(|c| (c, items.iter().filter(|i| i.category == c).count()))
            .collect();

        let mut styles: Vec<(String, usize)> = Vec::new();
        let mut colors: Vec<(Color, usize)> = Vec::new();
        for item in items {
            let tag = item.style.trim().to_lowercase();
            if !tag.is_empty() {
                match styles.iter_mut().find(|(seen, _)| *seen == tag) {
                    Some((_, n)) => *n += 1,
                    None => styles.push((tag, 1)),
                }
            }
            match colors.iter_mut().find(|(seen, _)| *seen == item.color) {
                Some((_, n)) => *n += 1,
                None => colors.push((item.color, 1)),
            }
        }

        let dominant_style = styles
            .iter()
            .fold(None::<&(String, usize)>, |best, entry| match best {
                Some(b) if b.1 >= entry.1 => Some(b),
                _ => Some(entry),
            })
            .map(|(tag, _)| tag.clone());

        // Stable sort keeps first-seen order among equal counts.
        colors.sort_by(|a, b| b.1.cmp(&a.1));
        colors.truncate(PROFILE_TOP_COLORS);

        Self {
            total_items: items.len(),
            per_category,
            dominant_style,
            top_colors: colors,
        }
    }

    /// Categories with no items at all.
    #[must_use]
    pub fn missing_categories(&self) -> Vec<Category> {
        self.per_category
            .iter()
            .filter(|(_, n)| *n == 0)
            .map(|(c, _)| *c)
            .collect()
    }
}

/// A category the wardrobe lacks, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeHint {
    pub category: Category,
    /// True for top and bottom: no outfit can be generated without them.
    pub blocking: bool,
}

impl WardrobeHint {
    /// Build hints for every category with no items, blocking ones first.
    #[must_use]
    pub fn for_profile(profile: &StyleProfile) -> Vec<Self> {
        let mut hints: Vec<Self> = profile
            .missing_categories()
            .into_iter()
            .map(|category| Self {
                category,
                blocking: matches!(category, Category::Top | Category::Bottom),
            })
            .collect();
        hints.sort_by_key(|h| !h.blocking);
        hints
    }

    /// User-facing text for the hint.
    #[must_use]
    pub fn message(&self) -> String {
        if self.blocking {
            format!("Add at least one {} to start generating outfits", self.category)
        } else {
            format!("Add some {} to complete your outfits", self.category)
        }
    }
}

/// Service for wardrobe operations.
///
/// A thin facade over the injected `ClothingRepository`; removal also
/// cleans up the item's image through the `ImageStore`.
pub struct WardrobeService {
    repo: Arc<dyn ClothingRepository>,
    images: Arc<dyn ImageStore>,
}

impl WardrobeService {
    /// Create a new wardrobe service.
    pub fn new(repo: Arc<dyn ClothingRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { repo, images }
    }

    /// List all items owned by `user_id`.
    pub async fn list(&self, user_id: &str) -> Result<Vec<ClothingItem>, CoreError> {
        self.repo.list_for_user(user_id).await.map_err(CoreError::from)
    }

    /// List the items of one category.
    pub async fn list_by_category(
        &self,
        user_id: &str,
        category: Category,
    ) -> Result<Vec<ClothingItem>, CoreError> {
        let items = self.list(user_id).await?;
        Ok(items.into_iter().filter(|i| i.category == category).collect())
    }

    /// Add a new item after checking its required fields.
    pub async fn add(
        &self,
        user_id: &str,
        item: NewClothingItem,
    ) -> Result<ClothingItem, CoreError> {
        item.validate().map_err(CoreError::Validation)?;
        let stored = self.repo.insert(user_id, &item).await?;
        debug!(id = %stored.id, name = %stored.name, "Clothing item added");
        Ok(stored)
    }

    /// Remove an item. Returns the removed item.
    ///
    /// The image is deleted afterwards on a best-effort basis: a failure is
    /// logged and does not undo or fail the removal.
    pub async fn remove(&self, user_id: &str, id: &str) -> Result<ClothingItem, CoreError> {
        let item = self.repo.get(user_id, id).await?;
        self.repo.delete(user_id, id).await?;

        if !item.image_ref.is_empty() {
            if let Err(e) = self.images.delete(&item.image_ref).await {
                warn!(image = %item.image_ref, error = %e, "Failed to delete item image");
            }
        }
        Ok(item)
    }

    /// Summarize the wardrobe.
    pub async fn style_profile(&self, user_id: &str) -> Result<StyleProfile, CoreError> {
        let items = self.list(user_id).await?;
        Ok(StyleProfile::from_items(&items))
    }

    /// Categories to add before outfits are complete.
    pub async fn hints(&self, user_id: &str) -> Result<Vec<WardrobeHint>, CoreError> {
        let profile = self.style_profile(user_id).await?;
        Ok(WardrobeHint::for_profile(&profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Season;
    use crate::ports::RepositoryError;
    use crate::ports::clothing_repository::MockClothingRepository;
    use crate::ports::image_store::MockImageStore;

    fn item(id: &str, category: Category, style: &str, color: Color) -> ClothingItem {
        ClothingItem {
            id: id.to_string(),
            name: format!("item {id}"),
            category,
            item_type: "t".to_string(),
            style: style.to_string(),
            color,
            seasons: vec![Season::Spring],
            image_ref: format!("u/{id}.jpg"),
        }
    }

    fn service(repo: MockClothingRepository, images: MockImageStore) -> WardrobeService {
        WardrobeService::new(Arc::new(repo), Arc::new(images))
    }

    #[tokio::test]
    async fn test_remove_deletes_image() {
        let mut repo = MockClothingRepository::new();
        repo.expect_get()
            .returning(|_, id| Ok(item(id, Category::Top, "casual", Color::Red)));
        repo.expect_delete().times(1).returning(|_, _| Ok(()));

        let mut images = MockImageStore::new();
        images
            .expect_delete()
            .withf(|image_ref| image_ref.to_string() == "u/7.jpg")
            .times(1)
            .returning(|_| Ok(()));

        let removed = service(repo, images).remove("u", "7").await.unwrap();
        assert_eq!(removed.id, "7");
    }

    #[tokio::test]
    async fn test_remove_survives_image_failure() {
        let mut repo = MockClothingRepository::new();
        repo.expect_get()
            .returning(|_, id| Ok(item(id, Category::Top, "casual", Color::Red)));
        repo.expect_delete().times(1).returning(|_, _| Ok(()));

        let mut images = MockImageStore::new();
        images
            .expect_delete()
            .returning(|_| Err(RepositoryError::Storage("bucket offline".to_string())));

        assert!(service(repo, images).remove("u", "7").await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_missing_item_skips_delete() {
        let mut repo = MockClothingRepository::new();
        repo.expect_get()
            .returning(|_, id| Err(RepositoryError::NotFound(id.to_string())));
        repo.expect_delete().never();
        let mut images = MockImageStore::new();
        images.expect_delete().never();

        let err = service(repo, images).remove("u", "9").await.unwrap_err();
        assert!(matches!(err, CoreError::Repository(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_rejects_blank_fields() {
        let mut repo = MockClothingRepository::new();
        repo.expect_insert().never();

        let new_item = NewClothingItem {
            name: String::new(),
            category: Category::Top,
            item_type: "tee".to_string(),
            style: "casual".to_string(),
            color: Color::White,
            seasons: vec![],
            image_ref: String::new(),
        };
        let err = service(repo, MockImageStore::new())
            .add("u", new_item)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_style_profile() {
        let mut repo = MockClothingRepository::new();
        repo.expect_list_for_user().returning(|_| {
            Ok(vec![
                item("1", Category::Top, "Urban", Color::Black),
                item("2", Category::Bottom, "casual", Color::Blue),
                item("3", Category::Top, "urban", Color::Black),
                item("4", Category::Shoes, "casual", Color::White),
                item("5", Category::Shoes, "", Color::Blue),
                item("6", Category::Top, "sport", Color::Red),
            ])
        });

        let profile = service(repo, MockImageStore::new())
            .style_profile("u")
            .await
            .unwrap();

        assert_eq!(profile.total_items, 6);
        assert_eq!(profile.dominant_style.as_deref(), Some("urban"));
        assert_eq!(
            profile.top_colors,
            vec![(Color::Black, 2), (Color::Blue, 2), (Color::White, 1)]
        );
        assert_eq!(
            profile.missing_categories(),
            vec![Category::Outerwear, Category::Accessory]
        );
    }

    #[tokio::test]
    async fn test_hints_put_blocking_categories_first() {
        let mut repo = MockClothingRepository::new();
        repo.expect_list_for_user()
            .returning(|_| Ok(vec![item("1", Category::Top, "casual", Color::Black)]));

        let hints = service(repo, MockImageStore::new()).hints("u").await.unwrap();
        let categories: Vec<Category> = hints.iter().map(|h| h.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Bottom,
                Category::Shoes,
                Category::Outerwear,
                Category::Accessory
            ]
        );
        assert!(hints[0].blocking);
        assert!(!hints[1].blocking);
        assert_eq!(hints[0].message(), "Add at least one bottom to start generating outfits");
    }
}

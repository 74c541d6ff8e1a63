//! Recommender failure type.

use thiserror::Error;

use crate::domain::{Category, Occasion, StylePreference};

/// The candidate pool has no top or no bottom after all filtering.
///
/// The message is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "not enough {style} clothes for a {occasion} outfit (missing {}); try a different style",
    missing_list(.missing)
)]
pub struct InsufficientInventory {
    pub style: StylePreference,
    pub occasion: Occasion,
    /// Required categories with no candidate, in slot order.
    pub missing: Vec<Category>,
}

fn missing_list(missing: &[Category]) -> String {
    missing
        .iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(" and ")
}

//! Catalog record types.
//!
//! Record shape is owned by this layer, not by the store: the store
//! persists whatever serializes. Ingredients are deliberately loose - the
//! public catalog ships them as `null`, free text, or a structured object
//! depending on the entry, so they stay a raw JSON value here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An entry of the public catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogBeer {
    /// Catalog-assigned numeric id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// One-line marketing tagline.
    pub tagline: String,
    /// Long-form description.
    pub description: String,
    /// Label image, if the catalog has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Free-form ingredients value (`null`, text, or a structured object).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<serde_json::Value>,
}

/// A personal cellar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellarBeer {
    /// Locally generated id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Style the owner filed this under.
    pub genre: String,
    /// Long-form description.
    pub description: String,
    /// Label image, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Free-form ingredients value (`null`, text, or a structured object).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<serde_json::Value>,
}

impl CellarBeer {
    /// Creates a new cellar entry with a generated id.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        genre: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            genre: genre.into(),
            description: description.into(),
            image_url: None,
            ingredients: None,
        }
    }

    /// Sets the label image URL.
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Sets the ingredients value.
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: serde_json::Value) -> Self {
        self.ingredients = Some(ingredients);
        self
    }
}

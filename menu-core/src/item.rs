//! Domain record and request DTOs for the menu API.
//!
//! # Design
//! `Item` is the stored shape; `NewItem` and `UpdateItem` are the create and
//! update payloads. Keeping them separate lets the create path require a name
//! while the update path treats every field as optional, and guarantees that
//! a client-supplied `id` in a request body is never honored — ids are
//! assigned server-side only.

use serde::{Deserialize, Serialize};

/// A single menu item as stored and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier, immutable once assigned. Also the storage key.
    pub id: i64,
    pub name: String,
    /// Price in minor currency units (cents).
    pub price: i64,
    pub description: String,
    /// URL of the item's image.
    pub image: String,
}

/// Request payload for creating a new item. Any `id` in the body is ignored;
/// the service assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

/// Request payload for updating an existing item. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Item {
    /// Merge `update` into this item, keeping the id. String fields that are
    /// absent or empty in `update` are left unchanged, as is an absent price.
    pub fn merged_with(mut self, update: UpdateItem) -> Item {
        if let Some(name) = non_empty(update.name) {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(description) = non_empty(update.description) {
            self.description = description;
        }
        if let Some(image) = non_empty(update.image) {
            self.image = image;
        }
        self
    }
}

impl From<UpdateItem> for NewItem {
    /// Fallback conversion for update-or-create: missing fields take their
    /// defaults.
    fn from(update: UpdateItem) -> Self {
        NewItem {
            name: update.name.unwrap_or_default(),
            price: update.price.unwrap_or_default(),
            description: update.description.unwrap_or_default(),
            image: update.image.unwrap_or_default(),
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

//! Category entity - A named grouping of products.
//!
//! A category owns its products by containment (a product belongs to exactly
//! one category at a time, determined by its `category_id`) and fixes which
//! variant axis applies to its products: footwear and clothing sell by size,
//! perfumes by volume, accessories as plain goods.

use crate::entities::product::Product;
use serde::{Deserialize, Serialize};

/// Which variant dimension the products of a category carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// No variant dimension (e.g. accessories)
    Plain,
    /// Size-based variants (e.g. footwear, clothing)
    Sized,
    /// Volume-based variants in millilitres (e.g. perfumes)
    Volume,
}

/// A named product grouping. Created at catalog initialization and in
/// practice static for the life of a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier (e.g. "calzado", "perfumes")
    pub id: String,
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// Variant axis this category's products use
    pub kind: CategoryKind,
    /// Products contained in this category, in display order
    pub items: Vec<Product>,
}

impl Category {
    /// Creates an empty category.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: CategoryKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            kind,
            items: Vec::new(),
        }
    }
}

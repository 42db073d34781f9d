//! Product entity - Represents one sellable catalog item.
//!
//! A product carries a base display price (currency-formatted string), a
//! product-level stock counter, and at most one variant dimension, selected
//! by its category: size labels with optional per-size price overrides, or
//! available volumes in millilitres with optional per-volume prices. Stock is
//! tracked at the product level only - two sizes of the same product share
//! one counter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Price override for one size label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePrice {
    /// The size label this price applies to (e.g. "M", "24.5 MX")
    pub size: String,
    /// Currency-formatted price (e.g. "$650.00")
    pub price: String,
}

/// Price override for one volume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumePrice {
    /// The volume in millilitres this price applies to
    pub volume_ml: u32,
    /// Currency-formatted price (e.g. "$350.00")
    pub price: String,
}

/// The variant dimension of a product. A product has at most one of the two
/// dimensions active; the tagged union makes a volume on a sized product
/// unrepresentable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VariantSpec {
    /// No variants - the product sells as-is
    Plain,
    /// Size-based variants (footwear, clothing)
    Sized {
        /// Available size labels, in display order
        sizes: Vec<String>,
        /// Per-size price overrides; sizes without an entry use the base price
        #[serde(default)]
        size_prices: Vec<SizePrice>,
    },
    /// Volume-based variants (perfumes)
    Volume {
        /// Default volume in millilitres, if one is designated
        default_ml: Option<u32>,
        /// Available volumes in millilitres, in display order
        available_ml: Vec<u32>,
        /// Per-volume price overrides; volumes without an entry use the base price
        #[serde(default)]
        volume_prices: Vec<VolumePrice>,
    },
}

impl Default for VariantSpec {
    fn default() -> Self {
        Self::Plain
    }
}

/// A sellable catalog entry. Owned exclusively by the catalog store; copies
/// held elsewhere are point-in-time snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned at creation and never reused in a session
    pub id: String,
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// Stock-keeping unit, free text (intended unique, not enforced)
    pub sku: String,
    /// Id of the category containing this product
    pub category_id: String,
    /// Base display price, currency-formatted (e.g. "$2,700.00")
    pub price: String,
    /// Cost price as a plain number
    pub cost_price: f64,
    /// Units in stock; the mutation layer keeps this non-negative
    pub stock: u32,
    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
    /// Variant dimension, determined by the category
    #[serde(default)]
    pub variants: VariantSpec,
}

impl Product {
    /// Returns the price override for `size`, if the product is sized and an
    /// override exists for that label.
    #[must_use]
    pub fn price_for_size(&self, size: &str) -> Option<&str> {
        match &self.variants {
            VariantSpec::Sized { size_prices, .. } => size_prices
                .iter()
                .find(|sp| sp.size == size)
                .map(|sp| sp.price.as_str()),
            _ => None,
        }
    }

    /// Returns the price override for `volume_ml`, if the product sells by
    /// volume and an override exists for that volume.
    #[must_use]
    pub fn price_for_volume(&self, volume_ml: u32) -> Option<&str> {
        match &self.variants {
            VariantSpec::Volume { volume_prices, .. } => volume_prices
                .iter()
                .find(|vp| vp.volume_ml == volume_ml)
                .map(|vp| vp.price.as_str()),
            _ => None,
        }
    }

    /// Resolves the display price for a variant selection: the per-size or
    /// per-volume override when one exists, otherwise the base price. This is
    /// the price the product modal showed for the selection.
    #[must_use]
    pub fn price_for_selection(&self, size: Option<&str>, volume_ml: Option<u32>) -> &str {
        if let Some(size) = size
            && let Some(price) = self.price_for_size(size)
        {
            return price;
        }
        if let Some(volume_ml) = volume_ml
            && let Some(price) = self.price_for_volume(volume_ml)
        {
            return price;
        }
        &self.price
    }
}

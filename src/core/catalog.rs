//! Catalog store - Single source of truth for products and stock.
//!
//! This module owns the canonical list of categories and the products they
//! contain. All other components hold copies for display only and must
//! re-fetch live data here before trusting stock or price. Every mutation is
//! synchronous and refreshes the product's `updated_at` timestamp; the stock
//! counter never goes negative because decrements clamp at zero.

use crate::{
    entities::{Category, Product},
    errors::{Error, Result},
};
use tracing::{debug, warn};

/// Canonical owner of categories, products, and stock levels.
///
/// The store has no dependency on the cart; the cart reads live stock from
/// here before accepting its own mutations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogStore {
    categories: Vec<Category>,
}

impl CatalogStore {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Creates a catalog from an existing category list, e.g. a persisted
    /// snapshot or a seeded configuration.
    #[must_use]
    pub const fn with_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// All categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a product by id across all categories.
    ///
    /// The returned reference is a point-in-time view; callers that hold a
    /// copy across later mutations must re-fetch before trusting stock or
    /// price.
    #[must_use]
    pub fn product_by_id(&self, product_id: &str) -> Option<&Product> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|item| item.id == product_id)
    }

    /// Looks up a category by id.
    #[must_use]
    pub fn category_by_id(&self, category_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
    }

    /// Inserts a new product at the front of its category's item list and
    /// stamps `updated_at`.
    ///
    /// The admin form is responsible for field validation; this store only
    /// checks that the target category exists.
    ///
    /// # Errors
    /// Returns [`Error::CategoryNotFound`] if `product.category_id` does not
    /// resolve. The catalog is left unchanged in that case.
    pub fn add_product(&mut self, mut product: Product) -> Result<()> {
        let Some(category) = self
            .categories
            .iter_mut()
            .find(|category| category.id == product.category_id)
        else {
            return Err(Error::CategoryNotFound {
                id: product.category_id,
            });
        };

        product.updated_at = chrono::Utc::now();
        debug!(product_id = %product.id, category_id = %category.id, "adding product to catalog");
        category.items.insert(0, product);
        Ok(())
    }

    /// Replaces the stored product matching `product.id` and stamps
    /// `updated_at`. If the product's category changed, it is removed from
    /// its old category's item list and appended to the new one.
    ///
    /// # Errors
    /// Returns [`Error::ProductNotFound`] if no stored product has this id,
    /// or [`Error::CategoryNotFound`] if the product moved to a category
    /// that does not exist. The catalog is left unchanged on error.
    pub fn update_product(&mut self, mut product: Product) -> Result<()> {
        let Some(old_category_id) = self
            .categories
            .iter()
            .find(|category| category.items.iter().any(|item| item.id == product.id))
            .map(|category| category.id.clone())
        else {
            return Err(Error::ProductNotFound { id: product.id });
        };

        product.updated_at = chrono::Utc::now();

        if old_category_id == product.category_id {
            // In-place replacement keeps the product's display position.
            let category = self
                .categories
                .iter_mut()
                .find(|category| category.id == old_category_id)
                .ok_or_else(|| Error::CategoryNotFound {
                    id: old_category_id.clone(),
                })?;
            let slot = category
                .items
                .iter_mut()
                .find(|item| item.id == product.id)
                .ok_or_else(|| Error::ProductNotFound {
                    id: product.id.clone(),
                })?;
            debug!(product_id = %product.id, "updating product in place");
            *slot = product;
            return Ok(());
        }

        // Relocation: verify the target category before touching the old one.
        if self.category_by_id(&product.category_id).is_none() {
            return Err(Error::CategoryNotFound {
                id: product.category_id,
            });
        }
        debug!(
            product_id = %product.id,
            from = %old_category_id,
            to = %product.category_id,
            "relocating product to new category"
        );
        for category in &mut self.categories {
            category.items.retain(|item| item.id != product.id);
        }
        let target = self
            .categories
            .iter_mut()
            .find(|category| category.id == product.category_id)
            .ok_or_else(|| Error::CategoryNotFound {
                id: product.category_id.clone(),
            })?;
        target.items.push(product);
        Ok(())
    }

    /// Removes the product from whichever category currently contains it.
    /// Idempotent: deleting an unknown id leaves the catalog unchanged.
    pub fn delete_product(&mut self, product_id: &str) {
        let before: usize = self.categories.iter().map(|c| c.items.len()).sum();
        for category in &mut self.categories {
            category.items.retain(|item| item.id != product_id);
        }
        let after: usize = self.categories.iter().map(|c| c.items.len()).sum();
        if before == after {
            debug!(product_id, "delete requested for unknown product, no-op");
        } else {
            debug!(product_id, "deleted product from catalog");
        }
    }

    /// Reduces a product's stock by `amount`, clamped at zero, and stamps
    /// `updated_at`. Unknown product ids are a logged no-op.
    ///
    /// The variant parameters are accepted for interface parity with the
    /// cart but stock is tracked at the product level only - there are no
    /// per-size or per-volume stock pools.
    pub fn decrement_stock(
        &mut self,
        product_id: &str,
        amount: u32,
        selected_size: Option<&str>,
        selected_volume_ml: Option<u32>,
    ) {
        let Some(product) = self
            .categories
            .iter_mut()
            .flat_map(|category| category.items.iter_mut())
            .find(|item| item.id == product_id)
        else {
            warn!(product_id, "stock decrement for unknown product, no-op");
            return;
        };

        let old_stock = product.stock;
        product.stock = product.stock.saturating_sub(amount);
        product.updated_at = chrono::Utc::now();
        debug!(
            product_id,
            product_name = %product.name,
            old_stock,
            amount,
            new_stock = product.stock,
            ?selected_size,
            ?selected_volume_ml,
            "stock decremented"
        );
    }
}

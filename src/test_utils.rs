//! Shared test utilities for `sportflex-core`.
//!
//! This module provides common helper functions for building seeded catalogs
//! and test products with sensible defaults.

use crate::{
    core::catalog::CatalogStore,
    entities::{Category, CategoryKind, Product, SizePrice, VariantSpec, VolumePrice},
};
use tracing_subscriber::EnvFilter;

/// Installs a tracing subscriber for test output. Safe to call from every
/// test; repeated calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer() // Routes output through the test harness capture
        .try_init(); // Use try_init to avoid panic if already initialized
}

/// Creates a catalog seeded with the storefront's standard categories, all
/// with empty item lists.
///
/// Categories: `accesorios` (plain), `calzado` (sized), `ropa` (sized),
/// `perfumes` (volume).
#[must_use]
pub fn seeded_catalog() -> CatalogStore {
    let mut catalog = CatalogStore::with_categories(vec![
        Category::new("accesorios", "Accesorios", "", CategoryKind::Plain),
        Category::new("calzado", "Calzado", "", CategoryKind::Sized),
        Category::new("ropa", "Ropa", "", CategoryKind::Sized),
        Category::new("perfumes", "Perfumes", "", CategoryKind::Volume),
    ]);
    // One resident product per plain-ish category so lookups have neighbors.
    catalog
        .add_product(plain_product("acc1", "accesorios", 12))
        .unwrap_or_else(|_| unreachable!("seed categories exist"));
    catalog
        .add_product(sized_product("cal1", "calzado", 6, &["24 MX", "24.5 MX"]))
        .unwrap_or_else(|_| unreachable!("seed categories exist"));
    catalog
        .add_product(volume_product("per1", "perfumes", 4, &[100]))
        .unwrap_or_else(|_| unreachable!("seed categories exist"));
    catalog
}

fn base_product(id: &str, category_id: &str, stock: u32) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Test Product {id}"),
        description: "Test description".to_string(),
        sku: format!("SKU-{id}"),
        category_id: category_id.to_string(),
        price: "$100.00".to_string(),
        cost_price: 60.0,
        stock,
        updated_at: chrono::Utc::now(),
        variants: VariantSpec::Plain,
    }
}

/// Creates a test product with no variant dimension.
///
/// # Defaults
/// * price: `"$100.00"`
/// * `cost_price`: 60.0
#[must_use]
pub fn plain_product(id: &str, category_id: &str, stock: u32) -> Product {
    base_product(id, category_id, stock)
}

/// Creates a test product with size-based variants. The last size in
/// `sizes` carries a `"$110.00"` price override so variant pricing paths
/// have something to find.
#[must_use]
pub fn sized_product(id: &str, category_id: &str, stock: u32, sizes: &[&str]) -> Product {
    let mut product = base_product(id, category_id, stock);
    product.variants = VariantSpec::Sized {
        sizes: sizes.iter().map(|s| (*s).to_string()).collect(),
        size_prices: sizes
            .last()
            .map(|size| SizePrice {
                size: (*size).to_string(),
                price: "$110.00".to_string(),
            })
            .into_iter()
            .collect(),
    };
    product
}

/// Creates a test product with volume-based variants. The first volume in
/// `volumes_ml` carries a `"$90.00"` price override.
#[must_use]
pub fn volume_product(id: &str, category_id: &str, stock: u32, volumes_ml: &[u32]) -> Product {
    let mut product = base_product(id, category_id, stock);
    product.variants = VariantSpec::Volume {
        default_ml: volumes_ml.first().copied(),
        available_ml: volumes_ml.to_vec(),
        volume_prices: volumes_ml
            .first()
            .map(|volume_ml| VolumePrice {
                volume_ml: *volume_ml,
                price: "$90.00".to_string(),
            })
            .into_iter()
            .collect(),
    };
    product
}

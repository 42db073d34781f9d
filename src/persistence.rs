//! JSON snapshot persistence for the catalog and cart stores.
//!
//! Both stores persist as full JSON snapshots: the catalog as its category
//! list (each category containing its products), the cart as its line list.
//! Snapshots round-trip losslessly. Loading degrades gracefully - a missing
//! or unparsable file yields an empty store with a logged warning, never an
//! error to the caller, so a corrupt snapshot can never take the storefront
//! down. Collaborators save after every store mutation and load once on
//! startup.
//!
//! Snapshot locations default to local files and can be overridden through
//! the `CATALOG_STORE_PATH` and `CART_STORE_PATH` environment variables.

use crate::{
    core::{cart::CartStore, catalog::CatalogStore},
    entities::{CartLine, Category},
    errors::{Error, Result},
};
use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Resolves the catalog snapshot path from `CATALOG_STORE_PATH`, falling
/// back to a default local file.
#[must_use]
pub fn catalog_path() -> PathBuf {
    std::env::var("CATALOG_STORE_PATH")
        .map_or_else(|_| PathBuf::from("data/catalog.json"), PathBuf::from)
}

/// Resolves the cart snapshot path from `CART_STORE_PATH`, falling back to
/// a default local file.
#[must_use]
pub fn cart_path() -> PathBuf {
    std::env::var("CART_STORE_PATH")
        .map_or_else(|_| PathBuf::from("data/cart.json"), PathBuf::from)
}

fn save_snapshot<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|e| Error::Persistence {
        message: format!("Failed to serialize snapshot: {e}"),
    })?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Loads a snapshot, treating a missing or unparsable file as "no data".
fn load_snapshot<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read snapshot, starting empty");
            return None;
        }
    };
    match serde_json::from_str(&contents) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corrupt snapshot, starting empty");
            None
        }
    }
}

/// Writes the catalog's full category list to `path`.
///
/// # Errors
/// Returns an error if the snapshot cannot be serialized or written.
pub fn save_catalog(path: &Path, catalog: &CatalogStore) -> Result<()> {
    save_snapshot(path, &catalog.categories())
}

/// Restores a catalog from `path`. A missing or corrupt snapshot yields an
/// empty catalog.
#[must_use]
pub fn load_catalog(path: &Path) -> CatalogStore {
    let categories: Vec<Category> = load_snapshot(path).unwrap_or_default();
    CatalogStore::with_categories(categories)
}

/// Writes the cart's full line list to `path`.
///
/// # Errors
/// Returns an error if the snapshot cannot be serialized or written.
pub fn save_cart(path: &Path, cart: &CartStore) -> Result<()> {
    save_snapshot(path, &cart.lines())
}

/// Restores a cart from `path`. A missing or corrupt snapshot yields an
/// empty cart.
#[must_use]
pub fn load_cart(path: &Path) -> CartStore {
    let lines: Vec<CartLine> = load_snapshot(path).unwrap_or_default();
    CartStore::with_lines(lines)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{init_test_tracing, seeded_catalog, sized_product, volume_product};

    #[test]
    fn test_catalog_snapshot_round_trips_losslessly() {
        let mut catalog = seeded_catalog();
        catalog
            .add_product(sized_product("cal9", "calzado", 4, &["24 MX", "25 MX"]))
            .unwrap();
        catalog
            .add_product(volume_product("per9", "perfumes", 2, &[50, 100]))
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        save_catalog(&path, &catalog).unwrap();

        let restored = load_catalog(&path);
        assert_eq!(restored, catalog);
    }

    #[test]
    fn test_cart_snapshot_round_trips_losslessly() {
        let mut catalog = seeded_catalog();
        catalog
            .add_product(sized_product("cal9", "calzado", 4, &["24 MX"]))
            .unwrap();
        let mut cart = CartStore::new();
        cart.add_to_cart(&catalog, "cal9", 2, Some("24 MX"), None, None)
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        save_cart(&path, &cart).unwrap();

        let restored = load_cart(&path);
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_missing_snapshot_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog(&dir.path().join("does-not-exist.json"));
        assert!(catalog.categories().is_empty());

        let cart = load_cart(&dir.path().join("also-missing.json"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_corrupt_snapshot_starts_empty() {
        init_test_tracing();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{not json at all").unwrap();

        let catalog = load_catalog(&path);
        assert!(catalog.categories().is_empty());

        let cart = load_cart(&path);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/cart.json");
        save_cart(&path, &CartStore::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_restored_cart_merges_with_fresh_adds() {
        // The reload contract: persisted line identities keep merging.
        let mut catalog = seeded_catalog();
        catalog
            .add_product(volume_product("per9", "perfumes", 6, &[100]))
            .unwrap();
        let mut cart = CartStore::new();
        cart.add_to_cart(&catalog, "per9", 1, None, Some(100), None)
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        save_cart(&path, &cart).unwrap();

        let mut restored = load_cart(&path);
        restored
            .add_to_cart(&catalog, "per9", 2, None, Some(100), None)
            .unwrap();
        assert_eq!(restored.lines().len(), 1);
        assert_eq!(restored.lines()[0].quantity, 3);
    }
}

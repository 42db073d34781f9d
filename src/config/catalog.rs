//! Catalog seed configuration loading from config.toml
//!
//! This module loads the initial category set from a TOML configuration
//! file. Categories are created at catalog initialization and are in
//! practice static for the life of a session; each one declares which
//! variant axis its products use. The seeded catalog starts with empty item
//! lists - products are added through the admin surface.

use crate::{
    entities::{Category, CategoryKind},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of category configurations to seed
    pub categories: Vec<CategoryConfig>,
}

/// Configuration for a single category
#[derive(Debug, Deserialize, Clone)]
pub struct CategoryConfig {
    /// Stable category id (e.g. "calzado")
    pub id: String,
    /// Display name
    pub name: String,
    /// Display description
    #[serde(default)]
    pub description: String,
    /// Variant axis: "plain", "sized", or "volume"
    pub kind: CategoryKind,
}

impl Config {
    /// Builds the empty seeded category list this configuration describes.
    #[must_use]
    pub fn seed_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .map(|category| {
                Category::new(
                    category.id.clone(),
                    category.name.clone(),
                    category.description.clone(),
                    category.kind,
                )
            })
            .collect()
    }
}

/// Loads catalog configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads catalog configuration from the default location (./config.toml)
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

/// Catalog seed configuration loading from config.toml
pub mod catalog;

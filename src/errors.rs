//! Unified error types for the catalog and cart stores.
//!
//! All store operations are synchronous and report failures to the immediate
//! caller; nothing here is fatal to the process. Read operations signal
//! absence with `Option`, and idempotent mutations (`delete_product`,
//! `remove_from_cart`) are no-ops rather than errors, so the variants below
//! cover genuine rejections only.

use crate::core::checkout::StockShortfall;
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// A category id did not resolve to a known category.
    #[error("Category not found: {id}")]
    CategoryNotFound {
        /// The category id that failed to resolve
        id: String,
    },

    /// A product id did not resolve to a known product.
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The product id that failed to resolve
        id: String,
    },

    /// A cart mutation asked for more units than the live stock allows.
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        /// The product whose stock was exceeded
        product_id: String,
        /// Total quantity the cart would have held after the mutation
        requested: u32,
        /// Live stock at the time of the check
        available: u32,
    },

    /// A cart mutation was given a quantity of zero.
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: u32,
    },

    /// A price string could not be parsed as a currency amount.
    #[error("Invalid price string: {raw:?}")]
    InvalidPrice {
        /// The string that failed to parse
        raw: String,
    },

    /// Checkout validation failed; no stock was decremented and the cart is
    /// intact. Carries one entry per failing cart line.
    #[error("Order commit rejected: {} line(s) exceed available stock", shortfalls.len())]
    CommitRejected {
        /// The cart lines that failed stock validation
        shortfalls: Vec<StockShortfall>,
    },

    /// I/O error while writing a persistence snapshot.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persistence snapshot could not be serialized.
    #[error("Persistence error: {message}")]
    Persistence {
        /// Human-readable description of what went wrong
        message: String,
    },
}

/// Convenience `Result` type.
pub type Result<T> = std::result::Result<T, Error>;

//! Core business logic for the storefront stores.
//!
//! The catalog store is the single source of truth for product existence and
//! stock; the cart store validates every mutation against it. The dependency
//! is one-directional: the cart reads the catalog, never the reverse. Both
//! stores are explicit handles passed to their consumers, so exclusive access
//! for mutation is enforced by the borrow checker.

/// Cart store - the shopper's pending selection
pub mod cart;
/// Catalog store - canonical product and stock state
pub mod catalog;
/// Order commit protocol - validate, decrement, clear
pub mod checkout;
/// Currency string parsing and formatting
pub mod price;

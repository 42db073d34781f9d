//! Domain entity definitions for the storefront.
//!
//! Entities are plain serde-derived data types. Ownership rules: the catalog
//! store owns [`Category`] and [`Product`] exclusively; the cart store owns
//! [`CartLine`]; everything else holds point-in-time copies for display and
//! must re-fetch live data before trusting stock or price.

/// Cart line and its composite identity key
pub mod cart;
/// Category - named product grouping that fixes the variant axis
pub mod category;
/// Order snapshots produced after checkout
pub mod order;
/// Product - a sellable catalog entry
pub mod product;

pub use cart::{CartLine, CartLineKey};
pub use category::{Category, CategoryKind};
pub use order::{Order, OrderLine, OrderStatus};
pub use product::{Product, SizePrice, VariantSpec, VolumePrice};

//! Cart line entity and its composite identity key.
//!
//! A cart line represents a quantity of one product at one specific variant
//! selection. Line identity is a structured composite key over the product id
//! plus the optional size and volume selection, so two additions of the same
//! selection always merge into one line and a product id that happens to
//! contain a delimiter-looking substring can never collide with a real
//! variant boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiter used in the string rendering of a key. U+001F (unit separator)
/// does not occur in product ids or size labels.
const KEY_DELIMITER: char = '\u{1f}';

/// Deterministic, collision-free identity of a cart line: the product id
/// plus the variant selection. Equal keys mean "same line"; the key is
/// stable across calls and across persisted sessions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartLineKey {
    /// Id of the referenced product
    pub product_id: String,
    /// Selected size label, for sized products
    pub size: Option<String>,
    /// Selected volume in millilitres, for volume products
    pub volume_ml: Option<u32>,
}

impl CartLineKey {
    /// Resolves the cart line identity for a product id and variant
    /// selection. Pure and deterministic.
    pub fn resolve(
        product_id: impl Into<String>,
        size: Option<&str>,
        volume_ml: Option<u32>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            size: size.map(str::to_string),
            volume_ml,
        }
    }
}

impl fmt::Display for CartLineKey {
    /// Renders the key as a delimited string: the bare product id when no
    /// variant is selected, otherwise the id followed by the selection
    /// components separated by U+001F.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.product_id)?;
        if let Some(size) = &self.size {
            write!(f, "{KEY_DELIMITER}size={size}")?;
        }
        if let Some(volume_ml) = self.volume_ml {
            write!(f, "{KEY_DELIMITER}vol={volume_ml}")?;
        }
        Ok(())
    }
}

/// One (product, variant-selection) pairing with a quantity inside the
/// shopper's pending cart. The cart does not own the product; it holds the
/// key for stock cross-checks plus denormalized display fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Composite identity of this line
    pub key: CartLineKey,
    /// Product name at the time of the first add, for display
    pub product_name: String,
    /// Price snapshotted at the moment of the first add to this line,
    /// currency-formatted; not re-derived from the product afterwards
    pub selected_price: String,
    /// Units of this selection in the cart; always positive - a line that
    /// reaches zero is removed, never persisted
    pub quantity: u32,
}

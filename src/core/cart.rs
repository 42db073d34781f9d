//! Cart store - The shopper's pending selection.
//!
//! Every mutation re-fetches live product state from the catalog store
//! before it is accepted, so no line's quantity can ever exceed the stock
//! known to the catalog at the time of the check. Prices are snapshotted on
//! the first add to a line and stay stable for the shopper's session; only
//! an explicit price override replaces the snapshot on a merge.
//!
//! The persistence contract is: collaborators serialize the full line list
//! (see [`crate::persistence`]) after every mutation and restore it with
//! [`CartStore::with_lines`] on startup, so line identities keep merging
//! correctly across reloads.

use crate::{
    core::{catalog::CatalogStore, price},
    entities::{CartLine, CartLineKey},
    errors::{Error, Result},
};
use tracing::{debug, warn};

/// Result of a [`CartStore::set_quantity`] call.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub enum SetQuantityOutcome {
    /// The requested quantity was within live stock and was applied.
    Applied,
    /// The request exceeded live stock; the line was kept at the maximum
    /// satisfiable quantity instead. Callers surface this as a stock
    /// warning. `available` of zero means the line was removed.
    Clamped {
        /// Live stock at the time of the check
        available: u32,
    },
    /// The quantity was zero, so the line was removed.
    Removed,
    /// No line with the given key exists; nothing changed.
    Missing,
}

/// The pending cart: an ordered list of lines, each a quantity of one
/// product at one variant selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Restores a cart from a persisted line list.
    #[must_use]
    pub const fn with_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds `quantity` units of a product at the given variant selection.
    ///
    /// The product is re-fetched from the catalog so the check runs against
    /// live stock, never a stale copy. If a line with the same identity
    /// already exists the quantities merge into one line; merging never
    /// partially fulfills - a merge that would exceed live stock is rejected
    /// and the existing line is left unchanged.
    ///
    /// The line's price snapshot is `price_override` when supplied (the
    /// product modal passes the displayed variant price), otherwise the
    /// catalog price for the selection. On a merge the snapshot is replaced
    /// only by an explicit override.
    ///
    /// # Errors
    /// - [`Error::InvalidQuantity`] if `quantity` is zero.
    /// - [`Error::ProductNotFound`] if the product is no longer in the catalog.
    /// - [`Error::InsufficientStock`] if live stock cannot cover the
    ///   resulting line quantity. The cart is unchanged.
    pub fn add_to_cart(
        &mut self,
        catalog: &CatalogStore,
        product_id: &str,
        quantity: u32,
        selected_size: Option<&str>,
        selected_volume_ml: Option<u32>,
        price_override: Option<&str>,
    ) -> Result<()> {
        if quantity == 0 {
            return Err(Error::InvalidQuantity { quantity });
        }

        let live = catalog
            .product_by_id(product_id)
            .ok_or_else(|| Error::ProductNotFound {
                id: product_id.to_string(),
            })?;
        if live.stock < quantity {
            return Err(Error::InsufficientStock {
                product_id: product_id.to_string(),
                requested: quantity,
                available: live.stock,
            });
        }

        let key = CartLineKey::resolve(product_id, selected_size, selected_volume_ml);

        if let Some(existing) = self.lines.iter_mut().find(|line| line.key == key) {
            // A sum that overflows u32 exceeds any possible stock level, so
            // it is rejected the same way as an ordinary shortfall.
            let requested = existing.quantity.saturating_add(quantity);
            let Some(new_quantity) = existing
                .quantity
                .checked_add(quantity)
                .filter(|&total| total <= live.stock)
            else {
                return Err(Error::InsufficientStock {
                    product_id: product_id.to_string(),
                    requested,
                    available: live.stock,
                });
            };
            existing.quantity = new_quantity;
            if let Some(price) = price_override {
                existing.selected_price = price.to_string();
            }
            debug!(key = %key, quantity = new_quantity, "merged into existing cart line");
            return Ok(());
        }

        let selected_price = price_override
            .unwrap_or_else(|| live.price_for_selection(selected_size, selected_volume_ml))
            .to_string();
        debug!(key = %key, quantity, %selected_price, "added new cart line");
        self.lines.push(CartLine {
            key,
            product_name: live.name.clone(),
            selected_price,
            quantity,
        });
        Ok(())
    }

    /// Deletes the line with the given identity. No-op if absent.
    pub fn remove_from_cart(&mut self, key: &CartLineKey) {
        let before = self.lines.len();
        self.lines.retain(|line| &line.key != key);
        if self.lines.len() < before {
            debug!(key = %key, "removed cart line");
        }
    }

    /// Sets a line's quantity, clamping to live stock instead of rejecting.
    ///
    /// A quantity of zero removes the line. If the requested quantity
    /// exceeds live stock the line is kept at the maximum satisfiable
    /// quantity and [`SetQuantityOutcome::Clamped`] reports the stock that
    /// was available; a product that has vanished from the catalog counts
    /// as zero available, which removes the line.
    pub fn set_quantity(
        &mut self,
        catalog: &CatalogStore,
        key: &CartLineKey,
        quantity: u32,
    ) -> SetQuantityOutcome {
        if !self.lines.iter().any(|line| &line.key == key) {
            return SetQuantityOutcome::Missing;
        }
        if quantity == 0 {
            self.remove_from_cart(key);
            return SetQuantityOutcome::Removed;
        }

        let available = catalog
            .product_by_id(&key.product_id)
            .map_or_else(
                || {
                    warn!(key = %key, "cart line references a product no longer in the catalog");
                    0
                },
                |live| live.stock,
            );

        if available == 0 {
            self.remove_from_cart(key);
            return SetQuantityOutcome::Clamped { available: 0 };
        }

        // Line presence was checked above.
        if let Some(line) = self.lines.iter_mut().find(|line| &line.key == key) {
            if quantity > available {
                line.quantity = available;
                debug!(key = %key, requested = quantity, available, "quantity clamped to live stock");
                return SetQuantityOutcome::Clamped { available };
            }
            line.quantity = quantity;
            debug!(key = %key, quantity, "quantity updated");
        }
        SetQuantityOutcome::Applied
    }

    /// Empties the cart unconditionally. No stock side effects.
    pub fn clear(&mut self) {
        debug!(lines = self.lines.len(), "clearing cart");
        self.lines.clear();
    }

    /// Cart total as a plain number: the sum of each line's snapshotted
    /// price times its quantity. A line whose price snapshot fails to parse
    /// contributes nothing and is logged.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| match price::parse_price(&line.selected_price) {
                Ok(unit) => unit * f64::from(line.quantity),
                Err(_) => {
                    warn!(key = %line.key, price = %line.selected_price, "unparsable price snapshot, counting as zero");
                    0.0
                }
            })
            .sum()
    }

    /// Cart total as a display string: two decimal places with a `$`
    /// prefix and no thousands separator, e.g. `"$3900.00"`.
    #[must_use]
    pub fn total(&self) -> String {
        price::format_price(self.total_amount())
    }

    /// Total number of units across all lines, saturating at `u32::MAX`.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Commits the cart through the order commit protocol: validate against
    /// live stock, decrement per line, clear. This is the only cart
    /// operation that also mutates the catalog store. See
    /// [`crate::core::checkout::commit_order`].
    ///
    /// # Errors
    /// Returns [`Error::CommitRejected`] if any line fails stock validation;
    /// both stores are left untouched in that case.
    pub fn commit_order(
        &mut self,
        catalog: &mut CatalogStore,
    ) -> Result<crate::core::checkout::CommitReceipt> {
        crate::core::checkout::commit_order(self, catalog)
    }
}

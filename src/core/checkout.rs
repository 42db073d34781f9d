//! Order commit protocol - Validate the cart, decrement stock, clear.
//!
//! The commit runs in two phases. Validating re-checks every cart line
//! against live stock at commit time (never against a read taken when the
//! checkout page loaded); one failing line aborts the whole commit with the
//! stores untouched and the cart intact, so the shopper can reduce
//! quantities and retry. Only when every line passes does the commit phase
//! decrement stock line by line and then empty the cart in one step. The
//! decrement loop itself has no failure mode because decrements clamp at
//! zero.

use crate::{
    core::{cart::CartStore, catalog::CatalogStore},
    entities::{CartLineKey, Order, OrderLine, OrderStatus},
    errors::{Error, Result},
};
use tracing::{debug, info};

/// One cart line that failed stock validation at commit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StockShortfall {
    /// Identity of the failing line
    pub key: CartLineKey,
    /// Display name of the product, for the rejection message
    pub product_name: String,
    /// Quantity the line holds
    pub requested: u32,
    /// Live stock at validation time; zero if the product vanished from the
    /// catalog entirely
    pub available: u32,
}

/// The output contract of a successful commit: what was purchased, at what
/// prices, and the total. The protocol itself does not create an order
/// record - order history is admin-managed - but [`CommitReceipt::into_order`]
/// lets the checkout flow materialize one.
#[derive(Clone, Debug, PartialEq)]
pub struct CommitReceipt {
    /// Snapshots of the purchased lines, in cart order
    pub lines: Vec<OrderLine>,
    /// Sum of snapshotted prices times quantities
    pub total: f64,
}

impl CommitReceipt {
    /// Builds an order record from this receipt, dated now and awaiting
    /// shipment.
    #[must_use]
    pub fn into_order(self, order_id: impl Into<String>, customer_name: impl Into<String>) -> Order {
        Order {
            id: order_id.into(),
            order_date: chrono::Utc::now(),
            customer_name: customer_name.into(),
            items: self.lines,
            status: OrderStatus::AwaitingShipment,
            total_amount: self.total,
        }
    }
}

/// Commits the cart: validates every line against live stock, decrements
/// stock per line, then empties the cart.
///
/// An empty cart commits trivially to an empty receipt.
///
/// # Errors
/// Returns [`Error::CommitRejected`] listing every line whose quantity
/// exceeds live stock. No stock is decremented and the cart is unchanged in
/// that case.
pub fn commit_order(cart: &mut CartStore, catalog: &mut CatalogStore) -> Result<CommitReceipt> {
    // Validating: all lines checked before any stock moves.
    let shortfalls: Vec<StockShortfall> = cart
        .lines()
        .iter()
        .filter_map(|line| {
            let available = catalog
                .product_by_id(&line.key.product_id)
                .map_or(0, |live| live.stock);
            (line.quantity > available).then(|| StockShortfall {
                key: line.key.clone(),
                product_name: line.product_name.clone(),
                requested: line.quantity,
                available,
            })
        })
        .collect();
    if !shortfalls.is_empty() {
        debug!(failing_lines = shortfalls.len(), "commit rejected during validation");
        return Err(Error::CommitRejected { shortfalls });
    }

    // Committed: decrement line by line, then clear the cart in one step.
    let lines: Vec<OrderLine> = cart
        .lines()
        .iter()
        .map(|line| {
            catalog.decrement_stock(
                &line.key.product_id,
                line.quantity,
                line.key.size.as_deref(),
                line.key.volume_ml,
            );
            OrderLine {
                product_id: line.key.product_id.clone(),
                product_name: line.product_name.clone(),
                quantity: line.quantity,
                price_at_purchase: line.selected_price.clone(),
                selected_size: line.key.size.clone(),
                selected_volume_ml: line.key.volume_ml,
            }
        })
        .collect();
    let total = cart.total_amount();
    cart.clear();

    info!(lines = lines.len(), total, "order committed");
    Ok(CommitReceipt { lines, total })
}

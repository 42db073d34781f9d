//! Order snapshots - the immutable record of what was purchased.
//!
//! Orders are not created automatically by the checkout protocol; order
//! history is managed by the admin back office. The shapes here define the
//! output contract of a successful commit: a list of line snapshots with the
//! price frozen at purchase time, a status, and a total.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fulfilment status of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Payment not yet received
    AwaitingPayment,
    /// Paid, not yet shipped
    AwaitingShipment,
    /// Handed to the carrier
    Shipped,
    /// Received by the customer
    Delivered,
    /// Cancelled before fulfilment
    Cancelled,
}

/// Snapshot of one purchased line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Id of the purchased product
    pub product_id: String,
    /// Product name at purchase time
    pub product_name: String,
    /// Units purchased
    pub quantity: u32,
    /// Per-unit price at purchase time, currency-formatted (e.g. "$50.00")
    pub price_at_purchase: String,
    /// Size label, if a sized variant was selected
    pub selected_size: Option<String>,
    /// Volume in millilitres, if a volume variant was selected
    pub selected_volume_ml: Option<u32>,
}

/// An immutable purchase record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order id (e.g. "6578-4753")
    pub id: String,
    /// When the order was placed
    pub order_date: DateTime<Utc>,
    /// Name of the purchasing customer
    pub customer_name: String,
    /// Purchased lines in cart order
    pub items: Vec<OrderLine>,
    /// Current fulfilment status
    pub status: OrderStatus,
    /// Order total as a plain number
    pub total_amount: f64,
}

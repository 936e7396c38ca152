//! Order Model
//!
//! Cart line and checkout payload types. Totals are never stored on the
//! cart independently of the lines; see the storefront cart module for the
//! recompute chokepoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One menu item plus its requested quantity within the in-progress order
///
/// Invariant: a cart holds at most one line per `item_id`; adding an
/// existing item increments the quantity instead of duplicating the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    /// Unit price, non-negative
    pub unit_price: f64,
    /// Requested quantity, >= 1
    pub quantity: i32,
}

/// Derived cart totals
///
/// Always recomputed from the line data; never mutated incrementally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of quantities over all lines
    pub total_items: i32,
    /// Sum of unit_price * quantity over all lines
    pub total_amount: f64,
}

/// Delivery address
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip_code: String,
}

/// Customer contact and delivery details collected at checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Delivered,
    Cancelled,
}

/// Order submission payload (checkout)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer: CustomerInfo,
    pub items: Vec<CartLine>,
    pub subtotal: f64,
    pub tax: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

/// Placed order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// User-facing receipt number, e.g. "ORD-483920"
    pub order_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub customer: CustomerInfo,
    pub items: Vec<CartLine>,
    pub subtotal: f64,
    pub tax: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
}

/// Update order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub special_instructions: Option<String>,
}

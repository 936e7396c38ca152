//! Checkout flow
//!
//! Prices the cart (8% tax, flat 5.00 delivery fee), validates the
//! customer details, and submits the order payload to the order
//! collaborator. The cart is cleared only after the collaborator accepts
//! the order; any failure leaves it untouched so the user can retry.


use crate::cart::{CartStore, money};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CustomerInfo, Order, OrderCreate};
use validator::ValidateEmail;

/// Priced cart breakdown shown on the checkout summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummary {
    pub subtotal: f64,
    pub tax: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

/// Boundary to the order collaborator
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn place(&self, order: OrderCreate) -> AppResult<Order>;
}

/// Price the current cart
///
/// Rejected with [`ErrorCode::CartEmpty`] when there are zero lines; an
/// empty cart cannot check out, so the delivery fee never applies to one.
pub fn quote(cart: &CartStore) -> AppResult<PricingSummary> {
    if cart.is_empty() {
        return Err(AppError::new(ErrorCode::CartEmpty));
    }

    let subtotal = money::subtotal(cart.lines());
    let tax = money::round_money(subtotal * money::TAX_RATE);
    let delivery_fee = money::DELIVERY_FEE;
    let total = money::round_money(subtotal + tax + delivery_fee);

    Ok(PricingSummary {
        subtotal: money::money_to_f64(subtotal),
        tax: money::money_to_f64(tax),
        delivery_fee: money::money_to_f64(delivery_fee),
        total: money::money_to_f64(total),
    })
}

/// Validate the customer details collected by the checkout form
///
/// Name, email, phone and street address must be present; the email must
/// be well-formed. City and zip code are optional, as on the form.
pub fn validate_customer(customer: &CustomerInfo) -> AppResult<()> {
    let mut missing: Vec<&str> = Vec::new();
    if customer.name.trim().is_empty() {
        missing.push("name");
    }
    if customer.email.trim().is_empty() {
        missing.push("email");
    }
    if customer.phone.trim().is_empty() {
        missing.push("phone");
    }
    if customer.address.street.trim().is_empty() {
        missing.push("address");
    }
    if !missing.is_empty() {
        let mut err = AppError::new(ErrorCode::CustomerInfoIncomplete);
        for field in missing {
            err = err.with_detail(field, "required");
        }
        return Err(err);
    }
    if !customer.email.validate_email() {
        return Err(
            AppError::with_message(ErrorCode::CustomerInfoIncomplete, "Invalid email address")
                .with_detail("email", "format"),
        );
    }
    Ok(())
}

/// Submit the in-progress order
///
/// Validation runs before any collaborator call; no partial mutation
/// occurs on rejection. On success the cart is cleared and the placed
/// order (with its generated `orderNumber`) is returned. On collaborator
/// failure the cart is preserved for retry.
pub async fn place_order<G: OrderGateway>(
    cart: &mut CartStore,
    customer: CustomerInfo,
    payment_method: impl Into<String>,
    special_instructions: Option<String>,
    gateway: &G,
) -> AppResult<Order> {
    let pricing = quote(cart)?;
    validate_customer(&customer)?;

    let payload = OrderCreate {
        customer,
        items: cart.lines().to_vec(),
        subtotal: pricing.subtotal,
        tax: pricing.tax,
        delivery_fee: pricing.delivery_fee,
        total: pricing.total,
        payment_method: payment_method.into(),
        special_instructions,
    };

    let order = gateway.place(payload).await.inspect_err(|err| {
        tracing::warn!(code = %err.code, "order submission failed: {}", err.message);
    })?;

    tracing::info!(order_number = %order.order_number, total = order.total, "order placed");
    cart.clear();
    Ok(order)
}

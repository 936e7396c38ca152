//! Data models
//!
//! Shared between the storefront flows and the mock data collaborators.
//! All records serialize camelCase so they match the bundled fixture shape.
//! IDs are millisecond-snowflake strings generated on create.

pub mod menu_item;
pub mod order;
pub mod reservation;
pub mod review;

// Re-exports
pub use menu_item::*;
pub use order::*;
pub use reservation::*;
pub use review::*;

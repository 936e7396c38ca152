//! Mock data collaborators
//!
//! Local modules that simulate network latency and mutate in-memory
//! records seeded from bundled fixtures. The flows treat them as a
//! boundary: every call is awaited, failures surface to the user, and
//! nothing assumes synchronous completion.

pub mod menu_service;
pub mod order_service;
pub mod repository;
pub mod reservation_service;
pub mod review_service;

#[cfg(test)]
mod tests;

pub use menu_service::MenuService;
pub use order_service::OrderService;
pub use repository::{Entity, InMemoryRepository, LatencyProfile};
pub use reservation_service::ReservationService;
pub use review_service::ReviewService;

/// The full collaborator set, seeded from the bundled fixtures
pub struct Services {
    pub menu: MenuService,
    pub reservations: ReservationService,
    pub reviews: ReviewService,
    pub orders: OrderService,
}

impl Services {
    /// Seed every collaborator; latency per the configuration flag
    pub fn seeded(simulate_latency: bool) -> Self {
        let services = Self {
            menu: MenuService::seeded(simulate_latency),
            reservations: ReservationService::seeded(simulate_latency),
            reviews: ReviewService::seeded(simulate_latency),
            orders: OrderService::seeded(simulate_latency),
        };
        tracing::info!(simulate_latency, "collaborators seeded from fixtures");
        services
    }
}

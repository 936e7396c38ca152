//! Order collaborator
//!
//! CRUD over the fixture-seeded orders. `create` stamps the generated
//! id, the user-facing order number, pending status and the delivery
//! estimate; checkout reaches this service through [`OrderGateway`].

use super::repository::{Entity, InMemoryRepository, LatencyProfile};
use crate::checkout::OrderGateway;
use crate::fixtures;
use async_trait::async_trait;
use chrono::Duration;
use shared::error::{AppResult, ErrorCode};
use shared::models::{Order, OrderCreate, OrderStatus, OrderUpdate};
use shared::util::{now_millis, record_id};

impl Entity for Order {
    const RESOURCE: &'static str = "Order";
    const NOT_FOUND: ErrorCode = ErrorCode::OrderNotFound;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Simulated latency per operation, in milliseconds
const LATENCY: LatencyProfile = LatencyProfile {
    get_all: 300,
    get_by_id: 200,
    create: 500,
    update: 350,
    delete: 300,
};

/// Delivery estimate stamped on new orders
const ESTIMATED_DELIVERY_MINUTES: i64 = 30;

/// User-facing receipt number, e.g. "ORD-483920"
fn order_number() -> String {
    let millis = now_millis().to_string();
    let suffix = &millis[millis.len().saturating_sub(6)..];
    format!("ORD-{}", suffix)
}

pub struct OrderService {
    repo: InMemoryRepository<Order>,
}

impl OrderService {
    /// Service seeded from the bundled fixture
    pub fn seeded(simulate_latency: bool) -> Self {
        Self::with_orders(
            fixtures::orders(),
            if simulate_latency { LATENCY } else { LatencyProfile::none() },
        )
    }

    /// Service over explicit records (test isolation)
    pub fn with_orders(records: Vec<Order>, latency: LatencyProfile) -> Self {
        Self {
            repo: InMemoryRepository::seeded(records, latency),
        }
    }

    pub async fn get_all(&self) -> AppResult<Vec<Order>> {
        self.repo.get_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Order> {
        self.repo.get_by_id(id).await
    }

    pub async fn create(&self, payload: OrderCreate) -> AppResult<Order> {
        let created_at = chrono::Utc::now();
        let order = Order {
            id: record_id(),
            order_number: order_number(),
            status: OrderStatus::Pending,
            customer: payload.customer,
            items: payload.items,
            subtotal: payload.subtotal,
            tax: payload.tax,
            delivery_fee: payload.delivery_fee,
            total: payload.total,
            payment_method: payload.payment_method,
            special_instructions: payload.special_instructions,
            created_at,
            estimated_delivery: created_at + Duration::minutes(ESTIMATED_DELIVERY_MINUTES),
        };
        tracing::debug!(
            id = %order.id,
            order_number = %order.order_number,
            total = order.total,
            "order created"
        );
        self.repo.insert(order).await
    }

    pub async fn update(&self, id: &str, patch: OrderUpdate) -> AppResult<Order> {
        self.repo
            .update_with(id, |o| {
                if let Some(status) = patch.status {
                    o.status = status;
                }
                if let Some(special_instructions) = patch.special_instructions {
                    o.special_instructions = Some(special_instructions);
                }
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repo.delete(id).await
    }
}

#[async_trait]
impl OrderGateway for OrderService {
    async fn place(&self, order: OrderCreate) -> AppResult<Order> {
        self.create(order).await
    }
}

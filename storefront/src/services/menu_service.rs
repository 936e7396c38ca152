//! Menu collaborator
//!
//! CRUD over the fixture-seeded menu items plus category lookup. The
//! browsing flows treat the records as read-only; only create/update
//! calls here mutate them.

use super::repository::{Entity, InMemoryRepository, LatencyProfile, simulate};
use crate::fixtures;
use shared::error::{AppResult, ErrorCode};
use shared::models::{MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::util::record_id;

impl Entity for MenuItem {
    const RESOURCE: &'static str = "Menu item";
    const NOT_FOUND: ErrorCode = ErrorCode::MenuItemNotFound;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Simulated latency per operation, in milliseconds
const LATENCY: LatencyProfile = LatencyProfile {
    get_all: 300,
    get_by_id: 200,
    create: 400,
    update: 350,
    delete: 300,
};
const BY_CATEGORY_MS: u64 = 250;

pub struct MenuService {
    repo: InMemoryRepository<MenuItem>,
}

impl MenuService {
    /// Service seeded from the bundled fixture
    pub fn seeded(simulate_latency: bool) -> Self {
        Self::with_items(
            fixtures::menu_items(),
            if simulate_latency { LATENCY } else { LatencyProfile::none() },
        )
    }

    /// Service over explicit records (test isolation)
    pub fn with_items(items: Vec<MenuItem>, latency: LatencyProfile) -> Self {
        Self {
            repo: InMemoryRepository::seeded(items, latency),
        }
    }

    pub async fn get_all(&self) -> AppResult<Vec<MenuItem>> {
        self.repo.get_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<MenuItem> {
        self.repo.get_by_id(id).await
    }

    pub async fn get_by_category(&self, category: MenuCategory) -> AppResult<Vec<MenuItem>> {
        simulate(BY_CATEGORY_MS).await;
        let items = self.repo.get_all().await?;
        Ok(items.into_iter().filter(|i| i.category == category).collect())
    }

    pub async fn create(&self, payload: MenuItemCreate) -> AppResult<MenuItem> {
        let item = MenuItem {
            id: record_id(),
            name: payload.name,
            category: payload.category,
            price: payload.price,
            description: payload.description,
            image_url: payload.image_url,
            dietary: payload.dietary,
        };
        tracing::debug!(id = %item.id, name = %item.name, "menu item created");
        self.repo.insert(item).await
    }

    pub async fn update(&self, id: &str, patch: MenuItemUpdate) -> AppResult<MenuItem> {
        self.repo
            .update_with(id, |item| {
                if let Some(name) = patch.name {
                    item.name = name;
                }
                if let Some(category) = patch.category {
                    item.category = category;
                }
                if let Some(price) = patch.price {
                    item.price = price;
                }
                if let Some(description) = patch.description {
                    item.description = description;
                }
                if let Some(image_url) = patch.image_url {
                    item.image_url = image_url;
                }
                if let Some(dietary) = patch.dietary {
                    item.dietary = dietary;
                }
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repo.delete(id).await
    }
}

//! Generic in-memory repository backing the mock data collaborators
//!
//! Explicit repository objects with injected storage instead of
//! module-level mutable globals, so tests run in isolation without
//! cross-test contamination. Every operation is asynchronous and sleeps
//! for its configured latency to emulate network behavior; nothing
//! persists beyond the process lifetime.

use parking_lot::RwLock;
use shared::error::{AppError, AppResult, ErrorCode};
use std::time::Duration;

/// Record stored by a repository
pub trait Entity: Clone + Send + Sync {
    /// Resource name used in error messages, e.g. "Menu item"
    const RESOURCE: &'static str;
    /// Domain-specific code raised on id lookup misses
    const NOT_FOUND: ErrorCode;

    fn id(&self) -> &str;
}

/// Artificial per-operation delays, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub get_all: u64,
    pub get_by_id: u64,
    pub create: u64,
    pub update: u64,
    pub delete: u64,
}

impl LatencyProfile {
    /// No delays; used by tests and when `simulate_latency` is off
    pub const fn none() -> Self {
        Self {
            get_all: 0,
            get_by_id: 0,
            create: 0,
            update: 0,
            delete: 0,
        }
    }
}

/// Sleep for the given simulated latency
pub async fn simulate(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// In-memory record store with simulated latency
///
/// The single owner of its record vector; flows only reach the data
/// through the async operations below.
pub struct InMemoryRepository<T: Entity> {
    records: RwLock<Vec<T>>,
    latency: LatencyProfile,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create a repository seeded with the given records
    pub fn seeded(records: Vec<T>, latency: LatencyProfile) -> Self {
        Self {
            records: RwLock::new(records),
            latency,
        }
    }

    fn not_found(id: &str) -> AppError {
        AppError::with_message(T::NOT_FOUND, format!("{} not found: {}", T::RESOURCE, id))
            .with_detail("resource", T::RESOURCE)
            .with_detail("id", id)
    }

    /// Copy of every record
    pub async fn get_all(&self) -> AppResult<Vec<T>> {
        simulate(self.latency.get_all).await;
        Ok(self.records.read().clone())
    }

    /// Copy of the record with the given id
    pub async fn get_by_id(&self, id: &str) -> AppResult<T> {
        simulate(self.latency.get_by_id).await;
        self.records
            .read()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    /// Append a record (id already generated by the calling service)
    pub async fn insert(&self, record: T) -> AppResult<T> {
        simulate(self.latency.create).await;
        self.records.write().push(record.clone());
        Ok(record)
    }

    /// Prepend a record (newest-first collections)
    pub async fn insert_front(&self, record: T) -> AppResult<T> {
        simulate(self.latency.create).await;
        self.records.write().insert(0, record.clone());
        Ok(record)
    }

    /// Apply a merge closure to the record with the given id
    pub async fn update_with(&self, id: &str, apply: impl FnOnce(&mut T) + Send) -> AppResult<T> {
        simulate(self.latency.update).await;
        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        apply(record);
        Ok(record.clone())
    }

    /// Remove the record with the given id
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        simulate(self.latency.delete).await;
        let mut records = self.records.write();
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        records.remove(index);
        Ok(())
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

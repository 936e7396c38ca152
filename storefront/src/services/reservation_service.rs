//! Reservation collaborator
//!
//! CRUD over the fixture-seeded reservations plus the offered time slot
//! lookup. `create` stamps the generated id, pending status and creation
//! time; the wizard reaches this service through [`ReservationGateway`].

use super::repository::{Entity, InMemoryRepository, LatencyProfile, simulate};
use crate::fixtures;
use crate::reservation::ReservationGateway;
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::{AppResult, ErrorCode};
use shared::models::{
    Reservation, ReservationCreate, ReservationStatus, ReservationUpdate, TimeSlot,
};
use shared::util::record_id;

impl Entity for Reservation {
    const RESOURCE: &'static str = "Reservation";
    const NOT_FOUND: ErrorCode = ErrorCode::ReservationNotFound;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Simulated latency per operation, in milliseconds
const LATENCY: LatencyProfile = LatencyProfile {
    get_all: 300,
    get_by_id: 200,
    create: 500,
    update: 400,
    delete: 300,
};
const TIME_SLOTS_MS: u64 = 200;

pub struct ReservationService {
    repo: InMemoryRepository<Reservation>,
}

impl ReservationService {
    /// Service seeded from the bundled fixture
    pub fn seeded(simulate_latency: bool) -> Self {
        Self::with_reservations(
            fixtures::reservations(),
            if simulate_latency { LATENCY } else { LatencyProfile::none() },
        )
    }

    /// Service over explicit records (test isolation)
    pub fn with_reservations(records: Vec<Reservation>, latency: LatencyProfile) -> Self {
        Self {
            repo: InMemoryRepository::seeded(records, latency),
        }
    }

    pub async fn get_all(&self) -> AppResult<Vec<Reservation>> {
        self.repo.get_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Reservation> {
        self.repo.get_by_id(id).await
    }

    pub async fn create(&self, payload: ReservationCreate) -> AppResult<Reservation> {
        let reservation = Reservation {
            id: record_id(),
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            date: payload.date,
            time: payload.time,
            guests: payload.guests,
            special_requests: payload.special_requests,
            status: ReservationStatus::Pending,
            created_at: chrono::Utc::now(),
        };
        tracing::debug!(id = %reservation.id, date = %reservation.date, "reservation created");
        self.repo.insert(reservation).await
    }

    pub async fn update(&self, id: &str, patch: ReservationUpdate) -> AppResult<Reservation> {
        self.repo
            .update_with(id, |r| {
                if let Some(name) = patch.name {
                    r.name = name;
                }
                if let Some(email) = patch.email {
                    r.email = email;
                }
                if let Some(phone) = patch.phone {
                    r.phone = phone;
                }
                if let Some(date) = patch.date {
                    r.date = date;
                }
                if let Some(time) = patch.time {
                    r.time = time;
                }
                if let Some(guests) = patch.guests {
                    r.guests = guests;
                }
                if let Some(special_requests) = patch.special_requests {
                    r.special_requests = Some(special_requests);
                }
                if let Some(status) = patch.status {
                    r.status = status;
                }
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repo.delete(id).await
    }

    /// Offered slots for a given date
    ///
    /// Every offered slot is currently available on every date; the date
    /// parameter mirrors the call shape the booking form uses.
    pub async fn available_time_slots(&self, _date: NaiveDate) -> AppResult<Vec<TimeSlot>> {
        simulate(TIME_SLOTS_MS).await;
        Ok(TimeSlot::ALL.to_vec())
    }
}

#[async_trait]
impl ReservationGateway for ReservationService {
    async fn create(&self, reservation: ReservationCreate) -> AppResult<Reservation> {
        ReservationService::create(self, reservation).await
    }
}

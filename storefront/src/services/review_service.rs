//! Review collaborator
//!
//! CRUD over the fixture-seeded reviews, newest first. `create` stamps
//! the generated id and the current date and prepends the record; the
//! review board reaches this service through [`ReviewGateway`].

use super::repository::{Entity, InMemoryRepository, LatencyProfile, simulate};
use crate::fixtures;
use crate::reviews::ReviewGateway;
use async_trait::async_trait;
use shared::error::{AppResult, ErrorCode};
use shared::models::{Review, ReviewCreate, ReviewUpdate};
use shared::util::record_id;

impl Entity for Review {
    const RESOURCE: &'static str = "Review";
    const NOT_FOUND: ErrorCode = ErrorCode::ReviewNotFound;

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
const AVERAGE_RATING_MS: u64 = 150;

pub struct ReviewService {
    repo: InMemoryRepository<Review>,
}

impl ReviewService {
    /// Service seeded from the bundled fixture
    pub fn seeded(simulate_latency: bool) -> Self {
        Self::with_reviews(
            fixtures::reviews(),
            if simulate_latency { LATENCY } else { LatencyProfile::none() },
        )
    }

    /// Service over explicit records (test isolation)
    pub fn with_reviews(records: Vec<Review>, latency: LatencyProfile) -> Self {
        Self {
            repo: InMemoryRepository::seeded(records, latency),
        }
    }

    /// All reviews, newest first
    pub async fn get_all(&self) -> AppResult<Vec<Review>> {
        let mut reviews = self.repo.get_all().await?;
        reviews.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(reviews)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Review> {
        self.repo.get_by_id(id).await
    }

    pub async fn create(&self, payload: ReviewCreate) -> AppResult<Review> {
        let review = Review {
            id: record_id(),
            author: payload.author,
            rating: payload.rating,
            comment: payload.comment,
            date: chrono::Utc::now().date_naive(),
        };
        tracing::debug!(id = %review.id, rating = review.rating, "review created");
        self.repo.insert_front(review).await
    }

    pub async fn update(&self, id: &str, patch: ReviewUpdate) -> AppResult<Review> {
        self.repo
            .update_with(id, |r| {
                if let Some(author) = patch.author {
                    r.author = author;
                }
                if let Some(rating) = patch.rating {
                    r.rating = rating;
                }
                if let Some(comment) = patch.comment {
                    r.comment = comment;
                }
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repo.delete(id).await
    }

    /// Mean rating rounded to one decimal; 0.0 when there are no reviews
    pub async fn average_rating(&self) -> AppResult<f64> {
        simulate(AVERAGE_RATING_MS).await;
        let reviews = self.repo.get_all().await?;
        if reviews.is_empty() {
            return Ok(0.0);
        }
        let sum: u32 = reviews.iter().map(|r| r.rating as u32).sum();
        Ok((sum as f64 / reviews.len() as f64 * 10.0).round() / 10.0)
    }
}

#[async_trait]
impl ReviewGateway for ReviewService {
    async fn list(&self) -> AppResult<Vec<Review>> {
        self.get_all().await
    }

    async fn create(&self, review: ReviewCreate) -> AppResult<Review> {
        ReviewService::create(self, review).await
    }
}

//! Customer review board
//!
//! Loads reviews from the review collaborator, validates new submissions
//! client-side before any collaborator call, and prepends accepted
//! reviews optimistically.

use async_trait::async_trait;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::review::{MAX_RATING, MIN_RATING};
use shared::models::{Review, ReviewCreate};

/// Boundary to the review collaborator
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Review>>;
    async fn create(&self, review: ReviewCreate) -> AppResult<Review>;
}

/// New review form state
#[derive(Debug, Clone)]
pub struct ReviewDraft {
    pub author: String,
    pub rating: u8,
    pub comment: String,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            author: String::new(),
            rating: 5,
            comment: String::new(),
        }
    }
}

impl ReviewDraft {
    /// Client-side validation, run before any collaborator call
    pub fn validate(&self) -> AppResult<()> {
        if self.author.trim().is_empty() {
            return Err(AppError::required_field("author"));
        }
        if self.comment.trim().is_empty() {
            return Err(AppError::required_field("comment"));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(AppError::new(ErrorCode::RatingOutOfRange).with_detail("rating", self.rating));
        }
        Ok(())
    }
}

/// Per-star bucket of the rating distribution
#[derive(Debug, Clone, PartialEq)]
pub struct RatingBucket {
    pub rating: u8,
    pub count: usize,
    pub percentage: f64,
}

/// Aggregate review statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    /// Mean rating rounded to one decimal; 0.0 when there are no reviews
    pub average_rating: f64,
    pub total: usize,
    /// Buckets for 5 down to 1 stars
    pub distribution: Vec<RatingBucket>,
}

/// Loaded review list plus submission handling
#[derive(Debug, Clone, Default)]
pub struct ReviewBoard {
    reviews: Vec<Review>,
}

impl ReviewBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reviews, newest first
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Replace the list with the collaborator's current records
    pub async fn load<G: ReviewGateway>(&mut self, gateway: &G) -> AppResult<()> {
        self.reviews = gateway.list().await?;
        tracing::debug!(count = self.reviews.len(), "reviews loaded");
        Ok(())
    }

    /// Submit a new review
    ///
    /// Validation failures block before the collaborator is called. On
    /// acceptance the created record is prepended to the local list.
    pub async fn submit<G: ReviewGateway>(
        &mut self,
        draft: &ReviewDraft,
        gateway: &G,
    ) -> AppResult<Review> {
        draft.validate()?;

        let review = gateway
            .create(ReviewCreate {
                author: draft.author.trim().to_string(),
                rating: draft.rating,
                comment: draft.comment.trim().to_string(),
            })
            .await?;

        self.reviews.insert(0, review.clone());
        tracing::info!(id = %review.id, rating = review.rating, "review submitted");
        Ok(review)
    }

    /// Aggregate statistics over the loaded reviews
    pub fn summary(&self) -> ReviewSummary {
        let total = self.reviews.len();
        let average_rating = if total == 0 {
            0.0
        } else {
            let sum: u32 = self.reviews.iter().map(|r| r.rating as u32).sum();
            (sum as f64 / total as f64 * 10.0).round() / 10.0
        };
        let distribution = (MIN_RATING..=MAX_RATING)
            .rev()
            .map(|rating| {
                let count = self.reviews.iter().filter(|r| r.rating == rating).count();
                let percentage = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                };
                RatingBucket {
                    rating,
                    count,
                    percentage,
                }
            })
            .collect();

        ReviewSummary {
            average_rating,
            total,
            distribution,
        }
    }
}

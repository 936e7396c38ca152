//! Review Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimum accepted star rating
pub const MIN_RATING: u8 = 1;
/// Maximum accepted star rating
pub const MAX_RATING: u8 = 5;

/// Customer review entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author: String,
    /// Star rating, 1..=5
    pub rating: u8,
    pub comment: String,
    /// Calendar date the review was posted
    pub date: NaiveDate,
}

/// Create review payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreate {
    pub author: String,
    pub rating: u8,
    pub comment: String,
}

/// Update review payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdate {
    pub author: Option<String>,
    pub rating: Option<u8>,
    pub comment: Option<String>,
}

//! Error types and result alias

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type for the storefront, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (field-level errors, missing ids, context)
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a required-field error naming the missing field
    pub fn required_field(field: impl Into<String>) -> Self {
        let f = field.into();
        Self::with_message(ErrorCode::RequiredField, format!("{} is required", f))
            .with_detail("field", f)
    }

    /// Create a not found error for a resource
    ///
    /// The missing id is recorded under the `"id"` detail so id-based
    /// lookup misses can be programmatically inspected.
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        let r = resource.into();
        let id = id.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found: {}", r, id))
            .with_detail("resource", r)
            .with_detail("id", id)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a collaborator failure error
    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ServiceUnavailable, msg)
    }

    // ==================== Error inspection ====================

    /// Whether this error represents an id-based lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::NotFound
                | ErrorCode::MenuItemNotFound
                | ErrorCode::ReservationNotFound
                | ErrorCode::ReviewNotFound
                | ErrorCode::OrderNotFound
        )
    }

    /// Whether this error blocks a gated transition or submission
    pub fn is_validation(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ValidationFailed
                | ErrorCode::RequiredField
                | ErrorCode::ValueOutOfRange
                | ErrorCode::InvalidFormat
                | ErrorCode::DateInPast
                | ErrorCode::TimeSlotInvalid
                | ErrorCode::GuestCountOutOfRange
                | ErrorCode::StepIncomplete
                | ErrorCode::RatingOutOfRange
                | ErrorCode::CartEmpty
                | ErrorCode::CustomerInfoIncomplete
                | ErrorCode::QuantityInvalid
        )
    }

    /// The missing id recorded by [`AppError::not_found`], if any
    pub fn missing_id(&self) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|d| d.get("id"))
            .and_then(Value::as_str)
    }
}

/// Result type for storefront operations
pub type AppResult<T> = Result<T, AppError>;

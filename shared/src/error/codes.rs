//! Unified error codes for the Savory Stories storefront
//!
//! This module defines all error codes used across the storefront crates.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Menu errors
//! - 2xxx: Reservation errors
//! - 3xxx: Review errors
//! - 4xxx: Order and cart errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and stable cross-boundary identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 1001,
    /// Unknown menu category
    CategoryUnknown = 1002,

    // ==================== 2xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 2001,
    /// Reservation date is in the past
    DateInPast = 2002,
    /// Time is not one of the offered slots
    TimeSlotInvalid = 2003,
    /// Guest count outside the bookable range
    GuestCountOutOfRange = 2004,
    /// Current wizard step is missing required fields
    StepIncomplete = 2005,
    /// Requested wizard transition is not allowed
    TransitionInvalid = 2006,

    // ==================== 3xxx: Review ====================
    /// Review not found
    ReviewNotFound = 3001,
    /// Rating outside 1..=5
    RatingOutOfRange = 3002,

    // ==================== 4xxx: Order / Cart ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Checkout attempted with an empty cart
    CartEmpty = 4002,
    /// Customer info missing or malformed at checkout
    CustomerInfoIncomplete = 4003,
    /// Item quantity rejected (non-positive or over limit)
    QuantityInvalid = 4004,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Collaborator call failed
    ServiceUnavailable = 9002,
}

impl ErrorCode {
    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            Self::MenuItemNotFound => "Menu item not found",
            Self::CategoryUnknown => "Unknown menu category",

            Self::ReservationNotFound => "Reservation not found",
            Self::DateInPast => "Reservation date cannot be in the past",
            Self::TimeSlotInvalid => "Time is not one of the offered slots",
            Self::GuestCountOutOfRange => "Guest count is outside the bookable range",
            Self::StepIncomplete => "Please complete this step before continuing",
            Self::TransitionInvalid => "That step change is not allowed",

            Self::ReviewNotFound => "Review not found",
            Self::RatingOutOfRange => "Rating must be between 1 and 5",

            Self::OrderNotFound => "Order not found",
            Self::CartEmpty => "Your cart is empty",
            Self::CustomerInfoIncomplete => "Please fill in all required delivery details",
            Self::QuantityInvalid => "Quantity must be a positive whole number",

            Self::InternalError => "Internal error",
            Self::ServiceUnavailable => "Service temporarily unavailable",
        }
    }

    /// Numeric value of this code
    pub fn value(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.value())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,
            8 => Self::ValueOutOfRange,

            1001 => Self::MenuItemNotFound,
            1002 => Self::CategoryUnknown,

            2001 => Self::ReservationNotFound,
            2002 => Self::DateInPast,
            2003 => Self::TimeSlotInvalid,
            2004 => Self::GuestCountOutOfRange,
            2005 => Self::StepIncomplete,
            2006 => Self::TransitionInvalid,

            3001 => Self::ReviewNotFound,
            3002 => Self::RatingOutOfRange,

            4001 => Self::OrderNotFound,
            4002 => Self::CartEmpty,
            4003 => Self::CustomerInfoIncomplete,
            4004 => Self::QuantityInvalid,

            9001 => Self::InternalError,
            9002 => Self::ServiceUnavailable,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Menu errors
/// - 2xxx: Reservation errors
/// - 3xxx: Review errors
/// - 4xxx: Order and cart errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Menu errors (1xxx)
    Menu,
    /// Reservation errors (2xxx)
    Reservation,
    /// Review errors (3xxx)
    Review,
    /// Order and cart errors (4xxx)
    Order,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Menu,
            2000..3000 => Self::Reservation,
            3000..4000 => Self::Review,
            4000..5000 => Self::Order,
            _ => Self::System,
        }
    }
}

impl From<ErrorCode> for ErrorCategory {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_classify_by_range() {
        assert_eq!(ErrorCategory::from(ErrorCode::ValidationFailed), ErrorCategory::General);
        assert_eq!(ErrorCategory::from(ErrorCode::MenuItemNotFound), ErrorCategory::Menu);
        assert_eq!(ErrorCategory::from(ErrorCode::TimeSlotInvalid), ErrorCategory::Reservation);
        assert_eq!(ErrorCategory::from(ErrorCode::RatingOutOfRange), ErrorCategory::Review);
        assert_eq!(ErrorCategory::from(ErrorCode::CartEmpty), ErrorCategory::Order);
        assert_eq!(ErrorCategory::from(ErrorCode::InternalError), ErrorCategory::System);
    }
}

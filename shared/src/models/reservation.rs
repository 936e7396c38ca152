//! Reservation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Smallest bookable party size
pub const MIN_GUESTS: i32 = 1;
/// Largest bookable party size
pub const MAX_GUESTS: i32 = 10;

/// Offered reservation time slot
///
/// Fixed enumeration, 5:00 PM through 9:00 PM in 30-minute increments.
/// Serialized as its display label so records match the fixture shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TimeSlot {
    FivePm,
    FiveThirtyPm,
    SixPm,
    SixThirtyPm,
    SevenPm,
    SevenThirtyPm,
    EightPm,
    EightThirtyPm,
    NinePm,
}

impl TimeSlot {
    /// All offered slots in chronological order
    pub const ALL: [TimeSlot; 9] = [
        TimeSlot::FivePm,
        TimeSlot::FiveThirtyPm,
        TimeSlot::SixPm,
        TimeSlot::SixThirtyPm,
        TimeSlot::SevenPm,
        TimeSlot::SevenThirtyPm,
        TimeSlot::EightPm,
        TimeSlot::EightThirtyPm,
        TimeSlot::NinePm,
    ];

    /// Display label, e.g. "7:30 PM"
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FivePm => "5:00 PM",
            Self::FiveThirtyPm => "5:30 PM",
            Self::SixPm => "6:00 PM",
            Self::SixThirtyPm => "6:30 PM",
            Self::SevenPm => "7:00 PM",
            Self::SevenThirtyPm => "7:30 PM",
            Self::EightPm => "8:00 PM",
            Self::EightThirtyPm => "8:30 PM",
            Self::NinePm => "9:00 PM",
        }
    }

    /// Parse a display label back into a slot
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == label)
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> String {
        slot.as_str().to_string()
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeSlot::parse(&value).ok_or_else(|| format!("unknown time slot: {}", value))
    }
}

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub guests: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub status: ReservationStatus,
    /// ISO timestamp stamped by the collaborator on create
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub guests: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// Update reservation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub guests: Option<i32>,
    pub special_requests: Option<String>,
    pub status: Option<ReservationStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_label_round_trip() {
        for slot in TimeSlot::ALL {
            assert_eq!(TimeSlot::parse(slot.as_str()), Some(slot));
        }
        assert_eq!(TimeSlot::parse("4:30 PM"), None);
        assert_eq!(TimeSlot::parse("9:30 PM"), None);
    }

    #[test]
    fn slot_serde_uses_labels() {
        let json = serde_json::to_string(&TimeSlot::SevenPm).unwrap();
        assert_eq!(json, "\"7:00 PM\"");
        let back: TimeSlot = serde_json::from_str("\"8:30 PM\"").unwrap();
        assert_eq!(back, TimeSlot::EightThirtyPm);
    }

    #[test]
    fn unknown_slot_fails_deserialization() {
        let res: Result<TimeSlot, _> = serde_json::from_str("\"11:00 PM\"");
        assert!(res.is_err());
    }
}

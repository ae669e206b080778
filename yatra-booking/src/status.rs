use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a booking record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        };
        f.write_str(s)
    }
}

impl BookingStatus {
    /// COMPLETED and CANCELLED accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid booking status transition from {from} to {to}")]
pub struct InvalidTransition {
    pub from: BookingStatus,
    pub to: BookingStatus,
}

/// The single authority on status changes.
///
/// Allowed: PENDING -> CONFIRMED, PENDING -> CANCELLED,
/// CONFIRMED -> COMPLETED. Everything else, including requesting the
/// current status again, is rejected.
pub fn transition(
    current: BookingStatus,
    requested: BookingStatus,
) -> Result<BookingStatus, InvalidTransition> {
    use BookingStatus::*;

    match (current, requested) {
        (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) => Ok(requested),
        (from, to) => Err(InvalidTransition { from, to }),
    }
}

use crate::status::BookingStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The package a visitor is currently considering. At most one selection is
/// active; a new selection replaces the old one and nothing ever clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedPackage {
    pub id: u32,
    pub title: String,
    pub price: String,
}

impl SelectedPackage {
    pub fn new(id: u32, title: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            price: price.into(),
        }
    }
}

/// One submitted booking request. Immutable after creation except for the
/// status field, which only changes through the transition table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: Uuid,
    pub package_id: u32,
    pub package_title: String,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
}

impl BookingRecord {
    /// New records get a time-ordered v7 id and start out PENDING.
    pub fn new(package_id: u32, package_title: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            package_id,
            package_title: package_title.into(),
            booking_date: Utc::now(),
            status: BookingStatus::Pending,
        }
    }
}

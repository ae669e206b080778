use uuid::Uuid;

/// Emitted after the gateway accepts a booking request and the record lands
/// in history with PENDING status.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingRequestedEvent {
    pub booking_id: Uuid,
    pub package_id: u32,
    pub package_title: String,
    pub requested_at: i64,
}

/// Emitted after a status transition is accepted and applied to a record.
/// Statuses are carried in their wire form (e.g. "PENDING").
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingStatusChangedEvent {
    pub booking_id: Uuid,
    pub from: String,
    pub to: String,
    pub changed_at: i64,
}

/// Envelope broadcast to in-process subscribers of the booking workflow.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub enum BookingEvent {
    Requested(BookingRequestedEvent),
    StatusChanged(BookingStatusChangedEvent),
}

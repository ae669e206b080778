use crate::record::BookingRecord;
use crate::status::BookingStatus;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Booking record not found: {0}")]
    NotFound(Uuid),

    #[error("History store failed: {0}")]
    Backend(String),
}

/// Storage boundary for booking history.
///
/// History is append-only: records are never removed, and only the status
/// field of an existing record may be replaced. The default store is
/// in-memory and process-lifetime-only; a durable implementation slots in
/// behind this trait without touching the service.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Append a record to the end of history
    async fn append(&self, record: BookingRecord) -> Result<(), RepositoryError>;

    async fn get(&self, id: Uuid) -> Result<Option<BookingRecord>, RepositoryError>;

    /// Full history in submission order
    async fn list(&self) -> Result<Vec<BookingRecord>, RepositoryError>;

    /// Rewrite the status of the matching record, leaving everything else
    /// untouched. Errors with NotFound when no record matches.
    async fn replace_status(&self, id: Uuid, status: BookingStatus) -> Result<(), RepositoryError>;
}

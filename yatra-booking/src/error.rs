use crate::repository::RepositoryError;
use crate::status::InvalidTransition;
use uuid::Uuid;

/// Failures surfaced by the booking service. The service never panics;
/// every operation reports through this type and the error flag.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("No package selected")]
    NoPackageSelected,

    #[error("Booking not found: {0}")]
    BookingNotFound(Uuid),

    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    #[error("Booking submission failed: {0}")]
    SubmissionFailed(String),

    #[error("Booking submission timed out after {0} ms")]
    SubmissionTimedOut(u64),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;
use yatra_shared::Masked;

/// The payload handed to the operator's reservation desk. Contact fields are
/// masked so Debug dumps in tracing output never leak PII.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSubmission {
    pub package_id: u32,
    pub package_title: String,
    pub contact_name: Masked<String>,
    pub contact_email: Masked<String>,
    pub contact_phone: Masked<String>,
    pub tour_date: String,
    pub package_type: String,
    pub message: String,
}

/// Acknowledgement returned by the reservation desk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingReceipt {
    pub reference: String,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Booking request rejected: {0}")]
    Rejected(String),

    #[error("Reservation desk unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous submission port for booking requests.
///
/// Implementations may talk to a CRM, a mail relay or an operator backoffice;
/// all of them can genuinely fail, and callers own the timeout policy.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn submit(&self, submission: &BookingSubmission) -> Result<BookingReceipt, GatewayError>;
}

/// In-process gateway with configurable latency, for wiring and tests.
pub struct MockBookingGateway {
    latency: Duration,
    reject_all: bool,
}

impl MockBookingGateway {
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            reject_all: false,
        }
    }

    /// A desk that turns every request away
    pub fn rejecting() -> Self {
        Self {
            latency: Duration::ZERO,
            reject_all: true,
        }
    }
}

impl Default for MockBookingGateway {
    fn default() -> Self {
        Self::with_latency(Duration::ZERO)
    }
}

#[async_trait]
impl BookingGateway for MockBookingGateway {
    async fn submit(&self, submission: &BookingSubmission) -> Result<BookingReceipt, GatewayError> {
        tokio::time::sleep(self.latency).await;

        if self.reject_all {
            return Err(GatewayError::Rejected(
                "no seats left for the requested departure".to_string(),
            ));
        }

        // Trigger for exercising the failure path end to end
        if submission.message == "fail-gateway" {
            return Err(GatewayError::Unavailable(
                "simulated reservation desk outage".to_string(),
            ));
        }

        tracing::debug!(package_id = submission.package_id, "mock gateway accepted {:?}", submission);

        Ok(BookingReceipt {
            reference: format!("YTR-{}", Uuid::now_v7().simple()),
            received_at: Utc::now(),
        })
    }
}

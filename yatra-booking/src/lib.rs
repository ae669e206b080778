pub mod details;
pub mod error;
pub mod gateway;
pub mod record;
pub mod repository;
pub mod service;
pub mod status;
pub mod validation;

pub use details::{BookingDetails, BookingDetailsPatch, DEFAULT_PACKAGE_TYPE};
pub use error::BookingError;
pub use gateway::{BookingGateway, BookingReceipt, BookingSubmission, MockBookingGateway};
pub use record::{BookingRecord, SelectedPackage};
pub use repository::{BookingRepository, RepositoryError};
pub use service::{BookingRules, BookingService};
pub use status::{transition, BookingStatus, InvalidTransition};
pub use validation::{validate_details, ValidationErrors};

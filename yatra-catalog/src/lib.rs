pub mod blog;
pub mod itinerary;
pub mod package;
pub mod pricing;
pub mod store;

pub use blog::BlogPost;
pub use itinerary::{ItineraryDay, PackageItinerary};
pub use package::{CatalogError, PackageTier, TourPackage};
pub use pricing::TierPricing;
pub use store::CatalogStore;

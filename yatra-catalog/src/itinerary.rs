use serde::{Deserialize, Serialize};

/// A single day in a package itinerary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u8,
    pub title: String,
    pub description: String,
    pub location: String,
    pub activities: Vec<String>,
    pub overnight: Option<String>,
}

/// Day-by-day plan attached to a tour package
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageItinerary {
    pub package_id: u32,
    pub days: Vec<ItineraryDay>,
}

impl PackageItinerary {
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Accommodation tiers offered for every package
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    Standard,
    Deluxe,
    Premium,
}

impl PackageTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageTier::Standard => "standard",
            PackageTier::Deluxe => "deluxe",
            PackageTier::Premium => "premium",
        }
    }
}

impl FromStr for PackageTier {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(PackageTier::Standard),
            "deluxe" => Ok(PackageTier::Deluxe),
            "premium" => Ok(PackageTier::Premium),
            other => Err(CatalogError::UnknownTier(other.to_string())),
        }
    }
}

/// A tour package as presented in the catalog. Prices are stored in their
/// display form ("₹25,000"); the booking core reads only id, title and price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourPackage {
    pub id: u32,
    pub title: String,
    pub duration: String,
    pub price: String,
    pub image: String,
    pub description: String,
    pub features: Vec<String>,
    pub highlights: Vec<String>,
    pub location: String,
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Package not found: {0}")]
    PackageNotFound(u32),

    #[error("Unknown package tier: {0}")]
    UnknownTier(String),

    #[error("Unreadable price: {0}")]
    UnreadablePrice(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_parses_case_insensitively() {
        assert_eq!("standard".parse::<PackageTier>().unwrap(), PackageTier::Standard);
        assert_eq!(" Deluxe ".parse::<PackageTier>().unwrap(), PackageTier::Deluxe);
        assert_eq!("PREMIUM".parse::<PackageTier>().unwrap(), PackageTier::Premium);
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let err = "luxury".parse::<PackageTier>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownTier(t) if t == "luxury"));
    }
}

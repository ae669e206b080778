use crate::blog::BlogPost;
use crate::itinerary::{ItineraryDay, PackageItinerary};
use crate::package::{CatalogError, TourPackage};
use chrono::NaiveDate;

/// Read-only, in-memory catalog of packages, itineraries and journal posts.
///
/// The catalog is an external collaborator of the booking workflow: ordered,
/// seeded once, never mutated. The booking core consumes only package id,
/// title and price.
pub struct CatalogStore {
    packages: Vec<TourPackage>,
    itineraries: Vec<PackageItinerary>,
    posts: Vec<BlogPost>,
}

impl CatalogStore {
    pub fn new(
        packages: Vec<TourPackage>,
        itineraries: Vec<PackageItinerary>,
        posts: Vec<BlogPost>,
    ) -> Self {
        Self {
            packages,
            itineraries,
            posts,
        }
    }

    /// Catalog seeded with the operator's published Char Dham offerings.
    pub fn seeded() -> Self {
        Self::new(seed_packages(), seed_itineraries(), seed_posts())
    }

    /// Build a catalog from an exported package list, e.g. the JSON the
    /// content team maintains. Itineraries and posts start empty.
    pub fn from_package_json(json: &str) -> Result<Self, serde_json::Error> {
        let packages: Vec<TourPackage> = serde_json::from_str(json)?;
        Ok(Self::new(packages, Vec::new(), Vec::new()))
    }

    /// Packages in catalog order
    pub fn packages(&self) -> &[TourPackage] {
        &self.packages
    }

    pub fn package(&self, id: u32) -> Result<&TourPackage, CatalogError> {
        self.packages
            .iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::PackageNotFound(id))
    }

    /// Case-insensitive search over title, location and description,
    /// preserving catalog order. An empty term returns everything.
    pub fn search(&self, term: &str) -> Vec<&TourPackage> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.packages.iter().collect();
        }
        self.packages
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.location.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn itinerary(&self, package_id: u32) -> Option<&PackageItinerary> {
        self.itineraries.iter().find(|i| i.package_id == package_id)
    }

    /// Journal posts, newest first
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn seed_packages() -> Vec<TourPackage> {
    vec![
        TourPackage {
            id: 1,
            title: "Char Dham Classic".to_string(),
            duration: "11 Days / 10 Nights".to_string(),
            price: "₹25,000".to_string(),
            image: "/images/packages/char-dham-classic.jpg".to_string(),
            description: "The complete pilgrimage circuit covering Yamunotri, Gangotri, Kedarnath and Badrinath with comfortable stays and an experienced guide.".to_string(),
            features: vec![
                "All four dhams".to_string(),
                "Hotel accommodation".to_string(),
                "Vegetarian meals".to_string(),
                "AC transport from Haridwar".to_string(),
            ],
            highlights: vec![
                "Ganga aarti at Har Ki Pauri".to_string(),
                "Darshan assistance at all temples".to_string(),
                "Mana village visit".to_string(),
            ],
            location: "Uttarakhand, India".to_string(),
        },
        TourPackage {
            id: 2,
            title: "Char Dham Deluxe".to_string(),
            duration: "12 Days / 11 Nights".to_string(),
            price: "₹45,000".to_string(),
            image: "/images/packages/char-dham-deluxe.jpg".to_string(),
            description: "The full circuit with premium hotels, helicopter assistance for the Kedarnath trek and a dedicated tour manager throughout.".to_string(),
            features: vec![
                "Premium hotels".to_string(),
                "Kedarnath helicopter option".to_string(),
                "Dedicated tour manager".to_string(),
                "All meals included".to_string(),
            ],
            highlights: vec![
                "Priority darshan slots".to_string(),
                "Evening satsang programs".to_string(),
                "Badrinath VIP pooja".to_string(),
            ],
            location: "Uttarakhand, India".to_string(),
        },
        TourPackage {
            id: 3,
            title: "Do Dham Express".to_string(),
            duration: "6 Days / 5 Nights".to_string(),
            price: "₹18,500".to_string(),
            image: "/images/packages/do-dham-express.jpg".to_string(),
            description: "A focused journey to Kedarnath and Badrinath for pilgrims short on time, without compromising on darshan.".to_string(),
            features: vec![
                "Kedarnath and Badrinath".to_string(),
                "Hotel accommodation".to_string(),
                "Breakfast and dinner".to_string(),
            ],
            highlights: vec![
                "Triyuginarayan temple visit".to_string(),
                "Tapt Kund holy bath".to_string(),
            ],
            location: "Uttarakhand, India".to_string(),
        },
        TourPackage {
            id: 4,
            title: "Kedarnath Darshan".to_string(),
            duration: "4 Days / 3 Nights".to_string(),
            price: "₹12,900".to_string(),
            image: "/images/packages/kedarnath-darshan.jpg".to_string(),
            description: "A short pilgrimage dedicated to Kedarnath, with pony and palki arrangements for the trek on request.".to_string(),
            features: vec![
                "Guided Kedarnath trek".to_string(),
                "Guptkashi stay".to_string(),
                "Morning darshan".to_string(),
            ],
            highlights: vec![
                "Bhairavnath temple".to_string(),
                "Sunrise over Kedar dome".to_string(),
            ],
            location: "Rudraprayag, Uttarakhand".to_string(),
        },
    ]
}

fn seed_itineraries() -> Vec<PackageItinerary> {
    vec![
        PackageItinerary {
            package_id: 1,
            days: vec![
                day(1, "Arrival in Haridwar", "Check in and evening Ganga aarti at Har Ki Pauri.", "Haridwar", &["Hotel check-in", "Ganga aarti"], Some("Haridwar")),
                day(2, "Haridwar to Barkot", "Drive through Mussoorie with a stop at Kempty Falls.", "Barkot", &["Kempty Falls", "Evening at leisure"], Some("Barkot")),
                day(3, "Yamunotri Darshan", "Trek from Janki Chatti to Yamunotri and back.", "Yamunotri", &["6 km trek", "Surya Kund", "Darshan"], Some("Barkot")),
                day(4, "Barkot to Uttarkashi", "Drive to Uttarkashi and visit Vishwanath temple.", "Uttarkashi", &["Vishwanath temple"], Some("Uttarkashi")),
                day(5, "Gangotri Darshan", "Day trip to Gangotri along the Bhagirathi valley.", "Gangotri", &["Darshan", "Submerged Shivling viewpoint"], Some("Uttarkashi")),
                day(6, "Uttarkashi to Guptkashi", "Long scenic drive via Moolgarh and Lambgaon.", "Guptkashi", &["Ardh Narishwar temple"], Some("Guptkashi")),
                day(7, "Kedarnath Darshan", "Trek from Sonprayag to Kedarnath for darshan.", "Kedarnath", &["16 km trek", "Evening aarti"], Some("Kedarnath")),
                day(8, "Return to Guptkashi", "Descend after morning darshan and rest.", "Guptkashi", &["Morning darshan", "Trek down"], Some("Guptkashi")),
                day(9, "Guptkashi to Badrinath", "Drive via Chopta with darshan on arrival.", "Badrinath", &["Tapt Kund", "Evening darshan"], Some("Badrinath")),
                day(10, "Badrinath to Rudraprayag", "Mana village visit, then drive down the Alaknanda valley.", "Rudraprayag", &["Mana village", "Vyas cave"], Some("Rudraprayag")),
                day(11, "Return to Haridwar", "Drive back via Devprayag sangam. Tour concludes.", "Haridwar", &["Devprayag sangam"], None),
            ],
        },
        PackageItinerary {
            package_id: 3,
            days: vec![
                day(1, "Haridwar to Guptkashi", "Drive along the Alaknanda and Mandakini rivers.", "Guptkashi", &["Devprayag sangam en route"], Some("Guptkashi")),
                day(2, "Kedarnath Darshan", "Trek from Sonprayag to Kedarnath for darshan.", "Kedarnath", &["16 km trek", "Evening aarti"], Some("Kedarnath")),
                day(3, "Return to Guptkashi", "Morning darshan, then descend.", "Guptkashi", &["Morning darshan"], Some("Guptkashi")),
                day(4, "Guptkashi to Badrinath", "Drive via Joshimath with evening darshan.", "Badrinath", &["Tapt Kund", "Evening darshan"], Some("Badrinath")),
                day(5, "Badrinath to Rudraprayag", "Mana village, then drive down.", "Rudraprayag", &["Mana village"], Some("Rudraprayag")),
                day(6, "Return to Haridwar", "Drive back to Haridwar. Tour concludes.", "Haridwar", &[], None),
            ],
        },
    ]
}

fn day(
    day: u8,
    title: &str,
    description: &str,
    location: &str,
    activities: &[&str],
    overnight: Option<&str>,
) -> ItineraryDay {
    ItineraryDay {
        day,
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        activities: activities.iter().map(|a| a.to_string()).collect(),
        overnight: overnight.map(str::to_string),
    }
}

fn seed_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "Preparing for the Kedarnath Trek".to_string(),
            excerpt: "What to pack, how to acclimatize, and when to start the climb for a comfortable darshan.".to_string(),
            author: "Varahi Journey Team".to_string(),
            published_on: date(2024, 4, 18),
            image: "/images/blog/kedarnath-trek.jpg".to_string(),
        },
        BlogPost {
            id: 2,
            title: "Char Dham Opening Dates Announced".to_string(),
            excerpt: "Temple committees have confirmed the kapat opening dates for this yatra season.".to_string(),
            author: "Varahi Journey Team".to_string(),
            published_on: date(2024, 3, 9),
            image: "/images/blog/opening-dates.jpg".to_string(),
        },
        BlogPost {
            id: 3,
            title: "Why Pilgrims Stop at Devprayag".to_string(),
            excerpt: "The confluence of the Alaknanda and Bhagirathi marks the birth of the Ganga.".to_string(),
            author: "Varahi Journey Team".to_string(),
            published_on: date(2024, 2, 2),
            image: "/images/blog/devprayag.jpg".to_string(),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let catalog = CatalogStore::seeded();
        let classic = catalog.package(1).unwrap();
        assert_eq!(classic.title, "Char Dham Classic");
        assert_eq!(classic.price, "₹25,000");
    }

    #[test]
    fn missing_package_is_an_error() {
        let catalog = CatalogStore::seeded();
        let err = catalog.package(99).unwrap_err();
        assert!(matches!(err, CatalogError::PackageNotFound(99)));
    }

    #[test]
    fn search_matches_title_location_and_description() {
        let catalog = CatalogStore::seeded();

        let by_title = catalog.search("deluxe");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, 2);

        let by_location = catalog.search("rudraprayag");
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].id, 4);

        // "kedarnath" appears in descriptions of several packages
        assert!(catalog.search("kedarnath").len() >= 2);
    }

    #[test]
    fn empty_search_returns_full_catalog_in_order() {
        let catalog = CatalogStore::seeded();
        let all = catalog.search("   ");
        let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn builds_from_exported_package_json() {
        let json = r#"[{
            "id": 7,
            "title": "Gangotri Retreat",
            "duration": "5 Days / 4 Nights",
            "price": "₹15,000",
            "image": "/images/packages/gangotri.jpg",
            "description": "A quiet stay in the Bhagirathi valley.",
            "features": ["Hotel accommodation"],
            "highlights": ["Gangnani hot springs"],
            "location": "Uttarkashi, Uttarakhand"
        }]"#;

        let catalog = CatalogStore::from_package_json(json).unwrap();
        assert_eq!(catalog.package(7).unwrap().title, "Gangotri Retreat");
        assert!(catalog.itinerary(7).is_none());
    }

    #[test]
    fn itineraries_cover_the_advertised_duration() {
        let catalog = CatalogStore::seeded();
        let classic = catalog.itinerary(1).unwrap();
        assert_eq!(classic.day_count(), 11);
        assert!(catalog.itinerary(4).is_none());
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An article from the operator's travel journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub published_on: NaiveDate,
    pub image: String,
}

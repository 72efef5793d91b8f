use serde::{Deserialize, Serialize};

/// One review as exposed to the site, camelCase for the browser.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub author_name: String,
    pub author_url: Option<String>,
    pub profile_photo_url: Option<String>,
    pub rating: f64,
    pub relative_time_description: Option<String>,
    pub text: String,
    pub time: i64,
    pub language: Option<String>,
}

/// Aggregate payload served by the reviews endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsSnapshot {
    pub reviews: Vec<Review>,
    pub total_reviews: u64,
    pub overall_rating: f64,
    pub place_name: String,
    pub last_updated: String,
}

use serde::{Deserialize, Serialize};

/// Vessel domain model - one charterable boat, fully normalized for the UI
/// (every image URL absolute, JSON sub-fields parsed).
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub max_people: u32,
    pub max_people_image: Option<String>,
    pub price_range: String,
    pub main_image: String,
    pub more_photos_url: Option<String>,
    pub images: VesselImages,
    pub specs: VesselSpecs,
}

/// The five named image buckets every vessel carries.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct VesselImages {
    pub cabin: Vec<String>,
    pub deck: Vec<String>,
    pub yacht: Vec<String>,
    pub charter: Vec<String>,
    pub services: Vec<String>,
}

/// Bucket keys, used instead of deriving a lookup key from a label string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBucket {
    Cabin,
    Deck,
    Yacht,
    Charter,
    Services,
}

impl VesselImages {
    pub fn bucket(&self, bucket: ImageBucket) -> &[String] {
        match bucket {
            ImageBucket::Cabin => &self.cabin,
            ImageBucket::Deck => &self.deck,
            ImageBucket::Yacht => &self.yacht,
            ImageBucket::Charter => &self.charter,
            ImageBucket::Services => &self.services,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VesselSpecs {
    pub length: String,
    #[serde(rename = "type")]
    pub vessel_type: String,
    pub year: i32,
}

/// Raw catalog row as stored: images/specs sub-objects still string-encoded
/// JSON, storage paths still relative. `max_people` holds either a count or
/// an image path depending on the row (production data uses the badge image).
#[derive(Debug, Deserialize, Clone, Default)]
pub struct VesselRow {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub max_people: Option<String>,
    pub price_range: String,
    pub main_image: String,
    pub more_photos_url: Option<String>,
    pub images: Option<String>,
    pub specs: Option<String>,
}

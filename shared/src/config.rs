use std::env;

/// Environment-driven configuration, read once at startup. Optional values
/// degrade the matching endpoint (202 for contact, 500 for reviews) instead
/// of crashing the process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub table_name: String,
    pub bucket_name: String,
    pub assets_base_url: String,
    pub contact_from_email: Option<String>,
    pub contact_to_email: Option<String>,
    pub places_api_key: Option<String>,
    pub place_id: Option<String>,
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "caliente".to_string()),
            bucket_name: env::var("S3_BUCKET_NAME")
                .unwrap_or_else(|_| "caliente-assets".to_string()),
            assets_base_url: env::var("PUBLIC_ASSETS_BASE_URL").unwrap_or_default(),
            contact_from_email: optional("CONTACT_FROM_EMAIL"),
            contact_to_email: optional("CONTACT_TO_EMAIL"),
            places_api_key: optional("GOOGLE_PLACES_API_KEY"),
            place_id: optional("GOOGLE_PLACE_ID"),
        }
    }
}

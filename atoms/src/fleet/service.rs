use serde::Deserialize;

use super::model::{Vessel, VesselImages, VesselRow, VesselSpecs};

/// Resolve a storage path to an absolute, fetchable URL. Absolute http(s)
/// URLs pass through untouched; relative paths are joined to the public
/// assets base URL.
pub fn resolve_asset_url(base_url: &str, path: &str) -> String {
    if path.is_empty() {
        return path.to_string();
    }

    let lowered = path.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        return path.to_string();
    }

    let trimmed = path.trim_start_matches('/');
    if base_url.is_empty() {
        return format!("/{}", trimmed);
    }

    format!("{}/{}", base_url.trim_end_matches('/'), trimmed)
}

/// Parse a string-encoded JSON sub-field. Malformed JSON is logged and
/// defaulted, never propagated.
fn parse_json_field<T: for<'de> Deserialize<'de>>(field: &str, raw: Option<&str>) -> Option<T> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }

    match serde_json::from_str::<T>(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Failed to parse vessel {} field: {}", field, e);
            None
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct RawImages {
    #[serde(default)]
    cabin: Vec<String>,
    #[serde(default)]
    deck: Vec<String>,
    #[serde(default)]
    yacht: Vec<String>,
    #[serde(default)]
    charter: Vec<String>,
    #[serde(default)]
    services: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RawSpecs {
    #[serde(default)]
    length: String,
    #[serde(rename = "type", default)]
    vessel_type: String,
    #[serde(default)]
    year: i32,
}

fn resolve_bucket(list: Vec<String>, base_url: &str) -> Vec<String> {
    list.iter()
        .map(|path| resolve_asset_url(base_url, path))
        .collect()
}

fn normalize_images(raw: Option<&str>, base_url: &str) -> VesselImages {
    let parsed = parse_json_field::<RawImages>("images", raw).unwrap_or_default();

    VesselImages {
        cabin: resolve_bucket(parsed.cabin, base_url),
        deck: resolve_bucket(parsed.deck, base_url),
        yacht: resolve_bucket(parsed.yacht, base_url),
        charter: resolve_bucket(parsed.charter, base_url),
        services: resolve_bucket(parsed.services, base_url),
    }
}

fn normalize_specs(raw: Option<&str>) -> VesselSpecs {
    let parsed = parse_json_field::<RawSpecs>("specs", raw).unwrap_or_default();

    VesselSpecs {
        length: parsed.length,
        vessel_type: parsed.vessel_type,
        year: parsed.year,
    }
}

/// Map a raw catalog row to the normalized Vessel the UI consumes.
pub fn vessel_from_row(row: VesselRow, base_url: &str) -> Vessel {
    // max_people carries either a count or the badge image path.
    let (max_people, max_people_image) = match row.max_people.as_deref() {
        None | Some("") => (0, None),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(count) => (count, None),
            Err(_) => (0, Some(resolve_asset_url(base_url, raw))),
        },
    };

    Vessel {
        id: row.id,
        name: row.name,
        slug: row.slug,
        description: row.description,
        max_people,
        max_people_image,
        price_range: row.price_range,
        main_image: resolve_asset_url(base_url, &row.main_image),
        more_photos_url: row.more_photos_url,
        images: normalize_images(row.images.as_deref(), base_url),
        specs: normalize_specs(row.specs.as_deref()),
    }
}

pub fn vessel_by_id(vessels: &[Vessel], id: i64) -> Option<&Vessel> {
    vessels.iter().find(|vessel| vessel.id == id)
}

pub fn vessel_by_slug<'a>(vessels: &'a [Vessel], slug: &str) -> Option<&'a Vessel> {
    vessels.iter().find(|vessel| vessel.slug == slug)
}

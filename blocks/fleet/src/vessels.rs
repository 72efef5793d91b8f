use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use caliente_atoms::fleet::{vessel_from_row, Vessel, VesselRow};
use caliente_atoms::pricing::derive_price_tiers;
use lambda_http::{http::StatusCode, Body, Error, Response};
use std::collections::HashMap;

use crate::types::FleetResponse;

/// Vessel rows live under:
/// PK = "FLEET"
/// SK = "VESSEL#{slug}"
const FLEET_PK: &str = "FLEET";
const VESSEL_SK_PREFIX: &str = "VESSEL#";

fn item_string(item: &HashMap<String, AttributeValue>, attr: &str) -> Option<String> {
    item.get(attr).and_then(|v| match v {
        AttributeValue::S(s) => Some(s.clone()),
        AttributeValue::N(n) => Some(n.clone()),
        _ => None,
    })
}

/// Map one catalog item to a raw row. Items without a vessel SK are skipped.
pub fn vessel_row_from_item(item: &HashMap<String, AttributeValue>) -> Option<VesselRow> {
    let sk = item.get("SK").and_then(|v| v.as_s().ok())?;
    let slug = sk.strip_prefix(VESSEL_SK_PREFIX)?;

    Some(VesselRow {
        id: item
            .get("id")
            .and_then(|v| v.as_n().ok())
            .and_then(|n| n.parse().ok())
            .unwrap_or_default(),
        name: item_string(item, "name").unwrap_or_default(),
        slug: slug.to_string(),
        description: item_string(item, "description").unwrap_or_default(),
        max_people: item_string(item, "max_people"),
        price_range: item_string(item, "price_range").unwrap_or_default(),
        main_image: item_string(item, "main_image").unwrap_or_default(),
        more_photos_url: item_string(item, "more_photos_url"),
        images: item_string(item, "images"),
        specs: item_string(item, "specs"),
    })
}

/// Load the whole catalog, normalized and ordered by id (pure domain logic
/// downstream of the query, no HTTP).
pub async fn load_vessels(
    client: &DynamoClient,
    table_name: &str,
    assets_base_url: &str,
) -> Result<Vec<Vessel>, String> {
    let result = client
        .query()
        .table_name(table_name)
        .key_condition_expression("PK = :pk AND begins_with(SK, :sk_prefix)")
        .expression_attribute_values(":pk", AttributeValue::S(FLEET_PK.to_string()))
        .expression_attribute_values(":sk_prefix", AttributeValue::S(VESSEL_SK_PREFIX.to_string()))
        .send()
        .await
        .map_err(|e| format!("DynamoDB query error: {}", e))?;

    let mut vessels: Vec<Vessel> = Vec::new();
    for item in result.items() {
        if let Some(row) = vessel_row_from_item(item) {
            vessels.push(vessel_from_row(row, assets_base_url));
        }
    }

    vessels.sort_by_key(|vessel| vessel.id);

    Ok(vessels)
}

/// HTTP Handler: GET /vessels
pub async fn list_vessels(
    client: &DynamoClient,
    table_name: &str,
    assets_base_url: &str,
) -> Result<Response<Body>, Error> {
    match load_vessels(client, table_name, assets_base_url).await {
        Ok(vessels) => {
            let price_ranges = derive_price_tiers(&vessels);
            let response = FleetResponse {
                vessels,
                price_ranges,
            };

            Ok(Response::builder()
                .status(StatusCode::OK)
                .header("Content-Type", "application/json")
                .header("Access-Control-Allow-Origin", "*")
                .body(serde_json::to_string(&response)?.into())
                .map_err(Box::new)?)
        }
        Err(e) => {
            tracing::error!("Failed to load vessels: {}", e);
            Ok(Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .header("Access-Control-Allow-Origin", "*")
                .body(serde_json::json!({"error": e}).to_string().into())
                .map_err(Box::new)?)
        }
    }
}

/// HTTP Handler: GET /vessels/{slug}
pub async fn get_vessel(
    client: &DynamoClient,
    table_name: &str,
    assets_base_url: &str,
    slug: &str,
) -> Result<Response<Body>, Error> {
    let sk = format!("{}{}", VESSEL_SK_PREFIX, slug);

    let result = client
        .get_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S(FLEET_PK.to_string()))
        .key("SK", AttributeValue::S(sk))
        .send()
        .await
        .map_err(|e| format!("DynamoDB get_item error: {}", e))?;

    let row = result.item().and_then(vessel_row_from_item);

    match row {
        Some(row) => {
            let vessel = vessel_from_row(row, assets_base_url);
            Ok(Response::builder()
                .status(StatusCode::OK)
                .header("Content-Type", "application/json")
                .header("Access-Control-Allow-Origin", "*")
                .body(serde_json::to_string(&vessel)?.into())
                .map_err(Box::new)?)
        }
        None => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::json!({"error": "Vessel not found"}).to_string().into())
            .map_err(Box::new)?),
    }
}

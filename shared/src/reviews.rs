use caliente_atoms::reviews::{Review, ReviewsSnapshot};
use chrono::{DateTime, Utc};
use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Deserialize;

use crate::AppState;

/// Reviews stay fresh for an hour before the provider is asked again.
pub const REVIEWS_TTL_SECONDS: i64 = 3600;

const PLACE_DETAILS_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";
const FALLBACK_PLACE_NAME: &str = "Caliente Tours Miami";

/// A provider snapshot plus when it was fetched, held in AppState.
#[derive(Debug, Clone)]
pub struct CachedSnapshot {
    pub snapshot: ReviewsSnapshot,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct PlaceDetailsResponse {
    result: Option<PlaceResult>,
    status: String,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    name: Option<String>,
    rating: Option<f64>,
    user_ratings_total: Option<u64>,
    reviews: Option<Vec<PlaceReview>>,
}

#[derive(Debug, Deserialize)]
struct PlaceReview {
    author_name: String,
    author_url: Option<String>,
    profile_photo_url: Option<String>,
    rating: f64,
    relative_time_description: Option<String>,
    text: String,
    time: i64,
    language: Option<String>,
}

fn snapshot_from_result(result: PlaceResult, fetched_at: DateTime<Utc>) -> ReviewsSnapshot {
    let reviews: Vec<Review> = result
        .reviews
        .unwrap_or_default()
        .into_iter()
        .map(|review| Review {
            author_name: review.author_name,
            author_url: review.author_url,
            profile_photo_url: review.profile_photo_url,
            rating: review.rating,
            relative_time_description: review.relative_time_description,
            text: review.text,
            time: review.time,
            language: review.language,
        })
        .collect();

    ReviewsSnapshot {
        total_reviews: result.user_ratings_total.unwrap_or(reviews.len() as u64),
        overall_rating: result.rating.unwrap_or(0.0),
        place_name: result.name.unwrap_or_else(|| FALLBACK_PLACE_NAME.to_string()),
        last_updated: fetched_at.to_rfc3339(),
        reviews,
    }
}

async fn fetch_place_reviews(
    http_client: &reqwest::Client,
    api_key: &str,
    place_id: &str,
) -> Result<ReviewsSnapshot, (StatusCode, String)> {
    let response = http_client
        .get(PLACE_DETAILS_URL)
        .query(&[
            ("place_id", place_id),
            ("fields", "name,rating,user_ratings_total,reviews"),
            ("language", "en"),
            ("key", api_key),
        ])
        .send()
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Could not reach the reviews provider: {}", e),
            )
        })?;

    if !response.status().is_success() {
        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        return Err((status, "Could not reach the reviews provider.".to_string()));
    }

    let payload: PlaceDetailsResponse = response.json().await.map_err(|e| {
        (
            StatusCode::BAD_GATEWAY,
            format!("Invalid reviews provider response: {}", e),
        )
    })?;

    if payload.status != "OK" {
        return Err((
            StatusCode::BAD_GATEWAY,
            payload
                .error_message
                .unwrap_or_else(|| format!("Reviews provider returned status {}", payload.status)),
        ));
    }

    let Some(result) = payload.result else {
        return Err((
            StatusCode::BAD_GATEWAY,
            "Reviews provider returned no result.".to_string(),
        ));
    };

    Ok(snapshot_from_result(result, Utc::now()))
}

fn snapshot_response(snapshot: &ReviewsSnapshot) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Cache-Control", "public, max-age=0, s-maxage=3600")
        .body(serde_json::to_string(snapshot)?.into())
        .map_err(Box::new)?)
}

/// HTTP Handler: GET /reviews
pub async fn handle_reviews(state: &AppState) -> Result<Response<Body>, Error> {
    let (Some(api_key), Some(place_id)) = (
        state.config.places_api_key.as_deref(),
        state.config.place_id.as_deref(),
    ) else {
        tracing::error!("Reviews requested but GOOGLE_PLACES_API_KEY/GOOGLE_PLACE_ID are not set");
        return Ok(Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(
                serde_json::json!({
                    "error": "The reviews provider is not configured. Set GOOGLE_PLACES_API_KEY and GOOGLE_PLACE_ID.",
                })
                .to_string()
                .into(),
            )
            .map_err(Box::new)?);
    };

    if let Some(cached) = state.reviews_cache.read().await.as_ref() {
        if (Utc::now() - cached.fetched_at).num_seconds() < REVIEWS_TTL_SECONDS {
            return snapshot_response(&cached.snapshot);
        }
    }

    match fetch_place_reviews(&state.http_client, api_key, place_id).await {
        Ok(snapshot) => {
            *state.reviews_cache.write().await = Some(CachedSnapshot {
                snapshot: snapshot.clone(),
                fetched_at: Utc::now(),
            });
            snapshot_response(&snapshot)
        }
        Err((status, message)) => {
            tracing::error!("Failed to fetch reviews: {}", message);
            Ok(Response::builder()
                .status(status)
                .header("Content-Type", "application/json")
                .header("Access-Control-Allow-Origin", "*")
                .body(serde_json::json!({"error": message}).to_string().into())
                .map_err(Box::new)?)
        }
    }
}

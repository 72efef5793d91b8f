use std::sync::Arc;

use caliente_shared::{contact, image_proxy, reviews, AppState};
use fleet_block::vessels;
use lambda_http::{
    http::{header::HeaderValue, Method, StatusCode},
    Body, Error, Request, Response,
};

fn with_cors_headers(mut resp: Response<Body>) -> Response<Body> {
    let headers = resp.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type,Accept"),
    );
    resp
}

fn finalize_response(resp: Result<Response<Body>, Error>) -> Result<Response<Body>, Error> {
    resp.map(with_cors_headers)
}

/// Main Lambda handler - routes requests to the fleet, contact, reviews and
/// asset endpoints. Everything here is public; the marketing site has no
/// authenticated surface.
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let body = event.body();
    tracing::info!("🚀 API Lambda invoked - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if method == "OPTIONS" {
        let resp = Response::builder()
            .status(StatusCode::OK)
            .body(Body::Empty)
            .map_err(Box::new)?;
        return Ok(with_cors_headers(resp));
    }

    // Image proxy route (public - serves catalog assets from S3)
    if let Some(image_path) = path.strip_prefix("/proxy-image/") {
        return finalize_response(
            image_proxy::proxy_image(&state.s3_client, &state.config.bucket_name, image_path)
                .await,
        );
    }

    // Contact form route
    if path == "/contact" {
        return match method {
            &Method::POST => finalize_response(
                contact::handle_contact(&state.ses_client, &state.config, body).await,
            ),
            _ => finalize_response(method_not_allowed()),
        };
    }

    // Reviews proxy route
    if path == "/reviews" {
        return match method {
            &Method::GET => finalize_response(reviews::handle_reviews(&state).await),
            _ => finalize_response(method_not_allowed()),
        };
    }

    // Fleet catalog routes
    if path.starts_with("/vessels") {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        return match (method, parts.as_slice()) {
            // GET /vessels - full catalog plus derived price tiers
            (&Method::GET, ["vessels"]) => finalize_response(
                vessels::list_vessels(
                    &state.dynamo_client,
                    &state.config.table_name,
                    &state.config.assets_base_url,
                )
                .await,
            ),
            // GET /vessels/{slug} - single vessel
            (&Method::GET, ["vessels", slug]) => finalize_response(
                vessels::get_vessel(
                    &state.dynamo_client,
                    &state.config.table_name,
                    &state.config.assets_base_url,
                    slug,
                )
                .await,
            ),
            _ => finalize_response(not_found()),
        };
    }

    // No matching route
    tracing::warn!("⚠️ No route matched - Method: {} Path: {}", method, path);
    finalize_response(not_found())
}

fn method_not_allowed() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "application/json")
        .body(
            serde_json::json!({"error": "Method not allowed"})
                .to_string()
                .into(),
        )
        .map_err(Box::new)?)
}

fn not_found() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .body(serde_json::json!({"error": "Not found"}).to_string().into())
        .map_err(Box::new)?)
}

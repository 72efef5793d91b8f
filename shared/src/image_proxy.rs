use aws_sdk_s3::Client as S3Client;
use lambda_http::{http::StatusCode, Body, Error, Response};

/// HTTP Handler: GET /proxy-image/{key}
/// Serves a public asset straight out of the bucket so the catalog can hand
/// the browser stable same-origin URLs.
pub async fn proxy_image(
    client: &S3Client,
    bucket_name: &str,
    key: &str,
) -> Result<Response<Body>, Error> {
    if key.is_empty() {
        return Ok(Response::builder()
            .status(StatusCode::BAD_REQUEST)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::json!({"error": "Missing image path"}).to_string().into())
            .map_err(Box::new)?);
    }

    match client.get_object().bucket(bucket_name).key(key).send().await {
        Ok(output) => {
            let content_type = output
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = output
                .body
                .collect()
                .await
                .map_err(|e| format!("Failed to read object body: {}", e))?;

            Ok(Response::builder()
                .status(StatusCode::OK)
                .header("Content-Type", content_type)
                .header("Cache-Control", "public, max-age=86400")
                .header("Access-Control-Allow-Origin", "*")
                .body(Body::Binary(data.into_bytes().to_vec()))
                .map_err(Box::new)?)
        }
        Err(e) => {
            tracing::warn!("Image not found in bucket {}: {} ({})", bucket_name, key, e);
            Ok(Response::builder()
                .status(StatusCode::NOT_FOUND)
                .header("Content-Type", "application/json")
                .header("Access-Control-Allow-Origin", "*")
                .body(serde_json::json!({"error": "Image not found"}).to_string().into())
                .map_err(Box::new)?)
        }
    }
}

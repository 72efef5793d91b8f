pub mod config;
pub mod contact;
pub mod email;
pub mod image_proxy;
pub mod reviews;

use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_sesv2::Client as SesClient;
use tokio::sync::RwLock;

pub use config::AppConfig;

/// Shared application state: every external client constructed once by the
/// composition root and injected into handlers by reference.
pub struct AppState {
    pub dynamo_client: DynamoClient,
    pub s3_client: S3Client,
    pub ses_client: SesClient,
    pub http_client: reqwest::Client,
    pub config: AppConfig,
    pub reviews_cache: RwLock<Option<reviews::CachedSnapshot>>,
}

impl AppState {
    pub async fn new() -> Self {
        let aws_config = aws_config::load_from_env().await;

        Self {
            dynamo_client: DynamoClient::new(&aws_config),
            s3_client: S3Client::new(&aws_config),
            ses_client: SesClient::new(&aws_config),
            http_client: reqwest::Client::new(),
            config: AppConfig::from_env(),
            reviews_cache: RwLock::new(None),
        }
    }
}

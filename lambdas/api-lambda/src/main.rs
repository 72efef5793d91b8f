use std::sync::Arc;

use caliente_shared::AppState;
use lambda_http::{run, service_fn, tracing, Error};

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let state = Arc::new(AppState::new().await);

    run(service_fn(move |event| {
        let state = state.clone();
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}

//! Shared utilities for lifecycle integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::sync::Notify;

/// Build a test app with a fast root route and a `/slow` route that
/// signals `entered` and then takes `delay` to respond.
pub fn test_app(entered: Arc<Notify>, delay: Duration) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route(
            "/slow",
            get(move || {
                let entered = entered.clone();
                async move {
                    entered.notify_one();
                    tokio::time::sleep(delay).await;
                    "slow ok"
                }
            }),
        )
}

/// Poll `url` until the server answers, panicking after ~2 seconds.
#[allow(dead_code)]
pub async fn wait_for_server(url: &str) {
    for _ in 0..40 {
        if let Ok(res) = reqwest::get(url).await {
            if res.status().is_success() {
                return;
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("server at {url} did not start");
}

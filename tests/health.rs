mod common;

use std::sync::Arc;

use axum::extract::State;
use storefront_api::{routes::health::health_check, state::AppState};

use common::StubCatalog;

#[tokio::test]
async fn health_check_returns_ok() {
    let state = AppState::new(Arc::new(StubCatalog::default()), false);
    let response = health_check(State(state)).await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
    assert!(!data.backend_configured);
}

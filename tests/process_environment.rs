//! Reads `ENVIRONMENT` from the real process environment.
//!
//! Kept in its own test binary with a single test: nothing else in this
//! process touches the variable, so setting it cannot race other tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use hello_world_api::{create_router, AppConfig, AppState};

async fn fetch_info(app: &Router) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/info")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn info_follows_process_environment() {
    // One router for the whole test: the variable is read per request
    let app = create_router(AppState::new(AppConfig::default()));

    std::env::remove_var("ENVIRONMENT");
    assert_eq!(fetch_info(&app).await["environment"], "development");

    std::env::set_var("ENVIRONMENT", "staging");
    assert_eq!(fetch_info(&app).await["environment"], "staging");

    std::env::set_var("ENVIRONMENT", "production");
    assert_eq!(
        fetch_info(&app).await,
        json!({
            "service": "FastAPI Hello World",
            "version": "1.0.0",
            "environment": "production"
        })
    );

    std::env::remove_var("ENVIRONMENT");
}

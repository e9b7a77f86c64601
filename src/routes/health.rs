//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use axum::Json;
use serde::Serialize;

use crate::config::{SERVICE_NAME, STATUS_HEALTHY};

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond to HTTP.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: STATUS_HEALTHY,
        service: SERVICE_NAME,
    })
}

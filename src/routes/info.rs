//! Service information endpoint.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::config::{SERVICE_TITLE, SERVICE_VERSION};
use crate::state::AppState;

/// Service information response.
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    service: &'static str,
    version: &'static str,
    environment: String,
}

/// Service info handler.
///
/// The environment is looked up on every call rather than cached at startup.
#[instrument(name = "info::info", skip(state))]
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let environment = state.environment();
    tracing::debug!(%environment, "Resolved environment");

    Json(InfoResponse {
        service: SERVICE_TITLE,
        version: SERVICE_VERSION,
        environment,
    })
}

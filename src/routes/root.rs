//! Root greeting endpoint.

use axum::Json;
use serde::Serialize;

use crate::config::{ROOT_MESSAGE, SERVICE_VERSION, STATUS_HEALTHY};

/// Greeting response.
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    message: &'static str,
    version: &'static str,
    status: &'static str,
}

/// Root handler.
///
/// Returns the greeting together with the service version, so hitting the
/// service in a browser shows it is up.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE,
        version: SERVICE_VERSION,
        status: STATUS_HEALTHY,
    })
}

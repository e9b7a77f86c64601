//! hello-world-api: a minimal informational HTTP service.
//!
//! Serves a greeting at `/`, a liveness probe at `/health`, and service
//! metadata at `/api/v1/info`, where the reported environment comes from the
//! `ENVIRONMENT` variable at request time. The router is exported so tests and
//! other hosts can serve the application without the bundled binary.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

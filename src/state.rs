//! Shared application state for request handlers.

use std::fmt;
use std::sync::Arc;

use crate::config::{AppConfig, DEFAULT_ENVIRONMENT, ENVIRONMENT_VAR};

/// Lookup of a process-level configuration variable by name.
pub type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the loaded configuration and the variable lookup used by the info
/// endpoint. The lookup runs on every request, so changes to the process
/// environment are visible without a restart.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    env: EnvLookup,
}

impl AppState {
    /// Creates state that reads variables from the process environment.
    pub fn new(config: AppConfig) -> Self {
        Self::with_env_lookup(config, |name| std::env::var(name).ok())
    }

    /// Creates state with a custom variable lookup.
    pub fn with_env_lookup<F>(config: AppConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            config: Arc::new(config),
            env: Arc::new(lookup),
        }
    }

    /// Current deployment environment, `development` when unset.
    pub fn environment(&self) -> String {
        (self.env)(ENVIRONMENT_VAR).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

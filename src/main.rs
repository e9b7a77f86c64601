//! hello-world-api entry point.
//!
//! Initializes tracing, loads the optional configuration file, builds the
//! Axum router and serves it until SIGINT/SIGTERM.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_world_api::config::{AppConfig, LoggingConfig, DEFAULT_BIND_ADDR, DEFAULT_LOG_FILTER};
use hello_world_api::http::start_server;
use hello_world_api::{create_router, AppState};

/// hello-world-api: greeting, health check and service info over HTTP
#[derive(Parser, Debug)]
#[command(name = "hello-world-api", version, about)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "hello_world_api=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(filter: &str, logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config is needed before tracing to pick the log format
    let config = AppConfig::load_or_default(args.config.as_deref())?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    match &args.config {
        Some(path) => tracing::info!(path = %path, "Loaded configuration"),
        None => tracing::info!(
            default_addr = DEFAULT_BIND_ADDR,
            "No configuration file given, using defaults"
        ),
    }

    let state = AppState::new(config.clone());
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %state.environment(),
        "Initialized application state"
    );

    let app = create_router(state);

    start_server(app, &config.http).await?;

    Ok(())
}

//! RepoGateway API Server
//!
//! Main binary for running the gateway in production or development.
//!
//! # Environment Variables
//!
//! - `GATEWAY_PORT`: Port to listen on (default: 8080)
//! - `GATEWAY_HOST`: Host to bind to (default: 0.0.0.0)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use auth_handler::GitHubTokenValidator;
use repo_gateway_api::{ApiConfig, ApiServer, AppState, DEFAULT_PORT};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    // Load configuration from environment
    let config = ApiConfig {
        port: env::var("GATEWAY_PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid GATEWAY_PORT: {}", e))?,
        host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
    };

    // Tokens arrive with each request; the validator itself holds no
    // credentials and is shared across all handlers.
    let state = AppState::new(Arc::new(GitHubTokenValidator::new()));
    let server = ApiServer::new(config, state);

    tracing::info!("Starting RepoGateway API server");

    server.serve().await
}

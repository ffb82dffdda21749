//! RepoGateway REST API
//!
//! This crate provides the HTTP façade that forwards repository and
//! pull-request operations to the GitHub REST API on behalf of a
//! caller-supplied access token. It exposes four operations — create
//! repository, delete repository, list repositories, list open pull
//! requests — each translating one HTTP request into one upstream call.
//!
//! # Architecture
//!
//! This crate exists in the HTTP layer and handles:
//! - HTTP request/response translation
//! - Error mapping from upstream errors to HTTP status codes
//! - Routing and server configuration
//!
//! Token validation lives in `auth_handler` and all upstream access goes
//! through the `github_client` capability trait; this crate never touches
//! the upstream SDK directly. No state is retained between requests.

use std::sync::Arc;

use auth_handler::TokenValidator;

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod translation;

// Re-export key types for convenience
pub use errors::{ApiError, ErrorBody};
pub use models::{request, response};
pub use server::{ApiConfig, ApiServer};

/// Default API port
pub const DEFAULT_PORT: u16 = 8080;

/// Application state shared across handlers.
///
/// Holds the injected token validator; everything else is created per
/// request from the validated token. The validator itself is stateless, so
/// cloning the state is cheap and requires no locking.
#[derive(Clone)]
pub struct AppState {
    /// Validates caller-supplied tokens and produces request-scoped client handles
    pub validator: Arc<dyn TokenValidator>,
}

impl AppState {
    /// Create new application state with the given token validator.
    pub fn new(validator: Arc<dyn TokenValidator>) -> Self {
        Self { validator }
    }
}

//! HTTP routing configuration
//!
//! This module defines all HTTP routes and their corresponding handlers.
//!
//! # Route Structure
//!
//! - GET    /                                             - Index
//! - GET    /health                                       - Health check
//! - POST   /repositories/:token                          - Create repository
//! - DELETE /repositories/:token                          - Delete repository
//! - GET    /repositories/:token                          - List own repositories
//! - GET    /pull-requests/:username/:repo_name/:token    - List open pull requests
//!
//! Token placement is path-based on every authenticated route; there is no
//! header-based authentication layer.

use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{handlers, middleware as api_middleware, AppState};

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;

/// Create the complete API router with all routes configured.
///
/// This function sets up:
/// - All endpoint routes
/// - CORS configuration
/// - Request tracing
/// - Timeout handling
pub fn create_router(state: AppState) -> Router {
    // Configure CORS for web UI support
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(false)
        // Cache preflight responses for 1 hour
        .max_age(Duration::from_secs(3600));

    // Configure request tracing
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new())
        .on_response(DefaultOnResponse::new());

    // Configure request timeout (30 seconds)
    let timeout_layer = TimeoutLayer::new(Duration::from_secs(30));

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route(
            "/repositories/:token",
            get(handlers::list_repositories)
                .post(handlers::create_repository)
                .delete(handlers::delete_repository),
        )
        .route(
            "/pull-requests/:username/:repo_name/:token",
            get(handlers::list_pull_requests),
        )
        .layer(middleware::from_fn(api_middleware::trace_requests))
        .layer(timeout_layer)
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

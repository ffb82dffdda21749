//! Authentication handling for RepoGateway.
//!
//! This crate owns token validation: turning a caller-supplied access token
//! into a request-scoped, validated GitHub client handle.
//!
//! ## Architecture
//!
//! This crate defines an interface trait that the HTTP layer depends on:
//! - Handlers receive a [`TokenValidator`] by injection and never construct
//!   upstream clients themselves.
//! - [`GitHubTokenValidator`] implements the trait against the real GitHub
//!   API; tests substitute their own implementations.
//!
//! Validation is stateless and happens fresh on every request — there is no
//! session, cache, or token store.

use std::sync::Arc;

use async_trait::async_trait;
use github_client::GitHubOperations;

mod github_token_validator;

pub use github_token_validator::GitHubTokenValidator;

/// Result type for authentication operations
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Errors that can occur during token validation.
///
/// Deliberately coarse: callers must not be able to distinguish a network
/// failure from bad credentials, so everything past the missing-token check
/// collapses into [`AuthError::InvalidCredentials`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("No access token was provided")]
    MissingToken,

    #[error("Invalid credentials provided")]
    InvalidCredentials,
}

/// Token validation service interface.
///
/// A successful validation yields a client handle bound to the validated
/// token. The handle is owned by the single request that triggered the
/// validation and is dropped when that request completes; it is never cached
/// or shared across requests.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Validate an access token against the upstream user endpoint.
    ///
    /// # Parameters
    /// - `token`: the caller-supplied access token
    ///
    /// # Returns
    /// A validated client handle exposing the upstream operations.
    ///
    /// # Errors
    /// Returns [`AuthError::MissingToken`] for an empty token (before any
    /// upstream call), and [`AuthError::InvalidCredentials`] for any other
    /// failure.
    async fn validate(&self, token: &str) -> AuthResult<Arc<dyn GitHubOperations>>;
}

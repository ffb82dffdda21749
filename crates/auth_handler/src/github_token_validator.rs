//! GitHub-backed token validator implementation.
//!
//! Provides the concrete [`TokenValidator`] that checks tokens with a single
//! "get current user" call against the GitHub REST API.

use std::sync::Arc;

use async_trait::async_trait;
use github_client::{
    create_token_client, create_token_client_with_base_uri, GitHubClient, GitHubOperations,
};
use secrecy::{ExposeSecret, SecretString};

use crate::{AuthError, AuthResult, TokenValidator};

#[cfg(test)]
#[path = "github_token_validator_tests.rs"]
mod tests;

/// Token validator backed by the GitHub REST API.
///
/// Builds a personal-token client for each validation and issues one
/// get-current-user call. Any failure past the empty-token check — network,
/// 401, malformed token — is reported as [`AuthError::InvalidCredentials`]
/// without further detail.
///
/// # Examples
///
/// ```rust,no_run
/// use auth_handler::{GitHubTokenValidator, TokenValidator};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let validator = GitHubTokenValidator::new();
///
/// let client = validator.validate("ghp_sometoken").await?;
/// let user = client.get_user().await?;
/// println!("authenticated as {}", user.login);
/// # Ok(())
/// # }
/// ```
pub struct GitHubTokenValidator {
    api_root: Option<String>,
}

impl GitHubTokenValidator {
    /// Create a validator that talks to the public GitHub API.
    pub fn new() -> Self {
        Self { api_root: None }
    }

    /// Create a validator aimed at a non-default API root.
    ///
    /// Used for GitHub Enterprise hosts and for mock servers in tests.
    pub fn with_api_root(api_root: impl Into<String>) -> Self {
        Self {
            api_root: Some(api_root.into()),
        }
    }
}

impl Default for GitHubTokenValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenValidator for GitHubTokenValidator {
    async fn validate(&self, token: &str) -> AuthResult<Arc<dyn GitHubOperations>> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        // Held as a secret from here on so the raw token cannot leak through
        // Debug output or log fields.
        let token = SecretString::from(token.to_string());

        let octocrab = match &self.api_root {
            Some(root) => create_token_client_with_base_uri(token.expose_secret(), root),
            None => create_token_client(token.expose_secret()),
        }
        .map_err(|_| AuthError::InvalidCredentials)?;

        let client = GitHubClient::new(octocrab);

        // One upstream round trip decides validity; the caller cannot tell a
        // rejected token from an unreachable API.
        client
            .get_user()
            .await
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(Arc::new(client))
    }
}

impl std::fmt::Debug for GitHubTokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubTokenValidator")
            .field(
                "api_root",
                &self.api_root.as_deref().unwrap_or("https://api.github.com"),
            )
            .finish()
    }
}

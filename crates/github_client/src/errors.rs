//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub API
//! through the github_client crate. Errors keep the upstream HTTP status code where one
//! is available so that callers can translate GitHub failures into their own responses.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// The GitHub API reports most failures with an HTTP status code and a message;
/// those are preserved in [`Error::ApiError`] (with `NotFound` split out because
/// callers routinely branch on it). Failures that never reached GitHub, or whose
/// response could not be interpreted, collapse into the remaining variants.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.get_repository("octocat", "spoon-knife").await {
///     Ok(repo) => println!("found {}", repo.name),
///     Err(Error::NotFound) => println!("no such repository"),
///     Err(Error::ApiError { status, message }) => eprintln!("GitHub said {status}: {message}"),
///     Err(err) => eprintln!("request failed: {err}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitHub rejected the request with an HTTP error status.
    ///
    /// `status` is the upstream status code (401, 403, 422, ...) and `message`
    /// is the error message GitHub returned alongside it. A 404 is reported as
    /// [`Error::NotFound`] instead.
    #[error("GitHub API request failed with status {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when the client cannot be constructed from the supplied
    /// access token, before any request is made. The contained string provides
    /// specific details about the failure.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The request failed without a GitHub error response.
    ///
    /// Covers transport-level failures (connection refused, timeouts) and
    /// responses whose structure doesn't match what the client expects.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// Returned when a GitHub API request yields a 404 status code, meaning the
    /// repository or user does not exist or is not visible to the supplied token.
    #[error("Resource not found")]
    NotFound,
}

impl Error {
    /// The upstream HTTP status code associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ApiError { status, .. } => Some(*status),
            Error::NotFound => Some(404),
            _ => None,
        }
    }
}

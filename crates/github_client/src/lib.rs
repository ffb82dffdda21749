//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making authenticated requests to GitHub
//! on behalf of a caller-supplied personal access token, together with the
//! [`GitHubOperations`] capability trait that the rest of the system depends
//! on instead of the concrete SDK.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use tracing::{error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{
    PullRequest, PullRequestListOptions, Repository, RepositoryCreatePayload,
    RepositoryListOptions, User,
};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// The capability interface for the upstream GitHub API.
///
/// This trait exposes exactly the operations the service needs so that
/// handlers and tests do not depend on the concrete upstream SDK. It has no
/// behavior of its own beyond delegation; every method is a single upstream
/// round trip with no client-side retry or caching.
#[async_trait]
pub trait GitHubOperations: Send + Sync {
    /// Fetches the user the client is authenticated as.
    ///
    /// # Errors
    /// Returns an [`Error::ApiError`] carrying the upstream status if the
    /// token is rejected, or [`Error::InvalidResponse`] on transport failure.
    async fn get_user(&self) -> Result<User, Error>;

    /// Fetches details for a specific repository.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the repository does not exist or is not
    /// visible to the token, or an [`Error::ApiError`] for other API failures.
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository, Error>;

    /// Creates a new repository in the authenticated user's account.
    ///
    /// The owner is derived upstream from the token; it is not caller-supplied.
    /// This call is not idempotent: creating the same name twice fails with a
    /// 422 from GitHub on the second attempt.
    ///
    /// # Errors
    /// Returns an [`Error::ApiError`] carrying the upstream status (403 for
    /// missing scopes, 422 for an already-taken or invalid name, ...).
    async fn create_repository(
        &self,
        payload: &RepositoryCreatePayload,
    ) -> Result<Repository, Error>;

    /// Deletes a repository. Irreversible.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the repository does not exist, or an
    /// [`Error::ApiError`] for other API failures (403 without `delete_repo`
    /// scope).
    async fn delete_repository(&self, owner: &str, repo: &str) -> Result<(), Error>;

    /// Lists the repositories of an account.
    ///
    /// Returns a single page, ordered per `options`. Read-only.
    ///
    /// # Errors
    /// Returns an [`Error::ApiError`] carrying the upstream status on failure.
    async fn list_repositories(
        &self,
        owner: &str,
        options: &RepositoryListOptions,
    ) -> Result<Vec<Repository>, Error>;

    /// Lists the pull requests of a repository.
    ///
    /// Returns a single page, filtered and ordered per `options`. Read-only.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the repository does not exist, or an
    /// [`Error::ApiError`] for other API failures.
    async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        options: &PullRequestListOptions,
    ) -> Result<Vec<PullRequest>, Error>;
}

/// A client for interacting with the GitHub API, authenticated with a
/// personal access token.
///
/// Instances are cheap to build and intended to live for a single request:
/// one validated token maps to one client, which is dropped when the request
/// completes.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Wraps an already-built `Octocrab` instance.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GitHubOperations for GitHubClient {
    #[instrument(skip(self))]
    async fn get_user(&self) -> Result<User, Error> {
        let result: OctocrabResult<User> = self.client.get("/user", None::<&()>).await;
        match result {
            Ok(user) => Ok(user),
            Err(e) => Err(map_octocrab_error("Failed to get authenticated user", e)),
        }
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository, Error> {
        let result = self.client.repos(owner, repo).get().await;
        match result {
            Ok(r) => Ok(Repository::from(r)),
            Err(e) => Err(map_octocrab_error("Failed to get repository", e)),
        }
    }

    /// Creates the repository via the REST API directly, the same route the
    /// web UI's "new repository" flow uses for personal accounts.
    #[instrument(skip(self, payload), fields(repo = %payload.name))]
    async fn create_repository(
        &self,
        payload: &RepositoryCreatePayload,
    ) -> Result<Repository, Error> {
        let path = "/user/repos";
        let response: OctocrabResult<octocrab::models::Repository> =
            self.client.post(path, Some(payload)).await;
        match response {
            Ok(r) => {
                info!(repo = %payload.name, "Created repository");
                Ok(Repository::from(r))
            }
            Err(e) => Err(map_octocrab_error("Failed to create repository", e)),
        }
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn delete_repository(&self, owner: &str, repo: &str) -> Result<(), Error> {
        match self.client.repos(owner, repo).delete().await {
            Ok(()) => {
                info!(owner = owner, repo = repo, "Deleted repository");
                Ok(())
            }
            Err(e) => Err(map_octocrab_error("Failed to delete repository", e)),
        }
    }

    #[instrument(skip(self, options), fields(owner = %owner))]
    async fn list_repositories(
        &self,
        owner: &str,
        options: &RepositoryListOptions,
    ) -> Result<Vec<Repository>, Error> {
        let path = format!("/users/{}/repos", owner);
        let result: OctocrabResult<Vec<Repository>> = self.client.get(path, Some(options)).await;
        match result {
            Ok(repositories) => {
                info!(
                    owner = owner,
                    count = repositories.len(),
                    "Retrieved repositories"
                );
                Ok(repositories)
            }
            Err(e) => Err(map_octocrab_error("Failed to list repositories", e)),
        }
    }

    #[instrument(skip(self, options), fields(owner = %owner, repo = %repo))]
    async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        options: &PullRequestListOptions,
    ) -> Result<Vec<PullRequest>, Error> {
        let path = format!("/repos/{}/{}/pulls", owner, repo);
        let result: OctocrabResult<Vec<PullRequest>> = self.client.get(path, Some(options)).await;
        match result {
            Ok(pull_requests) => {
                info!(
                    owner = owner,
                    repo = repo,
                    count = pull_requests.len(),
                    "Retrieved pull requests"
                );
                Ok(pull_requests)
            }
            Err(e) => Err(map_octocrab_error("Failed to list pull requests", e)),
        }
    }
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// The token is not checked here; the first request made with the client will
/// surface an invalid token as an API error.
///
/// # Errors
/// Returns an [`Error::AuthError`] if the client cannot be built.
#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|e| Error::AuthError(format!("Failed to build GitHub client: {}", e)))
}

/// Creates a token-authenticated `Octocrab` client aimed at a non-default API
/// root. Used to talk to GitHub Enterprise hosts and to mock servers in tests.
///
/// # Errors
/// Returns an [`Error::AuthError`] if the base URI is invalid or the client
/// cannot be built.
#[instrument(skip(token))]
pub fn create_token_client_with_base_uri(token: &str, base_uri: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|e| Error::AuthError(format!("Invalid GitHub API base URI: {}", e)))?
        .personal_token(token.to_string())
        .build()
        .map_err(|e| Error::AuthError(format!("Failed to build GitHub client: {}", e)))
}

/// Logs an octocrab failure and translates it into this crate's [`Error`].
///
/// GitHub error responses keep their status code and message; a 404 becomes
/// [`Error::NotFound`]. Everything that never produced a GitHub error body
/// (URI parsing, transport, encoding issues) collapses to
/// [`Error::InvalidResponse`].
fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            error!(
                error_message = source.message,
                status = %source.status_code,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            );
            if source.status_code == http::StatusCode::NOT_FOUND {
                Error::NotFound
            } else {
                Error::ApiError {
                    status: source.status_code.as_u16(),
                    message: source.message,
                }
            }
        }
        octocrab::Error::UriParse { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. Failed to parse URI.",
                message
            );
            Error::InvalidResponse
        }
        octocrab::Error::InvalidHeaderValue { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. One of the header values was invalid.",
                message
            );
            Error::InvalidResponse
        }
        octocrab::Error::InvalidUtf8 { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. The message wasn't valid UTF-8.",
                message
            );
            Error::InvalidResponse
        }
        _ => {
            error!(error_message = e.to_string(), message);
            Error::InvalidResponse
        }
    }
}

//! # Models
//!
//! This module contains the data models exchanged with the GitHub API: users,
//! repositories, pull requests, and the option structs that shape list calls.
//! They are serializable so they can flow straight through to HTTP responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a GitHub user account.
///
/// This struct contains basic information about a GitHub user, including
/// their unique ID and login name. It's used for the authenticated caller
/// as well as for repository owners and pull request authors.
///
/// # Examples
///
/// ```rust
/// use github_client::models::User;
///
/// let user = User {
///     id: 12345,
///     login: "octocat".to_string(),
/// };
///
/// println!("User: {} (ID: {})", user.login, user.id);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct User {
    /// The unique numeric ID of the user
    pub id: u64,
    /// The login name of the user
    pub login: String,
}

/// Represents a GitHub repository.
///
/// Carries the subset of repository fields this service exposes: the name,
/// the owning account, visibility, and the upstream-assigned URL. The
/// authoritative copy of every field lives on GitHub; nothing here is
/// persisted locally.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Repository {
    /// The name of the repository (without owner)
    pub name: String,
    /// The full name of the repository (owner/name)
    pub full_name: Option<String>,
    /// The account that owns the repository
    pub owner: Option<User>,
    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,
    /// The upstream-assigned web URL of the repository
    pub html_url: Option<Url>,
}

impl From<octocrab::models::Repository> for Repository {
    fn from(value: octocrab::models::Repository) -> Self {
        Self {
            name: value.name.clone(),
            full_name: value.full_name.or(Some(value.name)),
            owner: value.owner.map(|owner| User {
                id: *owner.id,
                login: owner.login,
            }),
            private: value.private.unwrap_or(false),
            html_url: value.html_url,
        }
    }
}

/// Represents a GitHub pull request.
///
/// Only the fields surfaced by the pull request listing are kept; the rest of
/// GitHub's (large) pull request payload is dropped at deserialization time.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PullRequest {
    /// The unique numeric ID of the pull request
    pub id: u64,
    /// The pull request number within its repository
    pub number: u64,
    /// The title of the pull request
    pub title: Option<String>,
    /// The state of the pull request ("open" or "closed")
    pub state: Option<String>,
    /// The upstream-assigned web URL of the pull request
    pub html_url: Option<Url>,
    /// The account that opened the pull request
    pub user: Option<User>,
    /// When the pull request was opened
    pub created_at: Option<DateTime<Utc>>,
}

/// Represents the payload for creating a new repository via the REST API.
/// Use `Default::default()` and modify fields as needed.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct RepositoryCreatePayload {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>, // Defaults to false if None
}

/// Options for listing the repositories of an account.
///
/// The defaults match what the service always requests: repositories the
/// account owns, most recently updated first.
#[derive(Serialize, Debug, Clone)]
pub struct RepositoryListOptions {
    /// Which repositories to include ("owner", "member", "all")
    #[serde(rename = "type")]
    pub list_type: String,
    /// Sort key ("created", "updated", "pushed", "full_name")
    pub sort: String,
    /// Sort direction ("asc" or "desc")
    pub direction: String,
}

impl Default for RepositoryListOptions {
    fn default() -> Self {
        Self {
            list_type: "owner".to_string(),
            sort: "updated".to_string(),
            direction: "desc".to_string(),
        }
    }
}

/// Options for listing the pull requests of a repository.
///
/// The defaults match what the service always requests: open pull requests,
/// newest first.
#[derive(Serialize, Debug, Clone)]
pub struct PullRequestListOptions {
    /// Which pull requests to include ("open", "closed", "all")
    pub state: String,
    /// Sort key ("created", "updated", "popularity", "long-running")
    pub sort: String,
    /// Sort direction ("asc" or "desc")
    pub direction: String,
}

impl Default for PullRequestListOptions {
    fn default() -> Self {
        Self {
            state: "open".to_string(),
            sort: "created".to_string(),
            direction: "desc".to_string(),
        }
    }
}

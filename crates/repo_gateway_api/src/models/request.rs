//! Inbound request body types.

use serde::{Deserialize, Serialize};

/// Body of `POST /repositories/{token}`.
///
/// The owner is never part of the request; it is derived upstream from the
/// authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRepositoryRequest {
    /// Name of the repository to create. Must be non-empty.
    pub name: String,

    /// Whether the repository should be private. Defaults to public.
    pub private: Option<bool>,
}

/// Body of `DELETE /repositories/{token}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRepositoryRequest {
    /// Name of the repository to delete. Must be non-empty.
    pub name: String,

    /// Owner of the repository. When absent, the authenticated user's own
    /// account is assumed.
    pub owner: Option<String>,
}

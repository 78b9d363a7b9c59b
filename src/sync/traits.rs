// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use crate::store::models::NewPost;

/// Failure of a single request against the remote collection
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Transport(String),

    #[error("HTTP {status}: {}", detail.as_deref().unwrap_or("request failed"))]
    Status { status: u16, detail: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("remote store did not return a key for the new record")]
    MissingKey,

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// The remote document store holding the post collection
#[async_trait]
pub trait RemoteCollection: Send + Sync {
    /// Fetch every record as `(remote_key, sub-document)` pairs in the store's order
    ///
    /// An empty or absent collection is an empty vector.
    async fn list(&self) -> Result<Vec<(String, NewPost)>, RemoteError>;

    /// Store a new record and return the key the store minted for it
    async fn create(&self, post: &NewPost) -> Result<String, RemoteError>;

    /// Replace the title of the record addressed by `remote_key`
    async fn update_title(&self, remote_key: &str, title: &str) -> Result<(), RemoteError>;

    /// Remove the record addressed by `remote_key`
    async fn delete(&self, remote_key: &str) -> Result<(), RemoteError>;
}

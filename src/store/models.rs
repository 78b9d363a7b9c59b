// SPDX-License-Identifier: GPL-3.0-only
use serde::{Deserialize, Serialize};

/// A post that has not been acknowledged by the remote store yet
///
/// This is also the sub-document shape the store keeps under each remote key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    /// Caller-assigned identifier, unique across the collection
    pub id: i64,

    /// Display title, unique across the collection (exact match)
    pub title: String,
}

impl NewPost {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Attach the key the remote store minted for this post
    pub fn into_synced(self, remote_key: String) -> Post {
        Post {
            id: self.id,
            title: self.title,
            remote_key,
        }
    }
}

/// A post mirrored from the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Caller-assigned identifier, immutable after creation
    pub id: i64,

    /// Display title, the only mutable field
    pub title: String,

    /// Opaque key assigned by the remote store; addresses the record for update and delete
    pub remote_key: String,
}

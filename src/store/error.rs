// SPDX-License-Identifier: GPL-3.0-only
use std::fmt;
use crate::sync::RemoteError;

/// The remote write a `SyncError::RemoteWriteFailed` came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Update,
    Delete,
}

impl fmt::Display for WriteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            WriteOp::Create => "save",
            WriteOp::Update => "update",
            WriteOp::Delete => "delete",
        };
        f.write_str(verb)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("ID already exists: {0}")]
    DuplicateId(i64),

    #[error("Title already exists: {0}")]
    DuplicateTitle(String),

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("No post with key {0}")]
    NotFound(String),

    #[error("Failed to load posts: {0}")]
    RemoteUnavailable(RemoteError),

    #[error("Failed to {op} post: {source}")]
    RemoteWriteFailed { op: WriteOp, source: RemoteError },
}

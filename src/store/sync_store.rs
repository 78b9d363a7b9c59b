// SPDX-License-Identifier: GPL-3.0-only
use std::sync::Arc;
use tracing::{error, info, warn};
use crate::store::error::{SyncError, WriteOp};
use crate::store::models::{NewPost, Post};
use crate::sync::traits::RemoteCollection;

/// Local mirror of the remote post collection
///
/// Every mutation goes to the remote store first; the cache changes only
/// after the store acknowledged it, so a failed call leaves the cache as it was.
pub struct SyncStore {
    remote: Arc<dyn RemoteCollection>,
    posts: Vec<Post>,
}

impl SyncStore {
    pub fn new(remote: Arc<dyn RemoteCollection>) -> Self {
        Self {
            remote,
            posts: Vec::new(),
        }
    }

    /// Cached posts in display order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, remote_key: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.remote_key == remote_key)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Replace the cache with the full remote collection, in the store's order
    pub async fn load(&mut self) -> Result<&[Post], SyncError> {
        let documents = self.remote.list().await.map_err(|e| {
            error!(error = %e, "Failed to load posts");
            SyncError::RemoteUnavailable(e)
        })?;

        self.posts = documents
            .into_iter()
            .map(|(key, post)| post.into_synced(key))
            .collect();

        info!(count = self.posts.len(), "Loaded posts");
        Ok(&self.posts)
    }

    /// Store a new post remotely and append it to the cache
    pub async fn create(&mut self, id: i64, title: &str) -> Result<Post, SyncError> {
        ensure_title(title)?;
        if self.posts.iter().any(|p| p.id == id) {
            warn!(id, "Rejected post with duplicate ID");
            return Err(SyncError::DuplicateId(id));
        }
        if self.posts.iter().any(|p| p.title == title) {
            warn!(id, title = %title, "Rejected post with duplicate title");
            return Err(SyncError::DuplicateTitle(title.to_string()));
        }

        let pending = NewPost::new(id, title);
        let remote_key = self.remote.create(&pending).await.map_err(|e| {
            error!(error = %e, id, "Failed to create post");
            SyncError::RemoteWriteFailed { op: WriteOp::Create, source: e }
        })?;

        let post = pending.into_synced(remote_key);
        self.posts.push(post.clone());

        info!(id, remote_key = %post.remote_key, "Post created");
        Ok(post)
    }

    /// Change the title of a cached post, remotely first
    pub async fn update(&mut self, remote_key: &str, new_title: &str) -> Result<Post, SyncError> {
        ensure_title(new_title)?;
        if self
            .posts
            .iter()
            .any(|p| p.remote_key != remote_key && p.title == new_title)
        {
            warn!(remote_key = %remote_key, title = %new_title, "Rejected update with duplicate title");
            return Err(SyncError::DuplicateTitle(new_title.to_string()));
        }
        let index = self.position(remote_key)?;

        self.remote
            .update_title(remote_key, new_title)
            .await
            .map_err(|e| {
                error!(error = %e, remote_key = %remote_key, "Failed to update post");
                SyncError::RemoteWriteFailed { op: WriteOp::Update, source: e }
            })?;

        let post = &mut self.posts[index];
        post.title = new_title.to_string();

        info!(id = post.id, remote_key = %remote_key, "Post updated");
        Ok(post.clone())
    }

    /// Delete a cached post remotely, then drop it from the cache
    pub async fn delete(&mut self, remote_key: &str) -> Result<Post, SyncError> {
        let index = self.position(remote_key)?;

        self.remote.delete(remote_key).await.map_err(|e| {
            error!(error = %e, remote_key = %remote_key, "Failed to delete post");
            SyncError::RemoteWriteFailed { op: WriteOp::Delete, source: e }
        })?;

        let post = self.posts.remove(index);

        info!(id = post.id, remote_key = %remote_key, "Post deleted");
        Ok(post)
    }

    fn position(&self, remote_key: &str) -> Result<usize, SyncError> {
        self.posts
            .iter()
            .position(|p| p.remote_key == remote_key)
            .ok_or_else(|| SyncError::NotFound(remote_key.to_string()))
    }
}

fn ensure_title(title: &str) -> Result<(), SyncError> {
    if title.trim().is_empty() {
        return Err(SyncError::EmptyTitle);
    }
    Ok(())
}

// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use crate::config::Config;
use crate::store::{NewPost, SyncStore};
use crate::sync::{RemoteCollection, RemoteError};

/// A request the in-memory remote received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    List,
    Create(NewPost),
    UpdateTitle(String, String),
    Delete(String),
}

#[derive(Default)]
struct RemoteState {
    documents: Vec<(String, NewPost)>,
    next_key: u64,
    failure: Option<RemoteError>,
    write_failure: Option<RemoteError>,
    calls: Vec<RemoteCall>,
}

/// In-memory remote collection minting keys "-K1", "-K2", ...
#[derive(Default)]
pub struct InMemoryRemote {
    state: Mutex<RemoteState>,
}

impl InMemoryRemote {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seed the remote with documents in the given order
    pub fn with_documents(documents: &[(&str, i64, &str)]) -> Arc<Self> {
        let remote = Self::default();
        {
            let mut state = remote.lock();
            state.documents = documents
                .iter()
                .map(|(key, id, title)| (key.to_string(), NewPost::new(*id, *title)))
                .collect();
        }
        Arc::new(remote)
    }

    /// Make every following request fail with `error` until `recover` is called
    pub fn fail_with(&self, error: RemoteError) {
        self.lock().failure = Some(error);
    }

    /// Make every following write fail with `error` while listing keeps working
    pub fn fail_writes_with(&self, error: RemoteError) {
        self.lock().write_failure = Some(error);
    }

    pub fn recover(&self) {
        let mut state = self.lock();
        state.failure = None;
        state.write_failure = None;
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.lock().calls.clone()
    }

    pub fn documents(&self) -> Vec<(String, NewPost)> {
        self.lock().documents.clone()
    }

    fn lock(&self) -> MutexGuard<'_, RemoteState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, call: RemoteCall) -> Result<MutexGuard<'_, RemoteState>, RemoteError> {
        let mut state = self.lock();
        let failure = match call {
            RemoteCall::List => state.failure.clone(),
            _ => state.failure.clone().or_else(|| state.write_failure.clone()),
        };
        state.calls.push(call);
        match failure {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl RemoteCollection for InMemoryRemote {
    async fn list(&self) -> Result<Vec<(String, NewPost)>, RemoteError> {
        let state = self.record(RemoteCall::List)?;
        Ok(state.documents.clone())
    }

    async fn create(&self, post: &NewPost) -> Result<String, RemoteError> {
        let mut state = self.record(RemoteCall::Create(post.clone()))?;
        state.next_key += 1;
        let key = format!("-K{}", state.next_key);
        state.documents.push((key.clone(), post.clone()));
        Ok(key)
    }

    async fn update_title(&self, remote_key: &str, title: &str) -> Result<(), RemoteError> {
        let mut state = self.record(RemoteCall::UpdateTitle(remote_key.to_string(), title.to_string()))?;
        if let Some((_, post)) = state.documents.iter_mut().find(|(key, _)| key == remote_key) {
            post.title = title.to_string();
        }
        Ok(())
    }

    async fn delete(&self, remote_key: &str) -> Result<(), RemoteError> {
        let mut state = self.record(RemoteCall::Delete(remote_key.to_string()))?;
        state.documents.retain(|(key, _)| key != remote_key);
        Ok(())
    }
}

/// Create a store over an in-memory remote, returning both
pub fn setup_test_store() -> (SyncStore, Arc<InMemoryRemote>) {
    let remote = InMemoryRemote::new();
    let store = SyncStore::new(Arc::clone(&remote) as Arc<dyn RemoteCollection>);
    (store, remote)
}

/// Create a store over a seeded in-memory remote and load it
pub async fn setup_loaded_store(documents: &[(&str, i64, &str)]) -> (SyncStore, Arc<InMemoryRemote>) {
    let remote = InMemoryRemote::with_documents(documents);
    let mut store = SyncStore::new(Arc::clone(&remote) as Arc<dyn RemoteCollection>);
    store.load().await.expect("Failed to load seeded store");
    (store, remote)
}

/// Create a test configuration pointing at a mock server
pub fn create_test_config(remote_base_url: &str) -> Config {
    Config {
        remote_base_url: remote_base_url.to_string(),
        request_timeout_secs: 5,
        log_level: "error".to_string(), // Reduce log noise in tests
        ..Config::default()
    }
}

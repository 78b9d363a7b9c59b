// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};
use url::Url;
use crate::config::Config;
use crate::store::models::NewPost;
use crate::sync::traits::{RemoteCollection, RemoteError};

/// Firebase-style REST collection: one JSON object keyed by generated push keys
#[derive(Debug, Clone)]
pub struct HttpRemoteCollection {
    client: Client,
    config: Config,
}

impl HttpRemoteCollection {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("postsync/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn build_request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Execute a request and turn transport failures and non-2xx statuses into `RemoteError`
    async fn send(&self, request: RequestBuilder) -> Result<Response, RemoteError> {
        let request = request.build().map_err(transport_error)?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(method = %method, url = %url, "Remote request");

        let response = self.client.execute(request).await.map_err(|e| {
            warn!(method = %method, url = %url, error = %e, "Remote request failed");
            transport_error(e)
        })?;

        let status = response.status();
        debug!(method = %method, url = %url, status = %status, "Remote response");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = error_detail(&text)
                .or_else(|| status.canonical_reason().map(str::to_string));
            warn!(method = %method, url = %url, status = %status, body = %text, "Remote store rejected request");
            return Err(RemoteError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct CreatedResponse {
    name: Option<String>,
}

#[derive(Serialize)]
struct TitlePatch<'a> {
    title: &'a str,
}

fn endpoint_error(e: anyhow::Error) -> RemoteError {
    RemoteError::InvalidEndpoint(e.to_string())
}

fn transport_error(e: reqwest::Error) -> RemoteError {
    if e.is_timeout() {
        RemoteError::Timeout
    } else {
        RemoteError::Transport(e.to_string())
    }
}

/// Extract the `error` field the store puts in failure bodies
fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|e| !e.is_empty())
}

/// Decode a collection body; `null` means the collection does not exist yet
fn decode_collection(body: &str) -> Result<Vec<(String, NewPost)>, RemoteError> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let documents: Option<Map<String, Value>> = serde_json::from_str(body)
        .map_err(|e| RemoteError::Decode(e.to_string()))?;

    let mut posts = Vec::new();
    for (key, value) in documents.unwrap_or_default() {
        match serde_json::from_value::<NewPost>(value) {
            Ok(post) => posts.push((key, post)),
            Err(e) => {
                warn!(remote_key = %key, error = %e, "Skipping malformed post document");
            }
        }
    }

    Ok(posts)
}

#[async_trait]
impl RemoteCollection for HttpRemoteCollection {
    async fn list(&self) -> Result<Vec<(String, NewPost)>, RemoteError> {
        let url = self.config.collection_url().map_err(endpoint_error)?;
        let response = self.send(self.build_request(Method::GET, url)).await?;
        let text = response.text().await.map_err(transport_error)?;

        let posts = decode_collection(&text)?;
        info!(count = posts.len(), "Fetched remote collection");
        Ok(posts)
    }

    async fn create(&self, post: &NewPost) -> Result<String, RemoteError> {
        let url = self.config.collection_url().map_err(endpoint_error)?;
        let response = self
            .send(self.build_request(Method::POST, url).json(post))
            .await?;

        let created: CreatedResponse = response
            .json()
            .await
            .map_err(|e| if e.is_timeout() {
                RemoteError::Timeout
            } else {
                RemoteError::Decode(e.to_string())
            })?;

        match created.name {
            Some(key) if !key.is_empty() => {
                info!(remote_key = %key, id = post.id, "Remote store created post");
                Ok(key)
            }
            _ => Err(RemoteError::MissingKey),
        }
    }

    async fn update_title(&self, remote_key: &str, title: &str) -> Result<(), RemoteError> {
        let url = self.config.record_url(remote_key).map_err(endpoint_error)?;
        self.send(self.build_request(Method::PATCH, url).json(&TitlePatch { title }))
            .await?;

        info!(remote_key = %remote_key, "Remote store updated post title");
        Ok(())
    }

    async fn delete(&self, remote_key: &str) -> Result<(), RemoteError> {
        let url = self.config.record_url(remote_key).map_err(endpoint_error)?;
        self.send(self.build_request(Method::DELETE, url)).await?;

        info!(remote_key = %remote_key, "Remote store deleted post");
        Ok(())
    }
}

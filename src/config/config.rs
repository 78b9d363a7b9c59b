// SPDX-License-Identifier: GPL-3.0-only
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base address of the remote document store (e.g., "https://<db>.firebaseio.com")
    pub remote_base_url: String,

    /// Collection path under the base address
    pub collection: String,

    /// Suffix appended to every resource path (".json" for Firebase REST)
    pub path_suffix: String,

    /// Fixed deadline for a single remote request, in seconds
    pub request_timeout_secs: u64,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from TOML file with environment variable overrides
    pub fn load() -> anyhow::Result<Self> {
        let config_path = std::env::var("POSTSYNC_CONFIG")
            .unwrap_or_else(|_| "postsync.toml".to_string());

        let mut config: Config = if std::path::Path::new(&config_path).exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            toml::from_str(&contents)?
        } else {
            Config::default()
        };

        if let Ok(val) = std::env::var("POSTSYNC_REMOTE_BASE_URL") {
            config.remote_base_url = val;
        }
        if let Ok(val) = std::env::var("POSTSYNC_COLLECTION") {
            config.collection = val;
        }
        if let Ok(val) = std::env::var("POSTSYNC_PATH_SUFFIX") {
            config.path_suffix = val;
        }
        if let Ok(val) = std::env::var("POSTSYNC_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = val.parse()?;
        }
        if let Ok(val) = std::env::var("POSTSYNC_LOG_LEVEL") {
            config.log_level = val;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        crate::utils::validate_base_url(&self.remote_base_url)?;

        let collection = self.collection.trim_matches('/');
        if collection.is_empty() {
            return Err(anyhow::anyhow!("Collection path must not be empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("Request timeout must be at least one second"));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Endpoint addressing the whole collection
    pub fn collection_url(&self) -> anyhow::Result<Url> {
        let mut segments = self.collection_segments();
        if let Some(last) = segments.last_mut() {
            last.push_str(&self.path_suffix);
        }
        self.endpoint(&segments)
    }

    /// Endpoint addressing a single record; the key is escaped as one path segment
    pub fn record_url(&self, remote_key: &str) -> anyhow::Result<Url> {
        let mut segments = self.collection_segments();
        segments.push(format!("{}{}", remote_key, self.path_suffix));
        self.endpoint(&segments)
    }

    fn collection_segments(&self) -> Vec<String> {
        self.collection
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn endpoint(&self, segments: &[String]) -> anyhow::Result<Url> {
        let mut url = crate::utils::validate_base_url(&self.remote_base_url)?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote_base_url: String::from("http://127.0.0.1:9000"),
            collection: String::from("posts"),
            path_suffix: String::from(".json"),
            request_timeout_secs: 10,
            log_level: String::from("info"),
        }
    }
}

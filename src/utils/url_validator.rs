// SPDX-License-Identifier: GPL-3.0-only
use url::Url;
use anyhow::{Result, Context};

/// Maximum allowed URL length
const MAX_URL_LENGTH: usize = 2048;

/// Validate the remote store base address
///
/// Checks:
/// - Only allows http/https schemes
/// - Requires a host
/// - Rejects query strings and fragments (paths are appended to the base)
/// - Validates URL length
pub fn validate_base_url(url_str: &str) -> Result<Url> {
    if url_str.len() > MAX_URL_LENGTH {
        return Err(anyhow::anyhow!("URL exceeds maximum length of {} characters", MAX_URL_LENGTH));
    }

    let url = Url::parse(url_str)
        .context("Invalid URL format")?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(anyhow::anyhow!(
                "Invalid URL scheme: {} (only http and https are allowed)",
                scheme
            ));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(anyhow::anyhow!("URL must have a host"));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(anyhow::anyhow!(
            "Base URL must not carry a query string or fragment"
        ));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_url_valid_https() {
        assert!(validate_base_url("https://example-default-rtdb.firebaseio.com").is_ok());
    }

    #[test]
    fn test_validate_base_url_valid_http_with_port() {
        let url = validate_base_url("http://127.0.0.1:9000").unwrap();
        assert_eq!(url.port(), Some(9000));
    }

    #[test]
    fn test_validate_base_url_invalid_scheme() {
        assert!(validate_base_url("file:///etc/passwd").is_err());
        assert!(validate_base_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_base_url_rejects_query_and_fragment() {
        assert!(validate_base_url("https://example.com/?auth=abc").is_err());
        assert!(validate_base_url("https://example.com/#top").is_err());
    }

    #[test]
    fn test_validate_base_url_too_long() {
        let long_url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(validate_base_url(&long_url).is_err());
    }

    #[test]
    fn test_validate_base_url_invalid_format() {
        assert!(validate_base_url("not-a-url").is_err());
        assert!(validate_base_url("").is_err());
    }
}

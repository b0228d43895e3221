//! Store connection configuration.
//!
//! Connection parameters (service URL and API key) are resolved once at
//! process startup and then passed into services that need them. The intent
//! is to avoid reading process-wide environment variables during request
//! handling, which leads to inconsistent behaviour in multi-threaded
//! runtimes and test harnesses: the caller reads its environment exactly
//! once, builds a `StoreConfig`, and threads it through as an `Arc`.

use crate::{StoreError, StoreResult};
use chartwell_types::NonEmptyText;
use url::Url;

/// Connection parameters for the hosted table store, resolved at startup.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    base_url: Url,
    api_key: NonEmptyText,
}

impl StoreConfig {
    /// Create a new `StoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidConfig` if the URL does not parse as an
    /// absolute http(s) URL or the API key is blank.
    pub fn new(base_url: &str, api_key: &str) -> StoreResult<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| StoreError::InvalidConfig(format!("store URL: {e}")))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(StoreError::InvalidConfig(format!(
                "store URL must be http or https, got `{}`",
                base_url.scheme()
            )));
        }

        let api_key = NonEmptyText::new(api_key)
            .map_err(|_| StoreError::InvalidConfig("API key cannot be empty".into()))?;

        Ok(Self { base_url, api_key })
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The API key sent with every request.
    pub fn api_key(&self) -> &str {
        self.api_key.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_accepts_https_url_and_key() {
        let cfg = StoreConfig::new("https://records.example.com", "anon-key")
            .expect("config should build");
        assert_eq!(cfg.base_url().as_str(), "https://records.example.com/");
        assert_eq!(cfg.api_key(), "anon-key");
    }

    #[test]
    fn test_config_rejects_blank_key() {
        let err = StoreConfig::new("https://records.example.com", "   ")
            .expect_err("blank key should be rejected");
        assert!(matches!(err, StoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_rejects_non_http_scheme() {
        let err = StoreConfig::new("ftp://records.example.com", "anon-key")
            .expect_err("ftp should be rejected");
        assert!(matches!(err, StoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_rejects_relative_url() {
        let err =
            StoreConfig::new("records.example.com", "anon-key").expect_err("should be rejected");
        assert!(matches!(err, StoreError::InvalidConfig(_)));
    }
}

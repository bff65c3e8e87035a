//! # Node Client Configuration
//!
//! Builder-based configuration for talking to one audio node.
//!
//! ## Overview
//!
//! A [`NodeConfig`] carries the endpoint identity inputs (base address and
//! credential) plus the injected [`HttpClient`]. Which node to talk to is
//! decided elsewhere; this module only validates what it is handed.
//!
//! ## Usage
//!
//! ### Desktop defaults
//!
//! ```ignore
//! use core_runtime::config::NodeConfig;
//!
//! let config = NodeConfig::builder()
//!     .base_address("http://localhost:2333")
//!     .credential("youshallnotpass")
//!     .build()?;
//! ```
//!
//! ### Custom transport
//!
//! ```ignore
//! let config = NodeConfig::builder()
//!     .base_address("https://node.example.com")
//!     .credential("secret")
//!     .http_client(Arc::new(MyHttpClient))
//!     .build()?;
//! ```
//!
//! ### Environment
//!
//! ```ignore
//! // AUDIO_NODE_URL, AUDIO_NODE_PASSWORD, AUDIO_NODE_TIMEOUT_MS
//! let config = NodeConfigBuilder::from_env().build()?;
//! ```

use crate::error::{Error, Result};
use crate::logging::redact_credential;
use bridge_traits::HttpClient;
use std::sync::Arc;
use std::time::Duration;

/// Environment variable holding the node base address
pub const ENV_NODE_URL: &str = "AUDIO_NODE_URL";
/// Environment variable holding the node credential
pub const ENV_NODE_PASSWORD: &str = "AUDIO_NODE_PASSWORD";
/// Environment variable holding the optional request timeout in milliseconds
pub const ENV_NODE_TIMEOUT_MS: &str = "AUDIO_NODE_TIMEOUT_MS";

/// Configuration for a single audio node client.
///
/// Use [`NodeConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct NodeConfig {
    /// Base address of the node, without a trailing slash
    pub base_address: String,

    /// Credential sent verbatim in the `Authorization` header
    pub credential: String,

    /// Transport used for every request
    pub http_client: Arc<dyn HttpClient>,

    /// Overall request timeout applied by the default desktop transport
    pub request_timeout: Option<Duration>,

    /// User agent applied by the default desktop transport
    pub user_agent: Option<String>,
}

impl std::fmt::Debug for NodeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeConfig")
            .field("base_address", &self.base_address)
            .field("credential", &redact_credential(&self.credential))
            .field("http_client", &"HttpClient { ... }")
            .field("request_timeout", &self.request_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl NodeConfig {
    /// Creates a new builder for constructing a `NodeConfig`.
    pub fn builder() -> NodeConfigBuilder {
        NodeConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Base address uses the `http` or `https` scheme and names a host
    /// - Credential is not empty
    /// - Request timeout, when set, is non-zero
    pub fn validate(&self) -> Result<()> {
        let rest = self
            .base_address
            .strip_prefix("http://")
            .or_else(|| self.base_address.strip_prefix("https://"))
            .ok_or_else(|| {
                Error::Config(format!(
                    "Base address must start with http:// or https://, got '{}'",
                    self.base_address
                ))
            })?;

        if rest.is_empty() {
            return Err(Error::Config("Base address has no host".to_string()));
        }

        if self.credential.is_empty() {
            return Err(Error::Config("Credential cannot be empty".to_string()));
        }

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(Error::Config(
                "Request timeout must be greater than 0ms".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_http_client(
    _timeout: Option<Duration>,
    _user_agent: Option<&str>,
) -> Result<Arc<dyn HttpClient>> {
    Err(Error::CapabilityMissing {
        capability: "HttpClient".to_string(),
        message: "No HTTP client implementation provided. \
                 Desktop: enable the 'desktop-shims' feature to use the default ReqwestHttpClient. \
                 Other hosts: inject an HttpClient with .http_client()."
            .to_string(),
    })
}

#[cfg(feature = "desktop-shims")]
fn provide_default_http_client(
    timeout: Option<Duration>,
    user_agent: Option<&str>,
) -> Result<Arc<dyn HttpClient>> {
    use bridge_desktop::ReqwestHttpClient;

    let client = ReqwestHttpClient::with_options(timeout, user_agent)
        .map_err(|e| Error::Config(format!("Failed to create default HTTP client: {}", e)))?;
    Ok(Arc::new(client))
}

/// Builder for [`NodeConfig`].
#[derive(Default)]
pub struct NodeConfigBuilder {
    base_address: Option<String>,
    credential: Option<String>,
    http_client: Option<Arc<dyn HttpClient>>,
    request_timeout: Option<Duration>,
    user_agent: Option<String>,
    invalid_timeout: Option<String>,
}

impl NodeConfigBuilder {
    /// Seeds a builder from `AUDIO_NODE_URL`, `AUDIO_NODE_PASSWORD` and
    /// `AUDIO_NODE_TIMEOUT_MS`. Unset variables leave the field empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Seeds a builder from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::default();

        if let Some(url) = lookup(ENV_NODE_URL) {
            builder = builder.base_address(url);
        }
        if let Some(password) = lookup(ENV_NODE_PASSWORD) {
            builder = builder.credential(password);
        }
        if let Some(raw) = lookup(ENV_NODE_TIMEOUT_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => builder = builder.request_timeout(Duration::from_millis(ms)),
                Err(_) => builder.invalid_timeout = Some(raw),
            }
        }

        builder
    }

    /// Sets the node base address (e.g. `http://localhost:2333`).
    pub fn base_address(mut self, address: impl Into<String>) -> Self {
        self.base_address = Some(address.into());
        self
    }

    /// Sets the credential sent in the `Authorization` header.
    pub fn credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Injects the transport.
    pub fn http_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the request timeout used when building the default transport.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the user agent used when building the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the final `NodeConfig` instance.
    ///
    /// # Returns
    ///
    /// Returns `Ok(NodeConfig)` on success, or an error if:
    /// - Base address or credential is missing or invalid
    /// - No transport was injected and no desktop default is available
    pub fn build(self) -> Result<NodeConfig> {
        if let Some(raw) = self.invalid_timeout {
            return Err(Error::Config(format!(
                "{} must be a number of milliseconds, got '{}'",
                ENV_NODE_TIMEOUT_MS, raw
            )));
        }

        let base_address = self.base_address.ok_or_else(|| {
            Error::Config("Base address is required. Use .base_address() to set it.".to_string())
        })?;

        let credential = self.credential.ok_or_else(|| {
            Error::Config("Credential is required. Use .credential() to set it.".to_string())
        })?;

        let base_address = base_address.trim_end_matches('/').to_string();

        let http_client = match self.http_client {
            Some(client) => client,
            None => provide_default_http_client(self.request_timeout, self.user_agent.as_deref())?,
        };

        let config = NodeConfig {
            base_address,
            credential,
            http_client,
            request_timeout: self.request_timeout,
            user_agent: self.user_agent,
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::{BridgeError, HttpRequest, HttpResponse};
    use std::collections::HashMap;

    struct StubHttpClient;

    #[async_trait]
    impl HttpClient for StubHttpClient {
        async fn execute(
            &self,
            _request: HttpRequest,
        ) -> std::result::Result<HttpResponse, BridgeError> {
            Err(BridgeError::NotAvailable("stub".to_string()))
        }
    }

    fn stub() -> Arc<dyn HttpClient> {
        Arc::new(StubHttpClient)
    }

    #[test]
    fn test_builder_with_all_required_fields() {
        let config = NodeConfig::builder()
            .base_address("http://localhost:2333/")
            .credential("youshallnotpass")
            .http_client(stub())
            .build()
            .unwrap();

        assert_eq!(config.base_address, "http://localhost:2333");
        assert_eq!(config.credential, "youshallnotpass");
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn test_builder_requires_base_address() {
        let result = NodeConfig::builder()
            .credential("pass")
            .http_client(stub())
            .build();

        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("Base address")));
    }

    #[test]
    fn test_builder_requires_credential() {
        let result = NodeConfig::builder()
            .base_address("http://localhost:2333")
            .http_client(stub())
            .build();

        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("Credential")));
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let result = NodeConfig::builder()
            .base_address("ws://localhost:2333")
            .credential("pass")
            .http_client(stub())
            .build();

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_credential() {
        let result = NodeConfig::builder()
            .base_address("http://localhost:2333")
            .credential("")
            .http_client(stub())
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let result = NodeConfig::builder()
            .base_address("http://localhost:2333")
            .credential("pass")
            .request_timeout(Duration::ZERO)
            .http_client(stub())
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (ENV_NODE_URL, "https://node.example.com"),
            (ENV_NODE_PASSWORD, "secret"),
            (ENV_NODE_TIMEOUT_MS, "1500"),
        ]
        .into_iter()
        .collect();

        let config = NodeConfigBuilder::from_lookup(|k| vars.get(k).map(|v| v.to_string()))
            .http_client(stub())
            .build()
            .unwrap();

        assert_eq!(config.base_address, "https://node.example.com");
        assert_eq!(config.credential, "secret");
        assert_eq!(config.request_timeout, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        let result = NodeConfigBuilder::from_lookup(|k| match k {
            ENV_NODE_URL => Some("http://localhost:2333".to_string()),
            ENV_NODE_PASSWORD => Some("pass".to_string()),
            ENV_NODE_TIMEOUT_MS => Some("soon".to_string()),
            _ => None,
        })
        .http_client(stub())
        .build();

        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains(ENV_NODE_TIMEOUT_MS)));
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = NodeConfig::builder()
            .base_address("http://localhost:2333")
            .credential("youshallnotpass")
            .http_client(stub())
            .build()
            .unwrap();

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("youshallnotpass"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_builder_requires_http_client_without_shims() {
        let result = NodeConfig::builder()
            .base_address("http://localhost:2333")
            .credential("pass")
            .build();

        assert!(matches!(
            result,
            Err(Error::CapabilityMissing { capability, .. }) if capability == "HttpClient"
        ));
    }

    #[cfg(feature = "desktop-shims")]
    #[test]
    fn test_build_with_desktop_default() {
        let config = NodeConfig::builder()
            .base_address("http://localhost:2333")
            .credential("pass")
            .request_timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
    }
}

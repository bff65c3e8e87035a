//! Endpoint identity of one audio node

use core_runtime::config::NodeConfig;
use core_runtime::logging::redact_credential;
use std::fmt;

/// Base address and credential of the node every request targets
///
/// Immutable once built and safe to share across concurrent requests.
#[derive(Clone, PartialEq, Eq)]
pub struct EndpointIdentity {
    base_address: String,
    credential: String,
}

impl EndpointIdentity {
    /// Trailing slashes on `base_address` are dropped so paths can be appended
    /// directly.
    pub fn new(base_address: impl Into<String>, credential: impl Into<String>) -> Self {
        let base_address = base_address.into();
        Self {
            base_address: base_address.trim_end_matches('/').to_string(),
            credential: credential.into(),
        }
    }

    pub fn base_address(&self) -> &str {
        &self.base_address
    }

    /// Value sent verbatim in the `Authorization` header
    pub fn credential(&self) -> &str {
        &self.credential
    }
}

impl fmt::Debug for EndpointIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointIdentity")
            .field("base_address", &self.base_address)
            .field("credential", &redact_credential(&self.credential))
            .finish()
    }
}

impl From<&NodeConfig> for EndpointIdentity {
    fn from(config: &NodeConfig) -> Self {
        Self::new(config.base_address.clone(), config.credential.clone())
    }
}

//! Error type for audio node requests

use bridge_traits::error::BridgeError;
use bridge_traits::http::{HttpMethod, HttpResponse};
use std::collections::HashMap;
use thiserror::Error;

/// Status code recorded when no HTTP response was received
pub const NO_STATUS: u16 = 0;

/// Failure of a single node request
///
/// The one error every node operation returns, whether the node answered
/// with a non-2xx status, answered 2xx with a body that is not the expected
/// JSON, or could not be reached at all. A response whose body could not be
/// read still carries its status and headers. When no response arrived
/// `status_code` is [`NO_STATUS`] and `headers` is empty.
///
/// The status reason is resolved once, when the error is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{method} {url} failed: {}", summarize(.status_code, .status_message, .detail))]
pub struct TransportError {
    method: HttpMethod,
    url: String,
    status_code: u16,
    status_message: String,
    headers: HashMap<String, String>,
    detail: Option<String>,
}

fn summarize(status_code: &u16, status_message: &str, detail: &Option<String>) -> String {
    let mut summary = if *status_code == NO_STATUS {
        "no response".to_string()
    } else {
        format!("{} {}", status_code, status_message)
            .trim_end()
            .to_string()
    };

    if let Some(detail) = detail {
        summary.push_str(" (");
        summary.push_str(detail);
        summary.push(')');
    }

    summary
}

/// Standard reason phrase for a status code, empty when there is none
fn canonical_reason(status_code: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status_code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("")
}

impl TransportError {
    pub fn new(
        method: HttpMethod,
        url: impl Into<String>,
        status_code: u16,
        headers: HashMap<String, String>,
        detail: Option<String>,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            status_code,
            status_message: canonical_reason(status_code).to_string(),
            headers,
            detail,
        }
    }

    /// The node answered with a non-2xx status
    pub(crate) fn from_status(method: HttpMethod, url: &str, response: &HttpResponse) -> Self {
        let body = String::from_utf8_lossy(&response.body);
        let detail = (!body.trim().is_empty()).then(|| body.trim().to_string());

        Self::new(
            method,
            url,
            response.status,
            response.headers.clone(),
            detail,
        )
    }

    /// The node answered 2xx but the body did not decode
    pub(crate) fn from_decode(
        method: HttpMethod,
        url: &str,
        response: &HttpResponse,
        error: &serde_json::Error,
    ) -> Self {
        Self::new(
            method,
            url,
            response.status,
            response.headers.clone(),
            Some(format!("invalid JSON body: {}", error)),
        )
    }

    /// The transport failed, either before a response arrived or while
    /// reading its body
    pub(crate) fn from_transport(method: HttpMethod, url: &str, error: &BridgeError) -> Self {
        match error {
            BridgeError::ResponseBody {
                status, headers, ..
            } => Self::new(method, url, *status, headers.clone(), Some(error.to_string())),
            _ => Self::new(
                method,
                url,
                NO_STATUS,
                HashMap::new(),
                Some(error.to_string()),
            ),
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Full URL of the attempted request, query included
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Path and query of the attempted request, without scheme and authority
    pub fn path(&self) -> &str {
        let without_scheme = self
            .url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.url);

        without_scheme
            .find('/')
            .map(|index| &without_scheme[index..])
            .unwrap_or("/")
    }

    /// HTTP status, or [`NO_STATUS`] when the node was never reached
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Standard reason phrase for the status code
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Error body, JSON error or transport error text, when available
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn is_network_failure(&self) -> bool {
        self.status_code == NO_STATUS
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }
}

impl From<TransportError> for BridgeError {
    fn from(error: TransportError) -> Self {
        if error.is_network_failure() {
            BridgeError::ConnectionFailed(error.to_string())
        } else {
            BridgeError::OperationFailed(error.to_string())
        }
    }
}

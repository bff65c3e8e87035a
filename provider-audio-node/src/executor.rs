//! Transport executor
//!
//! Performs one HTTP round trip per call and turns every outcome other than
//! a 2xx response into a [`TransportError`].

use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::endpoint::EndpointIdentity;
use crate::error::TransportError;
use crate::request::NodeRequest;
use crate::Result;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Sends [`NodeRequest`]s to the node through an injected [`HttpClient`]
///
/// Holds no per-call state, so one executor can serve any number of
/// concurrent requests. There is no retry and no timeout here; both belong to
/// the transport or to the caller. Dropping a pending call drops the
/// transport future, which aborts the request.
#[derive(Clone)]
pub struct TransportExecutor {
    http_client: Arc<dyn HttpClient>,
    endpoint: Arc<EndpointIdentity>,
}

impl TransportExecutor {
    pub fn new(http_client: Arc<dyn HttpClient>, endpoint: Arc<EndpointIdentity>) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }

    /// Execute a request and decode its 2xx body as `T`
    ///
    /// The status is checked before the body is trusted: a non-2xx response
    /// fails with its status even when the body is valid JSON.
    pub async fn execute<T: DeserializeOwned>(&self, request: NodeRequest) -> Result<T> {
        let response = self.send(&request).await?;

        serde_json::from_slice(&response.body).map_err(|e| {
            warn!(
                method = %request.method,
                url = %request.url,
                status = response.status,
                error = %e,
                "Node returned a body that is not the expected JSON"
            );
            TransportError::from_decode(request.method, &request.url, &response, &e)
        })
    }

    /// Execute a request whose success response carries no body
    pub async fn execute_without_body(&self, request: NodeRequest) -> Result<()> {
        self.send(&request).await.map(|_| ())
    }

    async fn send(&self, request: &NodeRequest) -> Result<HttpResponse> {
        debug!(method = %request.method, url = %request.url, "Sending node request");

        let response = self
            .http_client
            .execute(self.to_http_request(request))
            .await
            .map_err(|e| {
                warn!(
                    method = %request.method,
                    url = %request.url,
                    error = %e,
                    "Node request failed in transport"
                );
                TransportError::from_transport(request.method, &request.url, &e)
            })?;

        if !response.is_success() {
            warn!(
                method = %request.method,
                url = %request.url,
                status = response.status,
                "Node responded with an error status"
            );
            return Err(TransportError::from_status(
                request.method,
                &request.url,
                &response,
            ));
        }

        debug!(status = response.status, bytes = response.body.len(), "Node request succeeded");
        Ok(response)
    }

    fn to_http_request(&self, request: &NodeRequest) -> HttpRequest {
        let http_request = HttpRequest::new(request.method, request.url.clone())
            .header("Authorization", self.endpoint.credential())
            .header("Content-Type", JSON_CONTENT_TYPE)
            .header("Accept", JSON_CONTENT_TYPE);

        match &request.body {
            Some(body) => http_request.body(body.clone()),
            None => http_request,
        }
    }
}

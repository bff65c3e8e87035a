//! Request builder
//!
//! Pure translation from a node operation to method, URL and body. Nothing in
//! here performs I/O or fails; input validation is left to the node.

use bridge_traits::http::HttpMethod;
use bytes::Bytes;
use serde_json::Value;
use std::sync::Arc;

use crate::endpoint::EndpointIdentity;

/// Resolve identifiers into tracks
pub const LOAD_TRACKS_PATH: &str = "/loadtracks";
/// Decode a single encoded track
pub const DECODE_TRACK_PATH: &str = "/decodetrack";
/// Decode a JSON array of encoded tracks
pub const DECODE_TRACKS_PATH: &str = "/decodetracks";
/// Route planner status
pub const ROUTE_PLANNER_STATUS_PATH: &str = "/routeplanner/status";
/// Unmark one failing address
pub const ROUTE_PLANNER_FREE_ADDRESS_PATH: &str = "/routeplanner/free/address";
/// Unmark all failing addresses
pub const ROUTE_PLANNER_FREE_ALL_PATH: &str = "/routeplanner/free/all";

/// A fully resolved request against the node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRequest {
    pub method: HttpMethod,
    /// Base address + path + query
    pub url: String,
    /// Serialized JSON body, for POST operations
    pub body: Option<Bytes>,
}

/// Builds [`NodeRequest`]s for one endpoint
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    endpoint: Arc<EndpointIdentity>,
}

impl RequestBuilder {
    pub fn new(endpoint: Arc<EndpointIdentity>) -> Self {
        Self { endpoint }
    }

    /// `GET /loadtracks?identifier=...`
    ///
    /// The identifier is percent-encoded but otherwise passed through; search
    /// prefixes such as `ytsearch:` are the node's business.
    pub fn build_load(&self, identifier: &str) -> NodeRequest {
        NodeRequest {
            method: HttpMethod::Get,
            url: self.url_with_query(LOAD_TRACKS_PATH, "identifier", identifier),
            body: None,
        }
    }

    /// `GET /decodetrack?track=...`
    pub fn build_decode_one(&self, encoded_track: &str) -> NodeRequest {
        NodeRequest {
            method: HttpMethod::Get,
            url: self.url_with_query(DECODE_TRACK_PATH, "track", encoded_track),
            body: None,
        }
    }

    /// `POST /decodetracks` with the tracks as a JSON array, in input order.
    /// An empty slice produces `[]`.
    pub fn build_decode_many<S: AsRef<str>>(&self, encoded_tracks: &[S]) -> NodeRequest {
        let array = Value::Array(
            encoded_tracks
                .iter()
                .map(|track| Value::String(track.as_ref().to_owned()))
                .collect(),
        );

        NodeRequest {
            method: HttpMethod::Post,
            url: self.url(DECODE_TRACKS_PATH),
            body: Some(Bytes::from(array.to_string())),
        }
    }

    /// `GET /routeplanner/status`
    pub fn build_route_planner_status(&self) -> NodeRequest {
        NodeRequest {
            method: HttpMethod::Get,
            url: self.url(ROUTE_PLANNER_STATUS_PATH),
            body: None,
        }
    }

    /// `POST /routeplanner/free/address` with `{"address": ...}`
    pub fn build_free_address(&self, address: &str) -> NodeRequest {
        let mut body = serde_json::Map::new();
        body.insert("address".to_string(), Value::String(address.to_owned()));

        NodeRequest {
            method: HttpMethod::Post,
            url: self.url(ROUTE_PLANNER_FREE_ADDRESS_PATH),
            body: Some(Bytes::from(Value::Object(body).to_string())),
        }
    }

    /// `POST /routeplanner/free/all`
    pub fn build_free_all(&self) -> NodeRequest {
        NodeRequest {
            method: HttpMethod::Post,
            url: self.url(ROUTE_PLANNER_FREE_ALL_PATH),
            body: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint.base_address(), path)
    }

    fn url_with_query(&self, path: &str, key: &str, value: &str) -> String {
        format!(
            "{}{}?{}={}",
            self.endpoint.base_address(),
            path,
            key,
            urlencoding::encode(value)
        )
    }
}

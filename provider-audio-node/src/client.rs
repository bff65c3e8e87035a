//! REST client for one audio node

use bridge_traits::http::HttpClient;
use core_runtime::config::NodeConfig;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::endpoint::EndpointIdentity;
use crate::executor::TransportExecutor;
use crate::request::RequestBuilder;
use crate::route_planner::RoutePlanner;
use crate::types::{LoadResult, TrackEntry, TrackInfo};
use crate::Result;

/// Control-plane client for one audio node
///
/// Every call is an independent round trip; the client holds only the
/// read-only endpoint identity and the transport, so it can be shared freely
/// (`Arc<NodeRestClient>` or `&NodeRestClient`) across concurrent tasks.
///
/// # Example
///
/// ```ignore
/// use provider_audio_node::{EndpointIdentity, NodeRestClient, LoadResult};
///
/// let client = NodeRestClient::new(
///     EndpointIdentity::new("http://localhost:2333", "youshallnotpass"),
///     http_client,
/// );
///
/// match client.load("ytsearch:never gonna give you up").await? {
///     LoadResult::SearchResult { tracks } => { /* pick one */ }
///     LoadResult::NoMatches => { /* tell the user */ }
///     other => { /* ... */ }
/// }
/// ```
#[derive(Clone)]
pub struct NodeRestClient {
    endpoint: Arc<EndpointIdentity>,
    requests: RequestBuilder,
    executor: TransportExecutor,
}

impl NodeRestClient {
    pub fn new(endpoint: EndpointIdentity, http_client: Arc<dyn HttpClient>) -> Self {
        let endpoint = Arc::new(endpoint);
        debug!(base_address = endpoint.base_address(), "Creating node REST client");

        Self {
            requests: RequestBuilder::new(Arc::clone(&endpoint)),
            executor: TransportExecutor::new(http_client, Arc::clone(&endpoint)),
            endpoint,
        }
    }

    /// Build a client from validated configuration
    pub fn from_config(config: &NodeConfig) -> Self {
        Self::new(
            EndpointIdentity::from(config),
            Arc::clone(&config.http_client),
        )
    }

    pub fn endpoint(&self) -> &EndpointIdentity {
        &self.endpoint
    }

    /// Resolve an identifier (URL, search query, node-specific reference)
    /// into tracks
    #[instrument(skip(self))]
    pub async fn load(&self, identifier: &str) -> Result<LoadResult> {
        let result: LoadResult = self
            .executor
            .execute(self.requests.build_load(identifier))
            .await?;

        debug!(
            load_type = result.load_type().as_str(),
            tracks = result.tracks().len(),
            "Loaded tracks"
        );
        Ok(result)
    }

    /// Decode one encoded track
    #[instrument(skip(self))]
    pub async fn decode_one(&self, encoded_track: &str) -> Result<TrackInfo> {
        self.executor
            .execute(self.requests.build_decode_one(encoded_track))
            .await
    }

    /// Decode several encoded tracks in one request
    ///
    /// The node answers in input order. An empty input still makes the call
    /// and yields an empty list.
    #[instrument(skip_all, fields(count = encoded_tracks.len()))]
    pub async fn decode_many<S: AsRef<str>>(&self, encoded_tracks: &[S]) -> Result<Vec<TrackEntry>> {
        self.executor
            .execute(self.requests.build_decode_many(encoded_tracks))
            .await
    }

    pub fn route_planner(&self) -> RoutePlanner<'_> {
        RoutePlanner::new(&self.requests, &self.executor)
    }
}

impl std::fmt::Debug for NodeRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRestClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

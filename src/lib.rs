//! Workspace facade crate.
//!
//! Re-exports the audio node client and its runtime pieces so a host can
//! depend on `audio-node-workspace` alone. The default `desktop-shims`
//! feature brings in the reqwest transport and makes it the default
//! `HttpClient` in [`NodeConfig`](core_runtime::config::NodeConfig).

pub use bridge_traits;
pub use core_runtime;
pub use provider_audio_node;

#[cfg(feature = "desktop-shims")]
pub use bridge_desktop;

pub use provider_audio_node::{
    EndpointIdentity, LoadResult, LoadType, NodeRestClient, TrackEntry, TrackInfo,
    TransportError,
};

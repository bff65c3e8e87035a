//! # Audio Node Provider
//!
//! Control-plane HTTP client for a remote audio-processing node.
//!
//! ## Overview
//!
//! This module provides:
//! - Track loading (`GET /loadtracks`) into a typed [`LoadResult`]
//! - Single and bulk track decoding (`GET /decodetrack`, `POST /decodetracks`)
//! - Route planner status and address resets
//! - One error type, [`TransportError`], for every failure
//!
//! ## Layers
//!
//! - [`RequestBuilder`] turns an operation into method, URL and body. Pure.
//! - [`TransportExecutor`] sends it with the node headers through an injected
//!   [`HttpClient`](bridge_traits::HttpClient) and classifies the outcome.
//! - [`NodeRestClient`] composes the two into the public operations.
//!
//! Which node to call is decided by the caller; this crate only receives the
//! resulting [`EndpointIdentity`].

pub mod client;
pub mod endpoint;
pub mod error;
pub mod executor;
pub mod request;
pub mod route_planner;
pub mod types;

pub use client::NodeRestClient;
pub use endpoint::EndpointIdentity;
pub use error::{TransportError, NO_STATUS};
pub use executor::TransportExecutor;
pub use request::{NodeRequest, RequestBuilder};
pub use route_planner::RoutePlanner;
pub use types::{LoadResult, LoadType, PlaylistInfo, RoutePlannerStatus, TrackEntry, TrackInfo};

/// Result type for node operations
pub type Result<T> = std::result::Result<T, TransportError>;

//! Typed wire model for audio node responses
//!
//! Field names follow the node's camelCase JSON.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome class reported by `/loadtracks`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadType {
    TrackLoaded,
    PlaylistLoaded,
    SearchResult,
    NoMatches,
    LoadFailed,
}

impl LoadType {
    /// Wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadType::TrackLoaded => "TRACK_LOADED",
            LoadType::PlaylistLoaded => "PLAYLIST_LOADED",
            LoadType::SearchResult => "SEARCH_RESULT",
            LoadType::NoMatches => "NO_MATCHES",
            LoadType::LoadFailed => "LOAD_FAILED",
        }
    }
}

/// Playlist descriptor attached to a loaded playlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistInfo {
    #[serde(default)]
    pub name: Option<String>,
    /// Index of the track the identifier pointed at; the node sends -1 for none
    #[serde(default)]
    pub selected_track: Option<i64>,
}

impl PlaylistInfo {
    /// Selected track as an index into the track list, if one was selected
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_track
            .and_then(|index| usize::try_from(index).ok())
    }
}

/// Decoded metadata for one audio item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    pub identifier: String,
    pub is_seekable: bool,
    pub author: String,
    /// Duration in milliseconds
    pub length: u64,
    pub is_stream: bool,
    /// Playback position in milliseconds
    pub position: u64,
    pub title: String,
    #[serde(default)]
    pub uri: Option<String>,
}

impl TrackInfo {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.length)
    }

    pub fn playback_position(&self) -> Duration {
        Duration::from_millis(self.position)
    }
}

/// An encoded track paired with its decoded info
///
/// Both halves come from the node together; neither is derived locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEntry {
    /// Opaque node-serialized track
    pub track: String,
    pub info: TrackInfo,
}

/// Shape of the `/loadtracks` body before the tag is checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoadResponse {
    load_type: LoadType,
    #[serde(default)]
    playlist_info: Option<PlaylistInfo>,
    #[serde(default)]
    tracks: Vec<TrackEntry>,
}

/// Result of a `/loadtracks` call
///
/// Only the variants that can carry data do; a `NoMatches` or `LoadFailed`
/// body never yields tracks even if the node included some.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "LoadResponse")]
pub enum LoadResult {
    TrackLoaded {
        tracks: Vec<TrackEntry>,
    },
    PlaylistLoaded {
        playlist: PlaylistInfo,
        tracks: Vec<TrackEntry>,
    },
    SearchResult {
        tracks: Vec<TrackEntry>,
    },
    NoMatches,
    LoadFailed,
}

impl From<LoadResponse> for LoadResult {
    fn from(response: LoadResponse) -> Self {
        match response.load_type {
            LoadType::TrackLoaded => LoadResult::TrackLoaded {
                tracks: response.tracks,
            },
            LoadType::PlaylistLoaded => LoadResult::PlaylistLoaded {
                playlist: response.playlist_info.unwrap_or_default(),
                tracks: response.tracks,
            },
            LoadType::SearchResult => LoadResult::SearchResult {
                tracks: response.tracks,
            },
            LoadType::NoMatches => LoadResult::NoMatches,
            LoadType::LoadFailed => LoadResult::LoadFailed,
        }
    }
}

impl LoadResult {
    pub fn load_type(&self) -> LoadType {
        match self {
            LoadResult::TrackLoaded { .. } => LoadType::TrackLoaded,
            LoadResult::PlaylistLoaded { .. } => LoadType::PlaylistLoaded,
            LoadResult::SearchResult { .. } => LoadType::SearchResult,
            LoadResult::NoMatches => LoadType::NoMatches,
            LoadResult::LoadFailed => LoadType::LoadFailed,
        }
    }

    /// Tracks in node order; empty for variants without tracks
    pub fn tracks(&self) -> &[TrackEntry] {
        match self {
            LoadResult::TrackLoaded { tracks }
            | LoadResult::PlaylistLoaded { tracks, .. }
            | LoadResult::SearchResult { tracks } => tracks,
            LoadResult::NoMatches | LoadResult::LoadFailed => &[],
        }
    }

    pub fn playlist_info(&self) -> Option<&PlaylistInfo> {
        match self {
            LoadResult::PlaylistLoaded { playlist, .. } => Some(playlist),
            _ => None,
        }
    }

    pub fn into_tracks(self) -> Vec<TrackEntry> {
        match self {
            LoadResult::TrackLoaded { tracks }
            | LoadResult::PlaylistLoaded { tracks, .. }
            | LoadResult::SearchResult { tracks } => tracks,
            LoadResult::NoMatches | LoadResult::LoadFailed => Vec::new(),
        }
    }
}

/// Body of `/routeplanner/status`
///
/// `details` varies with the planner class, so it stays untyped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoutePlannerStatus {
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl RoutePlannerStatus {
    /// Whether the node has a route planner configured
    pub fn is_enabled(&self) -> bool {
        self.class.is_some()
    }
}

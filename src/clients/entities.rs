use serde::{Deserialize, Serialize};

/// Bearer token returned by the client-credentials grant. Fetched fresh on
/// every invocation and never persisted.
#[derive(Debug, Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(token: String) -> Self {
        AccessToken(token)
    }

    /// The raw token for an `Authorization: Bearer` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of the playlist-tracks endpoint. Only the default page is read.
#[derive(Debug, Deserialize)]
pub struct PlaylistTracksPage {
    /// Track entries in playlist (chart) order
    pub items: Vec<PlaylistItem>,
}

/// A single playlist entry. The API returns `track: null` for entries that
/// are no longer available, so the nested object is optional.
#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    /// The nested track object, if still available
    pub track: Option<RawTrack>,
}

/// The nested per-track payload, limited to the fields the export reads.
#[derive(Debug, Deserialize)]
pub struct RawTrack {
    /// Track title
    pub name: String,
    /// Track length in milliseconds
    pub duration_ms: u64,
    /// Credited artists, in billing order
    #[serde(default)]
    pub artists: Vec<RawArtist>,
    /// Album the track appears on
    pub album: RawAlbum,
    /// Canonical links to the track
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

/// An artist credit on a track.
#[derive(Debug, Deserialize)]
pub struct RawArtist {
    /// Artist display name
    pub name: String,
}

/// Album fields the export reads.
#[derive(Debug, Deserialize)]
pub struct RawAlbum {
    /// Release date in the API's native format, passed through verbatim
    pub release_date: String,
}

/// Canonical link set for a track.
#[derive(Debug, Default, Deserialize)]
pub struct ExternalUrls {
    /// The open.spotify.com track URL
    pub spotify: Option<String>,
}

/// One row of the exported chart. Serde field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// 1-based chart position, contiguous, in API order
    pub rank: u32,
    /// Track title
    pub name: String,
    /// First credited artist
    pub artist: String,
    /// Album release date, verbatim from the API
    pub release_date: String,
    /// Track length as `"{minutes}m{seconds}s"`
    pub duration: String,
    /// Track length in milliseconds, the source of truth for `duration`
    pub duration_ms: u64,
    /// Canonical track URL
    pub url: String,
}

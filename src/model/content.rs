//! Search response shapes and the normalized track records shown in the results list

use serde::Deserialize;

/// An artist credit as returned by the Web API
#[derive(Clone, Debug, Deserialize)]
pub struct RawArtist {
    pub name: String,
}

/// The album a track belongs to
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawAlbumRef {
    pub name: String,
}

/// One item of `tracks.items` in a search response
#[derive(Clone, Debug, Deserialize)]
pub struct RawTrack {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<RawArtist>,
    #[serde(default)]
    pub album: RawAlbumRef,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub duration_ms: u32,
}

/// One item of `albums.items` in a search response. Albums only feed the
/// search summary, so the name is all that is kept.
#[derive(Clone, Debug, Deserialize)]
pub struct RawAlbum {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// Combined track and album search response
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Page<RawTrack>,
    #[serde(default)]
    pub albums: Page<RawAlbum>,
}

/// A playable search hit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackRecord {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub preview_url: Option<String>,
    pub uri: String,
    pub duration_ms: u32,
}

impl TrackRecord {
    /// `name - album - artist`, the row label used in the results list
    pub fn label(&self) -> String {
        format!("{} - {} - {}", self.name, self.album, self.artist)
    }
}

/// Turn raw search items into track records, keeping API order.
///
/// Items without a playable uri are dropped rather than substituted.
pub fn normalize_tracks(items: &[RawTrack]) -> Vec<TrackRecord> {
    items
        .iter()
        .filter_map(|track| {
            let uri = track.uri.as_deref().filter(|uri| !uri.is_empty())?;
            let artist = track
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            Some(TrackRecord {
                id: track.id.clone().unwrap_or_default(),
                name: track.name.clone(),
                artist,
                album: track.album.name.clone(),
                preview_url: track.preview_url.clone(),
                uri: uri.to_string(),
                duration_ms: track.duration_ms,
            })
        })
        .collect()
}

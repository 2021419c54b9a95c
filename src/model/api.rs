//! The Web API surface the application depends on

use async_trait::async_trait;

use crate::error::ApiError;

use super::content::SearchResponse;

/// Subset of the current playback context used by the playback gate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub device_name: String,
}

/// Authenticated handle to the music service.
///
/// Implemented by [`super::SpotifyClient`]; tests substitute a recording mock.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Search tracks and albums matching `query`.
    async fn search(&self, query: &str) -> Result<SearchResponse, ApiError>;

    /// `None` when no device is connected to the account.
    async fn current_playback(&self) -> Result<Option<PlaybackState>, ApiError>;

    async fn start_playback(&self, uris: &[String]) -> Result<(), ApiError>;

    async fn add_to_queue(&self, uri: &str) -> Result<(), ApiError>;
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::Mutex;

    use super::*;
    use crate::model::content::{Page, RawAlbumRef, RawArtist, RawTrack};

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Call {
        Search(String),
        CurrentPlayback,
        StartPlayback(Vec<String>),
        AddToQueue(String),
    }

    /// In-memory `ApiClient` that answers from canned data and records every call
    #[derive(Default)]
    pub struct MockApi {
        pub tracks: Vec<RawTrack>,
        pub playback: Option<PlaybackState>,
        pub fail_search: bool,
        calls: Mutex<Vec<Call>>,
    }

    impl MockApi {
        pub fn with_tracks(count: usize) -> Self {
            let tracks = (1..=count)
                .map(|n| RawTrack {
                    id: Some(format!("id{n}")),
                    name: format!("Imagine {n}"),
                    artists: vec![RawArtist { name: "John Lennon".to_string() }],
                    album: RawAlbumRef { name: "Imagine".to_string() },
                    preview_url: None,
                    uri: Some(format!("spotify:track:{n}")),
                    duration_ms: 183_000,
                })
                .collect();
            Self { tracks, ..Default::default() }
        }

        /// Every search fails with a rate-limit error
        pub fn failing() -> Self {
            Self { fail_search: true, ..Default::default() }
        }

        pub fn playing(mut self, is_playing: bool) -> Self {
            self.playback = Some(PlaybackState {
                is_playing,
                device_name: "Kitchen".to_string(),
            });
            self
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        /// Number of start-playback and queue requests
        pub fn playback_commands(&self) -> usize {
            self.calls()
                .iter()
                .filter(|c| matches!(c, Call::StartPlayback(_) | Call::AddToQueue(_)))
                .count()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl ApiClient for MockApi {
        async fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
            self.record(Call::Search(query.to_string()));
            if self.fail_search {
                return Err(ApiError::Other("http status: 429".to_string()));
            }
            Ok(SearchResponse {
                tracks: Page { items: self.tracks.clone() },
                albums: Page::default(),
            })
        }

        async fn current_playback(&self) -> Result<Option<PlaybackState>, ApiError> {
            self.record(Call::CurrentPlayback);
            Ok(self.playback.clone())
        }

        async fn start_playback(&self, uris: &[String]) -> Result<(), ApiError> {
            self.record(Call::StartPlayback(uris.to_vec()));
            Ok(())
        }

        async fn add_to_queue(&self, uri: &str) -> Result<(), ApiError> {
            self.record(Call::AddToQueue(uri.to_string()));
            Ok(())
        }
    }
}

//! Spotify Web API client backed by rspotify

use std::sync::Arc;

use async_trait::async_trait;
use rspotify::{
    model::{Market, PlayableId, SearchResult, SearchType, TrackId},
    prelude::*,
    AuthCodeSpotify,
};

use crate::error::ApiError;

use super::api::{ApiClient, PlaybackState};
use super::content::{Page, RawAlbum, RawAlbumRef, RawArtist, RawTrack, SearchResponse};

pub const SEARCH_LIMIT: u32 = 40;

#[derive(Clone)]
pub struct SpotifyClient {
    client: Arc<AuthCodeSpotify>,
}

impl SpotifyClient {
    pub fn new(client: AuthCodeSpotify) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    fn track_id(uri: &str) -> Result<PlayableId<'_>, ApiError> {
        Ok(PlayableId::Track(TrackId::from_uri(uri)?))
    }
}

#[async_trait]
impl ApiClient for SpotifyClient {
    async fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
        // None lets Spotify use the account's country
        let market: Option<Market> = None;
        tracing::debug!(query, limit = SEARCH_LIMIT, "API: search");

        let (track_result, album_result) = futures::join!(
            self.client.search(query, SearchType::Track, market, None, Some(SEARCH_LIMIT), None),
            self.client.search(query, SearchType::Album, market, None, Some(SEARCH_LIMIT), None)
        );

        let mut response = SearchResponse::default();

        if let SearchResult::Tracks(page) = track_result? {
            response.tracks = Page {
                items: page
                    .items
                    .into_iter()
                    .map(|track| RawTrack {
                        uri: track.id.as_ref().map(|id| id.uri()),
                        id: track.id.as_ref().map(|id| id.id().to_string()),
                        name: track.name,
                        artists: track
                            .artists
                            .into_iter()
                            .map(|a| RawArtist { name: a.name })
                            .collect(),
                        album: RawAlbumRef { name: track.album.name },
                        preview_url: track.preview_url,
                        duration_ms: track.duration.num_milliseconds() as u32,
                    })
                    .collect(),
            };
        }

        // Album hits are informational only, so a failed album search is not fatal
        match album_result {
            Ok(SearchResult::Albums(page)) => {
                response.albums = Page {
                    items: page
                        .items
                        .into_iter()
                        .map(|album| RawAlbum { name: album.name })
                        .collect(),
                };
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(query, error = %e, "Album search failed"),
        }

        tracing::debug!(
            query,
            tracks = response.tracks.items.len(),
            albums = response.albums.items.len(),
            "Search response received"
        );
        Ok(response)
    }

    async fn current_playback(&self) -> Result<Option<PlaybackState>, ApiError> {
        tracing::trace!("Fetching current playback state");
        let result = self.client.current_playback(None, None::<Vec<_>>).await?;
        Ok(result.map(|playback| {
            tracing::trace!(
                is_playing = playback.is_playing,
                device = %playback.device.name,
                "Got playback state"
            );
            PlaybackState {
                is_playing: playback.is_playing,
                device_name: playback.device.name,
            }
        }))
    }

    async fn start_playback(&self, uris: &[String]) -> Result<(), ApiError> {
        tracing::debug!(?uris, "API: start_uris_playback");
        let ids = uris
            .iter()
            .map(|uri| Self::track_id(uri))
            .collect::<Result<Vec<_>, _>>()?;
        self.client.start_uris_playback(ids, None, None, None).await?;
        Ok(())
    }

    async fn add_to_queue(&self, uri: &str) -> Result<(), ApiError> {
        tracing::debug!(uri, "API: add_item_to_queue");
        self.client
            .add_item_to_queue(Self::track_id(uri)?, None)
            .await?;
        Ok(())
    }
}

//! Model module - Application state and data types
//!
//! - `types`: screen names, payloads, theme and UI state
//! - `content`: search response shapes, track records and normalization
//! - `pager`: paging over result lists
//! - `api`: the `ApiClient` trait the controller talks to
//! - `spotify_client`: rspotify-backed `ApiClient`

mod types;
mod content;
mod pager;
mod api;
mod spotify_client;

pub use types::{Notification, ScreenName, ScreenPayload, Theme, UiState};

pub use content::{normalize_tracks, TrackRecord};

pub use pager::{ResultPager, DEFAULT_PAGE_SIZE};

pub use api::ApiClient;

pub use spotify_client::SpotifyClient;

#[cfg(test)]
pub(crate) use api::mock;
#[cfg(test)]
pub(crate) use content::fixtures;

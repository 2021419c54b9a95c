//! Search and screen changes

use crate::error::AppError;
use crate::model::{normalize_tracks, ApiClient, ScreenName, ScreenPayload};

use super::AppController;

impl<A: ApiClient> AppController<A> {
    pub async fn perform_search(&mut self, query: &str) -> Result<(), AppError> {
        tracing::debug!(query, "Performing search");
        self.ui.status = None;

        let response = self.api.search(query).await?;
        let records = normalize_tracks(&response.tracks.items);
        tracing::info!(
            query,
            items = response.tracks.items.len(),
            playable = records.len(),
            albums = response.albums.items.len(),
            top_album = response.albums.items.first().map(|a| a.name.as_str()),
            "Search completed successfully"
        );

        if records.is_empty() {
            return Err(AppError::EmptyResultSet);
        }

        self.ui.status = Some(format!(
            "{} tracks and {} albums found for \"{}\"",
            records.len(),
            response.albums.items.len(),
            query
        ));
        self.screens
            .navigate(ScreenName::Results, ScreenPayload::Tracks(records))
    }

    pub(crate) fn show_screen(&mut self, name: ScreenName) -> Result<(), AppError> {
        self.ui.status = None;
        self.screens.navigate(name, ScreenPayload::None)
    }
}

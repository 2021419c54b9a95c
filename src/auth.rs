use std::collections::HashSet;

use anyhow::{Context, Result};
use rspotify::{prelude::*, AuthCodeSpotify, Config, Credentials, OAuth};

// Replaced by RSPOTIFY_CLIENT_ID / RSPOTIFY_CLIENT_SECRET / RSPOTIFY_REDIRECT_URI
// from the environment or a `.env` file when present.
const SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
const SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
const SPOTIFY_REDIRECT_URI: &str = "http://localhost:8888/callback";
pub const SCOPES: &str =
    "user-library-read user-modify-playback-state user-read-playback-state app-remote-control";

fn scopes() -> HashSet<String> {
    SCOPES.split_whitespace().map(str::to_string).collect()
}

fn credentials() -> Credentials {
    Credentials::from_env().unwrap_or_else(|| {
        tracing::debug!("No client credentials in environment, using built-in values");
        Credentials::new(SPOTIFY_CLIENT_ID, SPOTIFY_CLIENT_SECRET)
    })
}

fn oauth() -> OAuth {
    OAuth::from_env(scopes()).unwrap_or_else(|| OAuth {
        redirect_uri: SPOTIFY_REDIRECT_URI.to_string(),
        scopes: scopes(),
        ..Default::default()
    })
}

/// Run the authorization-code flow and return a ready-to-use client.
///
/// Opens the authorization URL in the browser and reads the redirect URL back
/// from stdin, so this must run before the TUI takes over the terminal.
pub async fn authorize() -> Result<AuthCodeSpotify> {
    let spotify = AuthCodeSpotify::with_config(
        credentials(),
        oauth(),
        Config {
            token_cached: false,
            token_refreshing: true,
            ..Default::default()
        },
    );

    tracing::info!("Starting browser-based OAuth flow");
    let url = spotify
        .get_authorize_url(false)
        .context("failed to build authorization URL")?;
    spotify
        .prompt_for_token(&url)
        .await
        .context("authorization failed")?;

    match spotify.me().await {
        Ok(user) => tracing::info!(user_id = %user.id, "Authorized successfully"),
        Err(e) => {
            tracing::error!(error = %e, "Authorized client cannot reach the API");
            return Err(anyhow::anyhow!("authorization check failed: {}", e));
        }
    }

    Ok(spotify)
}

//! Error types shared by the model, screens and controller

use std::fmt;

use thiserror::Error;

/// Direction of a page change in a result list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

impl fmt::Display for PageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageDirection::Previous => f.write_str("previous"),
            PageDirection::Next => f.write_str("next"),
        }
    }
}

/// Failure of a single Web API round trip
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Spotify(#[from] rspotify::ClientError),

    #[error("invalid Spotify identifier: {0}")]
    InvalidId(#[from] rspotify::model::IdError),

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Pagination past a boundary. The UI hides the control, so this is a bug.
    #[error("no {0} page to move to")]
    InvalidTransition(PageDirection),

    #[error("No active device found. Please open Spotify on your device and try again.")]
    NoActiveDevice,

    #[error("No playable tracks found for your search.")]
    EmptyResultSet,

    #[error("no screen registered under the name '{0}'")]
    UnknownScreenFactory(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AppError {
    /// Whether the error is shown to the user instead of halting the operation
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::NoActiveDevice | AppError::EmptyResultSet | AppError::Api(_)
        )
    }

    /// Title for the modal notification of a user-facing error
    pub fn title(&self) -> &'static str {
        match self {
            AppError::NoActiveDevice => "No Active Device",
            AppError::EmptyResultSet => "No Results",
            AppError::Api(_) => "Request Failed",
            AppError::InvalidTransition(_) | AppError::UnknownScreenFactory(_) => "Internal Error",
        }
    }

    /// Message for the modal notification, with friendlier text for common API failures
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(e) => {
                let error_str = e.to_string();
                if error_str.contains("404") {
                    "No active device found. Start playing on Spotify and try again.".to_string()
                } else if error_str.contains("403") {
                    "Action forbidden. Check your Spotify Premium status.".to_string()
                } else if error_str.contains("401") {
                    "Authentication expired. Please restart the app.".to_string()
                } else if error_str.contains("429") {
                    "Rate limited. Please wait a moment.".to_string()
                } else {
                    format!("Error: {}", error_str)
                }
            }
            other => other.to_string(),
        }
    }
}

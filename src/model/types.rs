//! Core type definitions for the application

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

use super::content::TrackRecord;

/// The closed set of screens the application can show
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenName {
    Search,
    Results,
}

impl ScreenName {
    pub fn as_str(self) -> &'static str {
        match self {
            ScreenName::Search => "Search",
            ScreenName::Results => "Results",
        }
    }
}

impl fmt::Display for ScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Search" => Ok(ScreenName::Search),
            "Results" => Ok(ScreenName::Results),
            other => Err(AppError::UnknownScreenFactory(other.to_string())),
        }
    }
}

/// Data handed to a screen when it is created or revisited
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScreenPayload {
    #[default]
    None,
    Tracks(Vec<TrackRecord>),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A modal message shown until dismissed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn from_error(error: &AppError) -> Self {
        Self {
            title: error.title().to_string(),
            message: error.user_message(),
        }
    }
}

/// UI state that is not owned by any screen
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub notification: Option<Notification>,
    pub status: Option<String>,
    pub should_quit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_names_round_trip_and_reject_unknown() {
        for name in [ScreenName::Search, ScreenName::Results] {
            assert_eq!(name.as_str().parse::<ScreenName>().unwrap(), name);
        }
        assert!(matches!(
            "ResultWindow".parse::<ScreenName>(),
            Err(AppError::UnknownScreenFactory(name)) if name == "ResultWindow"
        ));
    }

    #[test]
    fn theme_toggles_back_and_forth() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn notification_uses_error_title() {
        let n = Notification::from_error(&AppError::NoActiveDevice);
        assert_eq!(n.title, "No Active Device");
        assert!(n.message.starts_with("No active device found"));
    }
}

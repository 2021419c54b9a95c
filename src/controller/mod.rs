//! Controller module - Application logic and event handling
//!
//! - `screens`: screen registry and active-screen tracking
//! - `input`: key event handling
//! - `navigation`: search and screen changes
//! - `playback`: play/queue behind the active-device check

mod screens;
mod input;
mod navigation;
mod playback;

pub use screens::ScreenController;

use crate::error::AppError;
use crate::model::{ApiClient, Notification, UiState};
use crate::screen::Command;

pub struct AppController<A: ApiClient> {
    pub(crate) api: A,
    pub(crate) screens: ScreenController,
    pub(crate) ui: UiState,
}

impl<A: ApiClient> AppController<A> {
    pub fn new(api: A, page_size: usize) -> Result<Self, AppError> {
        Ok(Self {
            api,
            screens: ScreenController::with_default_screens(page_size)?,
            ui: UiState::default(),
        })
    }

    pub fn screens(&self) -> &ScreenController {
        &self.screens
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui
    }

    pub fn should_quit(&self) -> bool {
        self.ui.should_quit
    }

    pub(crate) async fn execute(&mut self, command: Command) -> Result<(), AppError> {
        tracing::debug!(?command, "Executing command");
        let result = match command {
            Command::Search(query) => self.perform_search(&query).await,
            Command::Play(track) => self.play_track(&track).await,
            Command::Queue(track) => self.queue_track(&track).await,
            Command::Navigate(name) => self.show_screen(name),
            Command::ToggleTheme => {
                self.ui.theme = self.ui.theme.toggled();
                Ok(())
            }
            Command::Quit => {
                self.ui.should_quit = true;
                Ok(())
            }
        };
        result.or_else(|e| self.report(e))
    }

    /// Show user-facing errors as a notification; hand programmer errors back.
    pub(crate) fn report(&mut self, error: AppError) -> Result<(), AppError> {
        if error.is_user_facing() {
            tracing::warn!(error = %error, "Action failed");
            self.ui.notification = Some(Notification::from_error(&error));
            Ok(())
        } else {
            tracing::error!(error = %error, "Internal error");
            Err(error)
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.ui.notification = None;
    }
}

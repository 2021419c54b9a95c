//! Screens - toolkit-independent view objects
//!
//! A screen owns its own state, turns user input into [`Command`]s for the
//! controller, and describes what to draw through a [`ScreenView`]. Rendering
//! is left to the `view` module.

mod search;
mod results;

pub use results::ResultScreen;
pub use search::SearchScreen;

use crate::error::AppError;
use crate::model::{ScreenName, ScreenPayload, TrackRecord};

/// Input delivered to the active screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenInput {
    Char(char),
    Backspace,
    Enter,
    Esc,
    Up,
    Down,
    Left,
    Right,
}

/// Work a screen asks the controller to perform
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Play(TrackRecord),
    Queue(TrackRecord),
    Navigate(ScreenName),
    ToggleTheme,
    Quit,
}

/// What the results screen wants drawn
#[derive(Clone, Debug)]
pub struct ResultsView<'a> {
    pub tracks: &'a [TrackRecord],
    /// Position of the first visible track in the full result list
    pub offset: usize,
    pub selected: usize,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Clone, Debug)]
pub enum ScreenView<'a> {
    Search { query: &'a str },
    Results(ResultsView<'a>),
}

/// An updatable screen
pub trait Screen {
    fn name(&self) -> ScreenName;

    /// Apply data from a repeated navigation. A no-op is valid.
    fn update(&mut self, payload: ScreenPayload) -> Result<(), AppError>;

    fn handle_input(&mut self, input: ScreenInput) -> Result<Option<Command>, AppError>;

    fn view(&self) -> ScreenView<'_>;
}

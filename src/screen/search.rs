//! Search form

use crate::error::AppError;
use crate::model::{ScreenName, ScreenPayload};

use super::{Command, Screen, ScreenInput, ScreenView};

#[derive(Debug, Default)]
pub struct SearchScreen {
    query: String,
}

impl SearchScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl Screen for SearchScreen {
    fn name(&self) -> ScreenName {
        ScreenName::Search
    }

    fn update(&mut self, _payload: ScreenPayload) -> Result<(), AppError> {
        // No state to update
        Ok(())
    }

    fn handle_input(&mut self, input: ScreenInput) -> Result<Option<Command>, AppError> {
        match input {
            ScreenInput::Char(c) => self.query.push(c),
            ScreenInput::Backspace => {
                self.query.pop();
            }
            ScreenInput::Esc => self.query.clear(),
            ScreenInput::Enter => {
                let query = self.query.trim();
                if !query.is_empty() {
                    return Ok(Some(Command::Search(query.to_string())));
                }
            }
            ScreenInput::Up | ScreenInput::Down | ScreenInput::Left | ScreenInput::Right => {}
        }
        Ok(None)
    }

    fn view(&self) -> ScreenView<'_> {
        ScreenView::Search { query: &self.query }
    }
}

//! Paged search results with play and queue actions

use crate::error::AppError;
use crate::model::{ResultPager, ScreenName, ScreenPayload, TrackRecord};

use super::{Command, ResultsView, Screen, ScreenInput, ScreenView};

#[derive(Debug)]
pub struct ResultScreen {
    pager: ResultPager,
    /// Row within the visible page
    selected: usize,
}

impl ResultScreen {
    pub fn new(records: Vec<TrackRecord>, page_size: usize) -> Self {
        Self {
            pager: ResultPager::new(records, page_size),
            selected: 0,
        }
    }

    pub fn pager(&self) -> &ResultPager {
        &self.pager
    }

    pub fn selected_track(&self) -> Option<&TrackRecord> {
        self.pager.record(self.selected)
    }

    fn move_selection(&mut self, down: bool) {
        let rows = self.pager.visible_slice().len();
        if down {
            if self.selected + 1 < rows {
                self.selected += 1;
            }
        } else {
            self.selected = self.selected.saturating_sub(1);
        }
    }
}

impl Screen for ResultScreen {
    fn name(&self) -> ScreenName {
        ScreenName::Results
    }

    fn update(&mut self, payload: ScreenPayload) -> Result<(), AppError> {
        if let ScreenPayload::Tracks(records) = payload {
            tracing::debug!(count = records.len(), "Results screen re-populated");
            self.pager.reset(records);
            self.selected = 0;
        }
        Ok(())
    }

    fn handle_input(&mut self, input: ScreenInput) -> Result<Option<Command>, AppError> {
        let command = match input {
            ScreenInput::Up => {
                self.move_selection(false);
                None
            }
            ScreenInput::Down => {
                self.move_selection(true);
                None
            }
            // Page controls are only offered when the move is possible
            ScreenInput::Left => {
                if self.pager.has_previous() {
                    self.pager.go_to_previous()?;
                    self.selected = 0;
                }
                None
            }
            ScreenInput::Right => {
                if self.pager.has_next() {
                    self.pager.go_to_next()?;
                    self.selected = 0;
                }
                None
            }
            ScreenInput::Enter => self.selected_track().cloned().map(Command::Play),
            ScreenInput::Char('k') | ScreenInput::Char('K') => {
                self.selected_track().cloned().map(Command::Queue)
            }
            ScreenInput::Char('t') | ScreenInput::Char('T') => Some(Command::ToggleTheme),
            ScreenInput::Char('q') | ScreenInput::Char('Q') => Some(Command::Quit),
            ScreenInput::Esc | ScreenInput::Backspace => {
                Some(Command::Navigate(ScreenName::Search))
            }
            ScreenInput::Char(_) => None,
        };
        Ok(command)
    }

    fn view(&self) -> ScreenView<'_> {
        ScreenView::Results(ResultsView {
            tracks: self.pager.visible_slice(),
            offset: self.pager.current_page() * self.pager.page_size(),
            selected: self.selected,
            page: self.pager.current_page(),
            page_count: self.pager.page_count(),
            total: self.pager.len(),
            has_previous: self.pager.has_previous(),
            has_next: self.pager.has_next(),
        })
    }
}

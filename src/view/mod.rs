//! View module - UI rendering
//!
//! Draws the active screen's [`ScreenView`](crate::screen::ScreenView) with ratatui.
//!
//! - `utils`: theme palette and text formatting
//! - `layout`: title bar and footer
//! - `content`: search form and results list
//! - `overlays`: modal notification

mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};

use crate::controller::ScreenController;
use crate::model::UiState;
use utils::Palette;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, screens: &ScreenController, ui_state: &UiState) {
        let palette = Palette::for_theme(ui_state.theme);
        let active = screens.active();

        frame.render_widget(Block::default().style(palette.base()), frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Active screen
                Constraint::Length(3), // Status + key hints
            ])
            .split(frame.area());

        layout::render_title_bar(frame, chunks[0], active, &palette);
        content::render_screen(frame, chunks[1], &screens.active_screen().view(), &palette);
        layout::render_footer(frame, chunks[2], active, ui_state, &palette);

        if let Some(notification) = &ui_state.notification {
            overlays::render_notification(frame, notification, &palette);
        }
    }
}

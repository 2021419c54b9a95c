//! Title bar and key-hint footer

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{ScreenName, UiState};
use super::utils::Palette;

pub fn render_title_bar(frame: &mut Frame, area: Rect, screen: ScreenName, palette: &Palette) {
    let title = match screen {
        ScreenName::Search => "Music Player",
        ScreenName::Results => "Search Results",
    };

    let bar = Paragraph::new(title)
        .style(palette.base())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border()),
        );
    frame.render_widget(bar, area);
}

pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    screen: ScreenName,
    ui_state: &UiState,
    palette: &Palette,
) {
    let hints = match screen {
        ScreenName::Search => "Enter search · Esc clear · Ctrl+T theme · Ctrl+Q exit",
        ScreenName::Results => {
            "↑/↓ select · ←/→ page · Enter play · k queue · Esc new search · t theme · q exit"
        }
    };

    let mut lines = vec![Line::from(Span::raw(hints))];
    if let Some(status) = &ui_state.status {
        lines.insert(0, Line::from(Span::raw(status.as_str())));
    }

    let footer = Paragraph::new(lines).style(palette.base()).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(palette.border()),
    );
    frame.render_widget(footer, area);
}

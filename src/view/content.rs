//! Screen bodies: the search form and the paged results list

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
    Frame,
};

use crate::screen::{ResultsView, ScreenView};
use super::utils::{format_duration, truncate_string, Palette};

const INSTRUCTIONS: &str = "Instructions:\n\
To use this program effectively, you must be a Spotify Premium subscriber.\n\
Please ensure that you have a Spotify application logged into the same account \
that you authorize for this program, and that this application is actively playing music.\n\
This is necessary for your device to be recognized by the program.";

pub fn render_screen(frame: &mut Frame, area: Rect, view: &ScreenView<'_>, palette: &Palette) {
    match view {
        ScreenView::Search { query } => render_search(frame, area, query, palette),
        ScreenView::Results(results) => render_results(frame, area, results, palette),
    }
}

fn render_search(frame: &mut Frame, area: Rect, query: &str, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Instructions
            Constraint::Length(3), // Search input
        ])
        .split(area);

    let instructions = Paragraph::new(INSTRUCTIONS)
        .style(palette.base())
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::uniform(1)).style(palette.base()));
    frame.render_widget(instructions, chunks[0]);

    let search_text = if query.is_empty() {
        "Type to search..."
    } else {
        query
    };
    let search = Paragraph::new(search_text).style(palette.base()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(palette.border()),
    );
    frame.render_widget(search, chunks[1]);

    // Cursor after the typed query
    let cursor_x = chunks[1].x + 2 + query.chars().count() as u16;
    if cursor_x < chunks[1].right().saturating_sub(1) {
        frame.set_cursor_position((cursor_x, chunks[1].y + 1));
    }
}

fn render_results(frame: &mut Frame, area: Rect, view: &ResultsView<'_>, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Track rows
            Constraint::Length(1), // Pagination
        ])
        .split(area);

    // borders(2) + padding(2) + duration column and separator(8)
    let label_width = (chunks[0].width as usize).saturating_sub(12);
    let items: Vec<ListItem> = view
        .tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let style = if i == view.selected {
                palette.selected()
            } else {
                palette.base()
            };
            let label = format!("{}. {}", view.offset + i + 1, track.label());
            ListItem::new(Line::from(vec![
                Span::raw(truncate_string(&label, label_width)),
                Span::raw(format!("  {:>6}", format_duration(track.duration_ms))),
            ]))
            .style(style)
        })
        .collect();

    let title = format!(
        " {} tracks · page {} of {} ",
        view.total,
        view.page + 1,
        view.page_count.max(1)
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::horizontal(1))
            .border_style(palette.border())
            .style(palette.base()),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(view.selected));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    // Page controls only appear when the move is possible
    let mut controls = Vec::new();
    if view.has_previous {
        controls.push(Span::styled("◀ Previous Page", palette.base().add_modifier(Modifier::BOLD)));
    }
    if view.has_previous && view.has_next {
        controls.push(Span::raw("   "));
    }
    if view.has_next {
        controls.push(Span::styled("Next Page ▶", palette.base().add_modifier(Modifier::BOLD)));
    }
    let pagination = Paragraph::new(Line::from(controls).centered()).style(palette.base());
    frame.render_widget(pagination, chunks[1]);
}

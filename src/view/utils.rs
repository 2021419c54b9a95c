//! Shared rendering helpers: theme palette and text formatting

use ratatui::style::{Color, Modifier, Style};

use crate::model::Theme;

/// Colors for one theme
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(0xe8, 0xd5, 0xd3),
                foreground: Color::Rgb(0x9e, 0x22, 0x24),
                highlight: Color::Rgb(0xb2, 0xad, 0xb4),
            },
            Theme::Dark => Self {
                background: Color::Rgb(0xe1, 0xd6, 0xf8),
                foreground: Color::Rgb(0x25, 0x62, 0x9b),
                highlight: Color::Rgb(0x05, 0x2a, 0x6a),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.highlight).bg(self.background)
    }
}

pub fn format_duration(ms: u32) -> String {
    let total_seconds = ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

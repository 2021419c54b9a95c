//! Modal notification overlay

use ratatui::{
    layout::Rect,
    style::Modifier,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::Notification;
use super::utils::Palette;

pub fn render_notification(frame: &mut Frame, notification: &Notification, palette: &Palette) {
    let area = frame.area();

    // Fixed width popup (responsive to screen size)
    let popup_width = 56.min(area.width.saturating_sub(4));
    let inner_width = popup_width.saturating_sub(4).max(1) as usize;

    let message_lines = notification.message.chars().count().div_ceil(inner_width) as u16;

    // Top border (1) + message lines + bottom border (1)
    let popup_height = (2 + message_lines.max(1)).min(area.height.saturating_sub(4).max(3));

    let popup_area = Rect {
        x: area.width.saturating_sub(popup_width) / 2,
        y: area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let title = format!(" {} (Enter to dismiss) ", notification.title);
    let popup = Paragraph::new(notification.message.as_str())
        .style(palette.base())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border())
                .title(title)
                .title_style(palette.base().add_modifier(Modifier::BOLD))
                .style(palette.base()),
        );

    frame.render_widget(popup, popup_area);
}

//! Toast notification component

use crate::state::{Notification, NotificationKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum width of a toast, borders included
const MAX_WIDTH: u16 = 48;

/// Render a toast in the top-right corner of `area`
pub fn render_toast(frame: &mut Frame, area: Rect, notification: &Notification) {
    let (title, color) = match notification.kind {
        NotificationKind::Success => ("Success", Color::Green),
        NotificationKind::Error => ("Error", Color::Red),
    };

    let width = MAX_WIDTH.min(area.width);
    let padding = 2u16;
    let max_line_width = width.saturating_sub(padding + 2).max(1) as usize;
    let wrapped_lines = wrap_text(&notification.message, max_line_width);

    // message + blank + hint + borders
    let height = (wrapped_lines.len() as u16 + 4).min(area.height);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1u16.min(area.height.saturating_sub(height)),
        width,
        height,
    };

    let mut content: Vec<Line> = wrapped_lines
        .into_iter()
        .map(|l| Line::from(format!(" {l}")))
        .collect();
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to dismiss", Style::default().fg(Color::DarkGray)),
    ]));

    let toast = Paragraph::new(content).block(
        Block::default()
            .title(Span::styled(
                format!(" {title} "),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(Clear, toast_area);
    frame.render_widget(toast, toast_area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current_line.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        lines.push(current_line);
    }

    lines
}

//! Field rendering utilities for forms

use crate::state::{option_label, FieldKind, RegisterField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw one registration field with its label, value and any error message
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: RegisterField,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) {
    let border_style = match (is_active, error.is_some()) {
        (true, _) => Style::default().fg(Color::Cyan),
        (false, true) => Style::default().fg(Color::Red),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut spans = match field.kind() {
        FieldKind::Select(options) => {
            let style = if value.is_empty() {
                placeholder_style
            } else {
                value_style
            };
            let label = option_label(options, value);
            if is_active {
                vec![
                    Span::styled("◂ ", Style::default().fg(Color::Cyan)),
                    Span::styled(label, style),
                    Span::styled(" ▸", Style::default().fg(Color::Cyan)),
                ]
            } else {
                vec![Span::styled(label, style)]
            }
        }
        _ if value.is_empty() => vec![Span::styled(field.placeholder(), placeholder_style)],
        FieldKind::Secret => vec![Span::styled(mask(value), value_style)],
        FieldKind::Text | FieldKind::Number => vec![Span::styled(value.to_string(), value_style)],
    };

    if is_active && !field.is_select() {
        // Cursor sits before the placeholder, after real input
        let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
        if value.is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Hide secret input, one bullet per character
fn mask(value: &str) -> String {
    "•".repeat(value.chars().count())
}

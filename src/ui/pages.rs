//! Landing and login screens reachable from the registration form

use super::layout::centered_rect;
use crate::state::View;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the home screen
pub fn draw_home(frame: &mut Frame, area: Rect) {
    draw_page(
        frame,
        area,
        View::Home,
        "Find your next job with HireWave.",
        &[("r", "register as candidate"), ("l", "login"), ("q", "quit")],
    );
}

/// Draw the login screen
pub fn draw_login(frame: &mut Frame, area: Rect) {
    draw_page(
        frame,
        area,
        View::Login,
        "Sign in with the email and password you registered with.",
        &[("r", "register"), ("h", "home"), ("q", "quit")],
    );
}

fn draw_page(frame: &mut Frame, area: Rect, view: View, message: &str, keys: &[(&str, &str)]) {
    let card = centered_rect(area, 64, 7);

    let mut hint = Vec::new();
    for (i, (key, label)) in keys.iter().enumerate() {
        if i > 0 {
            hint.push(Span::raw("  "));
        }
        hint.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        hint.push(Span::raw(format!(": {label}")));
    }

    let content = vec![
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(hint).style(Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", view.title()),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );

    frame.render_widget(paragraph, card);
}

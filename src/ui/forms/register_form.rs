//! Candidate registration form view

use super::field_renderer::draw_field;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{FormAction, RegisterField, View};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fields laid out two per row; a lone field spans the full width
const FIELD_ROWS: &[&[RegisterField]] = &[
    &[RegisterField::Name, RegisterField::Email],
    &[RegisterField::Password, RegisterField::ConfirmPassword],
    &[RegisterField::Mobile, RegisterField::Age],
    &[RegisterField::Place, RegisterField::Qualification],
    &[RegisterField::Experience],
];

const FIELD_HEIGHT: u16 = 3;
const CARD_WIDTH: u16 = 90;

/// Rows the card needs: fields, buttons, help line and borders
fn card_height() -> u16 {
    FIELD_ROWS.len() as u16 * FIELD_HEIGHT + BUTTON_HEIGHT + 1 + 2
}

/// Draw the registration card
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.register_form;
    let card = centered_rect(area, CARD_WIDTH, card_height());

    let block = Block::default()
        .title(Line::from(Span::styled(
            format!(" {} ", View::Register.title()),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut constraints: Vec<Constraint> = FIELD_ROWS
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Actions
    constraints.push(Constraint::Length(1)); // Help text
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (row_area, fields) in rows.iter().zip(FIELD_ROWS) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, fields.len() as u32);
                fields.len()
            ])
            .split(*row_area);
        for (cell, field) in columns.iter().zip(fields.iter()) {
            draw_field(
                frame,
                *cell,
                *field,
                form.data.get(*field),
                form.errors.get(*field),
                form.active_field_index == field.index(),
            );
        }
    }

    draw_actions(frame, rows[FIELD_ROWS.len()], app);
    draw_help(frame, rows[FIELD_ROWS.len() + 1], app);
}

fn draw_actions(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.register_form;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(42),
            Constraint::Percentage(28),
        ])
        .split(area);

    for (cell, action) in columns.iter().zip(FormAction::ALL) {
        let label = match action {
            FormAction::Register => app.state.submit_phase.button_label(),
            other => other.label(),
        };
        let is_selected = form.is_action_row_active() && form.selected_action == action;
        render_button(
            frame,
            *cell,
            label,
            is_selected,
            action == FormAction::Register,
        );
    }
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    let on_select = app
        .state
        .register_form
        .active_field()
        .is_some_and(|f| f.is_select());

    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
    ];
    if on_select {
        spans.push(Span::styled("←/→", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(": choose  "));
    }
    spans.extend([
        Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": register  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": back to home"),
    ]);

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

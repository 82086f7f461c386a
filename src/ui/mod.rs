//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod pages;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.state.current_view {
        View::Register => forms::draw_register(frame, area, app),
        View::Login => pages::draw_login(frame, area),
        View::Home => pages::draw_home(frame, area),
    }

    // Toasts float above every view
    if let Some(notification) = app.state.current_notification() {
        components::render_toast(frame, area, notification);
    }
}

//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod success;

use crate::app::App;
use crate::state::View;
use components::render_alert_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let [header_area, main_area, contact_area, status_area] = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Form => forms::draw_contact_form(frame, main_area, app),
        View::Success => success::draw(frame, main_area, app),
    }

    layout::draw_contact_bar(frame, contact_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Alert overlays everything
    if let Some(message) = &app.state.alert {
        render_alert_dialog(frame, message);
    }
}

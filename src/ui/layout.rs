//! Layout components (header, contact bar, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, main content, contact bar and status bar
pub fn create_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Contact bar
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Draw the header with the business name
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(Span::styled(
        app.config.business_name(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw phone and email with their copy shortcuts
pub fn draw_contact_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::raw(" ☎ "),
        Span::styled(app.config.business_phone(), Style::default().fg(Color::White)),
        Span::styled(
            format!(" ({})", crate::platform::CALL_SHORTCUT),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("   ✉ "),
        Span::styled(app.config.business_email(), Style::default().fg(Color::White)),
        Span::styled(
            format!(" ({})", crate::platform::EMAIL_SHORTCUT),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, color) = if app.is_submitting() {
        ("Sender forespørsel... (Esc for å avbryte)".to_string(), Color::Yellow)
    } else if let Some(message) = &app.state.status_message {
        (message.clone(), Color::Cyan)
    } else {
        let invalid = app.state.form.invalid_fields().count();
        if invalid > 0 {
            (format!("{invalid} felt trenger oppmerksomhet"), Color::Red)
        } else {
            (String::new(), Color::DarkGray)
        }
    };

    let status = Paragraph::new(format!(" {text}")).style(Style::default().fg(color).bg(Color::Black));
    frame.render_widget(status, area);
}

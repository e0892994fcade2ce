//! Contact form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Draw the contact form, its submit button and key help
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Be om tilbud ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (index, field) in form.fields.iter().enumerate() {
        draw_field(frame, chunks[index], field, form.active_field_index == index);
    }

    let button = &app.state.submit_button;
    let label = match button.busy_since {
        Some(since) => {
            let frame_index = (since.elapsed().as_millis() / 100) as usize % SPINNER_FRAMES.len();
            format!("{} {}", SPINNER_FRAMES[frame_index], button.label)
        }
        None => button.label.clone(),
    };
    let submit_row = form.submit_row();
    let button_area = centered_width(chunks[submit_row], 30);
    render_button(
        frame,
        button_area,
        &label,
        form.is_submit_row_active(),
        !button.disabled,
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": neste felt  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": velg  "),
        Span::styled(
            crate::platform::SUBMIT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": send  "),
        Span::styled("Ctrl+Q", Style::default().fg(Color::Cyan)),
        Span::raw(": avslutt"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[submit_row + 2]);
}

fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

//! Field rendering utilities for forms

use crate::state::{FormField, InputKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a field's box plus its annotation line
pub fn field_height(field: &FormField) -> u16 {
    let box_height = if field.is_multiline() { 6 } else { 3 };
    box_height + 1
}

/// Draw a form field and, when invalid, its error annotation beneath it
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let accent = match (field.is_invalid(), is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };

    let display_value = field.display_value();
    let value_style = match field.kind {
        InputKind::Select if field.as_choice().is_none() => Style::default().fg(Color::DarkGray),
        _ if is_active => Style::default().fg(Color::Cyan),
        _ => Style::default(),
    };

    let cursor = if is_active && !matches!(field.kind, InputKind::Select | InputKind::Checkbox) {
        "▌"
    } else {
        ""
    };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(lines)
    } else {
        let mut spans = vec![Span::styled(display_value, value_style)];
        match field.kind {
            InputKind::Select if is_active => {
                spans.insert(0, Span::styled("◂ ", Style::default().fg(Color::Cyan)));
                spans.push(Span::styled(" ▸", Style::default().fg(Color::Cyan)));
            }
            InputKind::Checkbox => spans.push(Span::raw(format!(" {}", field.label))),
            _ => spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan))),
        }
        Paragraph::new(Line::from(spans))
    };

    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(error) = field.error {
        let annotation = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(annotation, chunks[1]);
    }
}

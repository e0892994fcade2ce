//! Success panel shown after a submission goes through

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the success panel, sliding in while the reveal animation runs
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let offset = app
        .state
        .reveal
        .as_ref()
        .map(|r| r.offset_rows())
        .unwrap_or(0);
    let area = Rect {
        y: area.y + offset.min(area.height),
        height: area.height.saturating_sub(offset),
        ..area
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ Takk for din henvendelse!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Vi tar kontakt med deg så snart som mulig."),
    ];

    if let Some(receipt) = &app.state.receipt {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Referanse {} · {}",
                receipt.id.simple(),
                receipt.received_at.format("%d.%m.%Y %H:%M")
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("p", Style::default().fg(Color::Cyan)),
        Span::raw(": kopier telefon  "),
        Span::styled("e", Style::default().fg(Color::Cyan)),
        Span::raw(": kopier e-post  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(": avslutt"),
    ]));

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(panel, area);
}

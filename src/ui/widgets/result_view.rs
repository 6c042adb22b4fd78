// src/ui/widgets/result_view.rs

use crate::app::{App, SPINNER_CHARS};
use crate::core::analyzer::WidgetState;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the main panel. Exactly one of the four widget states is shown.
pub fn render_result_view(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Resultado");

    let text = match app.state() {
        WidgetState::Idle => Text::from(vec![
            Line::from(""),
            Line::from("Escribe un texto y presiona Enter para analizar su sentimiento.").dark_gray(),
        ]),
        WidgetState::Loading => {
            let spinner_char = SPINNER_CHARS[app.spinner_frame % SPINNER_CHARS.len()];
            Text::from(vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                    Span::raw("Analizando..."),
                ]),
            ])
        }
        WidgetState::Result(result) => {
            let color = app.palette.color_for(&result.sentiment);
            Text::from(vec![
                Line::from(""),
                Line::from(Span::styled(
                    result.display_label(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(format!("Intensidad: {}", result.formatted_score())),
            ])
        }
        WidgetState::Error(message) => Text::from(vec![
            Line::from(""),
            Line::from("✗ ERROR".bold().fg(Color::Red)),
            Line::from(""),
            Line::from(message.as_str()).fg(Color::Red),
        ]),
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

// src/ui/widgets/footer.rs

use crate::app::App;
use crate::core::analyzer::WidgetState;
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::new().bold().fg(Color::Yellow));

    let spans = match app.state() {
        WidgetState::Loading => Line::from(vec![
            Span::raw("Analizando... "),
            key("Esc"),
            Span::raw(" para salir."),
        ]),
        _ => Line::from(vec![
            key("Enter"),
            Span::raw(" analizar, "),
            key("Ctrl+U"),
            Span::raw(" borrar, "),
            key("Esc"),
            Span::raw(" salir."),
        ]),
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

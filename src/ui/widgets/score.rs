// src/ui/widgets/score.rs

use crate::app::App;
use crate::core::analyzer::WidgetState;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge},
};

/// Renders the score as a gauge colored like the sentiment label.
///
/// The bar is empty in every state except `Result`.
pub fn render_score(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Intensidad");

    let WidgetState::Result(result) = app.state() else {
        frame.render_widget(block, area);
        return;
    };

    let gauge = Gauge::default()
        .block(block)
        .percent(result.gauge_percent())
        .label(result.formatted_score())
        .gauge_style(Style::default().fg(app.palette.color_for(&result.sentiment)));
    frame.render_widget(gauge, area);
}

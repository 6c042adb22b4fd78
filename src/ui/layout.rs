// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the widget, top to bottom.
pub struct AppLayout {
    pub input: Rect,
    pub result: Rect,
    pub score: Rect,
    pub footer: Rect,
}

/// Splits the frame into the input box, the result panel, the score gauge
/// and a one-line footer.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame_size);

    AppLayout {
        input: chunks[0],
        result: chunks[1],
        score: chunks[2],
        footer: chunks[3],
    }
}

// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::input::render_input(frame, app, layout.input);
    widgets::result_view::render_result_view(frame, app, layout.result);
    widgets::score::render_score(frame, app, layout.score);
    widgets::footer::render_footer(frame, app, layout.footer);
}

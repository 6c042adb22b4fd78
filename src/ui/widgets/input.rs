// src/ui/widgets/input.rs
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};
use unicode_width::UnicodeWidthStr;
use crate::app::App;

/// Horizontal scroll offset and cursor column for a single-line box.
///
/// The tail of the text stays visible with one free cell for the cursor.
/// Widths are in terminal cells and saturate at `u16::MAX`.
pub fn viewport(text_width: usize, inner_width: u16) -> (u16, u16) {
    let text_width = u16::try_from(text_width).unwrap_or(u16::MAX);
    let visible = inner_width.saturating_sub(1);
    let offset = text_width.saturating_sub(visible);
    (offset, text_width - offset)
}

/// Renders the input box widget.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let loading = app.analyzer.is_loading();
    let style = if loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let input_block = Block::default().borders(Borders::ALL).title("Texto a analizar");
    let inner = input_block.inner(area);
    let (offset, cursor_column) = viewport(app.input.width(), inner.width);

    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(style)
        .scroll((0, offset));
    frame.render_widget(input_paragraph, area);

    // Typing stays possible while loading; only the cursor is hidden.
    if !loading {
        frame.set_cursor_position((inner.x + cursor_column, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::Palette;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;

    #[test]
    fn short_text_does_not_scroll() {
        assert_eq!(viewport(0, 78), (0, 0));
        assert_eq!(viewport(10, 78), (0, 10));
        assert_eq!(viewport(77, 78), (0, 77));
    }

    #[test]
    fn long_text_scrolls_to_keep_the_tail() {
        assert_eq!(viewport(78, 78), (1, 77));
        assert_eq!(viewport(105, 78), (28, 77));
    }

    #[test]
    fn huge_text_saturates_instead_of_wrapping() {
        let (offset, cursor) = viewport(70_000, 78);
        assert_eq!(cursor, 77);
        assert_eq!(offset, u16::MAX - 77);
    }

    #[test]
    fn long_input_shows_its_end_and_cursor() {
        let mut app = App::new(Palette::default());
        app.input = format!("{}FINAL", "a".repeat(100));

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| render_input(frame, &app, Rect::new(0, 0, 80, 3)))
            .unwrap();

        let view = terminal.backend().to_string();
        assert!(view.contains("aFINAL"), "tail missing from:\n{view}");
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(78, 1));
    }
}

// src/app.rs

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::analyzer::{Analyzer, WidgetState};
use crate::core::models::{Completion, Submission};
use crate::core::palette::Palette;

pub const SPINNER_CHARS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct App {
    pub should_quit: bool,
    pub input: String,
    pub analyzer: Analyzer,
    pub palette: Palette,
    pub spinner_frame: usize,
}

impl App {
    pub fn new(palette: Palette) -> Self {
        Self {
            should_quit: false,
            input: String::new(),
            analyzer: Analyzer::new(),
            palette,
            spinner_frame: 0,
        }
    }

    pub fn state(&self) -> &WidgetState {
        self.analyzer.state()
    }

    /// Applies one key press. Returns the submission to send when the key
    /// started one.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Submission> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('u') if ctrl => self.input.clear(),
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            // Enter is a no-op while loading, like a disabled button.
            KeyCode::Enter => return self.analyzer.begin(&self.input),
            _ => {}
        }
        None
    }

    pub fn on_reply(&mut self, completion: Completion) {
        self.analyzer.complete(completion);
    }

    pub fn on_tick(&mut self) {
        if self.analyzer.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        } else {
            self.spinner_frame = 0;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

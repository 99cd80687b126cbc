//! # StatusBar Component
//!
//! Bottom line. Shows the latest notice from the navigator (a missing
//! section, a lost window) or, when there is none, the key hints.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub const KEY_HINTS: &str =
    "Enter follow link | Backspace back | Tab next pane | x close pane | q quit";

pub struct StatusBar {
    pub notice: Option<String>,
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = match &self.notice {
            Some(notice) => Span::styled(notice.as_str(), Style::default().fg(Color::Yellow)),
            None => Span::styled(KEY_HINTS, Style::default().add_modifier(Modifier::DIM)),
        };
        frame.render_widget(span, area);
    }
}

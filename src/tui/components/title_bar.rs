//! # TitleBar Component
//!
//! Top status bar showing where the user is and how far they can go back.
//!
//! The title text changes based on state:
//!
//! 1. **Breadcrumbs**: `"caretlink | /notes/a.md 3:1 | back: 2"`
//! 2. **Default**: `"caretlink | /notes/a.md 3:1"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Top status bar component.
pub struct TitleBar {
    /// Path of the focused document
    pub file: String,
    /// Cursor position, already formatted 1-based
    pub position: String,
    /// Number of breadcrumbs on the history stack
    pub breadcrumbs: usize,
}

impl TitleBar {
    pub fn new(file: String, position: String, breadcrumbs: usize) -> Self {
        Self {
            file,
            position,
            breadcrumbs,
        }
    }

    fn text(&self) -> String {
        if self.breadcrumbs > 0 {
            format!(
                "caretlink | {} {} | back: {}",
                self.file, self.position, self.breadcrumbs
            )
        } else {
            format!("caretlink | {} {}", self.file, self.position)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().add_modifier(Modifier::BOLD);
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}

//! # PaneView Component
//!
//! Renders one document pane inside a bordered block titled with its path.
//! Link markers (`^...^`) are highlighted; in the focused pane the cursor
//! line is shaded and the terminal cursor is placed on the cursor column.

use std::sync::LazyLock;

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use regex::Regex;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::workspace::Pane;

static LINK_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^[^\^]+\^").expect("link markup pattern compiles"));

pub struct PaneView<'a> {
    pub pane: &'a mut Pane,
    pub focused: bool,
}

impl Component for PaneView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(self.pane.path().display().to_string())
            .border_style(border_style)
            .title_style(border_style);
        let inner = block.inner(area);

        let height = inner.height as usize;
        self.pane.scroll_to_cursor(height);
        let scroll = self.pane.scroll;
        let cursor = self.pane.cursor();

        let lines: Vec<Line> = self
            .pane
            .lines()
            .iter()
            .enumerate()
            .skip(scroll)
            .take(height)
            .map(|(index, text)| {
                let line = Line::from(highlight_links(text));
                if self.focused && index == cursor.line {
                    line.style(Style::default().bg(Color::DarkGray))
                } else {
                    line
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let current = &self.pane.lines()[cursor.line];
            let before: String = current.chars().take(cursor.column).collect();
            let x = (before.width() as u16).min(inner.width - 1);
            let y = (cursor.line - scroll) as u16;
            frame.set_cursor_position(Position::new(inner.x + x, inner.y + y));
        }
    }
}

/// Split `text` into spans with every `^...^` markup styled as a link.
fn highlight_links(text: &str) -> Vec<Span<'_>> {
    let link_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::UNDERLINED);

    let mut spans = Vec::new();
    let mut last = 0;
    for m in LINK_MARKUP.find_iter(text) {
        if m.start() > last {
            spans.push(Span::raw(&text[last..m.start()]));
        }
        spans.push(Span::styled(m.as_str(), link_style));
        last = m.end();
    }
    if last < text.len() {
        spans.push(Span::raw(&text[last..]));
    }
    spans
}

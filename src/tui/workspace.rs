//! # Workspace
//!
//! The terminal host's window model: a row (or column) of panes, one focused.
//! This is the [`HostWindowAdapter`] the navigator drives.
//!
//! ```text
//! Workspace
//! ├── panes: Vec<Pane>        // never empty
//! │   └── Pane { id, path, lines, cursor, scroll }
//! ├── focused: usize          // index into panes
//! ├── split: SplitDirection   // how panes are laid out
//! ├── notice: Option<String>  // status line message
//! └── reader                  // loads documents (fs by default)
//! ```
//!
//! A split on a file that doesn't exist yet opens an empty buffer, the way
//! an editor opens a new file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use regex::Regex;

use crate::SplitDirection;
use crate::core::host::{CursorPosition, HostError, HostWindowAdapter, WindowId, WindowInfo};

type Reader = Box<dyn Fn(&Path) -> io::Result<String>>;

/// One open document view.
pub struct Pane {
    id: WindowId,
    path: PathBuf,
    lines: Vec<String>,
    cursor: CursorPosition,
    /// First visible line, kept up to date by the renderer.
    pub scroll: usize,
}

impl Pane {
    fn new(id: WindowId, path: PathBuf, text: &str) -> Self {
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            id,
            path,
            lines,
            cursor: CursorPosition::default(),
            scroll: 0,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |l| l.chars().count())
    }

    fn clamp(&self, position: CursorPosition) -> CursorPosition {
        let line = position.line.min(self.lines.len() - 1);
        let column = position.column.min(self.line_len(line));
        CursorPosition::new(line, column)
    }

    /// Move by `lines` rows (negative = up), keeping the column where possible.
    pub fn move_vertically(&mut self, lines: isize) {
        let line = self.cursor.line.saturating_add_signed(lines);
        self.cursor = self.clamp(CursorPosition::new(line, self.cursor.column));
    }

    pub fn move_horizontally(&mut self, columns: isize) {
        let column = self.cursor.column.saturating_add_signed(columns);
        self.cursor = self.clamp(CursorPosition::new(self.cursor.line, column));
    }

    /// Keep the cursor inside a viewport `height` rows tall.
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor.line < self.scroll {
            self.scroll = self.cursor.line;
        } else if self.cursor.line >= self.scroll + height {
            self.scroll = self.cursor.line + 1 - height;
        }
    }

    /// Find `regex` at or after the cursor. The cursor lands after the
    /// first capture group (the non-marker prefix), i.e. on the section text.
    fn search_forward(&self, regex: &Regex) -> Option<CursorPosition> {
        let start = self.cursor;
        for (index, line) in self.lines.iter().enumerate().skip(start.line) {
            let from = if index == start.line {
                byte_offset(line, start.column)
            } else {
                0
            };
            if let Some(caps) = regex.captures_at(line, from) {
                let byte = caps
                    .get(1)
                    .map(|prefix| prefix.end())
                    .or_else(|| caps.get(0).map(|m| m.start()))
                    .unwrap_or(from);
                let column = line[..byte].chars().count();
                return Some(CursorPosition::new(index, column));
            }
        }
        None
    }
}

fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(byte, _)| byte)
}

pub struct Workspace {
    panes: Vec<Pane>,
    focused: usize,
    next_id: u64,
    split: SplitDirection,
    notice: Option<String>,
    reader: Reader,
}

impl Workspace {
    /// Open `first` from disk as the only pane.
    pub fn open(split: SplitDirection, first: &Path) -> Result<Self, HostError> {
        Self::with_reader(split, first, |path| fs::read_to_string(path))
    }

    /// Like [`Workspace::open`], loading documents through `reader`.
    pub fn with_reader<F>(split: SplitDirection, first: &Path, reader: F) -> Result<Self, HostError>
    where
        F: Fn(&Path) -> io::Result<String> + 'static,
    {
        let mut workspace = Self {
            panes: Vec::new(),
            focused: 0,
            next_id: 1,
            split,
            notice: None,
            reader: Box::new(reader),
        };
        workspace.add_pane(first)?;
        Ok(workspace)
    }

    /// Load `path` into a new pane and focus it.
    pub fn add_pane(&mut self, path: &Path) -> Result<WindowId, HostError> {
        let text = match (self.reader)(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("{} does not exist, opening empty buffer", path.display());
                String::new()
            }
            Err(e) => return Err(HostError::Io(e)),
        };

        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.panes.push(Pane::new(id, path.to_path_buf(), &text));
        self.focused = self.panes.len() - 1;
        debug!("Opened {} as {id}", path.display());
        Ok(id)
    }

    /// Close the focused pane. The last pane stays open.
    pub fn close_focused(&mut self) -> bool {
        if self.panes.len() == 1 {
            return false;
        }
        let pane = self.panes.remove(self.focused);
        debug!("Closed {} ({})", pane.path.display(), pane.id);
        if self.focused >= self.panes.len() {
            self.focused = self.panes.len() - 1;
        }
        true
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn panes_mut(&mut self) -> &mut [Pane] {
        &mut self.panes
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused(&self) -> &Pane {
        &self.panes[self.focused]
    }

    pub fn focused_mut(&mut self) -> &mut Pane {
        &mut self.panes[self.focused]
    }

    pub fn split(&self) -> SplitDirection {
        self.split
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

impl HostWindowAdapter for Workspace {
    fn current_line_text(&self) -> String {
        let pane = self.focused();
        pane.lines[pane.cursor.line].clone()
    }

    fn current_document_path(&self) -> PathBuf {
        self.focused().path.clone()
    }

    fn current_window_id(&self) -> WindowId {
        self.focused().id
    }

    fn current_cursor_position(&self) -> CursorPosition {
        self.focused().cursor
    }

    fn list_open_windows(&self) -> Vec<WindowInfo> {
        self.panes
            .iter()
            .map(|p| WindowInfo {
                id: p.id,
                file: p.path.clone(),
            })
            .collect()
    }

    fn focus_window(&mut self, id: WindowId) -> Result<(), HostError> {
        self.focused = self
            .panes
            .iter()
            .position(|p| p.id == id)
            .ok_or(HostError::UnknownWindow(id))?;
        Ok(())
    }

    fn cycle_to_next_window(&mut self) {
        self.focused = (self.focused + 1) % self.panes.len();
    }

    fn open_split_view(&mut self, path: &Path) -> Result<(), HostError> {
        self.add_pane(path).map(|_| ())
    }

    fn move_cursor_to_first_line(&mut self) {
        self.focused_mut().cursor = CursorPosition::default();
    }

    fn search_forward(&mut self, pattern: &str) -> Result<(), HostError> {
        let regex = Regex::new(pattern).map_err(|e| HostError::InvalidPattern(e.to_string()))?;
        let pane = self.focused_mut();
        match pane.search_forward(&regex) {
            Some(position) => {
                pane.cursor = position;
                Ok(())
            }
            None => Err(HostError::PatternNotFound(pattern.to_string())),
        }
    }

    fn set_cursor_position(
        &mut self,
        window: WindowId,
        position: CursorPosition,
    ) -> Result<(), HostError> {
        let pane = self
            .panes
            .iter_mut()
            .find(|p| p.id == window)
            .ok_or(HostError::UnknownWindow(window))?;
        pane.cursor = pane.clamp(position);
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigator::section_search_pattern;
    use std::collections::HashMap;

    fn workspace(files: &[(&str, &str)]) -> Workspace {
        let docs: HashMap<PathBuf, String> = files
            .iter()
            .map(|(p, t)| (PathBuf::from(p), t.to_string()))
            .collect();
        Workspace::with_reader(SplitDirection::Vertical, Path::new(files[0].0), move |path| {
            docs.get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        })
        .unwrap()
    }

    #[test]
    fn test_missing_file_opens_empty_buffer() {
        let mut ws = workspace(&[("/notes/a.md", "hello")]);
        ws.open_split_view(Path::new("/notes/new.md")).unwrap();

        assert_eq!(ws.panes().len(), 2);
        assert_eq!(ws.current_document_path(), PathBuf::from("/notes/new.md"));
        assert_eq!(ws.current_line_text(), "");
    }

    #[test]
    fn test_other_read_errors_propagate() {
        let result = Workspace::with_reader(SplitDirection::Vertical, Path::new("/x"), |_| {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        });
        assert!(matches!(result, Err(HostError::Io(_))));
    }

    #[test]
    fn test_cycle_wraps_around() {
        let mut ws = workspace(&[("/a", ""), ("/b", "")]);
        ws.open_split_view(Path::new("/b")).unwrap();
        assert_eq!(ws.focused_index(), 1);
        ws.cycle_to_next_window();
        assert_eq!(ws.focused_index(), 0);
        ws.cycle_to_next_window();
        assert_eq!(ws.focused_index(), 1);
    }

    #[test]
    fn test_focus_window_by_id() {
        let mut ws = workspace(&[("/a", ""), ("/b", "")]);
        let first = ws.current_window_id();
        ws.open_split_view(Path::new("/b")).unwrap();

        ws.focus_window(first).unwrap();
        assert_eq!(ws.current_document_path(), PathBuf::from("/a"));
        assert!(matches!(
            ws.focus_window(WindowId(99)),
            Err(HostError::UnknownWindow(_))
        ));
    }

    #[test]
    fn test_search_lands_on_section_text() {
        let mut ws = workspace(&[("/a", "intro ^TODO^\nnothing\n  TODO: write more")]);
        ws.move_cursor_to_first_line();

        ws.search_forward(&section_search_pattern("TODO")).unwrap();

        assert_eq!(ws.current_cursor_position(), CursorPosition::new(2, 2));
    }

    #[test]
    fn test_search_matches_at_line_start() {
        let mut ws = workspace(&[("/a", "BREAKING news")]);
        ws.search_forward(&section_search_pattern("BREAKING")).unwrap();
        assert_eq!(ws.current_cursor_position(), CursorPosition::new(0, 0));
    }

    #[test]
    fn test_search_skips_link_delimiters() {
        let mut ws = workspace(&[("/a", "^TODO^ only as a link")]);
        let err = ws.search_forward(&section_search_pattern("TODO")).unwrap_err();
        assert!(matches!(err, HostError::PatternNotFound(_)));
        assert_eq!(ws.current_cursor_position(), CursorPosition::new(0, 0));
    }

    #[test]
    fn test_search_starts_at_cursor() {
        let mut ws = workspace(&[("/a", "x TODO\ny TODO")]);
        ws.focused_mut().move_vertically(1);

        ws.search_forward(&section_search_pattern("TODO")).unwrap();

        assert_eq!(ws.current_cursor_position(), CursorPosition::new(1, 2));
    }

    #[test]
    fn test_search_counts_columns_in_chars() {
        let mut ws = workspace(&[("/a", "café TODO")]);
        ws.search_forward(&section_search_pattern("TODO")).unwrap();
        assert_eq!(ws.current_cursor_position(), CursorPosition::new(0, 5));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let mut ws = workspace(&[("/a", "")]);
        assert!(matches!(
            ws.search_forward("(unclosed"),
            Err(HostError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_set_cursor_clamps_to_document() {
        let mut ws = workspace(&[("/a", "one\ntwo")]);
        let id = ws.current_window_id();
        ws.set_cursor_position(id, CursorPosition::new(10, 10)).unwrap();
        assert_eq!(ws.current_cursor_position(), CursorPosition::new(1, 3));
    }

    #[test]
    fn test_cursor_movement_keeps_column_within_line() {
        let mut ws = workspace(&[("/a", "long line\nab\nanother long line")]);
        let pane = ws.focused_mut();
        pane.move_horizontally(6);
        pane.move_vertically(1);
        assert_eq!(pane.cursor(), CursorPosition::new(1, 2));
        pane.move_vertically(-5);
        assert_eq!(pane.cursor(), CursorPosition::new(0, 2));
        pane.move_horizontally(-10);
        assert_eq!(pane.cursor(), CursorPosition::new(0, 0));
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let text = (0..20).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let mut ws = workspace(&[("/a", text.as_str())]);
        let pane = ws.focused_mut();
        pane.move_vertically(12);
        pane.scroll_to_cursor(5);
        assert_eq!(pane.scroll, 8);
        pane.move_vertically(-10);
        pane.scroll_to_cursor(5);
        assert_eq!(pane.scroll, 2);
    }

    #[test]
    fn test_close_keeps_last_pane() {
        let mut ws = workspace(&[("/a", ""), ("/b", "")]);
        ws.open_split_view(Path::new("/b")).unwrap();
        assert!(ws.close_focused());
        assert_eq!(ws.current_document_path(), PathBuf::from("/a"));
        assert!(!ws.close_focused());
        assert_eq!(ws.panes().len(), 1);
    }

    #[test]
    fn test_notify_sets_notice() {
        let mut ws = workspace(&[("/a", "")]);
        ws.notify("no window for /b");
        assert_eq!(ws.notice(), Some("no window for /b"));
        ws.clear_notice();
        assert_eq!(ws.notice(), None);
    }
}

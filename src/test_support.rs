//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::{Path, PathBuf};

use crate::core::host::{CursorPosition, HostError, HostWindowAdapter, WindowId, WindowInfo};

/// Every mutating call the navigator made, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    FocusWindow(WindowId),
    CycleToNextWindow,
    OpenSplitView(PathBuf),
    MoveCursorToFirstLine,
    SearchForward(String),
    SetCursorPosition(WindowId, CursorPosition),
    Notify(String),
}

struct FakeWindow {
    id: WindowId,
    file: PathBuf,
    line: String,
    cursor: CursorPosition,
}

/// In-memory host. Each window holds a single "current line"; searches
/// succeed unless `search_fails` is set.
pub struct FakeHost {
    windows: Vec<FakeWindow>,
    focused: usize,
    next_id: u64,
    pub calls: Vec<HostCall>,
    pub direct_focus: bool,
    pub search_fails: bool,
}

impl FakeHost {
    /// A host with one window showing `file`, cursor on `line`.
    pub fn new(file: &str, line: &str) -> Self {
        let mut host = Self {
            windows: Vec::new(),
            focused: 0,
            next_id: 1,
            calls: Vec::new(),
            direct_focus: false,
            search_fails: false,
        };
        host.add_window(file, line);
        host
    }

    /// Add a window without changing focus.
    pub fn add_window(&mut self, file: &str, line: &str) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.windows.push(FakeWindow {
            id,
            file: PathBuf::from(file),
            line: line.to_string(),
            cursor: CursorPosition::default(),
        });
        id
    }

    pub fn close_window_for(&mut self, file: &str) {
        let focused_id = self.windows[self.focused].id;
        self.windows.retain(|w| w.file != Path::new(file));
        self.focused = self
            .windows
            .iter()
            .position(|w| w.id == focused_id)
            .unwrap_or(0);
    }

    pub fn set_line(&mut self, line: &str) {
        self.windows[self.focused].line = line.to_string();
    }

    pub fn set_cursor(&mut self, cursor: CursorPosition) {
        self.windows[self.focused].cursor = cursor;
    }

    fn current(&self) -> &FakeWindow {
        &self.windows[self.focused]
    }
}

impl HostWindowAdapter for FakeHost {
    fn current_line_text(&self) -> String {
        self.current().line.clone()
    }

    fn current_document_path(&self) -> PathBuf {
        self.current().file.clone()
    }

    fn current_window_id(&self) -> WindowId {
        self.current().id
    }

    fn current_cursor_position(&self) -> CursorPosition {
        self.current().cursor
    }

    fn list_open_windows(&self) -> Vec<WindowInfo> {
        self.windows
            .iter()
            .map(|w| WindowInfo {
                id: w.id,
                file: w.file.clone(),
            })
            .collect()
    }

    fn focus_window(&mut self, id: WindowId) -> Result<(), HostError> {
        if !self.direct_focus {
            return Err(HostError::Unsupported("focus window by id"));
        }
        let index = self
            .windows
            .iter()
            .position(|w| w.id == id)
            .ok_or(HostError::UnknownWindow(id))?;
        self.calls.push(HostCall::FocusWindow(id));
        self.focused = index;
        Ok(())
    }

    fn cycle_to_next_window(&mut self) {
        self.calls.push(HostCall::CycleToNextWindow);
        self.focused = (self.focused + 1) % self.windows.len();
    }

    fn open_split_view(&mut self, path: &Path) -> Result<(), HostError> {
        self.calls.push(HostCall::OpenSplitView(path.to_path_buf()));
        let id = self.add_window(&path.to_string_lossy(), "");
        self.focused = self
            .windows
            .iter()
            .position(|w| w.id == id)
            .unwrap_or(self.focused);
        Ok(())
    }

    fn move_cursor_to_first_line(&mut self) {
        self.calls.push(HostCall::MoveCursorToFirstLine);
        self.windows[self.focused].cursor = CursorPosition::default();
    }

    fn search_forward(&mut self, pattern: &str) -> Result<(), HostError> {
        self.calls.push(HostCall::SearchForward(pattern.to_string()));
        if self.search_fails {
            return Err(HostError::PatternNotFound(pattern.to_string()));
        }
        Ok(())
    }

    fn set_cursor_position(
        &mut self,
        window: WindowId,
        position: CursorPosition,
    ) -> Result<(), HostError> {
        self.calls.push(HostCall::SetCursorPosition(window, position));
        let target = self
            .windows
            .iter_mut()
            .find(|w| w.id == window)
            .ok_or(HostError::UnknownWindow(window))?;
        target.cursor = position;
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        self.calls.push(HostCall::Notify(message.to_string()));
    }
}

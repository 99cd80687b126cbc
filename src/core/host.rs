//! # Host Window Adapter
//!
//! The narrow slice of an editor the navigator needs: read the current line,
//! know which file and window have focus, move between windows, open a split,
//! search, and place the cursor.
//!
//! Hosts that cannot focus a window by id keep the default
//! [`HostWindowAdapter::focus_window`], which reports `Unsupported`; the
//! navigator then walks the windows with [`HostWindowAdapter::cycle_to_next_window`].

use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque handle for a window (view/pane) in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window {}", self.0)
    }
}

/// Cursor position, 0-based line and column (columns count chars).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for CursorPosition {
    /// Shown 1-based, the way editors present positions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// One entry of [`HostWindowAdapter::list_open_windows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub id: WindowId,
    pub file: PathBuf,
}

/// Failures a host can report back to the navigator.
#[derive(Debug)]
pub enum HostError {
    /// `search_forward` found nothing.
    PatternNotFound(String),
    /// `search_forward` got a pattern the host cannot compile.
    InvalidPattern(String),
    /// The window id does not name an open window.
    UnknownWindow(WindowId),
    /// The host lacks this capability (e.g. direct focus).
    Unsupported(&'static str),
    /// The host failed to read or open something.
    Io(std::io::Error),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::PatternNotFound(pattern) => write!(f, "pattern not found: {pattern}"),
            HostError::InvalidPattern(msg) => write!(f, "invalid search pattern: {msg}"),
            HostError::UnknownWindow(id) => write!(f, "no such window: {id}"),
            HostError::Unsupported(what) => write!(f, "unsupported by host: {what}"),
            HostError::Io(e) => write!(f, "host I/O error: {e}"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HostError {
    fn from(e: std::io::Error) -> Self {
        HostError::Io(e)
    }
}

/// Capabilities an editor integration provides to the navigator.
pub trait HostWindowAdapter {
    /// Text of the line under the cursor in the focused window.
    fn current_line_text(&self) -> String;

    /// Absolute path of the document in the focused window.
    fn current_document_path(&self) -> PathBuf;

    fn current_window_id(&self) -> WindowId;

    fn current_cursor_position(&self) -> CursorPosition;

    /// All open windows, in a host-defined order that stays stable for one
    /// cycling pass.
    fn list_open_windows(&self) -> Vec<WindowInfo>;

    /// Focus `id` directly.
    fn focus_window(&mut self, id: WindowId) -> Result<(), HostError> {
        let _ = id;
        Err(HostError::Unsupported("focus window by id"))
    }

    /// Move focus to the next window, wrapping around.
    fn cycle_to_next_window(&mut self);

    /// Open `path` in a new split and focus it.
    fn open_split_view(&mut self, path: &Path) -> Result<(), HostError>;

    /// Put the cursor at the start of the first line.
    fn move_cursor_to_first_line(&mut self);

    /// Search forward from the cursor and move onto the match.
    fn search_forward(&mut self, pattern: &str) -> Result<(), HostError>;

    fn set_cursor_position(
        &mut self,
        window: WindowId,
        position: CursorPosition,
    ) -> Result<(), HostError>;

    /// Show a short message to the user (status line, echo area).
    fn notify(&mut self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_position_displays_one_based() {
        assert_eq!(CursorPosition::new(0, 0).to_string(), "1:1");
        assert_eq!(CursorPosition::new(41, 7).to_string(), "42:8");
    }

    #[test]
    fn test_host_error_display() {
        let err = HostError::PatternNotFound("TODO".into());
        assert_eq!(err.to_string(), "pattern not found: TODO");
        let err = HostError::UnknownWindow(WindowId(3));
        assert_eq!(err.to_string(), "no such window: window 3");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: HostError = io.into();
        assert!(matches!(err, HostError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}

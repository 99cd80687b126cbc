//! # Navigation History
//!
//! Breadcrumbs left behind by every jump, consumed by "go back".
//!
//! ```text
//! push(L1) push(L2)      pop() -> L2      pop() -> L1      pop() -> None
//! [L1, L2]               [L1]             []               []
//! ```
//!
//! No deduplication and no size cap: the stack lives as long as the
//! navigator that owns it.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::host::{CursorPosition, WindowId};

/// Snapshot of where the user was before a jump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    file: PathBuf,
    window: WindowId,
    cursor: CursorPosition,
}

impl Location {
    pub fn new(file: PathBuf, window: WindowId, cursor: CursorPosition) -> Self {
        Self {
            file,
            window,
            cursor,
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn window(&self) -> WindowId {
        self.window
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.file.display(), self.cursor, self.window)
    }
}

/// Last-in-first-out stack of [`Location`]s.
#[derive(Debug, Default)]
pub struct NavigationHistory {
    entries: Vec<Location>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, location: Location) {
        self.entries.push(location);
    }

    /// Remove and return the most recent breadcrumb, `None` when empty.
    pub fn pop(&mut self) -> Option<Location> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&Location> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Breadcrumbs from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.entries.iter()
    }
}

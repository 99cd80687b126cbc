//! # Link Navigator
//!
//! Drives the host through a jump and back again.
//!
//! ```text
//! follow_link()
//!   line ──parse──► NoLink ─────────────────────────────► (nothing)
//!                 ├─ file link ─► resolve ─► push ─► switch | split ─► [section search]
//!                 └─ local link ───────────► push ─► line 1 ─► section search
//!
//! go_back()
//!   pop ─► empty ─────────────────────────────────────► (nothing)
//!       └─► same file? ──no──► find window ──none──► NoWindowForFile
//!                 │yes              │found
//!                 └────────────────►└─► restore cursor
//! ```
//!
//! Breadcrumbs are pushed before the view changes. A breadcrumb popped by
//! `go_back` whose file no longer has a window is dropped unless
//! [`NavigatorOptions::restore_on_missing_window`] is set.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::history::{Location, NavigationHistory};
use crate::core::host::{HostError, HostWindowAdapter, WindowId};
use crate::core::link::{Link, parse_link};
use crate::core::path::resolve_path;

/// How the navigator finds the window showing a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WindowStrategy {
    /// Step through windows one at a time until the file shows up.
    #[default]
    Cycle,
    /// Focus the matching window by id; falls back to cycling if the host can't.
    Direct,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigatorOptions {
    pub window_strategy: WindowStrategy,
    /// Put the breadcrumb back when `go_back` finds no window for its file.
    pub restore_on_missing_window: bool,
}

/// Result of [`Navigator::follow_link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowOutcome {
    /// The current line holds no link.
    NoLink,
    Followed(Link),
}

/// Result of [`Navigator::go_back`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackOutcome {
    /// Nothing to go back to.
    HistoryEmpty,
    Restored(Location),
}

#[derive(Debug)]
pub enum NavError {
    /// The section text does not occur in the target document.
    SectionNotFound(String),
    /// No open window shows the file of the popped breadcrumb.
    NoWindowForFile(PathBuf),
    Host(HostError),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::SectionNotFound(section) => write!(f, "section not found: {section}"),
            NavError::NoWindowForFile(file) => write!(f, "no window for {}", file.display()),
            NavError::Host(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavError::Host(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HostError> for NavError {
    fn from(e: HostError) -> Self {
        NavError::Host(e)
    }
}

/// Search pattern for `section` that skips the link's own delimiters:
/// the match may not be directly preceded or followed by the marker.
pub fn section_search_pattern(section: &str) -> String {
    format!(r"(^|[^\^]){}($|[^\^])", regex::escape(section))
}

pub struct Navigator {
    history: NavigationHistory,
    options: NavigatorOptions,
}

impl Navigator {
    pub fn new(options: NavigatorOptions) -> Self {
        Self {
            history: NavigationHistory::new(),
            options,
        }
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn options(&self) -> NavigatorOptions {
        self.options
    }

    /// Jump to whatever link sits on the current line.
    pub fn follow_link<H>(&mut self, host: &mut H) -> Result<FollowOutcome, NavError>
    where
        H: HostWindowAdapter + ?Sized,
    {
        let line = host.current_line_text();
        let Some(link) = parse_link(&line) else {
            debug!("No link on current line");
            return Ok(FollowOutcome::NoLink);
        };

        info!("Following {link}");
        match (link.file(), link.section()) {
            (Some(file), section) => self.follow_file_link(host, file, section)?,
            (None, Some(section)) => {
                self.push_current_location(host);
                self.jump_to_section(host, section)?;
            }
            (None, None) => {}
        }

        Ok(FollowOutcome::Followed(link))
    }

    /// Return to the most recent breadcrumb.
    pub fn go_back<H>(&mut self, host: &mut H) -> Result<BackOutcome, NavError>
    where
        H: HostWindowAdapter + ?Sized,
    {
        let Some(location) = self.history.pop() else {
            debug!("History empty, nothing to go back to");
            return Ok(BackOutcome::HistoryEmpty);
        };

        info!("Going back to {location}");
        if host.current_document_path() != location.file()
            && !self.switch_to_window_for_file(host, location.file(), Some(location.window()))
        {
            warn!("No window open for {}", location.file().display());
            let file = location.file().to_path_buf();
            if self.options.restore_on_missing_window {
                debug!("Keeping breadcrumb for {}", file.display());
                self.history.push(location);
            }
            return Err(NavError::NoWindowForFile(file));
        }

        host.set_cursor_position(host.current_window_id(), location.cursor())?;
        Ok(BackOutcome::Restored(location))
    }

    fn follow_file_link<H>(
        &mut self,
        host: &mut H,
        file: &str,
        section: Option<&str>,
    ) -> Result<(), NavError>
    where
        H: HostWindowAdapter + ?Sized,
    {
        let target = resolve_path(file, &host.current_document_path());
        self.push_current_location(host);

        if is_window_open_for(host, &target) {
            debug!("Window already open for {}", target.display());
            self.switch_to_window_for_file(host, &target, None);
        } else {
            info!("Opening split for {}", target.display());
            host.open_split_view(&target)?;
        }

        if let Some(section) = section {
            self.jump_to_section(host, section)?;
        }
        Ok(())
    }

    fn jump_to_section<H>(&self, host: &mut H, section: &str) -> Result<(), NavError>
    where
        H: HostWindowAdapter + ?Sized,
    {
        let pattern = section_search_pattern(section);
        debug!("Searching for {pattern}");
        host.move_cursor_to_first_line();
        host.search_forward(&pattern).map_err(|e| match e {
            HostError::PatternNotFound(_) => NavError::SectionNotFound(section.to_string()),
            other => NavError::Host(other),
        })
    }

    fn push_current_location<H>(&mut self, host: &H)
    where
        H: HostWindowAdapter + ?Sized,
    {
        let location = Location::new(
            host.current_document_path(),
            host.current_window_id(),
            host.current_cursor_position(),
        );
        debug!("Pushing breadcrumb {location}");
        self.history.push(location);
    }

    /// Focus a window showing `target`. Returns false when none exists, in
    /// which case focus ends where it started.
    fn switch_to_window_for_file<H>(
        &self,
        host: &mut H,
        target: &Path,
        preferred: Option<WindowId>,
    ) -> bool
    where
        H: HostWindowAdapter + ?Sized,
    {
        if host.current_document_path() == target {
            return true;
        }

        let windows = host.list_open_windows();

        if self.options.window_strategy == WindowStrategy::Direct {
            let candidate = windows
                .iter()
                .find(|w| Some(w.id) == preferred && w.file == target)
                .or_else(|| windows.iter().find(|w| w.file == target));
            let Some(window) = candidate else {
                return false;
            };
            match host.focus_window(window.id) {
                Ok(()) => return true,
                Err(HostError::Unsupported(_)) => {
                    debug!("Host cannot focus by id, cycling instead");
                }
                Err(e) => warn!("Focusing {} failed: {e}, cycling instead", window.id),
            }
        }

        for _ in 0..windows.len() {
            host.cycle_to_next_window();
            if host.current_document_path() == target {
                return true;
            }
        }
        false
    }
}

fn is_window_open_for<H>(host: &H, file: &Path) -> bool
where
    H: HostWindowAdapter + ?Sized,
{
    host.list_open_windows().iter().any(|w| w.file == file)
}

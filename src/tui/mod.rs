//! # TUI Adapter
//!
//! The ratatui-specific layer: a small notes viewer that hosts the
//! navigator. Handles terminal I/O, renders the panes, and translates
//! keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm. Editor
//! plugins would implement `HostWindowAdapter` the same way `Workspace` does.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event or a terminal resize.

mod component;
mod components;
mod event;
mod ui;
pub mod workspace;

use log::{debug, info};
use std::io::stdout;
use std::path::PathBuf;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::host::HostWindowAdapter;
use crate::core::navigator::Navigator;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::workspace::Workspace;

/// Rows moved by PageUp/PageDown.
const PAGE_LINES: isize = 20;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Show, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape);
    }
}

/// Open `files` (one pane each, first focused) and run until the user quits.
pub fn run(config: ResolvedConfig, files: Vec<PathBuf>) -> std::io::Result<()> {
    let mut workspace = open_workspace(&config, &files)?;
    let mut navigator = Navigator::new(config.navigator_options());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if needs_redraw {
            let breadcrumbs = navigator.history().len();
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &mut workspace, breadcrumbs)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut workspace, &mut navigator, event) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    info!("caretlink exiting");
    result
}

fn open_workspace(config: &ResolvedConfig, files: &[PathBuf]) -> std::io::Result<Workspace> {
    let (first, rest) = match files.split_first() {
        Some((first, rest)) => (absolute(first)?, rest),
        None => (std::env::current_dir()?.join("untitled.txt"), &[][..]),
    };

    let mut workspace = Workspace::open(config.split, &first).map_err(std::io::Error::other)?;
    for file in rest {
        workspace
            .add_pane(&absolute(file)?)
            .map_err(std::io::Error::other)?;
    }
    // Start in the first file, like an editor given several arguments.
    if rest.is_empty() {
        return Ok(workspace);
    }
    let first_id = workspace.panes()[0].id();
    workspace
        .focus_window(first_id)
        .map_err(std::io::Error::other)?;
    Ok(workspace)
}

/// Relative command-line paths are taken from the working directory so that
/// links resolve against a real directory.
fn absolute(path: &std::path::Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Apply one input event. Navigation goes through `core::update`; cursor
/// and pane management stay local to the TUI.
fn handle_event(workspace: &mut Workspace, navigator: &mut Navigator, event: TuiEvent) -> Effect {
    debug!("Handling {event:?}");
    let action = match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::FollowLink => Some(Action::FollowLink),
        TuiEvent::GoBack => Some(Action::GoBack),
        _ => None,
    };
    if let Some(action) = action {
        workspace.clear_notice();
        return update(navigator, workspace, action);
    }

    match event {
        TuiEvent::CursorUp => workspace.focused_mut().move_vertically(-1),
        TuiEvent::CursorDown => workspace.focused_mut().move_vertically(1),
        TuiEvent::CursorLeft => workspace.focused_mut().move_horizontally(-1),
        TuiEvent::CursorRight => workspace.focused_mut().move_horizontally(1),
        TuiEvent::PageUp => workspace.focused_mut().move_vertically(-PAGE_LINES),
        TuiEvent::PageDown => workspace.focused_mut().move_vertically(PAGE_LINES),
        TuiEvent::CycleWindow => workspace.cycle_to_next_window(),
        TuiEvent::CloseWindow => {
            if !workspace.close_focused() {
                workspace.notify("cannot close the last pane");
            }
        }
        _ => {}
    }
    Effect::None
}

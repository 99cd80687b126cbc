//! # TUI Components
//!
//! All UI components for the terminal host.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: focused file, cursor position and breadcrumb depth
//! - `StatusBar`: the latest notice, or key hints
//!
//! ### Stateful Components
//!
//! - `PaneView`: one document pane; adjusts the pane's scroll offset while
//!   rendering and places the terminal cursor when focused
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into the workspace. This keeps dependencies explicit and
//! components testable against `TestBackend`.

mod pane_view;
mod status_bar;
mod title_bar;

pub use pane_view::PaneView;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;

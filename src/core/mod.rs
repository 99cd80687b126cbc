//! # Core Navigation Logic
//!
//! Link parsing, path resolution, breadcrumbs and the navigator that ties
//! them together. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • link (parser)        │
//!                    │  • path (resolver)      │
//!                    │  • history (stack)      │
//!                    │  • navigator            │
//!                    └───────────┬─────────────┘
//!                                │ HostWindowAdapter
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │   Editor   │
//!     │  Adapter   │                          │  plugins   │
//!     │ (ratatui)  │                          │  (future)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`link`]: `parse_link` — the `^section@file^` grammar
//! - [`path`]: `resolve_path` — relative file references to absolute paths
//! - [`history`]: `NavigationHistory` — breadcrumbs for "go back"
//! - [`host`]: `HostWindowAdapter` — what an editor must provide
//! - [`navigator`]: `Navigator` — `follow_link` / `go_back`
//! - [`action`]: `update()` — runs an `Action`, reports failures as notices
//! - [`config`]: settings file and override resolution

pub mod action;
pub mod config;
pub mod history;
pub mod host;
pub mod link;
pub mod navigator;
pub mod path;

pub use history::{Location, NavigationHistory};
pub use host::{CursorPosition, HostError, HostWindowAdapter, WindowId, WindowInfo};
pub use link::{Link, parse_link};
pub use navigator::{BackOutcome, FollowOutcome, NavError, Navigator, NavigatorOptions, WindowStrategy};
pub use path::resolve_path;

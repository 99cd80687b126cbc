//! caretlink library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Where the host places a newly opened split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    /// Side by side.
    #[default]
    Vertical,
    /// Stacked.
    Horizontal,
}

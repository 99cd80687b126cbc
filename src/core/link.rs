//! # Link Parser
//!
//! Recognizes caret-delimited link markers on a single line of text:
//!
//! ```text
//! ^SECTION@FILE^   section inside another file
//! ^@FILE^          another file, no section
//! ^SECTION^        section inside the current file
//! ```
//!
//! The three forms are tried in that order, each as one unanchored scan of
//! the whole line. The first form that matches wins. Captures are greedy, so a
//! line holding several `@` or several links resolves to the widest match:
//! `^a@b^ and ^c@d^` yields section `a@b^ and ^c` and file `d`.

use std::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

/// The delimiter that bounds a link expression.
pub const MARKER: char = '^';

static SECTION_AND_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^(.+)@(.+)\^").expect("section@file pattern compiles"));
static FILE_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^@(.+)\^").expect("@file pattern compiles"));
static SECTION_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^(.+)\^").expect("section pattern compiles"));

/// A parsed link. At least one of section/file is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// `^SECTION@FILE^`
    SectionInFile { section: String, file: String },
    /// `^@FILE^`
    File { file: String },
    /// `^SECTION^`
    Section { section: String },
}

impl Link {
    pub fn section(&self) -> Option<&str> {
        match self {
            Link::SectionInFile { section, .. } | Link::Section { section } => Some(section),
            Link::File { .. } => None,
        }
    }

    pub fn file(&self) -> Option<&str> {
        match self {
            Link::SectionInFile { file, .. } | Link::File { file } => Some(file),
            Link::Section { .. } => None,
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Link::SectionInFile { section, file } => write!(f, "section '{section}' in '{file}'"),
            Link::File { file } => write!(f, "file '{file}'"),
            Link::Section { section } => write!(f, "local section '{section}'"),
        }
    }
}

/// Find the link on `line`, or `None` when no marker form matches.
pub fn parse_link(line: &str) -> Option<Link> {
    let link = if let Some(caps) = SECTION_AND_FILE.captures(line) {
        Some(Link::SectionInFile {
            section: caps[1].to_string(),
            file: caps[2].to_string(),
        })
    } else if let Some(caps) = FILE_ONLY.captures(line) {
        Some(Link::File {
            file: caps[1].to_string(),
        })
    } else {
        SECTION_ONLY.captures(line).map(|caps| Link::Section {
            section: caps[1].to_string(),
        })
    };

    debug!("parse_link({line:?}) -> {link:?}");
    link
}

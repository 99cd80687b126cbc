//! # Path Resolver
//!
//! Turns the file part of a link into an absolute path. Relative references
//! are joined onto the directory of the document that holds the link.
//!
//! The join is a plain string concatenation with the platform separator.
//! `.` and `..` segments are kept as written, so `../x.md` seen from
//! `/notes/a.md` resolves to `/notes/../x.md`.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Resolve `reference` against the document currently open at `current_document`.
pub fn resolve_path(reference: &str, current_document: &Path) -> PathBuf {
    if Path::new(reference).is_absolute() {
        return PathBuf::from(reference);
    }

    let directory = current_document
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    PathBuf::from(format!("{directory}{MAIN_SEPARATOR}{reference}"))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_reference_is_unchanged() {
        let resolved = resolve_path("/abs/path.md", Path::new("/somewhere/else.md"));
        assert_eq!(resolved.as_os_str(), "/abs/path.md");
    }

    #[test]
    fn test_relative_reference_joins_document_directory() {
        let resolved = resolve_path("b.md", Path::new("/notes/a.md"));
        assert_eq!(resolved.as_os_str(), "/notes/b.md");
    }

    #[test]
    fn test_nested_relative_reference() {
        let resolved = resolve_path("sub/c.md", Path::new("/notes/a.md"));
        assert_eq!(resolved.as_os_str(), "/notes/sub/c.md");
    }

    #[test]
    fn test_dot_segments_are_not_normalized() {
        let resolved = resolve_path("../x.md", Path::new("/notes/a.md"));
        assert_eq!(resolved.as_os_str(), "/notes/../x.md");

        let resolved = resolve_path("./y.md", Path::new("/notes/a.md"));
        assert_eq!(resolved.as_os_str(), "/notes/./y.md");
    }

    #[test]
    fn test_document_at_root() {
        let resolved = resolve_path("b.md", Path::new("/a.md"));
        assert_eq!(resolved.as_os_str(), "//b.md");
    }

    #[test]
    fn test_unnamed_document_has_empty_directory() {
        let resolved = resolve_path("b.md", Path::new(""));
        assert_eq!(resolved.as_os_str(), "/b.md");
    }
}

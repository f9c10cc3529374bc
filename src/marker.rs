//! Category markers embedded in filenames.
//!
//! A marked file carries `__MARKAS__<category>` between its stem and its
//! extension, e.g. `photo__MARKAS__keep.jpg`. Marked files are hidden from
//! default navigation.

use std::path::{Path, PathBuf};

use crate::error::{NavigationError, Result};

/// Reserved substring that separates a file stem from its category.
pub const MARKER: &str = "__MARKAS__";

/// A marked path split back into its unmarked path and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMarker {
    pub path: PathBuf,
    pub category: String,
}

/// Returns true if the path contains the marker anywhere.
pub fn is_marked(path: &Path) -> bool {
    path.to_string_lossy().contains(MARKER)
}

/// Inserts `category` before the extension of `path`.
///
/// Paths without an extension are rejected, since the result could not be
/// parsed back.
pub fn add_marker(path: &Path, category: &str) -> Result<PathBuf> {
    if is_marked(path) {
        return Err(NavigationError::AlreadyMarked(path.to_path_buf()));
    }

    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let Some(extension) = path.extension() else {
        return Err(NavigationError::MalformedMarker(format!(
            "path needs an extension to carry a marker: {}",
            path.display()
        )));
    };
    let name = format!(
        "{stem}{MARKER}{category}.{}",
        extension.to_string_lossy()
    );

    Ok(match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    })
}

/// Splits a marked path into the unmarked path and its category.
pub fn parse_marker(marked: &Path) -> Result<ParsedMarker> {
    if marked.parent().is_some_and(is_marked) {
        return Err(NavigationError::MalformedMarker(format!(
            "directories should not have marker: {}",
            marked.display()
        )));
    }

    let text = marked.to_string_lossy();
    let parts: Vec<&str> = text.split(MARKER).collect();
    let [before, after] = parts.as_slice() else {
        return Err(NavigationError::MalformedMarker(format!(
            "path should contain exactly 1 marker: {text}"
        )));
    };

    let tail: Vec<&str> = after.split('.').collect();
    let [category, extension] = tail.as_slice() else {
        return Err(NavigationError::MalformedMarker(format!(
            "parts after the marker shouldn't have another '.': {text}"
        )));
    };

    Ok(ParsedMarker {
        path: PathBuf::from(format!("{before}.{extension}")),
        category: (*category).to_string(),
    })
}

//! Allow-list and marker filtering for navigable entries.

use std::path::Path;

use crate::marker;

pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".png", ".gif", ".bmp", ".webp", ".emf", ".wmf", ".jpeg",
];

pub const AUDIO_EXTENSIONS: &[&str] = &[".wav", ".flac", ".mp3", ".m4a", ".mp4"];

/// Lowercases an extension and adds the leading `.` when missing.
pub fn normalize_extension(extension: &str) -> String {
    let lower = extension.trim().to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}

/// Returns true if the lowercased path ends with any of the given suffixes.
pub fn is_extension_in_list<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let lower = path.to_string_lossy().to_lowercase();
    extensions
        .iter()
        .any(|extension| lower.ends_with(extension.as_ref()))
}

pub fn looks_like_image(path: &Path) -> bool {
    is_extension_in_list(path, IMAGE_EXTENSIONS)
}

pub fn looks_like_audio(path: &Path) -> bool {
    is_extension_in_list(path, AUDIO_EXTENSIONS)
}

/// Predicate that decides which snapshot entries are navigable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFilter {
    extensions: Vec<String>,
    exclude_marked: bool,
}

impl EntryFilter {
    pub fn new<S: AsRef<str>>(extensions: &[S], exclude_marked: bool) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|extension| normalize_extension(extension.as_ref()))
                .collect(),
            exclude_marked,
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn exclude_marked(&self) -> bool {
        self.exclude_marked
    }

    /// Applies the predicate to one entry.
    ///
    /// `include_marked` overrides the marker exclusion for this call only.
    pub fn accepts(&self, path: &Path, include_marked: bool) -> bool {
        if !include_marked && self.exclude_marked && marker::is_marked(path) {
            return false;
        }
        is_extension_in_list(path, &self.extensions)
    }
}

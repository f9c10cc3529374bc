//! Path collation and positional lookup shared by the snapshot and the navigator.
//!
//! Paths are ordered case-insensitively by comparing the upper-cased
//! characters of their full string form. Two paths that differ only by case
//! are then ordered ordinally so the order stays total and deterministic.
//! Lookups ignore that tie-break: a key differing from an entry only by case
//! finds that entry.

use std::cmp::Ordering;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Case-insensitive ordinal comparison over the full path string.
pub fn compare_ignore_case(a: &Path, b: &Path) -> Ordering {
    let a = a.to_string_lossy();
    let b = b.to_string_lossy();
    let folded_a = a.chars().flat_map(char::to_uppercase);
    let folded_b = b.chars().flat_map(char::to_uppercase);
    folded_a.cmp(folded_b)
}

/// Total order used for sorting listings.
pub fn collate(a: &Path, b: &Path) -> Ordering {
    compare_ignore_case(a, b).then_with(|| a.cmp(b))
}

/// Sorts paths by [`collate`] and removes exact duplicates.
pub fn sort_paths(paths: &mut Vec<PathBuf>) {
    paths.sort_unstable_by(|a, b| collate(a, b));
    paths.dedup();
}

/// Result of a binary search over a collated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The key is present at this index.
    Found(usize),
    /// The key is absent and would be inserted at this index.
    Absent { insert_at: usize },
}

impl Lookup {
    /// Index of the largest entry less than or equal to the key.
    ///
    /// `None` means the key sorts before every entry.
    pub fn floor(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::Absent { insert_at: 0 } => None,
            Self::Absent { insert_at } => Some(insert_at - 1),
        }
    }

    /// Same as [`Lookup::floor`], with "before the first entry" as `-1`.
    pub fn floor_signed(self) -> isize {
        self.floor().map_or(-1, |index| index as isize)
    }
}

/// Binary searches a listing sorted by [`collate`], matching case-insensitively.
///
/// When several entries differ from `key` only by case, the exact ordinal
/// match wins; otherwise the last of them is reported.
pub fn search(sorted: &[PathBuf], key: &Path) -> Lookup {
    let start = sorted.partition_point(|entry| compare_ignore_case(entry, key) == Ordering::Less);
    let end = start
        + sorted[start..]
            .partition_point(|entry| compare_ignore_case(entry, key) == Ordering::Equal);
    if start == end {
        return Lookup::Absent { insert_at: start };
    }

    let exact = sorted[start..end]
        .iter()
        .position(|entry| entry.as_path() == key);
    Lookup::Found(exact.map_or(end - 1, |offset| start + offset))
}

/// Clamps a signed index into `0..len`.
///
/// Negative indexes land on the first entry and indexes past the end land on
/// the last one. Empty listings never reach this helper.
#[inline]
pub fn clamp_index(len: NonZeroUsize, index: isize) -> usize {
    let last = len.get() - 1;
    if index <= 0 {
        0
    } else {
        (index as usize).min(last)
    }
}

//! Non-empty filtered listing with clamped positional access.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::ordering::{clamp_index, search};

/// Filtered entries for a single navigation call. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView {
    entries: Vec<PathBuf>,
    len: NonZeroUsize,
}

impl FilteredView {
    /// Wraps a collated listing; `None` if it is empty.
    pub fn new(entries: Vec<PathBuf>) -> Option<Self> {
        let len = NonZeroUsize::new(entries.len())?;
        Some(Self { entries, len })
    }

    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Entry at `index`, clamped to the first or last entry when out of range.
    pub fn at(&self, index: isize) -> &Path {
        &self.entries[clamp_index(self.len, index)]
    }

    pub fn first(&self) -> &Path {
        self.at(0)
    }

    pub fn last(&self) -> &Path {
        self.at(self.len.get() as isize - 1)
    }

    /// Index of the largest entry `<= key`, or `-1` if none.
    ///
    /// A missing key sorts before every entry.
    pub fn floor_index(&self, key: Option<&Path>) -> isize {
        match key {
            Some(key) => search(&self.entries, key).floor_signed(),
            None => -1,
        }
    }
}

//! Ordered traversal over a filtered directory snapshot.
//!
//! [`FileNavigator`] walks the files of one directory in collated order
//! (first, last, next, previous), keyed by the current path rather than an
//! index, so that it keeps its place while files come and go.
//!
//! ## Self-healing
//!
//! Change notifications are asynchronous: a file may already be gone when the
//! navigator lands on it. Every operation computes its target against the
//! cached listing first; if that target no longer exists on disk, the
//! snapshot is force-refreshed and the operation is computed once more.
//! The second result is accepted even if it is also stale, so callers must
//! tolerate a `current()` that has just been deleted.

mod shared;
mod view;

use std::path::{Path, PathBuf};

use crate::config::{NavigatorConfig, WatchMode};
use crate::filter::EntryFilter;
use crate::snapshot::DirectorySnapshot;

pub use shared::SharedNavigator;
pub use view::FilteredView;

#[derive(Debug)]
pub struct FileNavigator {
    base_directory: PathBuf,
    filter: EntryFilter,
    watch: WatchMode,
    snapshot: DirectorySnapshot,
    current: Option<PathBuf>,
}

impl FileNavigator {
    /// Opens a navigator and positions it at the configured start path, or
    /// at the first entry when there is none.
    pub fn new(config: &NavigatorConfig) -> Self {
        let snapshot =
            DirectorySnapshot::new(&config.base_directory, config.recursive, config.watch);
        let mut navigator = Self {
            base_directory: config.base_directory.clone(),
            filter: EntryFilter::new(&config.extensions, config.exclude_marked),
            watch: config.watch,
            snapshot,
            current: config.start_path.clone(),
        };
        navigator.verify_current();
        navigator
    }

    /// The current path, or `None` when nothing matches.
    ///
    /// This may briefly refer to a file deleted after the last refresh.
    pub fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Root directory being navigated.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Filter applied to every listing.
    pub fn filter(&self) -> &EntryFilter {
        &self.filter
    }

    /// The snapshot currently owned by this navigator.
    pub fn snapshot(&self) -> &DirectorySnapshot {
        &self.snapshot
    }

    /// Marks the snapshot dirty so the next call re-enumerates.
    pub fn notify_file_changes(&self) {
        self.snapshot.mark_dirty();
    }

    /// Replaces the snapshot with a fresh one over the same root, then
    /// re-validates the current path.
    pub fn refresh(&mut self) {
        let fresh = DirectorySnapshot::new(
            &self.base_directory,
            self.snapshot.recursive(),
            self.watch,
        );
        let stale = std::mem::replace(&mut self.snapshot, fresh);
        drop(stale);
        self.verify_current();
    }

    /// Filtered listing in collated order.
    ///
    /// An unavailable directory yields an empty listing.
    pub fn entries(&mut self, force_refresh: bool, include_marked: bool) -> Vec<PathBuf> {
        match self.snapshot.entries(force_refresh) {
            Ok(entries) => entries
                .iter()
                .filter(|path| self.filter.accepts(path, include_marked))
                .cloned()
                .collect(),
            Err(error) => {
                log::warn!("navigation listing treated as empty: {error}");
                Vec::new()
            }
        }
    }

    /// Moves to the entry after the current path, stopping at the last one.
    pub fn go_next(&mut self) {
        self.go_next_with_neighbors(&mut []);
    }

    /// Moves to the next entry, filling `neighbors` with the entries after it.
    ///
    /// Neighbors past the end repeat the last entry.
    pub fn go_next_with_neighbors(&mut self, neighbors: &mut [Option<PathBuf>]) {
        neighbors.fill(None);
        self.settle(|view, current| {
            let index = view.floor_index(current);
            for (offset, slot) in neighbors.iter_mut().enumerate() {
                *slot = Some(view.at(index + offset as isize + 2).to_path_buf());
            }
            view.at(index + 1).to_path_buf()
        });
    }

    /// Moves to the entry before the current path, stopping at the first one.
    pub fn go_previous(&mut self) {
        self.go_previous_with_neighbors(&mut []);
    }

    /// Moves to the previous entry, filling `neighbors` with the entries before it.
    ///
    /// Neighbors before the start repeat the first entry.
    pub fn go_previous_with_neighbors(&mut self, neighbors: &mut [Option<PathBuf>]) {
        neighbors.fill(None);
        self.settle(|view, current| {
            let mut index = view.floor_index(current);
            // floor is inclusive; previous must be strictly less.
            if index >= 0 && current == Some(view.at(index)) {
                index -= 1;
            }
            for (offset, slot) in neighbors.iter_mut().enumerate() {
                *slot = Some(view.at(index - offset as isize - 1).to_path_buf());
            }
            view.at(index).to_path_buf()
        });
    }

    /// Moves to the first entry.
    pub fn go_first(&mut self) {
        self.settle(|view, _| view.first().to_path_buf());
    }

    /// Moves to the last entry.
    pub fn go_last(&mut self) {
        self.settle(|view, _| view.last().to_path_buf());
    }

    /// Sets the current path. With `verify`, snaps it to the nearest entry at
    /// or before it in the filtered listing.
    pub fn try_set_path(&mut self, path: impl Into<PathBuf>, verify: bool) {
        self.current = Some(path.into());
        if verify {
            self.verify_current();
        }
    }

    fn verify_current(&mut self) {
        self.settle(|view, current| view.at(view.floor_index(current)).to_path_buf());
    }

    /// Runs `target` against the filtered view, retrying once against a
    /// forced refresh if the result no longer exists.
    fn settle<F>(&mut self, mut target: F)
    where
        F: FnMut(&FilteredView, Option<&Path>) -> PathBuf,
    {
        let Some(view) = FilteredView::new(self.entries(false, false)) else {
            self.current = None;
            return;
        };

        let first_try = target(&view, self.current.as_deref());
        if first_try.is_file() {
            self.current = Some(first_try);
            return;
        }

        log::debug!(
            "navigation target missing, refreshing root={} path={}",
            self.base_directory.display(),
            first_try.display()
        );
        let Some(view) = FilteredView::new(self.entries(true, false)) else {
            self.current = None;
            return;
        };
        self.current = Some(target(&view, self.current.as_deref()));
    }
}

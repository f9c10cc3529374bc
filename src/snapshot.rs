//! Self-invalidating sorted listing of a directory.
//!
//! A [`DirectorySnapshot`] caches the files under one root, sorted with
//! [`collate`](crate::ordering::collate). A notify subscription marks the
//! cache dirty on create, rename and delete; the next read re-enumerates.
//!
//! The snapshot is not internally synchronized. The dirty-check-then-rebuild
//! sequence in [`DirectorySnapshot::entries`] needs `&mut self`, so callers
//! sharing one across threads wrap it in a lock.

mod walk;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use notify::RecommendedWatcher;

use crate::config::WatchMode;
use crate::error::{NavigationError, Result};
use crate::ordering::sort_paths;
use crate::watcher::create_snapshot_watcher;

pub use walk::list_files;

/// Invalidation flag shared between a snapshot and its change notifier.
#[derive(Debug, Clone, Default)]
pub struct DirtyFlag(Arc<AtomicBool>);

impl DirtyFlag {
    /// Creates a flag that starts out set.
    pub fn new_dirty() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Sets the flag. Idempotent and non-blocking.
    #[inline]
    pub fn mark(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether the flag is currently set, without clearing it.
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clears the flag, returning whether it was set.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

pub struct DirectorySnapshot {
    root: PathBuf,
    recursive: bool,
    entries: Vec<PathBuf>,
    dirty: DirtyFlag,
    rescan_count: u64,
    /// Live subscription; dropping it releases the OS watch.
    watcher: Option<RecommendedWatcher>,
}

impl fmt::Debug for DirectorySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectorySnapshot")
            .field("root", &self.root)
            .field("recursive", &self.recursive)
            .field("entries", &self.entries.len())
            .field("dirty", &self.dirty.is_set())
            .field("watcher", &self.watcher.as_ref().map(|_| "<watcher>"))
            .finish()
    }
}

impl DirectorySnapshot {
    /// Creates a snapshot bound to `root`. Nothing is enumerated until the first read.
    ///
    /// With [`WatchMode::Live`], a watcher that cannot be created is logged and
    /// the snapshot falls back to manual invalidation.
    pub fn new(root: impl Into<PathBuf>, recursive: bool, watch: WatchMode) -> Self {
        let root = root.into();
        let dirty = DirtyFlag::new_dirty();

        let watcher = match watch {
            WatchMode::Manual => None,
            WatchMode::Live => match create_snapshot_watcher(&root, recursive, dirty.clone()) {
                Ok(watcher) => Some(watcher),
                Err(error) => {
                    log::warn!(
                        "filesystem watcher disabled for {}: {}",
                        root.display(),
                        error
                    );
                    None
                }
            },
        };

        Self {
            root,
            recursive,
            entries: Vec::new(),
            dirty,
            rescan_count: 0,
            watcher,
        }
    }

    /// Directory this snapshot enumerates.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether subdirectories are included.
    pub fn recursive(&self) -> bool {
        self.recursive
    }

    /// Whether a live change subscription is held.
    pub fn is_watching(&self) -> bool {
        self.watcher.is_some()
    }

    /// Whether the next read will re-enumerate.
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_set()
    }

    /// Invalidates the cached listing.
    pub fn mark_dirty(&self) {
        self.dirty.mark();
    }

    /// Handle for external notifiers that want to invalidate this snapshot.
    pub fn dirty_flag(&self) -> DirtyFlag {
        self.dirty.clone()
    }

    /// Number of completed re-enumerations.
    pub fn rescan_count(&self) -> u64 {
        self.rescan_count
    }

    /// Returns the sorted listing, re-enumerating if dirty or `force_refresh`.
    ///
    /// On failure the cache is emptied and the flag stays set so the next
    /// read tries again.
    pub fn entries(&mut self, force_refresh: bool) -> Result<&[PathBuf]> {
        // Clear before enumerating so events during the walk are not lost.
        let was_dirty = self.dirty.take();
        if was_dirty || force_refresh {
            self.rebuild(force_refresh)?;
        }
        Ok(&self.entries)
    }

    fn rebuild(&mut self, forced: bool) -> Result<()> {
        let started = Instant::now();
        match list_files(&self.root, self.recursive) {
            Ok(mut files) => {
                sort_paths(&mut files);
                self.entries = files;
                self.rescan_count += 1;
                log::debug!(
                    "snapshot rebuilt root={} recursive={} entries={} elapsed_ms={} forced={}",
                    self.root.display(),
                    self.recursive,
                    self.entries.len(),
                    started.elapsed().as_millis(),
                    forced,
                );
                Ok(())
            }
            Err(source) => {
                self.entries.clear();
                self.dirty.mark();
                Err(NavigationError::IoUnavailable {
                    root: self.root.clone(),
                    source,
                })
            }
        }
    }
}

impl Drop for DirectorySnapshot {
    fn drop(&mut self) {
        if self.watcher.take().is_some() {
            log::debug!("snapshot watcher released root={}", self.root.display());
        }
    }
}

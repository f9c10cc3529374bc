//! notify integration: event classification and watcher creation.

use std::path::Path;

use notify::event::ModifyKind;
use notify::{recommended_watcher, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::{NavigationError, Result};
use crate::snapshot::DirtyFlag;

/// A change that invalidates a directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Renamed,
    Deleted,
}

impl ChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Renamed => "renamed",
            Self::Deleted => "deleted",
        }
    }
}

/// Maps a notify event kind to a listing change.
///
/// Content and metadata writes return `None`: they do not change which
/// files exist.
pub fn classify_event(kind: &EventKind) -> Option<ChangeKind> {
    match kind {
        EventKind::Create(_) => Some(ChangeKind::Created),
        EventKind::Remove(_) => Some(ChangeKind::Deleted),
        EventKind::Modify(ModifyKind::Name(_)) => Some(ChangeKind::Renamed),
        _ => None,
    }
}

/// Applies one watcher callback result to the dirty flag.
///
/// Backend errors and rescan requests also mark the flag, since events may
/// have been dropped.
pub fn handle_event(event_result: notify::Result<Event>, dirty: &DirtyFlag) {
    match event_result {
        Ok(event) => {
            if let Some(change) = classify_event(&event.kind) {
                log::trace!(
                    "snapshot invalidated kind={} paths={}",
                    change.as_str(),
                    event.paths.len()
                );
                dirty.mark();
            } else if event.need_rescan() {
                log::trace!("snapshot invalidated kind=rescan");
                dirty.mark();
            }
        }
        Err(error) => {
            log::warn!("filesystem watcher error: {error}");
            dirty.mark();
        }
    }
}

/// Creates a notify watcher over `root` that marks `dirty` on listing changes.
pub fn create_snapshot_watcher(
    root: &Path,
    recursive: bool,
    dirty: DirtyFlag,
) -> Result<RecommendedWatcher> {
    let mut watcher =
        recommended_watcher(move |event_result: notify::Result<Event>| {
            handle_event(event_result, &dirty)
        })
        .map_err(|error| {
            NavigationError::Watch(format!(
                "failed to create filesystem watcher for {}: {error}",
                root.display()
            ))
        })?;

    let recursive_mode = if recursive {
        RecursiveMode::Recursive
    } else {
        RecursiveMode::NonRecursive
    };

    watcher.watch(root, recursive_mode).map_err(|error| {
        NavigationError::Watch(format!("failed to watch {}: {error}", root.display()))
    })?;

    Ok(watcher)
}

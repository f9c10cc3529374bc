//! Filesystem change notifications for directory snapshots.
//!
//! The watcher callback runs on notify's own thread and only ever marks the
//! snapshot's [`DirtyFlag`](crate::snapshot::DirtyFlag). Re-enumeration is
//! deferred to the next read of the snapshot.

mod events;

pub use events::{classify_event, create_snapshot_watcher, handle_event, ChangeKind};

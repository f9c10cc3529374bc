//! Directory navigation for media browsing.
//!
//! This crate provides:
//! - A sorted directory snapshot invalidated by filesystem notifications
//! - A filtered navigator with first/last/next/previous traversal that
//!   self-heals when files vanish before the watcher reports them
//! - Filename marker and naming helpers, plus an undo/redo history

pub mod config;
pub mod error;
pub mod filter;
pub mod history;
pub mod marker;
pub mod naming;
pub mod navigator;
pub mod ordering;
pub mod snapshot;
pub mod watcher;

// Re-export main types
pub use config::{NavigatorConfig, WatchMode};
pub use error::{NavigationError, Result};
pub use filter::EntryFilter;
pub use history::UndoStack;
pub use marker::{add_marker, parse_marker, ParsedMarker, MARKER};
pub use navigator::{FileNavigator, FilteredView, SharedNavigator};
pub use snapshot::{DirectorySnapshot, DirtyFlag};

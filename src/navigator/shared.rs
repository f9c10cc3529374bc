//! Thread-shared navigator handle.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::FileNavigator;

/// A navigator behind one lock, for callers that move the cursor from
/// several threads (e.g. a UI thread and a prefetch worker).
#[derive(Debug, Clone)]
pub struct SharedNavigator {
    inner: Arc<Mutex<FileNavigator>>,
}

impl SharedNavigator {
    pub fn new(navigator: FileNavigator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(navigator)),
        }
    }

    /// Locks the navigator. Rebuilds run while the guard is held.
    pub fn lock(&self) -> MutexGuard<'_, FileNavigator> {
        self.inner.lock()
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut FileNavigator) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Copy of the current path.
    pub fn current(&self) -> Option<PathBuf> {
        self.inner.lock().current().map(|path| path.to_path_buf())
    }
}

impl From<FileNavigator> for SharedNavigator {
    fn from(navigator: FileNavigator) -> Self {
        Self::new(navigator)
    }
}

//! Linear undo/redo history.

/// Undo/redo stack over a single timeline.
///
/// Pushing after an undo discards the undone entries.
#[derive(Debug, Clone)]
pub struct UndoStack<T> {
    items: Vec<T>,
    /// Number of entries that can currently be undone.
    position: usize,
}

impl<T> Default for UndoStack<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            position: 0,
        }
    }
}

impl<T> UndoStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `item` as the most recent action.
    pub fn push(&mut self, item: T) {
        self.items.truncate(self.position);
        self.items.push(item);
        self.position = self.items.len();
    }

    /// The action [`UndoStack::undo`] would revert.
    pub fn peek_undo(&self) -> Option<&T> {
        self.position.checked_sub(1).map(|index| &self.items[index])
    }

    /// Steps back one action and returns it, or `None` at the start.
    pub fn undo(&mut self) -> Option<&T> {
        self.position = self.position.checked_sub(1)?;
        Some(&self.items[self.position])
    }

    /// The action [`UndoStack::redo`] would reapply.
    pub fn peek_redo(&self) -> Option<&T> {
        self.items.get(self.position)
    }

    /// Steps forward one action and returns it, or `None` at the end.
    pub fn redo(&mut self) -> Option<&T> {
        let item = self.items.get(self.position)?;
        self.position += 1;
        Some(item)
    }
}

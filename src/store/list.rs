use crate::error::EntryError;
use crate::models::BookEntry;

/// Owns the authoritative list and the list currently on screen.
#[derive(Debug, Clone, Default)]
pub struct ListStore {
    kept: Vec<BookEntry>,
    displayed: Vec<BookEntry>,
}

impl ListStore {
    /// Every entry ever added since the last reset, in insertion order.
    pub fn kept(&self) -> &[BookEntry] {
        &self.kept
    }

    /// The filtered and sorted view.
    pub fn displayed(&self) -> &[BookEntry] {
        &self.displayed
    }

    /// Append to both lists. The displayed list receives the entry even when
    /// it would not pass the active filter; the filter is only re-applied
    /// when its text changes.
    pub fn add(&mut self, entry: BookEntry) -> Result<(), EntryError> {
        entry.validate()?;
        self.kept.push(entry.clone());
        self.displayed.push(entry);
        Ok(())
    }

    /// Swap in a freshly derived displayed list.
    pub(crate) fn replace_displayed(&mut self, displayed: Vec<BookEntry>) {
        self.displayed = displayed;
    }

    pub fn reset(&mut self) {
        self.kept.clear();
        self.displayed.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}

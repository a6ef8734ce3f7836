//! In-memory state for the book list, split across logical submodules.
//!
//! `BookStore` is the only type the presentation layer talks to. It owns the
//! pending form entry, both lists, the filter text and the sort direction,
//! and every mutation goes through one of its methods.

mod filter;
mod form;
mod list;
mod sort;

use tracing::{debug, info};

use crate::error::EntryError;
use crate::models::{BookEntry, FormField, SortDirection};

pub use filter::apply_filter;
pub use form::PendingEntry;
pub use list::ListStore;
pub use sort::{compare_titles, toggle_sort};

/// Controller that ties the form, list, filter and sort state together.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    pending: PendingEntry,
    lists: ListStore,
    filter: String,
    direction: SortDirection,
    revision: u64,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &PendingEntry {
        &self.pending
    }

    pub fn is_submittable(&self) -> bool {
        self.pending.is_submittable()
    }

    pub fn displayed(&self) -> &[BookEntry] {
        self.lists.displayed()
    }

    pub fn kept(&self) -> &[BookEntry] {
        self.lists.kept()
    }

    pub fn filter_value(&self) -> &str {
        &self.filter
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Whether the sort, reset and filter controls should be visible.
    pub fn has_entries(&self) -> bool {
        !self.lists.is_empty()
    }

    /// Bumped on every state change. A renderer can compare revisions to skip
    /// redundant redraws.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.pending.set_field(field, value);
        debug!(field = field.label(), "pending field replaced");
        self.touch();
    }

    /// Type one character into a pending field.
    pub fn push_char(&mut self, field: FormField, ch: char) -> bool {
        let changed = self.pending.push_char(field, ch);
        if changed {
            self.touch();
        }
        changed
    }

    pub fn backspace(&mut self, field: FormField) -> bool {
        let changed = self.pending.backspace(field);
        if changed {
            self.touch();
        }
        changed
    }

    /// Commit the pending entry. On success the draft is cleared and the new
    /// entry is returned; on rejection nothing changes.
    pub fn add(&mut self) -> Result<&BookEntry, EntryError> {
        let entry = self.pending.to_entry()?;
        self.lists.add(entry)?;
        self.pending.clear();
        self.touch();

        let added = &self.lists.kept()[self.lists.kept().len() - 1];
        info!(
            title = %added.title,
            genre = %added.genre,
            total = self.lists.kept().len(),
            "book added"
        );
        Ok(added)
    }

    /// Return to the initial state: empty lists, empty draft, no filter,
    /// ascending.
    pub fn reset(&mut self) {
        let dropped = self.lists.kept().len();
        self.lists.reset();
        self.pending.clear();
        self.filter.clear();
        self.direction = SortDirection::Ascending;
        self.touch();
        info!(dropped, "book list reset");
    }

    /// Update the filter text. The displayed list is recomputed from the
    /// authoritative list only when the text actually changes.
    pub fn set_filter_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.filter {
            return;
        }
        self.filter = value;
        self.refilter();
    }

    pub fn push_filter_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let mut value = self.filter.clone();
        value.push(ch);
        self.set_filter_value(value);
        true
    }

    pub fn backspace_filter(&mut self) -> bool {
        let mut value = self.filter.clone();
        if value.pop().is_none() {
            return false;
        }
        self.set_filter_value(value);
        true
    }

    /// Flip the direction and reorder the displayed list. The authoritative
    /// list keeps its insertion order.
    pub fn toggle_sort(&mut self) -> SortDirection {
        let (sorted, direction) = toggle_sort(self.lists.displayed(), self.direction);
        self.lists.replace_displayed(sorted);
        self.direction = direction;
        self.touch();
        info!(?direction, shown = self.lists.displayed().len(), "list sorted");
        direction
    }

    fn refilter(&mut self) {
        let displayed = apply_filter(self.lists.kept(), &self.filter);
        debug!(
            filter = %self.filter,
            shown = displayed.len(),
            total = self.lists.kept().len(),
            "filter applied"
        );
        self.lists.replace_displayed(displayed);
        self.touch();
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(store: &BookStore) -> Vec<&str> {
        store
            .displayed()
            .iter()
            .map(|entry| entry.title.as_str())
            .collect()
    }

    fn add(store: &mut BookStore, title: &str, genre: &str) {
        store.set_field(FormField::Title, title);
        store.set_field(FormField::Genre, genre);
        store.add().unwrap();
    }

    #[test]
    fn add_clears_the_pending_entry() {
        let mut store = BookStore::new();
        add(&mut store, "Dune", "Sci-Fi");
        assert!(store.pending().is_empty());
        assert!(!store.is_submittable());
        assert!(store.has_entries());
    }

    #[test]
    fn rejected_add_keeps_the_draft() {
        let mut store = BookStore::new();
        store.set_field(FormField::Title, "Dune");
        assert_eq!(store.add().unwrap_err(), EntryError::MissingGenre);
        assert_eq!(store.pending().title(), "Dune");
        assert!(!store.has_entries());
    }

    #[test]
    fn unchanged_filter_does_not_recompute() {
        let mut store = BookStore::new();
        add(&mut store, "Dune", "Sci-Fi");
        store.set_filter_value("fantasy");
        assert!(store.displayed().is_empty());

        add(&mut store, "Hobbit", "Fantasy");
        add(&mut store, "Foundation", "Sci-Fi");
        let before = store.revision();
        store.set_filter_value("fantasy");
        assert_eq!(store.revision(), before);
        assert_eq!(titles(&store), ["Hobbit", "Foundation"]);
    }

    #[test]
    fn sort_leaves_authoritative_order_alone() {
        let mut store = BookStore::new();
        add(&mut store, "Hobbit", "Fantasy");
        add(&mut store, "Dune", "Sci-Fi");
        store.toggle_sort();
        store.toggle_sort();
        assert_eq!(titles(&store), ["Dune", "Hobbit"]);
        assert_eq!(store.kept()[0].title, "Hobbit");
    }

    #[test]
    fn typing_into_filter_refilters_per_keystroke() {
        let mut store = BookStore::new();
        add(&mut store, "Dune", "Sci-Fi");
        add(&mut store, "Hobbit", "Fantasy");

        store.push_filter_char('f');
        assert_eq!(titles(&store), ["Dune", "Hobbit"]);
        store.push_filter_char('a');
        assert_eq!(titles(&store), ["Hobbit"]);
        store.backspace_filter();
        store.backspace_filter();
        assert_eq!(store.filter_value(), "");
        assert_eq!(titles(&store), ["Dune", "Hobbit"]);
        assert!(!store.backspace_filter());
    }

    #[test]
    fn reset_restores_ascending() {
        let mut store = BookStore::new();
        add(&mut store, "Dune", "Sci-Fi");
        store.toggle_sort();
        assert_eq!(store.direction(), SortDirection::Descending);
        store.reset();
        assert_eq!(store.direction(), SortDirection::Ascending);
    }
}

//! Domain models passed between the store and the TUI. These stay plain data
//! holders so the store can own every rule about how they change.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::EntryError;

#[derive(Debug, Clone, Default)]
/// One catalog item. Entries are immutable once they reach the list store.
pub struct BookEntry {
    /// Title shown in the list. Doubles as the display key, so equality and
    /// hashing look at the title only.
    pub title: String,
    /// Free-form genre, matched by the genre filter.
    pub genre: String,
}

impl BookEntry {
    pub fn new(title: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
        }
    }

    /// Both fields must carry text before the entry may be stored.
    /// Whitespace counts as text.
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.title.is_empty() {
            return Err(EntryError::MissingTitle);
        }
        if self.genre.is_empty() {
            return Err(EntryError::MissingGenre);
        }
        Ok(())
    }
}

impl PartialEq for BookEntry {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for BookEntry {}

impl Hash for BookEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
    }
}

impl fmt::Display for BookEntry {
    /// `Title - Genre`, the way list rows show an entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.genre)
    }
}

/// Fields of the pending entry form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Genre,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Genre => "genre",
        }
    }
}

/// Direction of the last sort applied to the displayed list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow drawn next to the sort control.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_uses_title_only() {
        assert_eq!(
            BookEntry::new("Dune", "Sci-Fi"),
            BookEntry::new("Dune", "Classics")
        );
        assert_ne!(
            BookEntry::new("Dune", "Sci-Fi"),
            BookEntry::new("Emma", "Sci-Fi")
        );
    }

    #[test]
    fn whitespace_counts_as_text() {
        assert_eq!(BookEntry::new(" ", " ").validate(), Ok(()));
        assert_eq!(
            BookEntry::new("Dune", "").validate(),
            Err(EntryError::MissingGenre)
        );
        assert_eq!(
            BookEntry::new("", "").validate(),
            Err(EntryError::MissingTitle)
        );
    }

    #[test]
    fn display_joins_title_and_genre() {
        assert_eq!(BookEntry::new("Dune", "Sci-Fi").to_string(), "Dune - Sci-Fi");
    }

    #[test]
    fn direction_flips_back_and_forth() {
        let dir = SortDirection::default();
        assert_eq!(dir, SortDirection::Ascending);
        assert_eq!(dir.flipped(), SortDirection::Descending);
        assert_eq!(dir.flipped().flipped(), dir);
    }
}

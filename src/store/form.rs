use crate::error::EntryError;
use crate::models::{BookEntry, FormField};

/// Draft entry edited field by field before it is committed to the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingEntry {
    title: String,
    genre: String,
}

impl PendingEntry {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Genre => &self.genre,
        }
    }

    /// Replace one field, leaving the other alone. No validation happens here.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Append a typed character to a field. Control characters are dropped,
    /// matching what a text input would accept.
    pub fn push_char(&mut self, field: FormField, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.slot(field).push(ch);
        true
    }

    /// Remove the last character from a field.
    pub fn backspace(&mut self, field: FormField) -> bool {
        self.slot(field).pop().is_some()
    }

    /// True when both fields are non-empty. Whitespace is not stripped.
    pub fn is_submittable(&self) -> bool {
        !self.title.is_empty() && !self.genre.is_empty()
    }

    /// Build the entry to commit, reporting the first missing field.
    pub fn to_entry(&self) -> Result<BookEntry, EntryError> {
        let entry = BookEntry::new(self.title.clone(), self.genre.clone());
        entry.validate()?;
        Ok(entry)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.genre.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.genre.is_empty()
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Genre => &mut self.genre,
        }
    }
}

use thiserror::Error;

/// Why a pending entry cannot be committed to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("Book title is required.")]
    MissingTitle,
    #[error("Book genre is required.")]
    MissingGenre,
}

//! Core library surface for the Book List Manager TUI application.
//!
//! The store is usable on its own: the `bin` target drives it through the
//! Ratatui front-end, and tests drive it directly.
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;

pub use config::{Config, ConfigError};
pub use error::EntryError;
pub use logging::init_tracing;

/// Domain types that every layer passes around.
pub use models::{BookEntry, FormField, SortDirection};

/// The state controller and its building blocks.
pub use store::{apply_filter, compare_titles, toggle_sort, BookStore, ListStore, PendingEntry};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};

//! Ratatui front-end. The store owns the data; this module only turns key
//! presses into store calls and redraws the whole screen whenever the store
//! or the view state changed.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;

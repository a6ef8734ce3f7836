//! Binary entry point: load the configuration, optionally start file logging,
//! and drive the Ratatui event loop until the user exits.
use std::time::Duration;

use anyhow::Context;
use book_list_manager::{init_tracing, run_app, App, BookStore, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config);
    tracing::info!(path = %Config::config_path().display(), "configuration loaded");

    let mut app = App::new(BookStore::new());
    run_app(&mut app, Duration::from_millis(config.ui.tick_ms))
}

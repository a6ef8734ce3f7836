use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use super::app::App;

/// Spin up the terminal backend, enter the draw loop, and keep processing input
/// until the user quits. `tick` bounds how long a single poll may block.
pub fn run_app(app: &mut App, tick: Duration) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal backend")?;
    info!(tick_ms = tick.as_millis() as u64, "terminal ready");

    let result = event_loop(&mut terminal, app, tick);

    cleanup_terminal(&mut terminal)?;
    info!(books = app.store().kept().len(), "terminal restored");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    let mut drawn: Option<(u64, u64)> = None;
    loop {
        let frame_key = app.frame_key();
        if drawn != Some(frame_key) {
            terminal
                .draw(|frame| app.draw(frame))
                .context("failed to draw frame")?;
            drawn = Some(frame_key);
        }

        if !event::poll(tick).context("event polling failed")? {
            continue;
        }
        let key_event = match event::read().context("failed to read event")? {
            Event::Key(key_event) => key_event,
            Event::Resize(..) => {
                drawn = None;
                continue;
            }
            _ => continue,
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            match key_event.code {
                KeyCode::Char('c') => return Ok(()),
                KeyCode::Char('s') => {
                    app.handle_ctrl_s();
                    continue;
                }
                KeyCode::Char('r') => {
                    app.handle_ctrl_r();
                    continue;
                }
                _ => continue,
            }
        }

        if app.handle_key(key_event.code) {
            return Ok(());
        }
    }
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal
        .show_cursor()
        .context("failed to restore cursor visibility")
}

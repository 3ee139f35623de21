//! TUI Module - Terminal theme switcher powered by ratatui
//!
//! Theme list, live palette swatches, an animated fluid strip, and the
//! custom color input once `custom` is active.

mod app;
mod ui;

pub use app::{App, AppState};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::time::Duration;

use crate::cli::commands::startup_state;
use crate::cli::ThemeArgs;
use crate::config::Config;

/// Run the TUI application
pub fn run_tui(args: &ThemeArgs, config: &Config) -> Result<()> {
    let state = startup_state(config, args.theme, args.base);
    let mut app = App::new(state, config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms.max(1));
    let result = run_event_loop(&mut terminal, &mut app, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("TUI error: {}", e);
    }

    Ok(())
}

/// Main TUI event loop
fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        app.on_tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

//! Terminal setup, teardown and the main loop
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::{debug, info};

use crate::api::BudgetApi;
use crate::config::{ResolvedConfig, Settings};
use crate::display::RowLayout;

use super::app::{App, Command};
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the review screen until the user quits
pub fn run_tui(api: &dyn BudgetApi, config: &ResolvedConfig, settings: &Settings) -> Result<()> {
    let layout = RowLayout {
        payee_width: settings.payee_width,
        amount_width: settings.amount_width,
    };
    let mut app = App::new(config.budget_id.clone(), layout);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms.max(1)));

    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, &mut app, api, &events);
    restore_terminal()?;

    info!("Review session ended");
    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    api: &dyn BudgetApi,
    events: &EventHandler,
) -> Result<()> {
    let mut pending = Some(Command::Refresh);

    loop {
        if let Some(command) = pending.take() {
            app.begin(&command);
            terminal.draw(|frame| super::views::render(frame, app))?;

            app.execute(api, command);

            let dropped = events.drain();
            if dropped > 0 {
                debug!(dropped, "Discarded input queued during request");
            }
        }

        terminal.draw(|frame| super::views::render(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        pending = handle_event(app, events.next()?);
    }
}

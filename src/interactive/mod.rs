//! Terminal UI for the booking flow
//!
//! One screen at a time, driven by the keyboard, with the booking draft kept
//! by the navigator between screens.

pub mod app;
pub mod events;
pub mod forms;
pub mod messages;
pub mod screens;
pub mod ui;
pub mod utils;

mod account_ui;
mod auth_ui;
mod booking_ui;
mod checkout_ui;
mod venue_ui;

pub use app::App;
pub use events::EventHandler;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::clock::{SystemClock, ThreadRandom};
use crate::config::Config;
use crate::ticket::ClipboardShare;

/// Run the interactive UI application
pub async fn run_interactive(config: Config) -> Result<()> {
    let tick_rate = Duration::from_millis(config.tick_rate_ms);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(
        config,
        Arc::new(SystemClock),
        Box::new(ThreadRandom),
        Box::new(ClipboardShare),
    );
    tracing::info!("Interactive session started");
    let res = run_app(&mut terminal, &mut app, EventHandler::new(tick_rate)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "Interactive session failed");
    }
    res
}

/// Main application loop
pub async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // the loading overlay is on screen while the payment settles
        if app.payment_pending() {
            app.complete_payment().await;
            continue;
        }

        if let Some(key) = events.next()? {
            if !app.handle_event(key) {
                break;
            }
        }
        app.on_tick();
    }

    Ok(())
}

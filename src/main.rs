mod auth;
mod controller;
mod error;
mod logging;
mod model;
mod screen;
mod view;

use std::io;
use std::time::Duration;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use controller::AppController;
use model::{ApiClient, SpotifyClient, DEFAULT_PAGE_SIZE};
use view::AppView;

// Every key press is handled to completion on this one thread
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Music Search Starting ===");

    let spotify = auth::authorize().await?;
    let controller = AppController::new(SpotifyClient::new(spotify), DEFAULT_PAGE_SIZE)?;

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Music Search shutting down");
    res
}

async fn run_app<A: ApiClient>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut controller: AppController<A>,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            AppView::render(f, controller.screens(), controller.ui_state());
        })?;

        if controller.should_quit() {
            break;
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key).await?;
            }
        }
    }

    Ok(())
}

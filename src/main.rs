//! Truckload - Main entry point
//!
//! Starts the interactive calculator, or runs one of the headless commands.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use truckload::app::App;
use truckload::catalog::Catalog;
use truckload::cli::{Cli, Commands};
use truckload::commands;
use truckload::error::TruckloadError;

/// Initialize logging.
///
/// `RUST_LOG` overrides the default level. With a log file everything from
/// `info` up goes there. Without one, the interactive UI stays silent since
/// it owns the terminal, and headless commands print warnings to stderr.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter("info"))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter("warn"))
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    init_logging(cli.log_file.as_deref(), interactive)?;
    info!("Truckload starting up");
    debug!("CLI arguments parsed");

    let catalog = Catalog::load_or_builtin(cli.catalog.as_deref())?;

    match cli.command {
        None | Some(Commands::Tui) => run_tui(catalog)?,
        Some(command) => {
            if !commands::run(command, &catalog)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Run the interactive calculator
fn run_tui(catalog: Catalog) -> Result<()> {
    // Initialize terminal
    enable_raw_mode()
        .map_err(|e| TruckloadError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    if let Err(e) = crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(TruckloadError::terminal(format!(
            "Failed to enter alternate screen: {}",
            e
        ))
        .into());
    }

    let result = run_app(catalog);

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    if let Err(e) = &result {
        error!("Application error: {}", e);
    }
    info!("Truckload shutting down");
    Ok(result?)
}

fn run_app(catalog: Catalog) -> truckload::error::Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TruckloadError::terminal(format!("Failed to create terminal: {}", e)))?;

    let mut app = App::new(catalog);
    app.run(&mut terminal)
}

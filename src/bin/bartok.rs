use bartok_rs::config::GameConfig;
use bartok_rs::logging::init_file_logging;
use bartok_rs::tui::{app::AppState, controller};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;
use tracing::{error, info};

const LOG_FILE: &str = "bartok-rs.log";

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// `bartok-rs [CONFIG.toml]`
fn load_config() -> io::Result<GameConfig> {
    match std::env::args_os().nth(1) {
        Some(path) => GameConfig::load(&path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
        None => Ok(GameConfig::default()),
    }
}

fn main() -> io::Result<()> {
    let config = load_config()?;
    if !io::stdout().is_terminal() {
        println!(
            "bartok-rs TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            bartok_rs::VERSION
        );
        return Ok(());
    }
    if let Err(e) = init_file_logging(LOG_FILE) {
        eprintln!("logging disabled: {e}");
    }
    let mut app =
        AppState::new(config).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    info!(seed = app.game.seed(), "starting bartok-rs {}", bartok_rs::VERSION);

    let mut terminal = setup_terminal()?;
    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(50));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    if let Err(e) = &res {
        error!(error = %e, "terminal loop failed");
    }
    res
}

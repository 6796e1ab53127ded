mod app;
mod config;
mod runtime;
mod store;
mod time_utils;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::SitewatchConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use store::JobStore;

fn main() -> Result<()> {
    let config = SitewatchConfig::load()?;

    let mut store = JobStore::seeded(&config.employee_id).with_context(|| {
        format!(
            "no seed data for employee id {:?} (check {})",
            config.employee_id,
            SitewatchConfig::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "config.toml".to_string()),
        )
    })?;
    let mut app = App::new(&store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = runtime::run_app(&mut terminal, &mut app, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

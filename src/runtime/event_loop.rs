use crate::app::App;
use crate::store::JobStore;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::action_queue::channel;
use super::actions::run_action;
use super::views::handle_view_key;

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut JobStore,
) -> Result<()> {
    let (action_tx, action_rx) = channel();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_view_key(key, app, &action_tx);
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, store);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}

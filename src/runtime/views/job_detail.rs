use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_job_detail_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.close_dialog(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

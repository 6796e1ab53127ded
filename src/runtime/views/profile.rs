use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_profile_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => app.navigate_to(View::Jobs),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

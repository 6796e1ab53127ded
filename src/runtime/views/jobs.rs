use crate::app::{App, JobTab, View};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_jobs_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_tab(),
        KeyCode::Char('1') => app.switch_tab(JobTab::Assigned),
        KeyCode::Char('2') => app.switch_tab(JobTab::Completed),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => app.open_job_detail(),
        KeyCode::Char('u') | KeyCode::Char('U') => app.open_status_form(),
        KeyCode::Char('p') | KeyCode::Char('P') => app.navigate_to(View::Profile),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            enqueue_action(action_tx, Action::RefreshJobs);
        }
        _ => {}
    }
}

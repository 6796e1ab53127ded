use crate::app::{App, View};
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod job_detail;
mod jobs;
mod profile;
mod update_status;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.current_view {
        View::Jobs => jobs::handle_jobs_key(key, app, action_tx),
        View::Profile => profile::handle_profile_key(key, app),
        View::JobDetail => job_detail::handle_job_detail_key(key, app),
        View::UpdateStatus => update_status::handle_update_status_key(key, app, action_tx),
    }
}

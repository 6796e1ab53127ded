use crate::app::{App, StatusField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_update_status_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(focused) = app.status_form.as_ref().map(|form| form.focused_field) else {
        return;
    };

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.form_next_field(),
        KeyCode::Enter => {
            if let Some(form) = &app.status_form {
                let notes = (!form.notes.value.is_empty()).then(|| form.notes.value.clone());
                enqueue_action(
                    action_tx,
                    Action::UpdateJobStatus {
                        job_id: form.job_id,
                        status: form.status,
                        notes,
                    },
                );
            }
        }
        KeyCode::Esc => {
            app.close_dialog();
            app.set_status("Status update cancelled".to_string());
        }
        KeyCode::Up | KeyCode::Down if focused == StatusField::Status => {
            app.form_cycle_status(key.code == KeyCode::Down);
        }
        KeyCode::Char('j') | KeyCode::Char('k') if focused == StatusField::Status => {
            app.form_cycle_status(key.code == KeyCode::Char('j'));
        }
        KeyCode::Left => app.form_move_cursor(true),
        KeyCode::Right => app.form_move_cursor(false),
        KeyCode::Home if focused == StatusField::Notes => {
            if let Some(form) = &mut app.status_form {
                form.notes.home();
            }
        }
        KeyCode::End if focused == StatusField::Notes => {
            if let Some(form) = &mut app.status_form {
                form.notes.end();
            }
        }
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Char('x')
            if focused == StatusField::Notes && key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            if let Some(form) = &mut app.status_form {
                form.notes.clear();
            }
        }
        KeyCode::Char(c)
            if focused == StatusField::Notes && !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.form_input_char(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::store::{JobStatus, JobStore};

    use super::super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        let store = JobStore::seeded("emp1").expect("emp1 is seeded");
        let mut app = App::new(&store);
        app.open_status_form();
        app
    }

    fn send_key(app: &mut App, code: KeyCode) -> Option<Action> {
        let (tx, rx) = channel();
        handle_update_status_key(key(code), app, &tx);
        rx.try_recv().ok()
    }

    #[test]
    fn enter_queues_update_with_form_payload() {
        let mut app = test_app();
        // Selected assigned job is the in-progress one (id 2); cycle it to
        // completed and type some notes.
        app.form_cycle_status(true);
        let _ = send_key(&mut app, KeyCode::Tab);
        for c in "Finished wiring".chars() {
            let _ = send_key(&mut app, KeyCode::Char(c));
        }

        let action = send_key(&mut app, KeyCode::Enter);
        match action {
            Some(Action::UpdateJobStatus {
                job_id,
                status,
                notes,
            }) => {
                assert_eq!(job_id, 2);
                assert_eq!(status, JobStatus::Completed);
                assert_eq!(notes.as_deref(), Some("Finished wiring"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn enter_with_empty_notes_queues_none() {
        let mut app = test_app();
        let action = send_key(&mut app, KeyCode::Enter);
        match action {
            Some(Action::UpdateJobStatus { notes, status, .. }) => {
                assert_eq!(notes, None);
                // Form is prefilled with the job's current status.
                assert_eq!(status, JobStatus::InProgress);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn esc_cancels_without_queuing() {
        let mut app = test_app();
        let action = send_key(&mut app, KeyCode::Esc);
        assert!(action.is_none());
        assert!(app.status_form.is_none());
        assert_eq!(app.current_view, View::Jobs);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Status update cancelled")
        );
    }

    #[test]
    fn notes_editing_keys_are_inert_on_status_field() {
        let mut app = test_app();
        let _ = send_key(&mut app, KeyCode::Tab);
        for c in "abc".chars() {
            let _ = send_key(&mut app, KeyCode::Char(c));
        }
        // Back on the status field, cursor and clear keys leave notes alone.
        let _ = send_key(&mut app, KeyCode::Tab);
        let _ = send_key(&mut app, KeyCode::Home);
        let (tx, _rx) = channel();
        handle_update_status_key(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
            &mut app,
            &tx,
        );
        let form = app.status_form.as_ref().unwrap();
        assert_eq!(form.notes.value, "abc");
        assert_eq!(form.notes.cursor, 3);
    }

    #[test]
    fn status_keys_only_cycle_on_status_field() {
        let mut app = test_app();
        let _ = send_key(&mut app, KeyCode::Char('j'));
        assert_eq!(
            app.status_form.as_ref().unwrap().status,
            JobStatus::Completed
        );

        // On the notes field, j is just text.
        let _ = send_key(&mut app, KeyCode::Tab);
        let _ = send_key(&mut app, KeyCode::Char('j'));
        let form = app.status_form.as_ref().unwrap();
        assert_eq!(form.status, JobStatus::Completed);
        assert_eq!(form.notes.value, "j");
    }
}

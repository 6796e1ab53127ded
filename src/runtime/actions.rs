use crate::app::App;
use crate::store::{JobId, JobStatus, JobStore};

use super::action_queue::Action;

pub(super) fn run_action(action: Action, app: &mut App, store: &mut JobStore) {
    match action {
        Action::UpdateJobStatus {
            job_id,
            status,
            notes,
        } => {
            handle_update_job_status(app, store, job_id, status, notes);
        }
        Action::RefreshJobs => {
            app.refresh_from_store(store);
            app.set_status("Jobs refreshed".to_string());
        }
    }
}

fn handle_update_job_status(
    app: &mut App,
    store: &mut JobStore,
    job_id: JobId,
    status: JobStatus,
    notes: Option<String>,
) {
    let updated = store.update_job_status(job_id, status, notes.as_deref());
    app.close_dialog();
    if updated {
        app.refresh_from_store(store);
        let label = store
            .job_by_id(job_id)
            .map(|job| job.status.label())
            .unwrap_or_default();
        app.set_status(format!("Job status updated to {label}"));
    } else {
        app.set_status(format!("Job #{job_id} not found"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;

    fn test_app() -> (App, JobStore) {
        let store = JobStore::seeded("emp1").expect("emp1 is seeded");
        let app = App::new(&store);
        (app, store)
    }

    #[test]
    fn update_action_mutates_store_and_refreshes_snapshots() {
        let (mut app, mut store) = test_app();
        app.open_status_form();

        run_action(
            Action::UpdateJobStatus {
                job_id: 2,
                status: JobStatus::Completed,
                notes: Some("Finished wiring".to_string()),
            },
            &mut app,
            &mut store,
        );

        assert_eq!(store.job_by_id(2).unwrap().status, JobStatus::Completed);
        assert_eq!(app.assigned_jobs.len(), 1);
        assert_eq!(app.completed_jobs.len(), 4);
        assert_eq!(app.counts.completed, 4);
        assert_eq!(app.current_view, View::Jobs);
        assert!(app.status_form.is_none());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Job status updated to Completed")
        );
    }

    #[test]
    fn update_action_on_unknown_job_reports_and_changes_nothing() {
        let (mut app, mut store) = test_app();
        let before = store.jobs().to_vec();

        run_action(
            Action::UpdateJobStatus {
                job_id: 42,
                status: JobStatus::Completed,
                notes: None,
            },
            &mut app,
            &mut store,
        );

        assert_eq!(store.jobs(), before.as_slice());
        assert_eq!(app.status_message.as_deref(), Some("Job #42 not found"));
    }
}

use crate::store::{Employee, Job, JobCounts, JobId, JobStore};

mod navigation;
mod state;

pub use state::{JobTab, StatusField, StatusFormState, TextInput, View};

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub status_message: Option<String>,

    // Jobs view
    pub job_tab: JobTab,
    pub assigned_index: usize,
    pub completed_index: usize,
    pub selected_job: Option<JobId>,

    // Status-update form (Some while the dialog is open)
    pub status_form: Option<StatusFormState>,

    // Snapshots pulled from the store, refreshed after every mutation
    pub employee: Employee,
    pub assigned_jobs: Vec<Job>,
    pub completed_jobs: Vec<Job>,
    pub counts: JobCounts,
}

impl App {
    pub fn new(store: &JobStore) -> Self {
        let mut app = Self {
            running: true,
            current_view: View::Jobs,
            status_message: None,
            job_tab: JobTab::Assigned,
            assigned_index: 0,
            completed_index: 0,
            selected_job: None,
            status_form: None,
            employee: store.employee().clone(),
            assigned_jobs: Vec::new(),
            completed_jobs: Vec::new(),
            counts: JobCounts::default(),
        };
        app.refresh_from_store(store);
        app
    }

    /// Re-pull the derived views the UI renders from. Called once at startup
    /// and again after every store mutation.
    pub fn refresh_from_store(&mut self, store: &JobStore) {
        self.assigned_jobs = store.assigned_jobs();
        self.completed_jobs = store.completed_jobs();
        self.counts = store.counts();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if !self.assigned_jobs.is_empty() {
            self.assigned_index = self.assigned_index.min(self.assigned_jobs.len() - 1);
        } else {
            self.assigned_index = 0;
        }
        if !self.completed_jobs.is_empty() {
            self.completed_index = self.completed_index.min(self.completed_jobs.len() - 1);
        } else {
            self.completed_index = 0;
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Jobs shown by the active tab.
    pub fn visible_jobs(&self) -> &[Job] {
        match self.job_tab {
            JobTab::Assigned => &self.assigned_jobs,
            JobTab::Completed => &self.completed_jobs,
        }
    }

    pub fn selected_index(&self) -> usize {
        match self.job_tab {
            JobTab::Assigned => self.assigned_index,
            JobTab::Completed => self.completed_index,
        }
    }

    pub fn selected_visible_job(&self) -> Option<&Job> {
        self.visible_jobs().get(self.selected_index())
    }

    /// The job a dialog is open for, looked up in the cached snapshots.
    pub fn dialog_job(&self) -> Option<&Job> {
        let id = self.selected_job?;
        self.assigned_jobs
            .iter()
            .chain(self.completed_jobs.iter())
            .find(|job| job.id == id)
    }

    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        self.clear_status();
    }

    pub fn open_job_detail(&mut self) {
        if let Some(job) = self.selected_visible_job() {
            self.selected_job = Some(job.id);
            self.navigate_to(View::JobDetail);
        }
    }

    pub fn close_dialog(&mut self) {
        self.selected_job = None;
        self.status_form = None;
        self.current_view = View::Jobs;
    }

    /// Open the status form for the selected assigned job, prefilled with its
    /// current status. Completed jobs have no update surface.
    pub fn open_status_form(&mut self) {
        if self.job_tab != JobTab::Assigned {
            return;
        }
        let Some((job_id, status)) = self.selected_visible_job().map(|job| (job.id, job.status))
        else {
            return;
        };
        self.status_form = Some(StatusFormState {
            job_id,
            status,
            notes: TextInput::new(),
            focused_field: StatusField::Status,
        });
        self.selected_job = Some(job_id);
        self.navigate_to(View::UpdateStatus);
    }

    pub fn form_next_field(&mut self) {
        if let Some(form) = &mut self.status_form {
            form.focused_field = match form.focused_field {
                StatusField::Status => StatusField::Notes,
                StatusField::Notes => StatusField::Status,
            };
        }
    }

    pub fn form_cycle_status(&mut self, forward: bool) {
        if let Some(form) = &mut self.status_form {
            form.status = if forward {
                form.status.next()
            } else {
                form.status.previous()
            };
        }
    }

    pub fn form_input_char(&mut self, c: char) {
        if let Some(form) = &mut self.status_form {
            if form.focused_field == StatusField::Notes {
                form.notes.insert(c);
            }
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = &mut self.status_form {
            if form.focused_field == StatusField::Notes {
                form.notes.backspace();
            }
        }
    }

    pub fn form_move_cursor(&mut self, left: bool) {
        if let Some(form) = &mut self.status_form {
            if form.focused_field == StatusField::Notes {
                if left {
                    form.notes.move_left();
                } else {
                    form.notes.move_right();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{JobStatus, JobStore};

    fn test_app() -> (App, JobStore) {
        let store = JobStore::seeded("emp1").expect("emp1 is seeded");
        let app = App::new(&store);
        (app, store)
    }

    #[test]
    fn new_app_snapshots_seed_data() {
        let (app, _) = test_app();
        assert_eq!(app.assigned_jobs.len(), 2);
        assert_eq!(app.completed_jobs.len(), 3);
        assert_eq!(app.counts.pending, 2);
        assert_eq!(app.counts.completed, 3);
        // In-progress job surfaces first on the Assigned tab.
        assert_eq!(app.assigned_jobs[0].id, 2);
    }

    #[test]
    fn status_form_only_opens_on_assigned_tab() {
        let (mut app, _) = test_app();
        app.job_tab = JobTab::Completed;
        app.open_status_form();
        assert!(app.status_form.is_none());
        assert_eq!(app.current_view, View::Jobs);

        app.job_tab = JobTab::Assigned;
        app.open_status_form();
        let form = app.status_form.as_ref().expect("form should be open");
        assert_eq!(form.job_id, 2);
        assert_eq!(form.status, JobStatus::InProgress);
        assert_eq!(app.selected_job, Some(2));
        assert_eq!(app.current_view, View::UpdateStatus);
    }

    #[test]
    fn status_form_prefills_from_selected_row() {
        let (mut app, _) = test_app();
        app.assigned_index = 1;
        app.open_status_form();
        let form = app.status_form.as_ref().expect("form should be open");
        assert_eq!(form.job_id, 1);
        assert_eq!(form.status, JobStatus::Upcoming);
        assert_eq!(app.selected_job, Some(1));
    }

    #[test]
    fn selection_clamps_after_refresh() {
        let (mut app, mut store) = test_app();
        app.assigned_index = 1;
        store.update_job_status(1, JobStatus::Completed, None);
        app.refresh_from_store(&store);
        assert_eq!(app.assigned_jobs.len(), 1);
        assert_eq!(app.assigned_index, 0);
    }

    #[test]
    fn form_status_cycles_through_all_three() {
        let (mut app, _) = test_app();
        app.open_status_form();
        let start = app.status_form.as_ref().unwrap().status;
        app.form_cycle_status(true);
        app.form_cycle_status(true);
        app.form_cycle_status(true);
        assert_eq!(app.status_form.as_ref().unwrap().status, start);
    }
}

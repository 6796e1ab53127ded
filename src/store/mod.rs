//! The job store: owns the employee record and the job collection, answers
//! queries about them, and performs the one mutation the rest of the app is
//! allowed to make (a status update).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::Date;

use crate::time_utils::today_local;

mod seed;

pub type JobId = u32;

/// Lifecycle status of a job. Governs which tab a job is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Upcoming,
    InProgress,
    Completed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 3] = [
        JobStatus::Upcoming,
        JobStatus::InProgress,
        JobStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Upcoming => "upcoming",
            JobStatus::InProgress => "in-progress",
            JobStatus::Completed => "completed",
        }
    }

    /// Human-facing label for job cards and the status form.
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Upcoming => "Upcoming",
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
        }
    }

    /// Next status in the form selector, wrapping around.
    pub fn next(&self) -> JobStatus {
        match self {
            JobStatus::Upcoming => JobStatus::InProgress,
            JobStatus::InProgress => JobStatus::Completed,
            JobStatus::Completed => JobStatus::Upcoming,
        }
    }

    /// Previous status in the form selector, wrapping around.
    pub fn previous(&self) -> JobStatus {
        match self {
            JobStatus::Upcoming => JobStatus::Completed,
            JobStatus::InProgress => JobStatus::Upcoming,
            JobStatus::Completed => JobStatus::InProgress,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown job status: {0:?}")]
pub struct ParseJobStatusError(String);

impl FromStr for JobStatus {
    type Err = ParseJobStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(JobStatus::Upcoming),
            "in-progress" => Ok(JobStatus::InProgress),
            "completed" => Ok(JobStatus::Completed),
            other => Err(ParseJobStatusError(other.to_string())),
        }
    }
}

/// The logged-in technician. Exactly one per store, read-only after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: String,
    pub join_date: Date,
    pub completed_works: u32,
    pub active_works: u32,
    pub rating: f64,
}

/// A unit of field work tracked through the three-state status lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub client_name: String,
    pub phone: String,
    pub address: String,
    pub date: Date,
    #[serde(rename = "type")]
    pub job_type: String,
    pub camera_count: u32,
    pub status: JobStatus,
    /// Whole rupees.
    pub estimated_cost: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Equipment line items, typically present for installation jobs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    /// Percentage [0, 100], meaningful while the job is in progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    /// Stamped whenever the job is updated to completed. Never cleared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<Date>,
    /// Free text recorded at status-update time, distinct from `notes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_notes: Option<String>,
}

/// Aggregate counts shown in the stats bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobCounts {
    pub today: usize,
    pub pending: usize,
    pub completed: usize,
}

/// Called with the updated job after every successful status update. This is
/// the seam where a networked deployment would push the change to a server.
pub type SyncHook = Box<dyn Fn(&Job)>;

pub struct JobStore {
    employee: Employee,
    jobs: Vec<Job>,
    sync_hook: Option<SyncHook>,
}

impl JobStore {
    /// Store seeded with the demo dataset for the given employee. Returns
    /// `None` for an unknown employee id.
    pub fn seeded(employee_id: &str) -> Option<Self> {
        let employee = seed::employee(employee_id)?;
        let jobs = seed::jobs(employee_id);
        Some(Self::with_data(employee, jobs))
    }

    pub fn with_data(employee: Employee, jobs: Vec<Job>) -> Self {
        Self {
            employee,
            jobs,
            sync_hook: None,
        }
    }

    /// Install the server-sync seam. Nothing in the binary registers one yet.
    #[allow(dead_code)]
    pub fn with_sync_hook(mut self, hook: SyncHook) -> Self {
        self.sync_hook = Some(hook);
        self
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// All jobs with the given status, in collection order.
    pub fn jobs_by_status(&self, status: JobStatus) -> Vec<Job> {
        self.jobs
            .iter()
            .filter(|job| job.status == status)
            .cloned()
            .collect()
    }

    pub fn job_by_id(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// The one mutation: set a job's status, record work notes when supplied
    /// and non-empty, and stamp `completed_date` on updates to completed.
    /// Returns `false` with no side effect when the id is unknown.
    pub fn update_job_status(&mut self, id: JobId, status: JobStatus, notes: Option<&str>) -> bool {
        let Some(job) = self.jobs.iter_mut().find(|job| job.id == id) else {
            return false;
        };

        job.status = status;
        if let Some(notes) = notes.filter(|n| !n.is_empty()) {
            job.work_notes = Some(notes.to_string());
        }
        if status == JobStatus::Completed {
            job.completed_date = Some(today_local());
        }

        if let Some(hook) = &self.sync_hook {
            hook(job);
        }
        true
    }

    /// Jobs scheduled for today that are still open.
    pub fn todays_jobs(&self) -> Vec<Job> {
        let today = today_local();
        self.jobs
            .iter()
            .filter(|job| {
                job.date == today
                    && matches!(job.status, JobStatus::Upcoming | JobStatus::InProgress)
            })
            .cloned()
            .collect()
    }

    /// Display order for the Assigned tab: in-progress jobs first, then
    /// upcoming ones.
    pub fn assigned_jobs(&self) -> Vec<Job> {
        let mut jobs = self.jobs_by_status(JobStatus::InProgress);
        jobs.extend(self.jobs_by_status(JobStatus::Upcoming));
        jobs
    }

    pub fn completed_jobs(&self) -> Vec<Job> {
        self.jobs_by_status(JobStatus::Completed)
    }

    pub fn counts(&self) -> JobCounts {
        JobCounts {
            today: self.todays_jobs().len(),
            pending: self
                .jobs
                .iter()
                .filter(|job| job.status != JobStatus::Completed)
                .count(),
            completed: self
                .jobs
                .iter()
                .filter(|job| job.status == JobStatus::Completed)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use time::macros::date;

    fn seeded() -> JobStore {
        JobStore::seeded("emp1").expect("emp1 is seeded")
    }

    #[test]
    fn job_by_id_finds_every_seeded_job() {
        let store = seeded();
        for job in store.jobs().to_vec() {
            let found = store.job_by_id(job.id).expect("job should be found");
            assert_eq!(found.id, job.id);
        }
    }

    #[test]
    fn job_by_id_unknown_is_none() {
        assert!(seeded().job_by_id(999).is_none());
    }

    #[test]
    fn jobs_by_status_returns_exact_subset_in_order() {
        let store = seeded();
        for status in JobStatus::ALL {
            let expected: Vec<JobId> = store
                .jobs()
                .iter()
                .filter(|job| job.status == status)
                .map(|job| job.id)
                .collect();
            let actual: Vec<JobId> = store
                .jobs_by_status(status)
                .iter()
                .map(|job| job.id)
                .collect();
            assert_eq!(actual, expected, "status {status}");
        }
    }

    #[test]
    fn seed_has_one_upcoming_job() {
        let upcoming = seeded().jobs_by_status(JobStatus::Upcoming);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, 1);
    }

    #[test]
    fn completing_a_job_moves_it_between_status_queries() {
        let mut store = seeded();
        assert_eq!(store.job_by_id(2).unwrap().progress, Some(65));

        assert!(store.update_job_status(2, JobStatus::Completed, Some("Finished wiring")));

        let job = store.job_by_id(2).unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.work_notes.as_deref(), Some("Finished wiring"));
        assert_eq!(job.completed_date, Some(today_local()));

        let in_progress = store.jobs_by_status(JobStatus::InProgress);
        assert!(in_progress.iter().all(|job| job.id != 2));
        let completed = store.jobs_by_status(JobStatus::Completed);
        assert!(completed.iter().any(|job| job.id == 2));
    }

    #[test]
    fn completing_again_restamps_completed_date() {
        let mut store = seeded();
        // Seeded completion date is in the past; a new update overwrites it.
        assert_eq!(
            store.job_by_id(3).unwrap().completed_date,
            Some(date!(2025 - 12 - 08))
        );
        assert!(store.update_job_status(3, JobStatus::Completed, None));
        assert_eq!(
            store.job_by_id(3).unwrap().completed_date,
            Some(today_local())
        );
    }

    #[test]
    fn unknown_id_update_fails_without_side_effects() {
        let mut store = seeded();
        let before = store.jobs().to_vec();
        assert!(!store.update_job_status(42, JobStatus::Completed, Some("nope")));
        assert_eq!(store.jobs(), before.as_slice());
    }

    #[test]
    fn empty_notes_leave_work_notes_unchanged() {
        let mut store = seeded();
        assert!(store.update_job_status(1, JobStatus::InProgress, Some("")));
        assert_eq!(store.job_by_id(1).unwrap().work_notes, None);
        assert!(store.update_job_status(1, JobStatus::InProgress, None));
        assert_eq!(store.job_by_id(1).unwrap().work_notes, None);
    }

    #[test]
    fn assigned_jobs_put_in_progress_first() {
        let ids: Vec<JobId> = seeded().assigned_jobs().iter().map(|job| job.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn todays_jobs_only_counts_open_jobs_dated_today() {
        let mut store = seeded();
        assert!(store.todays_jobs().is_empty());

        // Move an open job to today; it shows up until it is completed.
        let today = today_local();
        store.jobs.iter_mut().find(|job| job.id == 2).unwrap().date = today;
        assert_eq!(store.todays_jobs().len(), 1);
        assert_eq!(store.counts().today, 1);

        assert!(store.update_job_status(2, JobStatus::Completed, None));
        assert!(store.todays_jobs().is_empty());
        assert_eq!(store.counts().today, 0);
    }

    #[test]
    fn counts_match_seed_data() {
        let counts = seeded().counts();
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.completed, 3);
    }

    #[test]
    fn sync_hook_fires_on_successful_update_only() {
        let synced: Rc<RefCell<Vec<JobId>>> = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&synced);
        let mut store = JobStore::seeded("emp1")
            .unwrap()
            .with_sync_hook(Box::new(move |job| seen.borrow_mut().push(job.id)));

        assert!(!store.update_job_status(42, JobStatus::Completed, None));
        assert!(store.update_job_status(1, JobStatus::InProgress, None));
        assert_eq!(*synced.borrow(), vec![1]);
    }

    #[test]
    fn status_parses_only_the_three_known_values() {
        assert_eq!("upcoming".parse::<JobStatus>(), Ok(JobStatus::Upcoming));
        assert_eq!("in-progress".parse::<JobStatus>(), Ok(JobStatus::InProgress));
        assert_eq!("completed".parse::<JobStatus>(), Ok(JobStatus::Completed));
        assert!("cancelled".parse::<JobStatus>().is_err());
        assert!("In Progress".parse::<JobStatus>().is_err());
    }

    #[test]
    fn serialized_jobs_omit_absent_optionals() {
        let store = seeded();
        let repair = serde_json::to_value(store.job_by_id(5).unwrap()).unwrap();
        assert_eq!(repair["status"], "completed");
        assert_eq!(repair["type"], "Repair");
        assert_eq!(repair["completedDate"], "2025-12-01");
        assert!(repair.get("tools").is_none());
        assert!(repair.get("progress").is_none());
        assert!(repair.get("workNotes").is_none());

        let installation = serde_json::to_value(store.job_by_id(2).unwrap()).unwrap();
        assert_eq!(installation["status"], "in-progress");
        assert_eq!(installation["progress"], 65);
        assert_eq!(installation["tools"].as_array().unwrap().len(), 5);
    }
}

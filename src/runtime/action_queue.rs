use crate::store::{JobId, JobStatus};
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    UpdateJobStatus {
        job_id: JobId,
        status: JobStatus,
        notes: Option<String>,
    },
    RefreshJobs,
}

pub(super) type ActionTx = Sender<Action>;
pub(super) type ActionRx = Receiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::channel()
}

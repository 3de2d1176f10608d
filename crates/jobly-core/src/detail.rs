//! Job detail view controller (the modal behind "Ver detalles").
//!
//! Every open issues a fresh request; nothing is cached between opens.
//! Requests carry a sequence number and only the latest one may resolve the
//! view, so a slow response for a previously opened job can never overwrite
//! the job currently on screen.

use jobly_types::{error::DetailError, job::JobDetail};

use crate::client::{DetailOutcome, JobClient};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Closed,
    Loading { job_id: String },
    Loaded { job: JobDetail },
    Failed { job_id: String, error: DetailError },
}

/// A fetch the caller must perform and report back via [`JobDetailView::resolve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub seq: u64,
    pub job_id: String,
}

pub struct JobDetailView {
    state: DetailState,
    latest_seq: u64,
}

impl JobDetailView {
    pub fn new() -> Self {
        Self {
            state: DetailState::Closed,
            latest_seq: 0,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DetailState::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Loading { .. })
    }

    pub fn job(&self) -> Option<&JobDetail> {
        match &self.state {
            DetailState::Loaded { job } => Some(job),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DetailError> {
        match &self.state {
            DetailState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Id of the job being shown or fetched
    pub fn job_id(&self) -> Option<&str> {
        match &self.state {
            DetailState::Closed => None,
            DetailState::Loading { job_id } | DetailState::Failed { job_id, .. } => Some(job_id),
            DetailState::Loaded { job } => Some(job.id()),
        }
    }

    /// Open the view for `job_id`, discarding whatever was shown before.
    pub fn open(&mut self, job_id: impl Into<String>) -> DetailRequest {
        let job_id = job_id.into();
        self.state = DetailState::Loading {
            job_id: job_id.clone(),
        };
        self.issue(job_id)
    }

    /// Re-issue the failed fetch for the same job. No-op outside `Failed`.
    pub fn retry(&mut self) -> Option<DetailRequest> {
        let DetailState::Failed { job_id, .. } = &self.state else {
            return None;
        };
        let job_id = job_id.clone();
        Some(self.open(job_id))
    }

    pub fn close(&mut self) {
        self.state = DetailState::Closed;
    }

    /// Apply the outcome of request `seq`. Returns `false` when the outcome
    /// is stale (a newer request was issued, or the view was closed).
    pub fn resolve(&mut self, seq: u64, outcome: DetailOutcome) -> bool {
        let DetailState::Loading { job_id } = &self.state else {
            log::debug!("dropping detail response #{}: view not loading", seq);
            return false;
        };
        if seq != self.latest_seq {
            log::debug!("dropping stale detail response #{} (latest #{})", seq, self.latest_seq);
            return false;
        }
        self.state = match outcome {
            Ok(job) => DetailState::Loaded { job },
            Err(error) => DetailState::Failed {
                job_id: job_id.clone(),
                error,
            },
        };
        true
    }

    /// Open `job_id` and fetch it through `client` in one call.
    pub async fn load(&mut self, job_id: &str, client: &JobClient) {
        let request = self.open(job_id);
        let outcome = client.fetch_job_detail(&request.job_id).await;
        self.resolve(request.seq, outcome);
    }

    fn issue(&mut self, job_id: String) -> DetailRequest {
        self.latest_seq += 1;
        DetailRequest {
            seq: self.latest_seq,
            job_id,
        }
    }
}

impl Default for JobDetailView {
    fn default() -> Self {
        Self::new()
    }
}

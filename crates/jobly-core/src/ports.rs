//! Port traits: the hexagonal architecture boundary.
//!
//! The core only talks to the job backend through these traits.
//! The HTTP implementation lives in `jobly-platform`; the canned
//! implementation lives in [`crate::mock`]. Which one is used is decided once,
//! by whoever constructs the [`crate::client::JobClient`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use jobly_types::{
    Result,
    job::JobDetail,
    message::ChatReply,
    session::HistoryRecord,
};

// ─── Job Backend Port ────────────────────────────────────────

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[async_trait(?Send)]
pub trait JobBackendPort {
    /// Conversational query (`POST /chat`)
    async fn chat(&self, text: &str) -> Result<ChatReply>;

    /// Plain job search (`POST /query_jobs`), used when chat is unavailable
    async fn search_jobs(&self, text: &str) -> Result<ChatReply>;

    /// Full record for one job (`GET /job/{id}`)
    async fn job_detail(&self, job_id: &str) -> Result<JobDetail>;

    /// Persist a shareable transcript (`POST /api/history`)
    async fn save_history(&self, record: &HistoryRecord) -> Result<()>;

    /// Liveness probe (`GET /health`)
    async fn health(&self) -> Result<HealthStatus>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Timer Port ──────────────────────────────────────────────

/// Cooperative sleep. The browser implementation wraps `setTimeout`.
#[async_trait(?Send)]
pub trait TimerPort {
    async fn sleep(&self, ms: u64);
}

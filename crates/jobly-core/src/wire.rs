//! Backend wire contract: request bodies and response decoding.
//!
//! Kept free of any HTTP client so the shape handling can be tested natively;
//! the platform adapter only moves bytes and hands status + body to these
//! functions.
//!
//! Canonical chat contract is `POST /chat {mensaje} -> {respuesta, empleos?}`.
//! `/query_jobs` is only used as the search fallback.

use serde::{Deserialize, Serialize};

use jobly_types::{
    JoblyError, Result,
    job::{JobDetail, JobSummary},
    message::ChatReply,
};

use crate::ports::HealthStatus;

pub const CHAT_PATH: &str = "/chat";
pub const SEARCH_PATH: &str = "/query_jobs";
pub const HISTORY_PATH: &str = "/api/history";
pub const HEALTH_PATH: &str = "/health";

/// `/job/{id}`; `encoded_id` must already be URI-component encoded.
pub fn job_detail_path(encoded_id: &str) -> String {
    format!("/job/{}", encoded_id)
}

// ─── Request bodies ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ChatRequestBody<'a> {
    pub mensaje: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SearchRequestBody<'a> {
    pub query: &'a str,
}

// ─── Response bodies ─────────────────────────────────────────

#[derive(Deserialize)]
struct ChatResponseBody {
    respuesta: Option<String>,
    #[serde(default)]
    empleos: Option<Vec<JobSummary>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct SearchResponseBody {
    #[serde(default)]
    jobs: Option<Vec<JobSummary>>,
    /// Older deployments answer with `results` instead of `jobs`
    #[serde(default)]
    results: Option<Vec<JobSummary>>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct JobDetailResponseBody {
    found: bool,
    #[serde(default)]
    job: Option<JobDetail>,
}

/// Text the search fallback shows when the backend sends no message
pub fn search_summary(count: usize, query: &str) -> String {
    format!("Encontré {} ofertas relacionadas con \"{}\"", count, query)
}

pub fn decode_chat(body: &str) -> Result<ChatReply> {
    let data: ChatResponseBody = serde_json::from_str(body)
        .map_err(|e| JoblyError::MalformedResponse(e.to_string()))?;

    match (data.respuesta, data.error) {
        (Some(text), _) => Ok(ChatReply::new(text, non_empty(data.empleos))),
        (None, Some(error)) => Err(JoblyError::MalformedResponse(error)),
        (None, None) => Err(JoblyError::MalformedResponse(
            "missing field `respuesta`".to_string(),
        )),
    }
}

pub fn decode_search(body: &str, query: &str) -> Result<ChatReply> {
    let data: SearchResponseBody = serde_json::from_str(body)
        .map_err(|e| JoblyError::MalformedResponse(e.to_string()))?;

    let jobs = data
        .jobs
        .or(data.results)
        .ok_or_else(|| JoblyError::MalformedResponse("missing field `jobs`".to_string()))?;

    let text = data
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| search_summary(jobs.len(), query));

    Ok(ChatReply::new(text, non_empty(Some(jobs))))
}

pub fn decode_job_detail(body: &str, job_id: &str) -> Result<JobDetail> {
    let data: JobDetailResponseBody = serde_json::from_str(body)
        .map_err(|e| JoblyError::MalformedResponse(e.to_string()))?;

    match (data.found, data.job) {
        (true, Some(job)) => Ok(job),
        (true, None) => Err(JoblyError::MalformedResponse(
            "`found` is true but `job` is missing".to_string(),
        )),
        (false, _) => Err(JoblyError::NotFound(job_id.to_string())),
    }
}

pub fn decode_health(body: &str) -> Result<HealthStatus> {
    serde_json::from_str(body).map_err(|e| JoblyError::MalformedResponse(e.to_string()))
}

/// Map a non-2xx HTTP status to the error taxonomy.
pub fn status_error(status: u16, body: &str) -> JoblyError {
    let detail = if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    };
    match status {
        404 => JoblyError::NotFound(detail),
        _ => JoblyError::Transport(detail),
    }
}

fn non_empty(jobs: Option<Vec<JobSummary>>) -> Option<Vec<JobSummary>> {
    jobs.filter(|j| !j.is_empty())
}

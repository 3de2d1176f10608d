use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JoblyError {
    /// Submitted text was empty after trimming. Rejected before any I/O.
    #[error("Empty input")]
    EmptyInput,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl JoblyError {
    /// Coarse classification exposed to callers that want to branch
    /// (e.g. show a retry button) without matching on messages.
    pub fn kind(&self) -> FailureKind {
        match self {
            JoblyError::Transport(_) => FailureKind::Transport,
            JoblyError::NotFound(_) => FailureKind::NotFound,
            JoblyError::EmptyInput => FailureKind::InvalidInput,
            JoblyError::MalformedResponse(_)
            | JoblyError::Serialization(_)
            | JoblyError::Config(_) => FailureKind::MalformedResponse,
        }
    }
}

impl From<serde_json::Error> for JoblyError {
    fn from(e: serde_json::Error) -> Self {
        JoblyError::Serialization(e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Transport,
    NotFound,
    MalformedResponse,
    InvalidInput,
}

/// Failure of a job-detail fetch, shaped for the detail modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailError {
    pub kind: FailureKind,
    pub message: String,
}

pub const DETAIL_NOT_FOUND: &str = "Empleo no encontrado";
pub const DETAIL_CONNECTION: &str = "Error al conectar con el servidor";
pub const DETAIL_UNAVAILABLE: &str = "No se pudieron cargar los detalles del empleo";

impl DetailError {
    /// Only transport faults are worth retrying; a missing job stays missing.
    pub fn is_retryable(&self) -> bool {
        self.kind == FailureKind::Transport
    }
}

impl From<JoblyError> for DetailError {
    fn from(e: JoblyError) -> Self {
        let kind = e.kind();
        let message = match kind {
            FailureKind::NotFound => DETAIL_NOT_FOUND,
            FailureKind::Transport => DETAIL_CONNECTION,
            FailureKind::MalformedResponse | FailureKind::InvalidInput => DETAIL_UNAVAILABLE,
        };
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

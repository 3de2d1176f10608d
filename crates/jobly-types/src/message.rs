use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::job::JobSummary;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message. Immutable once appended to a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    pub content: String,
    /// Job postings attached to an assistant reply
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub jobs: Option<Vec<JobSummary>>,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::User,
            content: text.into(),
            jobs: None,
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::Assistant,
            content: text.into(),
            jobs: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_jobs(mut self, jobs: Option<Vec<JobSummary>>) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn job_count(&self) -> usize {
        self.jobs.as_ref().map_or(0, Vec::len)
    }
}

/// Reply to one chat query, already normalized by the API client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub jobs: Option<Vec<JobSummary>>,
    /// Set when `text` is a fallback produced after a backend failure
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub failure: Option<crate::FailureKind>,
}

impl ChatReply {
    pub fn new(text: impl Into<String>, jobs: Option<Vec<JobSummary>>) -> Self {
        Self {
            text: text.into(),
            jobs,
            failure: None,
        }
    }

    pub fn fallback(text: impl Into<String>, failure: crate::FailureKind) -> Self {
        Self {
            text: text.into(),
            jobs: None,
            failure: Some(failure),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.failure.is_some()
    }
}

//! API client used by the controllers.
//!
//! Wraps whichever [`JobBackendPort`] was chosen at construction and turns
//! backend failures into values the UI can always display:
//! - chat turns never fail past this point (fallback reply instead),
//! - detail fetches fail with a [`DetailError`] that says whether a retry
//!   makes sense.

use std::rc::Rc;

use jobly_types::{
    JoblyError, Result,
    config::ChatConfig,
    error::DetailError,
    job::JobDetail,
    message::{ChatReply, Message},
    session::HistoryRecord,
};

use crate::ports::JobBackendPort;

pub type DetailOutcome = std::result::Result<JobDetail, DetailError>;

#[derive(Clone)]
pub struct JobClient {
    backend: Rc<dyn JobBackendPort>,
    chat: ChatConfig,
}

impl JobClient {
    pub fn new(backend: Rc<dyn JobBackendPort>, chat: ChatConfig) -> Self {
        Self { backend, chat }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.backend_name()
    }

    /// Send one chat query.
    ///
    /// Only `EmptyInput` is ever returned as an error; everything that goes
    /// wrong on the wire becomes a fallback reply carrying the failure kind.
    pub async fn send_chat_query(&self, text: &str) -> Result<ChatReply> {
        let query = text.trim();
        if query.is_empty() {
            return Err(JoblyError::EmptyInput);
        }

        let chat_err = match self.backend.chat(query).await {
            Ok(reply) => return Ok(reply),
            Err(e) => e,
        };
        log::warn!(
            "[{}] chat failed ({}), falling back to job search",
            self.backend_name(),
            chat_err
        );

        match self.backend.search_jobs(query).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                log::error!("[{}] job search failed: {}", self.backend_name(), e);
                Ok(ChatReply::fallback(self.chat.error_message.clone(), e.kind()))
            }
        }
    }

    /// Fetch the full record of one job. Each call hits the backend.
    pub async fn fetch_job_detail(&self, job_id: &str) -> DetailOutcome {
        let job_id = job_id.trim();
        if job_id.is_empty() {
            return Err(DetailError::from(JoblyError::EmptyInput));
        }

        self.backend.job_detail(job_id).await.map_err(|e| {
            log::warn!("[{}] job {} detail failed: {}", self.backend_name(), job_id, e);
            DetailError::from(e)
        })
    }

    /// Store the transcript and return the id it was saved under.
    pub async fn save_history(&self, messages: &[Message]) -> Result<String> {
        let record = HistoryRecord::new(messages.to_vec());
        self.backend.save_history(&record).await?;
        log::info!("Conversation saved as {}", record.id);
        Ok(record.id)
    }

    pub async fn check_health(&self) -> bool {
        match self.backend.health().await {
            Ok(status) => status.is_ok(),
            Err(e) => {
                log::warn!("[{}] health check failed: {}", self.backend_name(), e);
                false
            }
        }
    }
}

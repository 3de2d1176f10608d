//! HTTP job backend.
//!
//! Uses browser `fetch()` via gloo-net. Response bodies are handed to the
//! decoders in [`jobly_core::wire`], so this file only deals with transport.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Serialize;

use jobly_core::ports::*;
use jobly_core::wire;
use jobly_types::{
    JoblyError, Result,
    config::AppConfig,
    job::JobDetail,
    message::ChatReply,
    session::HistoryRecord,
};

pub struct HttpJobBackend {
    config: AppConfig,
}

impl HttpJobBackend {
    pub fn new(config: AppConfig) -> Self {
        log::info!("HTTP job backend at {}", config.backend_url);
        Self { config }
    }

    pub fn base_url(&self) -> &str {
        &self.config.backend_url
    }

    /// `GET` target for one job, with the id URI-encoded
    pub fn detail_url(&self, job_id: &str) -> String {
        let encoded = String::from(js_sys::encode_uri_component(job_id));
        self.config.endpoint(&wire::job_detail_path(&encoded))
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<String> {
        let url = self.config.endpoint(path);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| JoblyError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| JoblyError::Transport(e.to_string()))?;
        read_body(response).await
    }

    async fn get(&self, url: &str) -> Result<String> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| JoblyError::Transport(e.to_string()))?;
        read_body(response).await
    }
}

/// Body text of a 2xx response; any other status becomes an error.
async fn read_body(response: Response) -> Result<String> {
    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(wire::status_error(status, &text));
    }
    response
        .text()
        .await
        .map_err(|e| JoblyError::Transport(e.to_string()))
}

#[async_trait(?Send)]
impl JobBackendPort for HttpJobBackend {
    async fn chat(&self, text: &str) -> Result<ChatReply> {
        let body = self
            .post_json(wire::CHAT_PATH, &wire::ChatRequestBody { mensaje: text })
            .await?;
        wire::decode_chat(&body)
    }

    async fn search_jobs(&self, text: &str) -> Result<ChatReply> {
        let body = self
            .post_json(wire::SEARCH_PATH, &wire::SearchRequestBody { query: text })
            .await?;
        wire::decode_search(&body, text)
    }

    async fn job_detail(&self, job_id: &str) -> Result<JobDetail> {
        let body = self.get(&self.detail_url(job_id)).await?;
        wire::decode_job_detail(&body, job_id)
    }

    async fn save_history(&self, record: &HistoryRecord) -> Result<()> {
        self.post_json(wire::HISTORY_PATH, record).await?;
        Ok(())
    }

    async fn health(&self) -> Result<HealthStatus> {
        let body = self.get(&self.config.endpoint(wire::HEALTH_PATH)).await?;
        wire::decode_health(&body)
    }

    fn backend_name(&self) -> &str {
        "http"
    }
}

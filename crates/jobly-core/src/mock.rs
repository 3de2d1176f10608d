//! Canned backend for demos and tests.
//!
//! Answers queries by keyword-matching against a fixed set of topics, after an
//! artificial delay, so the UI can be exercised without a running server.

use std::rc::Rc;

use async_trait::async_trait;
use jobly_types::{
    JoblyError, Result,
    job::{JobDetail, JobSummary},
    message::ChatReply,
    session::HistoryRecord,
};

use crate::ports::{HealthStatus, JobBackendPort, TimerPort};
use crate::wire::search_summary;

/// Topic used when the query mentions none of the known keywords
pub const DEFAULT_TOPIC: &str = "análisis de datos";

pub struct MockJobBackend {
    timer: Rc<dyn TimerPort>,
    delay_ms: u64,
    topics: Vec<(&'static str, Vec<JobSummary>)>,
}

impl MockJobBackend {
    pub fn new(timer: Rc<dyn TimerPort>, delay_ms: u64) -> Self {
        Self {
            timer,
            delay_ms,
            topics: canned_topics(),
        }
    }

    /// Jobs for the first topic keyword contained in `query` (case-insensitive).
    pub fn match_topic(&self, query: &str) -> (&'static str, &[JobSummary]) {
        let normalized = query.to_lowercase();
        self.topics
            .iter()
            .find(|(key, _)| normalized.contains(key))
            .or_else(|| self.topics.iter().find(|(key, _)| *key == DEFAULT_TOPIC))
            .map(|(key, jobs)| (*key, jobs.as_slice()))
            .unwrap_or((DEFAULT_TOPIC, &[][..]))
    }

    fn find_job(&self, job_id: &str) -> Option<&JobSummary> {
        self.topics
            .iter()
            .flat_map(|(_, jobs)| jobs.iter())
            .find(|job| job.id == job_id)
    }

    fn reply_for(&self, query: &str) -> ChatReply {
        let (topic, jobs) = self.match_topic(query);
        log::debug!("mock backend matched topic '{}' ({} jobs)", topic, jobs.len());
        ChatReply::new(search_summary(jobs.len(), query), Some(jobs.to_vec()))
    }
}

#[async_trait(?Send)]
impl JobBackendPort for MockJobBackend {
    async fn chat(&self, text: &str) -> Result<ChatReply> {
        self.timer.sleep(self.delay_ms).await;
        Ok(self.reply_for(text))
    }

    async fn search_jobs(&self, text: &str) -> Result<ChatReply> {
        self.timer.sleep(self.delay_ms).await;
        Ok(self.reply_for(text))
    }

    async fn job_detail(&self, job_id: &str) -> Result<JobDetail> {
        self.timer.sleep(self.delay_ms).await;
        self.find_job(job_id)
            .cloned()
            .map(JobDetail::from)
            .ok_or_else(|| JoblyError::NotFound(job_id.to_string()))
    }

    async fn save_history(&self, record: &HistoryRecord) -> Result<()> {
        log::info!(
            "mock backend: discarding history {} ({} messages)",
            record.id,
            record.messages.len()
        );
        Ok(())
    }

    async fn health(&self) -> Result<HealthStatus> {
        Ok(HealthStatus {
            status: "OK".to_string(),
            message: "Modo demostración".to_string(),
        })
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn canned_topics() -> Vec<(&'static str, Vec<JobSummary>)> {
    vec![
        (
            "análisis de datos",
            vec![
                JobSummary::new(
                    "1",
                    "Practicante en Análisis de Datos",
                    "Tech Solutions SAC",
                    "Lima, Perú",
                    "Buscamos un practicante entusiasta para unirse a nuestro equipo de análisis \
                     de datos. Trabajarás con Python, SQL y herramientas de visualización.",
                ),
                JobSummary::new(
                    "2",
                    "Analista de Datos Junior",
                    "DataCorp",
                    "San Isidro, Lima",
                    "Oportunidad para desarrollar habilidades en análisis de datos utilizando \
                     Excel, Power BI y Python. Ideal para recién graduados.",
                ),
            ],
        ),
        (
            "desarrollador",
            vec![
                JobSummary::new(
                    "3",
                    "Desarrollador Frontend React",
                    "WebTech Solutions",
                    "Surco, Lima",
                    "Únete a nuestro equipo como desarrollador Frontend. Trabajarás con React, \
                     TypeScript y tecnologías modernas.",
                ),
                JobSummary::new(
                    "4",
                    "Desarrollador Full Stack",
                    "CodeCraft",
                    "Miraflores, Lima",
                    "Buscamos desarrollador Full Stack con experiencia en JavaScript, Node.js y \
                     bases de datos.",
                ),
            ],
        ),
        (
            "marketing",
            vec![JobSummary::new(
                "5",
                "Especialista en Marketing Digital",
                "Digital Agency Pro",
                "Barranco, Lima",
                "Oportunidad para especialista en marketing digital con experiencia en SEO, SEM \
                 y redes sociales.",
            )],
        ),
    ]
}

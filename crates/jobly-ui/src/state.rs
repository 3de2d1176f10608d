//! UI-level state that drives rendering.
//!
//! Owns the two controllers. Panels call the intent methods here and get
//! back [`UiCommand`]s describing the requests the app layer must spawn;
//! completions come back as [`ClientEvent`]s through [`UiState::process_events`].

use jobly_core::conversation::{ChatAction, ChatEffect, Conversation};
use jobly_core::detail::{DetailRequest, JobDetailView};
use jobly_types::config::AppConfig;
use jobly_types::event::ClientEvent;
use jobly_types::message::Message;

/// Background work requested by the UI
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    SendQuery { turn_id: u64, query: String },
    FetchDetail(DetailRequest),
    SaveHistory(Vec<Message>),
}

/// Outcome of the last "share conversation" request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFeedback {
    pub message: String,
    pub success: bool,
}

/// State visible to UI panels
pub struct UiState {
    pub conversation: Conversation,
    pub detail: JobDetailView,
    /// `None` until the first health probe answers
    pub backend_online: Option<bool>,
    pub share_feedback: Option<ShareFeedback>,
    /// A history save is in flight
    pub sharing: bool,
    pub show_settings: bool,
    pub status_text: String,
}

impl UiState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            conversation: Conversation::from_config(config),
            detail: JobDetailView::new(),
            backend_online: None,
            share_feedback: None,
            sharing: false,
            show_settings: false,
            status_text: "Listo".to_string(),
        }
    }

    /// Apply completions drained from the event bus
    pub fn process_events(&mut self, events: Vec<ClientEvent>) {
        for event in events {
            match event {
                ClientEvent::ChatReplied { turn_id, reply } => {
                    self.status_text = if reply.is_fallback() {
                        "Error en la búsqueda".to_string()
                    } else {
                        "Listo".to_string()
                    };
                    self.conversation
                        .apply(ChatAction::ReplyArrived { turn_id, reply });
                }
                ClientEvent::DetailResolved { seq, outcome } => {
                    self.detail.resolve(seq, outcome);
                }
                ClientEvent::HistorySaved { id } => {
                    self.sharing = false;
                    self.share_feedback = Some(ShareFeedback {
                        message: format!("Conversación guardada con el código {}", id),
                        success: true,
                    });
                }
                ClientEvent::HistoryFailed { message } => {
                    log::warn!("Share failed: {}", message);
                    self.sharing = false;
                    self.share_feedback = Some(ShareFeedback {
                        message: format!("No se pudo guardar la conversación: {}", message),
                        success: false,
                    });
                }
                ClientEvent::HealthChecked { online } => {
                    self.backend_online = Some(online);
                }
            }
        }
    }

    // ─── Intents ─────────────────────────────────────────────

    pub fn edit_input(&mut self, text: String) {
        self.conversation.apply(ChatAction::EditInput(text));
    }

    pub fn select_suggestion(&mut self, text: &str) {
        self.conversation
            .apply(ChatAction::SelectSuggestion(text.to_string()));
    }

    pub fn submit(&mut self) -> Option<UiCommand> {
        let ChatEffect::SendQuery { turn_id, query } =
            self.conversation.apply(ChatAction::Submit)?;
        self.status_text = self
            .conversation
            .loading_text()
            .unwrap_or_default()
            .to_string();
        Some(UiCommand::SendQuery { turn_id, query })
    }

    pub fn open_job(&mut self, job_id: &str) -> UiCommand {
        UiCommand::FetchDetail(self.detail.open(job_id))
    }

    pub fn retry_detail(&mut self) -> Option<UiCommand> {
        self.detail.retry().map(UiCommand::FetchDetail)
    }

    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    /// Snapshot the transcript for saving. Ignored while a save is pending.
    pub fn share(&mut self) -> Option<UiCommand> {
        if self.sharing {
            return None;
        }
        self.sharing = true;
        self.share_feedback = None;
        Some(UiCommand::SaveHistory(self.conversation.messages().to_vec()))
    }

    pub fn dismiss_share(&mut self) {
        self.share_feedback = None;
    }

    /// Start a fresh conversation after the backend was switched.
    pub fn restart(&mut self, config: &AppConfig) {
        log::info!("Restarting conversation ({} messages dropped)", self.conversation.messages().len());
        self.conversation.restart(config);
        self.detail.close();
        self.backend_online = None;
        self.sharing = false;
        self.share_feedback = None;
        self.status_text = "Listo".to_string();
    }

    pub fn is_busy(&self) -> bool {
        self.conversation.is_busy()
    }

    pub fn connection_label(&self) -> &'static str {
        match self.backend_online {
            Some(true) => "En línea",
            Some(false) => "Sin conexión",
            None => "Conectando...",
        }
    }
}

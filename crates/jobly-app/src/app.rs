//! Main egui application: owns the backend client and runs requested work.

use std::rc::Rc;

use egui::{self, CentralPanel, SidePanel};

use jobly_core::client::JobClient;
use jobly_core::event_bus::EventBus;
use jobly_core::mock::MockJobBackend;
use jobly_core::ports::JobBackendPort;
use jobly_platform::url_config;
use jobly_platform::{GlooTimer, HttpJobBackend};
use jobly_types::config::AppConfig;
use jobly_types::event::ClientEvent;
use jobly_types::message::ChatReply;
use jobly_ui::panels::settings::{self, ApplyFeedback, SettingsAction};
use jobly_ui::panels::{chat, job_detail};
use jobly_ui::state::{UiCommand, UiState};
use jobly_ui::theme;

pub struct JoblyApp {
    ui_state: UiState,
    config: AppConfig,
    /// Copy edited by the settings panel until "Aplicar"
    draft: AppConfig,
    apply_feedback: Option<ApplyFeedback>,
    event_bus: EventBus,
    client: JobClient,
    first_frame: bool,
}

impl JoblyApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = url_config::load_config();
        let client = build_client(&config);

        Self {
            ui_state: UiState::new(&config),
            draft: config.clone(),
            config,
            apply_feedback: None,
            event_bus: EventBus::new(),
            client,
            first_frame: true,
        }
    }

    /// Run one UI command in the background; the result comes back on the bus.
    fn dispatch(&self, command: UiCommand, ctx: &egui::Context) {
        let client = self.client.clone();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();

        match command {
            UiCommand::SendQuery { turn_id, query } => {
                let error_message = self.config.chat.error_message.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let reply = client
                        .send_chat_query(&query)
                        .await
                        .unwrap_or_else(|e| ChatReply::fallback(error_message, e.kind()));
                    event_bus.emit(ClientEvent::ChatReplied { turn_id, reply });
                    ctx.request_repaint();
                });
            }
            UiCommand::FetchDetail(request) => {
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = client.fetch_job_detail(&request.job_id).await;
                    event_bus.emit(ClientEvent::DetailResolved {
                        seq: request.seq,
                        outcome,
                    });
                    ctx.request_repaint();
                });
            }
            UiCommand::SaveHistory(messages) => {
                wasm_bindgen_futures::spawn_local(async move {
                    let event = match client.save_history(&messages).await {
                        Ok(id) => ClientEvent::HistorySaved { id },
                        Err(e) => {
                            log::error!("History save failed: {}", e);
                            ClientEvent::HistoryFailed {
                                message: e.to_string(),
                            }
                        }
                    };
                    event_bus.emit(event);
                    ctx.request_repaint();
                });
            }
        }
    }

    fn probe_health(&self, ctx: &egui::Context) {
        let client = self.client.clone();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let online = client.check_health().await;
            event_bus.emit(ClientEvent::HealthChecked { online });
            ctx.request_repaint();
        });
    }

    /// Swap the backend for the one described by the settings draft.
    fn apply_settings(&mut self, ctx: &egui::Context) {
        if let Err(message) = settings::validate_settings(&self.draft) {
            self.apply_feedback = Some(ApplyFeedback {
                message,
                success: false,
            });
            return;
        }

        self.draft.backend_url = self.draft.backend_url.trim().trim_end_matches('/').to_string();
        self.config = self.draft.clone();
        self.client = build_client(&self.config);
        // requests still running against the old backend report into the old queue
        self.event_bus = EventBus::new();
        self.ui_state.restart(&self.config);

        self.apply_feedback = Some(ApplyFeedback {
            message: "Configuración aplicada".to_string(),
            success: true,
        });
        log::info!("Switched to {} backend", self.client.backend_name());
        self.probe_health(ctx);
    }
}

fn build_client(config: &AppConfig) -> JobClient {
    let backend: Rc<dyn JobBackendPort> = if config.use_mock_data {
        log::info!("Using demo data ({} ms delay)", config.mock_delay_ms);
        Rc::new(MockJobBackend::new(Rc::new(GlooTimer), config.mock_delay_ms))
    } else {
        Rc::new(HttpJobBackend::new(config.clone()))
    };
    JobClient::new(backend, config.chat.clone())
}

impl eframe::App for JoblyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.probe_health(ctx);
            self.first_frame = false;
        }

        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        // keeps spinners animating
        if self.ui_state.is_busy() || self.ui_state.detail.is_loading() {
            ctx.request_repaint();
        }

        let mut commands = Vec::new();
        let mut apply = false;

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(360.0)
                .show(ctx, |ui| {
                    match settings::settings_panel(ui, &mut self.draft, self.apply_feedback.as_ref()) {
                        SettingsAction::ApplyClicked => apply = true,
                        SettingsAction::Changed => self.apply_feedback = None,
                        SettingsAction::None => {}
                    }
                });
        }

        // ── Chat ─────────────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            commands.extend(chat::chat_panel(ui, &mut self.ui_state));
        });

        // ── Dialogs ──────────────────────────────────────────
        commands.extend(job_detail::job_detail_window(ctx, &mut self.ui_state));
        chat::share_dialog(ctx, &mut self.ui_state);

        if apply {
            self.apply_settings(ctx);
            return;
        }
        for command in commands {
            self.dispatch(command, ctx);
        }
    }
}

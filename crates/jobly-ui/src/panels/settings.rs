//! Settings panel: backend URL, demo-data toggle and input limits.
//! Changes take effect when "Aplicar" is clicked.

use egui::{self, RichText, Vec2};
use jobly_types::config::AppConfig;

use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    None,
    /// A field was edited; nothing applied yet
    Changed,
    /// Rebuild the backend from the edited config
    ApplyClicked,
}

/// Apply feedback passed in from the app layer
#[derive(Clone)]
pub struct ApplyFeedback {
    pub message: String,
    pub success: bool,
}

/// Check an edited config before the backend is rebuilt from it.
pub fn validate_settings(config: &AppConfig) -> Result<(), String> {
    if config.use_mock_data {
        return Ok(());
    }
    let url = config.backend_url.trim();
    if url.is_empty() {
        return Err("La URL del backend no puede estar vacía".to_string());
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err("La URL debe empezar con http:// o https://".to_string());
    }
    Ok(())
}

pub fn settings_panel(
    ui: &mut egui::Ui,
    config: &mut AppConfig,
    feedback: Option<&ApplyFeedback>,
) -> SettingsAction {
    let mut changed = false;
    let mut apply_clicked = false;

    egui::Frame::default()
        .fill(BG_HEADER)
        .inner_margin(PANEL_PADDING)
        .corner_radius(CARD_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Configuración").color(TEXT_PRIMARY));
            ui.separator();

            // ── Backend ──────────────────────────────────────
            ui.label(RichText::new("Servidor").color(ACCENT).strong());
            ui.add_space(2.0);

            changed |= ui
                .checkbox(&mut config.use_mock_data, "Usar datos de demostración")
                .changed();

            ui.add_space(4.0);
            ui.label(RichText::new("URL del backend").color(TEXT_SECONDARY).small());
            changed |= ui
                .add_enabled(
                    !config.use_mock_data,
                    egui::TextEdit::singleline(&mut config.backend_url)
                        .hint_text("http://localhost:5000"),
                )
                .changed();

            ui.add_space(4.0);
            ui.label(
                RichText::new("Retardo simulado (ms)")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            changed |= ui
                .add_enabled(
                    config.use_mock_data,
                    egui::Slider::new(&mut config.mock_delay_ms, 0..=5000),
                )
                .changed();

            ui.add_space(12.0);
            ui.separator();

            // ── Chat ─────────────────────────────────────────
            ui.label(RichText::new("Chat").color(ACCENT).strong());
            ui.label(
                RichText::new("Longitud máxima del mensaje")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            changed |= ui
                .add(egui::Slider::new(&mut config.ui.max_message_length, 50..=2000))
                .changed();

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(RichText::new("Aplicar").color(TEXT_ON_ACCENT).strong())
                        .fill(ACCENT)
                        .corner_radius(CARD_ROUNDING)
                        .min_size(Vec2::new(100.0, 28.0)),
                );
                apply_clicked = btn.clicked();

                if let Some(fb) = feedback {
                    let color = if fb.success { ONLINE } else { OFFLINE };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });

            ui.add_space(4.0);
            ui.label(
                RichText::new("Aplicar reinicia la conversación.")
                    .color(TEXT_SECONDARY)
                    .small()
                    .italics(),
            );
        });

    if apply_clicked {
        SettingsAction::ApplyClicked
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}

//! Chat panel: header, messages with job cards, suggestions and the input row.

use egui::{self, Align, Align2, Frame, Layout, RichText, ScrollArea, Stroke, Vec2};

use jobly_core::suggestions::SUGGESTED_QUERIES;
use jobly_types::job::JobSummary;
use jobly_types::message::{Message, Role};

use crate::format::{char_counter, format_time, or_default, preview};
use crate::state::{UiCommand, UiState};
use crate::theme::*;

const CARD_DESCRIPTION_CHARS: usize = 160;

/// Render the chat panel. Returns the requests triggered this frame.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    let mut opened_job: Option<String> = None;
    let mut picked: Option<&'static str> = None;

    Frame::default()
        .fill(BG_HEADER)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| header(ui, state, &mut commands));

    ui.add_space(4.0);

    let available_height = ui.available_height() - 70.0;
    ScrollArea::vertical()
        .max_height(available_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in state.conversation.messages() {
                if let Some(job_id) = render_message(ui, message) {
                    opened_job = Some(job_id);
                }
                ui.add_space(6.0);
            }

            if let Some(text) = state.conversation.loading_text() {
                render_loading(ui, text);
            }

            if state.conversation.suggestions_visible() {
                picked = render_suggestions(ui);
            }
        });

    if let Some(job_id) = opened_job {
        commands.push(state.open_job(&job_id));
    }
    if let Some(query) = picked {
        state.select_suggestion(query);
    }

    ui.add_space(8.0);
    if let Some(command) = input_row(ui, state) {
        commands.push(command);
    }

    commands
}

fn header(ui: &mut egui::Ui, state: &mut UiState, commands: &mut Vec<UiCommand>) {
    ui.horizontal(|ui| {
        ui.heading(
            RichText::new("🤖 Jobly - Asistente de Empleos")
                .color(TEXT_PRIMARY)
                .strong(),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("⚙").on_hover_text("Configuración").clicked() {
                state.show_settings = !state.show_settings;
            }

            let share = ui.add_enabled(!state.sharing, egui::Button::new("Compartir"));
            if share.clicked() {
                commands.extend(state.share());
            }

            let color = match state.backend_online {
                Some(true) => ONLINE,
                Some(false) => OFFLINE,
                None => PENDING,
            };
            ui.label(RichText::new(state.connection_label()).color(color).small());

            if state.is_busy() {
                ui.label(
                    RichText::new(&state.status_text)
                        .color(TEXT_SECONDARY)
                        .small(),
                );
            }
        });
    });
}

/// Returns the id of the job whose "Ver detalles" button was clicked.
fn render_message(ui: &mut egui::Ui, message: &Message) -> Option<String> {
    let mut opened = None;
    let (fill, text_color, align) = match message.role {
        Role::User => (BUBBLE_USER, TEXT_ON_ACCENT, Align::Max),
        Role::Assistant => (BUBBLE_BOT, TEXT_PRIMARY, Align::Min),
    };
    let max_width = ui.available_width() * BUBBLE_MAX_WIDTH_RATIO;

    ui.with_layout(Layout::top_down(align), |ui| {
        Frame::default()
            .fill(fill)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.label(RichText::new(&message.content).color(text_color));

                for job in message.jobs.iter().flatten() {
                    if job_card(ui, job) {
                        opened = Some(job.id.clone());
                    }
                }
            });

        let local = message.timestamp.with_timezone(&chrono::Local);
        ui.label(
            RichText::new(format_time(&local))
                .color(TEXT_SECONDARY)
                .small(),
        );
    });

    opened
}

fn job_card(ui: &mut egui::Ui, job: &JobSummary) -> bool {
    let mut clicked = false;
    ui.add_space(4.0);
    Frame::default()
        .fill(CARD_BG)
        .stroke(Stroke::new(1.0, CARD_BORDER))
        .corner_radius(CARD_ROUNDING)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(or_default(&job.title, "Empleo sin título"))
                    .color(TEXT_PRIMARY)
                    .strong(),
            );
            if !job.company.is_empty() {
                ui.label(RichText::new(&job.company).color(ACCENT));
            }
            if !job.location.is_empty() {
                ui.label(
                    RichText::new(format!("📍 {}", job.location))
                        .color(TEXT_SECONDARY)
                        .small(),
                );
            }
            if !job.description.is_empty() {
                ui.label(
                    RichText::new(preview(&job.description, CARD_DESCRIPTION_CHARS))
                        .color(TEXT_PRIMARY),
                );
            }
            clicked = ui
                .add(
                    egui::Button::new(RichText::new("Ver detalles").color(TEXT_ON_ACCENT))
                        .fill(ACCENT)
                        .corner_radius(CARD_ROUNDING),
                )
                .clicked();
        });
    clicked
}

fn render_loading(ui: &mut egui::Ui, text: &str) {
    Frame::default()
        .fill(BUBBLE_BOT)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(text).color(TEXT_SECONDARY).italics());
            });
        });
}

fn render_suggestions(ui: &mut egui::Ui) -> Option<&'static str> {
    let mut picked = None;
    ui.add_space(8.0);
    ui.label(
        RichText::new("💡 Prueba estas consultas:")
            .color(TEXT_SECONDARY)
            .strong(),
    );
    ui.horizontal_wrapped(|ui| {
        for query in SUGGESTED_QUERIES {
            let chip = egui::Button::new(RichText::new(query).color(ACCENT))
                .fill(TAG_BG)
                .corner_radius(CARD_ROUNDING);
            if ui.add(chip).clicked() {
                picked = Some(query);
            }
        }
    });
    picked
}

fn input_row(ui: &mut egui::Ui, state: &mut UiState) -> Option<UiCommand> {
    let mut command = None;
    let busy = state.is_busy();
    let max_chars = state.conversation.max_input_chars();
    let mut buffer = state.conversation.input().to_string();

    ui.horizontal(|ui| {
        let edit = egui::TextEdit::singleline(&mut buffer)
            .hint_text("Escribe qué tipo de trabajo buscas (ej: 'quiero un trabajo de desarrollador frontend')")
            .char_limit(max_chars)
            .interactive(!busy)
            .desired_width(ui.available_width() - 50.0)
            .font(egui::FontId::proportional(14.0));
        let response = ui.add(edit);
        if response.changed() {
            state.edit_input(buffer.clone());
        }

        let can_send = state.conversation.can_submit();
        let send = ui.add_enabled(
            can_send,
            egui::Button::new(RichText::new(if busy { "⏳" } else { "📤" }).color(TEXT_ON_ACCENT))
                .fill(if can_send { ACCENT } else { CARD_BORDER })
                .corner_radius(CARD_ROUNDING)
                .min_size(Vec2::new(40.0, 0.0)),
        );

        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if send.clicked() || (enter && can_send) {
            command = state.submit();
            response.request_focus();
        }
    });

    ui.label(
        RichText::new(format!(
            "Presiona Enter para enviar • {}",
            char_counter(state.conversation.input(), max_chars)
        ))
        .color(TEXT_SECONDARY)
        .small(),
    );

    command
}

/// Result dialog for "Compartir"; stays up until dismissed.
pub fn share_dialog(ctx: &egui::Context, state: &mut UiState) {
    let Some(feedback) = state.share_feedback.clone() else {
        return;
    };
    let mut dismissed = false;

    egui::Window::new("Compartir conversación")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            let color = if feedback.success { ONLINE } else { OFFLINE };
            ui.label(RichText::new(&feedback.message).color(color));
            ui.add_space(6.0);
            if ui.button("Cerrar").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        state.dismiss_share();
    }
}

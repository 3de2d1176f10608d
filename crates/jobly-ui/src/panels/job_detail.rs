//! Job detail modal, opened from a job card's "Ver detalles" button.

use egui::{self, Align2, Frame, RichText, ScrollArea, Vec2};

use jobly_core::detail::DetailState;
use jobly_types::job::JobDetail;

use crate::format::*;
use crate::state::{UiCommand, UiState};
use crate::theme::*;

/// Render the modal while the detail view is open. Returns a fetch request
/// when the user asks to retry.
pub fn job_detail_window(ctx: &egui::Context, state: &mut UiState) -> Option<UiCommand> {
    if !state.detail.is_open() {
        return None;
    }

    let mut open = true;
    let mut close_clicked = false;
    let mut retry_clicked = false;

    let title = match state.detail.state() {
        DetailState::Loading { .. } => "Cargando...".to_string(),
        DetailState::Loaded { job } => or_default(job.title(), "Detalles del empleo").to_string(),
        _ => "Detalles del empleo".to_string(),
    };

    egui::Window::new(title)
        .id(egui::Id::new("job_detail_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(520.0)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| match state.detail.state() {
            DetailState::Closed => {}
            DetailState::Loading { .. } => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(
                        RichText::new("Cargando detalles del empleo...").color(TEXT_SECONDARY),
                    );
                });
            }
            DetailState::Failed { error, .. } => {
                ui.label(RichText::new(format!("❌ {}", error.message)).color(OFFLINE));
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if error.is_retryable() && ui.button("Reintentar").clicked() {
                        retry_clicked = true;
                    }
                    if ui.button("Cerrar").clicked() {
                        close_clicked = true;
                    }
                });
            }
            DetailState::Loaded { job } => {
                ScrollArea::vertical()
                    .max_height(480.0)
                    .show(ui, |ui| job_body(ui, job));
                ui.separator();
                if ui.button("Cerrar").clicked() {
                    close_clicked = true;
                }
            }
        });

    if !open || close_clicked {
        state.close_detail();
        return None;
    }
    if retry_clicked {
        return state.retry_detail();
    }
    None
}

/// Label/value pairs for the "Información del puesto" grid
pub fn info_rows(job: &JobDetail) -> Vec<(&'static str, String)> {
    vec![
        ("Nivel de experiencia:", or_unspecified(&job.experience_level).to_string()),
        ("Nivel educativo:", or_unspecified(&job.education_level).to_string()),
        ("Salario:", or_unspecified(&job.salary_info).to_string()),
        ("Fecha de inicio:", format_long_date(&job.start_date)),
        ("Fecha límite:", format_long_date(&job.end_date)),
    ]
}

fn job_body(ui: &mut egui::Ui, job: &JobDetail) {
    let summary = &job.summary;

    ui.label(
        RichText::new(format!("🏢 {}", or_default(&summary.company, "Sin empresa")))
            .color(TEXT_PRIMARY)
            .strong(),
    );
    ui.horizontal_wrapped(|ui| {
        for meta in [
            format!("📍 {}", or_default(&summary.location, "Sin ubicación")),
            format!("💼 {}", or_unspecified(&job.job_type)),
            format!("🌐 {}", or_unspecified(&job.remote_type)),
        ] {
            ui.label(RichText::new(meta).color(TEXT_SECONDARY));
        }
    });

    section_heading(ui, "📋 Descripción del puesto");
    ui.label(or_default(&summary.description, "Sin descripción disponible"));

    let requirements = requirement_lines(&job.requirements);
    if !requirements.is_empty() {
        section_heading(ui, "✅ Requisitos");
        for line in requirements {
            ui.label(format!("• {}", line));
        }
    }

    section_heading(ui, "🎯 Información del puesto");
    egui::Grid::new("job_info_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for (label, value) in info_rows(job) {
                ui.label(RichText::new(label).color(TEXT_SECONDARY));
                ui.label(value);
                ui.end_row();
            }
        });

    if !job.majors.is_empty() {
        section_heading(ui, "🎓 Carreras relacionadas");
        ui.horizontal_wrapped(|ui| {
            for major in &job.majors {
                Frame::default()
                    .fill(TAG_BG)
                    .corner_radius(CARD_ROUNDING)
                    .inner_margin(Vec2::new(8.0, 3.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(major_tag(major)).color(ACCENT).small());
                    });
            }
        });
    }

    if !job.contact_email.trim().is_empty() {
        section_heading(ui, "📧 Contacto");
        ui.hyperlink_to(
            job.contact_email.as_str(),
            format!("mailto:{}", job.contact_email),
        );
    }
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.label(RichText::new(text).color(ACCENT).strong());
}

//! Example queries offered on an empty conversation.

pub const SUGGESTED_QUERIES: [&str; 6] = [
    "Quiero un trabajo de practicante en análisis de datos",
    "Busco empleo como desarrollador frontend con React",
    "Oportunidades en marketing digital",
    "Trabajo remoto en programación",
    "Puestos de data scientist junior",
    "Empleos en startups tecnológicas",
];

/// Shown only while the conversation is short and idle.
pub fn suggestions_visible(message_count: usize, busy: bool) -> bool {
    message_count <= 2 && !busy
}

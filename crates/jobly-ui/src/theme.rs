//! Light theme: blue accent on neutral greys, chat-bubble colours.

use egui::{Color32, CornerRadius, Stroke, Vec2, Visuals};

pub const BG_APP: Color32 = Color32::from_rgb(243, 244, 246);
pub const BG_HEADER: Color32 = Color32::from_rgb(255, 255, 255);
pub const BUBBLE_USER: Color32 = Color32::from_rgb(37, 99, 235);
pub const BUBBLE_BOT: Color32 = Color32::from_rgb(255, 255, 255);
pub const CARD_BG: Color32 = Color32::from_rgb(249, 250, 251);
pub const CARD_BORDER: Color32 = Color32::from_rgb(209, 213, 219);
pub const TAG_BG: Color32 = Color32::from_rgb(219, 234, 254);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(107, 114, 128);
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;

pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const ACCENT_MUTED: Color32 = Color32::from_rgb(191, 219, 254);
pub const ONLINE: Color32 = Color32::from_rgb(22, 163, 74);
pub const OFFLINE: Color32 = Color32::from_rgb(220, 38, 38);
pub const PENDING: Color32 = Color32::from_rgb(202, 138, 4);

pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const CARD_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const PANEL_PADDING: Vec2 = Vec2::new(16.0, 10.0);

/// Bubbles never stretch past this share of the chat width
pub const BUBBLE_MAX_WIDTH_RATIO: f32 = 0.8;

pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = Visuals::light();
    style.visuals.panel_fill = BG_APP;
    style.visuals.window_fill = BG_HEADER;
    style.visuals.window_corner_radius = CARD_ROUNDING;
    style.visuals.extreme_bg_color = BG_HEADER;

    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, CARD_BORDER);
    style.visuals.widgets.hovered.bg_fill = ACCENT_MUTED;
    style.visuals.widgets.hovered.weak_bg_fill = ACCENT_MUTED;
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_ON_ACCENT);

    style.visuals.selection.bg_fill = ACCENT_MUTED;
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    style.visuals.hyperlink_color = ACCENT;

    style.spacing.item_spacing = Vec2::new(8.0, 8.0);
    style.spacing.button_padding = Vec2::new(10.0, 5.0);

    ctx.set_style(style);
}

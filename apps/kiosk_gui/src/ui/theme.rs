//! Brand palette and the touch-friendly style applied once at startup.

use catalog::Category;
use egui::Color32;

pub const PRIMARY: Color32 = Color32::from_rgb(0xEF, 0x33, 0x40);
pub const TEAL: Color32 = Color32::from_rgb(0x00, 0xAF, 0xAD);
pub const LIME: Color32 = Color32::from_rgb(0x84, 0xBD, 0x00);
pub const YELLOW: Color32 = Color32::from_rgb(0xFE, 0xDD, 0x00);
pub const ORANGE: Color32 = Color32::from_rgb(0xE8, 0x99, 0x23);
pub const MAGENTA: Color32 = Color32::from_rgb(0xDF, 0x19, 0x95);
pub const PURPLE: Color32 = Color32::from_rgb(0x80, 0x2F, 0xDE);
pub const INK: Color32 = Color32::BLACK;
pub const PAPER: Color32 = Color32::WHITE;
pub const MUTED: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);
pub const SURFACE: Color32 = Color32::from_rgb(0xF9, 0xFA, 0xFB);

/// Placeholder fill behind a project image that has not loaded.
pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::Software => TEAL,
        Category::HardwareIot => ORANGE,
        Category::Ai => PURPLE,
        Category::UxUi => MAGENTA,
        Category::Robotics => LIME,
    }
}

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = PAPER;
    style.visuals.window_fill = PAPER;
    style.visuals.selection.bg_fill = PRIMARY;
    style.visuals.hyperlink_color = TEAL;

    for font in style.text_styles.values_mut() {
        font.size *= 1.4;
    }

    style.spacing.item_spacing = egui::vec2(12.0, 10.0);
    style.spacing.button_padding = egui::vec2(18.0, 10.0);
    style.spacing.interact_size = egui::vec2(48.0, 44.0);
    style.spacing.scroll = egui::style::ScrollStyle::floating();
    ctx.set_style(style);
}

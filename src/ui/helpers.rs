// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, hover: &str) -> bool {
    ui.add(Button::new(label).min_size(Vec2::new(width, height)))
        .on_hover_text(hover)
        .clicked()
}

/// Línea ✓/✗ del desglose de una corrección
pub fn check_line(ui: &mut Ui, ok: bool, text: &str) {
    let (icon, color) = if ok {
        ("✓", Color32::from_rgb(80, 200, 120))
    } else {
        ("✗", Color32::from_rgb(230, 90, 90))
    };
    ui.label(RichText::new(format!("{icon} {text}")).color(color));
}

pub fn result_text(ui: &mut Ui, success: bool, text: &str) {
    let color = if success {
        Color32::from_rgb(80, 200, 120)
    } else {
        Color32::from_rgb(240, 170, 60)
    };
    ui.label(RichText::new(text).color(color).strong());
}

use crate::TutorApp;
use crate::model::AppState;
use egui::{Button, Context, ScrollArea, Ui, Visuals};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

pub fn top_panel(app: &mut TutorApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if app.state == AppState::Lesson && ui.button("⬅ Lessons").clicked() {
                app.back_to_menu();
                app.message.clear();
            }

            let pct = app.tracker.completion_percentage();
            ui.add(
                egui::ProgressBar::new(pct as f32 / 100.0)
                    .desired_width(160.0)
                    .text(format!("{pct}% complete")),
            );

            if ui.button("🔄 Reset progress").clicked() {
                app.confirm_reset = true;
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Editor de entrada con ancho fijo
pub fn code_editor_input(ui: &mut Ui, id: &str, width: f32, rows: usize, text: &mut String) {
    ScrollArea::vertical()
        .id_salt(format!("{id}_scroll"))
        .max_height(320.0)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_width(width);
            CodeEditor::default()
                .id_source(id)
                .with_rows(rows)
                .with_fontsize(14.0)
                .with_theme(ColorTheme::GITHUB_DARK)
                .with_syntax(Syntax::python())
                .with_numlines(true)
                .vscroll(false)
                .show(ui, text);
        });
}

/// Fragmento de sólo lectura (preguntas del quiz)
pub fn code_snippet(ui: &mut Ui, id: &str, width: f32, code: &str) {
    let mut buf = code.trim_end().to_owned();
    let rows = buf.lines().count().max(1);
    ui.scope(|ui| {
        ui.set_width(width);
        ui.disable();
        CodeEditor::default()
            .id_source(id)
            .with_rows(rows)
            .with_fontsize(13.0)
            .with_theme(ColorTheme::GITHUB_DARK)
            .with_syntax(Syntax::python())
            .with_numlines(false)
            .vscroll(false)
            .show(ui, &mut buf);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}

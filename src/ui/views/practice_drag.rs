use crate::TutorApp;
use crate::model::DragChallenge;
use crate::ui::helpers::result_text;
use egui::{Button, Color32, RichText, Ui};

/// Arrastrar y soltar con clics: pieza → hueco. Clic en un hueco lleno lo vacía.
pub fn ui_drag(ui: &mut Ui, app: &mut TutorApp, challenges: &[DragChallenge]) {
    for spec in challenges {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            challenge(ui, app, spec);
        });
        ui.add_space(10.0);
    }
}

fn challenge(ui: &mut Ui, app: &mut TutorApp, spec: &DragChallenge) {
    let done = app.page.session.drag_completed.contains(&spec.id);
    let title = if done {
        format!("✅ {}", spec.title)
    } else {
        spec.title.clone()
    };
    ui.label(RichText::new(title).strong());
    ui.add_space(4.0);

    // Plantilla con huecos
    let segments = spec.segments();
    let mut clicked_blank = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for (blank, segment) in segments.iter().enumerate() {
            for (j, line) in segment.split('\n').enumerate() {
                if j > 0 {
                    ui.end_row();
                }
                if !line.is_empty() {
                    ui.label(RichText::new(line).monospace());
                }
            }
            // Tras cada segmento salvo el último va un hueco
            if blank + 1 < segments.len() {
                let placed = app
                    .page
                    .drag_boards
                    .get(&spec.id)
                    .and_then(|b| b.slot(blank))
                    .and_then(|p| spec.pieces.get(p));
                let text = placed.map(String::as_str).unwrap_or("  ___  ");
                if ui.button(RichText::new(text).monospace()).clicked() {
                    clicked_blank = Some(blank);
                }
            }
        }
    });
    if let Some(blank) = clicked_blank {
        app.click_blank(&spec.id, blank);
    }

    ui.add_space(6.0);
    ui.label("Pieces:");
    let selected = app.page.drag_selected.get(&spec.id).copied();
    let mut clicked_piece = None;
    ui.horizontal_wrapped(|ui| {
        for (i, piece) in spec.pieces.iter().enumerate() {
            let used = app
                .page
                .drag_boards
                .get(&spec.id)
                .map(|b| b.is_used(i))
                .unwrap_or(false);
            let mut button = Button::new(RichText::new(piece).monospace());
            if selected == Some(i) {
                button = button.fill(Color32::from_rgb(60, 110, 180));
            }
            if ui.add_enabled(!used, button).clicked() {
                clicked_piece = Some(i);
            }
        }
    });
    if let Some(piece) = clicked_piece {
        app.select_piece(&spec.id, piece);
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Check").clicked() {
            app.check_drag_challenge(&spec.id);
        }
        if ui.button("⟲ Reset").clicked() {
            app.reset_drag_challenge(&spec.id);
        }
    });
    if let Some(outcome) = app.page.drag_results.get(&spec.id) {
        result_text(ui, outcome.is_success(), &outcome.message());
    }
}

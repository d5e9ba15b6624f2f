use crate::TutorApp;
use crate::judge::feedback;
use crate::model::CodingChallenge;
use crate::ui::helpers::{check_line, result_text};
use crate::ui::layout::code_editor_input;
use egui::{RichText, Ui};

pub fn ui_coding(ui: &mut Ui, app: &mut TutorApp, challenges: &[CodingChallenge], width: f32) {
    for spec in challenges {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            challenge(ui, app, spec, width - 24.0);
        });
        ui.add_space(10.0);
    }
}

fn challenge(ui: &mut Ui, app: &mut TutorApp, spec: &CodingChallenge, width: f32) {
    let done = app.page.session.coding_completed.contains(&spec.id);
    let title = if done {
        format!("✅ {}", spec.title)
    } else {
        spec.title.clone()
    };
    ui.label(RichText::new(title).strong());
    ui.label(&spec.prompt);
    ui.add_space(4.0);

    let code = app.page.code_inputs.entry(spec.id.clone()).or_default();
    code_editor_input(ui, &spec.id, width, 10, code);
    let lines = code.lines().filter(|l| !l.trim().is_empty()).count();

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{lines} lines")).weak());
        if ui.button("▶ Run check").clicked() {
            app.run_coding_challenge(&spec.id);
        }
        if spec.hint.is_some() && ui.button("💡 Hint").clicked() {
            app.toggle_hint(&spec.id);
        }
    });

    if app.page.shown_hints.contains(&spec.id) {
        if let Some(hint) = &spec.hint {
            ui.label(RichText::new(format!("💡 {hint}")).italics());
        }
    }

    let Some(result) = app.page.code_results.get(&spec.id) else {
        return;
    };
    let fb = feedback(spec, result);
    result_text(ui, result.is_correct, &fb.headline);
    if !result.is_correct {
        check_line(ui, result.has_required_outputs, "Print the required outputs");
        check_line(ui, result.has_required_structure, "Use the required structure");
        check_line(ui, result.has_colons, "Colons after if/elif/else");
        check_line(ui, result.has_indentation, "Proper indentation");
        for detail in &fb.details {
            ui.label(format!("• {detail}"));
        }
    }
}

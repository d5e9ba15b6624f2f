use crate::TutorApp;
use crate::app::quiz::option_letter;
use crate::model::QuizQuestion;
use crate::ui::helpers::{check_line, result_text};
use crate::ui::layout::code_snippet;
use egui::{RichText, Ui};

pub fn ui_quiz(ui: &mut Ui, app: &mut TutorApp, questions: &[QuizQuestion], width: f32) {
    let submitted = app.page.session.quiz_submitted;

    for (i, q) in questions.iter().enumerate() {
        ui.label(RichText::new(format!("{}. {}", i + 1, q.prompt)).strong());
        if let Some(code) = &q.code {
            code_snippet(ui, &q.id, width - 24.0, code);
        }
        let chosen = app.page.quiz_answers.get(&q.id).copied();
        for (oi, option) in q.options.iter().enumerate() {
            let mut text = RichText::new(format!("{}) {}", option_letter(oi), option));
            // Tras enviar se marca la correcta y la elegida si falló
            if submitted && oi == q.answer {
                text = text.color(egui::Color32::from_rgb(80, 200, 120));
            } else if submitted && chosen == Some(oi) {
                text = text.color(egui::Color32::from_rgb(230, 90, 90));
            }
            let radio = ui.add_enabled(!submitted, egui::RadioButton::new(chosen == Some(oi), text));
            if radio.clicked() {
                app.page.quiz_answers.insert(q.id.clone(), oi);
            }
        }
        ui.add_space(8.0);
    }

    if !submitted {
        if ui.button("📨 Submit quiz").clicked() {
            app.submit_quiz();
        }
        return;
    }

    if let Some(report) = &app.page.quiz_report {
        ui.separator();
        result_text(
            ui,
            report.score == report.total,
            &format!("Score: {}/{}", report.score, report.total),
        );
        ui.label(report.message());
        for row in &report.rows {
            check_line(ui, row.correct, row.label().trim_start_matches(['✓', '✗', ' ']));
        }
    }
    if ui.button("⟲ Retry quiz").clicked() {
        app.retry_quiz();
    }
}

use crate::TutorApp;
use crate::model::{Lesson, LessonTab, PracticeTab};
use crate::ui::layout::two_button_row;
use crate::ui::views::{demos, practice_coding, practice_drag, practice_quiz};
use egui::{CentralPanel, Context, RichText, ScrollArea, Ui};

pub fn ui_lesson(app: &mut TutorApp, ctx: &Context) {
    // Copia para poder mutar la página mientras se pinta
    let Some(lesson) = app.current().cloned() else {
        app.back_to_menu();
        return;
    };

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 760.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            egui::Frame::default()
                .inner_margin(egui::Margin::symmetric(16, 12))
                .show(ui, |ui| {
                    ui.set_width(panel_width);
                    ui.heading(&lesson.title);
                    if !lesson.summary.is_empty() {
                        ui.label(RichText::new(&lesson.summary).italics());
                    }
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.selectable_value(&mut app.page.tab, LessonTab::Theory, "📖 Theory");
                        if !lesson.demos.is_empty() {
                            ui.selectable_value(&mut app.page.tab, LessonTab::Demos, "🧪 Try it");
                        }
                        if lesson.has_practice() {
                            ui.selectable_value(&mut app.page.tab, LessonTab::Practice, "🏋 Practice");
                        }
                    });
                    ui.separator();

                    match app.page.tab {
                        LessonTab::Theory => theory(ui, &lesson),
                        LessonTab::Demos => demos::ui_demos(ui, app, &lesson.demos),
                        LessonTab::Practice => practice(ui, app, &lesson, panel_width),
                    }

                    ui.add_space(12.0);
                    ui.separator();
                    footer(ui, app, &lesson, panel_width);
                });
        });
    });
}

fn theory(ui: &mut Ui, lesson: &Lesson) {
    for paragraph in &lesson.theory {
        ui.label(paragraph);
        ui.add_space(6.0);
    }
    if lesson.theory.is_empty() {
        ui.label("No theory for this lesson yet.");
    }
}

fn practice(ui: &mut Ui, app: &mut TutorApp, lesson: &Lesson, width: f32) {
    if let Some((drag, coding, quiz)) = app.practice_counters() {
        ui.label(format!("Drag & drop {drag}  ·  Coding {coding}  ·  Quiz {quiz}"));
    }
    ui.horizontal(|ui| {
        if !lesson.drag.is_empty() {
            ui.selectable_value(&mut app.page.practice_tab, PracticeTab::DragDrop, "🧩 Drag & drop");
        }
        if !lesson.coding.is_empty() {
            ui.selectable_value(&mut app.page.practice_tab, PracticeTab::Coding, "⌨ Coding");
        }
        if !lesson.quiz.is_empty() {
            ui.selectable_value(&mut app.page.practice_tab, PracticeTab::Quiz, "❓ Quiz");
        }
    });
    ui.add_space(8.0);

    match app.page.practice_tab {
        PracticeTab::DragDrop => practice_drag::ui_drag(ui, app, &lesson.drag),
        PracticeTab::Coding => practice_coding::ui_coding(ui, app, &lesson.coding, width),
        PracticeTab::Quiz => practice_quiz::ui_quiz(ui, app, &lesson.quiz, width),
    }
}

fn footer(ui: &mut Ui, app: &mut TutorApp, lesson: &Lesson, width: f32) {
    if !app.message.is_empty() {
        ui.label(RichText::new(&app.message).strong());
        ui.add_space(6.0);
    }

    let completed = app.tracker.is_completed(&lesson.id);
    if !completed && !lesson.has_practice() {
        if ui.button("✅ Mark lesson as complete").clicked() {
            app.mark_lesson_complete();
        }
        ui.add_space(6.0);
    }

    let (back, next) = two_button_row(ui, width, "⬅ Back to lessons", "Next lesson ▶");
    if back {
        app.back_to_menu();
        app.message.clear();
    }
    if next {
        app.open_next_lesson();
    }
}

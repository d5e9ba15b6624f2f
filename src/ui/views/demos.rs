use crate::TutorApp;
use crate::demos::{WEEKDAYS, letter_grade, ride_check, sign_demo, weekday_mood};
use crate::model::DemoKind;
use crate::ui::helpers::{check_line, result_text};
use egui::{ComboBox, DragValue, RichText, TextEdit, Ui};

pub fn ui_demos(ui: &mut Ui, app: &mut TutorApp, kinds: &[DemoKind]) {
    for kind in kinds {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            match kind {
                DemoKind::Sign => sign(ui, app),
                DemoKind::LetterGrade => grade(ui, app),
                DemoKind::Ride => ride(ui, app),
                DemoKind::Weekday => weekday(ui, app),
            }
        });
        ui.add_space(10.0);
    }
}

fn sign(ui: &mut Ui, app: &mut TutorApp) {
    ui.label(RichText::new("if / else: positive or not?").strong());
    ui.horizontal(|ui| {
        ui.label("Number:");
        ui.add(TextEdit::singleline(&mut app.page.demos.sign).desired_width(80.0));
    });
    match sign_demo(&app.page.demos.sign) {
        Ok(verdict) => {
            result_text(ui, true, verdict.output());
            ui.label(verdict.explanation());
        }
        Err(err) => result_text(ui, false, &err),
    }
}

fn grade(ui: &mut Ui, app: &mut TutorApp) {
    ui.label(RichText::new("if / elif / else: letter grade").strong());
    ui.horizontal(|ui| {
        ui.label("Score (0-100):");
        ui.add(TextEdit::singleline(&mut app.page.demos.score).desired_width(80.0));
    });
    match letter_grade(&app.page.demos.score) {
        Ok(g) => result_text(ui, true, &format!("{} Grade {}: {}", g.emoji, g.letter, g.message)),
        Err(err) => result_text(ui, false, &err),
    }
}

fn ride(ui: &mut Ui, app: &mut TutorApp) {
    ui.label(RichText::new("Nested if: can you ride?").strong());
    let inputs = &mut app.page.demos;
    ui.horizontal(|ui| {
        ui.checkbox(&mut inputs.has_ticket, "Has ticket");
        ui.label("Age:");
        ui.add(DragValue::new(&mut inputs.age).range(0..=120));
        ui.label("Height (cm):");
        ui.add(DragValue::new(&mut inputs.height_cm).range(50..=250));
    });
    let decision = ride_check(inputs.has_ticket, inputs.age, inputs.height_cm);
    for (i, message) in decision.messages.iter().enumerate() {
        let ok = decision.steps.get(i).map(|(_, passed)| *passed).unwrap_or(decision.can_ride);
        check_line(ui, ok, message.trim_start_matches(['✓', '✗', ' ']));
    }
}

fn weekday(ui: &mut Ui, app: &mut TutorApp) {
    ui.label(RichText::new("match / case: day of the week").strong());
    let day = &mut app.page.demos.weekday;
    ComboBox::from_id_salt("weekday_demo")
        .selected_text(day.as_str())
        .show_ui(ui, |ui| {
            for d in WEEKDAYS {
                ui.selectable_value(day, d.to_string(), d);
            }
        });
    let (emoji, mood) = weekday_mood(day);
    result_text(ui, true, &format!("{emoji} {mood}"));
}

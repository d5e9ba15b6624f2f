mod helpers;
pub mod layout;
pub mod views;

use crate::app::{PROGRESS_KEY, TutorApp};
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for TutorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.state {
            AppState::LessonMenu => views::lesson_menu::ui_lesson_menu(self, ctx),
            AppState::Lesson => views::lesson::ui_lesson(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }

    /// Vuelca la entrada de progreso; vacía tras un reinicio.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let entry = self.tracker.store().entry().unwrap_or_default();
        storage.set_string(PROGRESS_KEY, entry.to_string());
    }
}

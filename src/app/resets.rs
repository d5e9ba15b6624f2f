use super::*;

impl TutorApp {
    /// Borra todo el progreso y vuelve al menú.
    pub fn reset_progress(&mut self) {
        self.tracker.reset_all();
        self.back_to_menu();
        self.confirm_reset = false;
        self.message = "Progress cleared. Starting from the first lesson.".into();
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirm reset")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Are you sure you want to erase all your progress? This cannot be undone!");
                ui.horizontal(|ui| {
                    if ui.button("Yes, erase").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_returns_to_first_run_state() {
        let mut app = TutorApp::with_store(MemoryStore::default()).expect("curriculum");
        app.tracker.complete_lesson("print-and-comments");
        assert!(app.open_lesson("variables"));
        app.confirm_reset = true;

        app.reset_progress();
        assert_eq!(app.tracker.store().entry(), None);
        assert_eq!(app.state, AppState::LessonMenu);
        assert!(!app.confirm_reset);
        assert!(app.tracker.is_unlocked("print-and-comments"));
        assert!(!app.tracker.is_unlocked("variables"));
    }
}

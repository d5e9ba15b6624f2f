use super::*;

impl TutorApp {
    /// Abre una lección si está desbloqueada; si no, deja el aviso de bloqueo.
    /// Al navegar se descarta la sesión de práctica anterior.
    pub fn open_lesson(&mut self, lesson_id: &str) -> bool {
        if let Some(notice) = self.tracker.locked_notice(lesson_id) {
            self.message = match notice.prerequisite {
                Some(prev) => format!(
                    "🔒 \"{}\" is locked. Complete \"{}\" first.",
                    self.lesson_title(&notice.lesson),
                    self.lesson_title(&prev)
                ),
                None => format!("🔒 \"{}\" is locked.", self.lesson_title(&notice.lesson)),
            };
            return false;
        }

        let Some(lesson) = self.lesson(lesson_id) else {
            return false;
        };
        self.page = LessonPage::new(lesson);
        self.current_lesson = Some(lesson_id.to_string());
        self.state = AppState::Lesson;
        self.message.clear();
        true
    }

    /// Continuar donde lo dejé
    pub fn continue_course(&mut self) {
        match self.tracker.next_lesson().map(String::from) {
            Some(id) => {
                self.open_lesson(&id);
            }
            None => self.message = "🏆 You have finished every lesson!".into(),
        }
    }

    pub fn open_next_lesson(&mut self) {
        let next = self
            .current_lesson
            .as_deref()
            .and_then(|id| self.tracker.order().successor(id))
            .map(String::from);
        match next {
            Some(id) => {
                self.open_lesson(&id);
            }
            None => self.back_to_menu(),
        }
    }

    pub fn back_to_menu(&mut self) {
        self.page = LessonPage::default();
        self.current_lesson = None;
        self.state = AppState::LessonMenu;
    }
}

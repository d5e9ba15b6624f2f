use super::*;
use crate::judge::{self, check_drag};
use crate::session::PracticeEvent;

impl TutorApp {
    pub fn run_coding_challenge(&mut self, challenge_id: &str) {
        let code = self
            .page
            .code_inputs
            .get(challenge_id)
            .cloned()
            .unwrap_or_default();
        let result = judge::grade_challenge(&self.curriculum, challenge_id, &code);
        let correct = result.is_correct;
        self.page
            .code_results
            .insert(challenge_id.to_string(), result);

        if correct {
            self.on_practice_completed(PracticeEvent::Coding(challenge_id.to_string()));
        }
    }

    pub fn toggle_hint(&mut self, challenge_id: &str) {
        if !self.page.shown_hints.remove(challenge_id) {
            self.page.shown_hints.insert(challenge_id.to_string());
        }
    }

    /// Primer clic elige pieza, segundo clic la suelta en un hueco.
    pub fn select_piece(&mut self, drag_id: &str, piece: usize) {
        let used = self
            .page
            .drag_boards
            .get(drag_id)
            .map(|b| b.is_used(piece))
            .unwrap_or(true);
        if !used {
            self.page.drag_selected.insert(drag_id.to_string(), piece);
        }
    }

    pub fn click_blank(&mut self, drag_id: &str, blank: usize) {
        let Some(board) = self.page.drag_boards.get_mut(drag_id) else {
            return;
        };
        if board.slot(blank).is_some() {
            board.clear(blank);
        } else if let Some(piece) = self.page.drag_selected.remove(drag_id) {
            board.place(blank, piece);
        }
        self.page.drag_results.remove(drag_id);
    }

    pub fn check_drag_challenge(&mut self, drag_id: &str) {
        let Some(spec) = self.current().and_then(|l| l.drag.iter().find(|d| d.id == drag_id)) else {
            log::warn!("check requested for unknown drag challenge {drag_id:?}");
            return;
        };
        let Some(board) = self.page.drag_boards.get(drag_id) else {
            return;
        };
        let outcome = check_drag(spec, board);
        let success = outcome.is_success();
        self.page.drag_results.insert(drag_id.to_string(), outcome);

        if success {
            self.on_practice_completed(PracticeEvent::Drag(drag_id.to_string()));
        }
    }

    pub fn reset_drag_challenge(&mut self, drag_id: &str) {
        if let Some(board) = self.page.drag_boards.get_mut(drag_id) {
            board.reset();
        }
        self.page.drag_selected.remove(drag_id);
        self.page.drag_results.remove(drag_id);
    }

    /// El quiz solo se envía una vez hasta que se reintenta.
    pub fn submit_quiz(&mut self) {
        if self.page.session.quiz_submitted {
            return;
        }
        let Some(lesson) = self.current() else {
            return;
        };
        let report = QuizReport::grade(&lesson.quiz, &self.page.quiz_answers);
        self.page.quiz_report = Some(report);
        self.on_practice_completed(PracticeEvent::QuizSubmitted);
    }

    pub fn retry_quiz(&mut self) {
        self.page.session.reopen_quiz();
        self.page.quiz_answers.clear();
        self.page.quiz_report = None;
    }

    /// Para lecciones sin prácticas corregidas.
    pub fn mark_lesson_complete(&mut self) {
        if let Some(id) = self.current_lesson.clone() {
            self.complete_lesson(&id);
        }
    }

    /// Tras cada práctica terminada se recalcula si la lección está lista.
    pub(crate) fn on_practice_completed(&mut self, event: PracticeEvent) {
        log::debug!("practice completed: {event:?}");
        self.page.session.record(event);

        let Some(lesson) = self.current() else {
            return;
        };
        if !self.page.session.all_complete(&lesson.inventory()) {
            return;
        }
        let id = lesson.id.clone();
        self.complete_lesson(&id);
    }

    fn complete_lesson(&mut self, lesson_id: &str) {
        // Solo hay evento si de verdad cambió: el aviso sale una vez
        if let Some(event) = self.tracker.complete_lesson(lesson_id) {
            self.message = match event.next_unlocked {
                Some(next) => format!(
                    "🎉 Lesson complete: {}! \"{}\" is now unlocked. ({}% of the course)",
                    self.lesson_title(&event.lesson),
                    self.lesson_title(&next),
                    event.percentage
                ),
                None => format!(
                    "🏆 Lesson complete: {}! You finished the course. ({}%)",
                    self.lesson_title(&event.lesson),
                    event.percentage
                ),
            };
        }
    }
}

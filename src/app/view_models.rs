use super::*;
use crate::progress::LessonStatus;

/// Lo que el menú necesita de cada lección
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonInfo {
    pub id: String,
    pub number: usize,
    pub title: String,
    pub status: LessonStatus,
}

impl LessonInfo {
    pub fn label(&self) -> String {
        let icon = match self.status {
            LessonStatus::Locked => "🔒",
            LessonStatus::Available => "🔓",
            LessonStatus::Completed => "✅",
        };
        format!("{}. {} {}", self.number, self.title, icon)
    }

    pub fn is_open(&self) -> bool {
        self.status != LessonStatus::Locked
    }

    pub fn hover_text(&self) -> &'static str {
        if self.is_open() {
            "Open this lesson"
        } else {
            "Complete the previous lesson to unlock it"
        }
    }
}

impl TutorApp {
    pub fn lesson_infos(&self) -> Vec<LessonInfo> {
        self.curriculum
            .lessons
            .iter()
            .enumerate()
            .map(|(i, lesson)| LessonInfo {
                id: lesson.id.clone(),
                number: i + 1,
                title: lesson.title.clone(),
                status: self.tracker.status(&lesson.id),
            })
            .collect()
    }

    /// Contadores "hecho/total" por sección de práctica de la lección abierta.
    pub fn practice_counters(&self) -> Option<(String, String, String)> {
        let inventory = self.current()?.inventory();
        let session = &self.page.session;
        let quiz = if !inventory.has_quiz {
            "-".to_string()
        } else if session.quiz_submitted {
            "submitted".to_string()
        } else {
            "pending".to_string()
        };
        Some((
            format!("{}/{}", session.drag_completed.len(), inventory.drag_total),
            format!("{}/{}", session.coding_completed.len(), inventory.coding_total),
            quiz,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_labels_follow_status() {
        let app = TutorApp::with_store(MemoryStore::default()).expect("curriculum");
        let infos = app.lesson_infos();
        assert_eq!(infos.len(), 22);
        assert_eq!(infos[0].label(), "1. Welcome to Python ✅");
        assert_eq!(infos[1].status, LessonStatus::Available);
        assert!(infos[1].is_open());
        assert!(!infos[2].is_open());
        assert!(infos[2].label().ends_with("🔒"));
    }

    #[test]
    fn counters_for_open_lesson() {
        let mut app = TutorApp::with_store(MemoryStore::default()).expect("curriculum");
        assert_eq!(app.practice_counters(), None);
        for id in ["print-and-comments", "variables", "data-types", "numbers-and-math",
                   "strings", "user-input", "comparison-operators", "logical-operators"] {
            app.tracker.complete_lesson(id);
        }
        assert!(app.open_lesson("conditionals"));
        assert_eq!(
            app.practice_counters(),
            Some(("0/4".into(), "0/3".into(), "pending".into()))
        );
    }
}

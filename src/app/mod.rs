use crate::data::{DataError, read_curriculum_embedded};
use crate::judge::{DragBoard, DragOutcome, GradeResult};
use crate::model::{AppState, Curriculum, Lesson, LessonOrder, LessonTab, PracticeTab};
use crate::progress::{LessonTracker, MemoryStore};
use crate::session::PracticeSession;
use std::collections::{HashMap, HashSet};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod quiz;
pub mod resets;
pub mod view_models;

pub use quiz::QuizReport;
pub use view_models::LessonInfo;

/// Clave de la entrada persistida en `eframe::Storage` (`localStorage` en web)
pub const PROGRESS_KEY: &str = "code_tutor.progress";

/// Entradas de los demos (volátiles)
#[derive(Clone, Debug)]
pub struct DemoInputs {
    pub sign: String,
    pub score: String,
    pub has_ticket: bool,
    pub age: u32,
    pub height_cm: u32,
    pub weekday: String,
}

impl Default for DemoInputs {
    fn default() -> Self {
        Self {
            sign: "5".into(),
            score: "85".into(),
            has_ticket: true,
            age: 14,
            height_cm: 150,
            weekday: "Friday".into(),
        }
    }
}

/// Estado de la página de una lección. Se rehace al navegar.
#[derive(Default)]
pub struct LessonPage {
    pub session: PracticeSession,
    pub tab: LessonTab,
    pub practice_tab: PracticeTab,
    pub drag_boards: HashMap<String, DragBoard>,
    pub drag_selected: HashMap<String, usize>,
    pub drag_results: HashMap<String, DragOutcome>,
    pub code_inputs: HashMap<String, String>,
    pub code_results: HashMap<String, GradeResult>,
    pub shown_hints: HashSet<String>,
    pub quiz_answers: HashMap<String, usize>,
    pub quiz_report: Option<QuizReport>,
    pub demos: DemoInputs,
}

impl LessonPage {
    pub fn new(lesson: &Lesson) -> Self {
        let drag_boards = lesson
            .drag
            .iter()
            .map(|d| (d.id.clone(), DragBoard::new(d)))
            .collect();
        let code_inputs = lesson
            .coding
            .iter()
            .map(|c| (c.id.clone(), c.starter.clone().unwrap_or_default()))
            .collect();
        Self {
            drag_boards,
            code_inputs,
            ..Self::default()
        }
    }
}

pub struct TutorApp {
    pub curriculum: Curriculum,
    pub tracker: LessonTracker<MemoryStore>,
    pub state: AppState,
    pub current_lesson: Option<String>,
    pub page: LessonPage,
    pub message: String,
    pub confirm_reset: bool,
}

impl TutorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, DataError> {
        let stored = cc
            .storage
            .and_then(|s| s.get_string(PROGRESS_KEY))
            .filter(|raw| !raw.is_empty());
        Self::with_store(MemoryStore::with_entry(stored))
    }

    pub fn with_store(store: MemoryStore) -> Result<Self, DataError> {
        let curriculum = read_curriculum_embedded()?;
        let order = LessonOrder::from_curriculum(&curriculum);
        Ok(Self {
            curriculum,
            tracker: LessonTracker::new(order, store),
            state: AppState::LessonMenu,
            current_lesson: None,
            page: LessonPage::default(),
            message: String::new(),
            confirm_reset: false,
        })
    }

    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.curriculum.lessons.iter().find(|l| l.id == id)
    }

    pub fn current(&self) -> Option<&Lesson> {
        self.current_lesson.as_deref().and_then(|id| self.lesson(id))
    }

    pub fn lesson_title(&self, id: &str) -> String {
        self.lesson(id)
            .map(|l| l.title.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

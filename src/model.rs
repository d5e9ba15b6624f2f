use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Curriculum {
    pub lessons: Vec<Lesson>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub theory: Vec<String>,
    #[serde(default)]
    pub demos: Vec<DemoKind>,
    #[serde(default)]
    pub drag: Vec<DragChallenge>,
    #[serde(default)]
    pub coding: Vec<CodingChallenge>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
}

impl Lesson {
    /// Cuántas prácticas tiene la lección (para el agregado de completado)
    pub fn inventory(&self) -> PracticeInventory {
        PracticeInventory {
            drag_total: self.drag.len(),
            coding_total: self.coding.len(),
            has_quiz: !self.quiz.is_empty(),
        }
    }

    pub fn has_practice(&self) -> bool {
        !(self.drag.is_empty() && self.coding.is_empty() && self.quiz.is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PracticeInventory {
    pub drag_total: usize,
    pub coding_total: usize,
    pub has_quiz: bool,
}

/// Cadena de prerrequisitos: el orden de inserción es el que manda.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonOrder {
    ids: Vec<String>,
}

impl LessonOrder {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_curriculum(curriculum: &Curriculum) -> Self {
        Self::new(curriculum.lessons.iter().map(|l| l.id.clone()))
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|l| l == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn first(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }

    pub fn predecessor(&self, id: &str) -> Option<&str> {
        let pos = self.position(id)?;
        pos.checked_sub(1)
            .and_then(|p| self.ids.get(p))
            .map(String::as_str)
    }

    pub fn successor(&self, id: &str) -> Option<&str> {
        let pos = self.position(id)?;
        self.ids.get(pos + 1).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

/// Ejercicio de código libre: se corrige por heurística, nunca se ejecuta.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CodingChallenge {
    pub id: String,
    pub title: String,
    pub prompt: String,
    #[serde(default)]
    pub starter: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub success: Option<String>,
    #[serde(default)]
    pub outputs: Vec<Requirement>,
    #[serde(default)]
    pub structure: Vec<Requirement>,
    #[serde(default)]
    pub syntax: SyntaxProfile,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Requirement {
    pub name: String,
    pub check: Check,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Check {
    /// Texto exacto dentro de comillas: `print("Zero")`
    Output { text: String },
    AnyOutput { options: Vec<String> },
    /// Algún literal entre comillas que mencione una de las palabras
    OutputMentions { words: Vec<String> },
    Keyword { word: String },
    AnyKeyword { words: Vec<String> },
    KeywordCount { word: String, min: usize },
    /// Substring fuera de cadenas y comentarios (números frontera, etc.)
    AnyLiteral { options: Vec<String> },
    Pattern { regex: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SyntaxProfile {
    pub openers: Vec<String>,
    pub alternatives: Vec<String>,
    pub block_delimiter: char,
    pub comment_prefix: char,
    pub min_indent: usize,
}

impl Default for SyntaxProfile {
    fn default() -> Self {
        Self {
            openers: vec!["if".into()],
            alternatives: vec!["elif".into(), "else".into()],
            block_delimiter: ':',
            comment_prefix: '#',
            min_indent: 2,
        }
    }
}

/// Rellenar huecos: `template` lleva un `___` por cada hueco.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DragChallenge {
    pub id: String,
    pub title: String,
    pub template: String,
    pub blanks: Vec<String>,
    pub pieces: Vec<String>,
}

impl DragChallenge {
    pub const BLANK_MARKER: &'static str = "___";

    /// Trozos de plantilla entre huecos (siempre blanks + 1)
    pub fn segments(&self) -> Vec<&str> {
        self.template.split(Self::BLANK_MARKER).collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    #[serde(default)]
    pub code: Option<String>,
    pub options: Vec<String>,
    pub answer: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DemoKind {
    Sign,
    LetterGrade,
    Ride,
    Weekday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    LessonMenu,
    Lesson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LessonTab {
    #[default]
    Theory,
    Demos,
    Practice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PracticeTab {
    #[default]
    DragDrop,
    Coding,
    Quiz,
}

//! Corrector heurístico: decide si un texto cumple un ejercicio sin ejecutarlo.

pub mod checks;
pub mod drag;
pub mod source;
pub mod syntax;

use crate::model::{CodingChallenge, Curriculum};
use serde::Serialize;
use source::Submission;

pub use drag::{DragBoard, DragOutcome, check_drag};

/// Veredicto de una entrega. Todo se deriva del texto; no hay estado oculto.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    pub is_correct: bool,
    pub has_required_outputs: bool,
    pub has_required_structure: bool,
    pub has_colons: bool,
    pub has_indentation: bool,
    /// Nombres de los requisitos que no se cumplen
    pub missing: Vec<String>,
}

impl GradeResult {
    /// Resultado para un ejercicio desconocido: todo a `false`.
    pub fn rejected() -> Self {
        Self::default()
    }
}

pub fn grade(spec: &CodingChallenge, code: &str) -> GradeResult {
    let sub = Submission::parse(code, spec.syntax.comment_prefix);

    let missing_outputs = checks::missing(&spec.outputs, &sub);
    let missing_structure = checks::missing(&spec.structure, &sub);
    let blocks = syntax::check_blocks(&sub, &spec.syntax);

    let has_required_outputs = missing_outputs.is_empty();
    let has_required_structure = missing_structure.is_empty();
    let is_correct = has_required_outputs
        && has_required_structure
        && blocks.has_colons
        && blocks.has_indentation;

    log::debug!(
        "graded {}: correct={is_correct} outputs={has_required_outputs} structure={has_required_structure} colons={} indent={}",
        spec.id,
        blocks.has_colons,
        blocks.has_indentation
    );

    GradeResult {
        is_correct,
        has_required_outputs,
        has_required_structure,
        has_colons: blocks.has_colons,
        has_indentation: blocks.has_indentation,
        missing: missing_outputs
            .into_iter()
            .chain(missing_structure)
            .map(String::from)
            .collect(),
    }
}

pub fn find_challenge<'a>(curriculum: &'a Curriculum, challenge_id: &str) -> Option<&'a CodingChallenge> {
    curriculum
        .lessons
        .iter()
        .flat_map(|l| &l.coding)
        .find(|c| c.id == challenge_id)
}

/// Punto de entrada por identificador. Un id desconocido es un error del
/// llamador: se registra y se devuelve un resultado incorrecto.
pub fn grade_challenge(curriculum: &Curriculum, challenge_id: &str, code: &str) -> GradeResult {
    match find_challenge(curriculum, challenge_id) {
        Some(spec) => grade(spec, code),
        None => {
            log::warn!("grade requested for unknown challenge {challenge_id:?}");
            GradeResult::rejected()
        }
    }
}

/// Texto pedagógico para mostrar tras corregir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub headline: String,
    pub details: Vec<String>,
}

pub fn feedback(spec: &CodingChallenge, result: &GradeResult) -> Feedback {
    if result.is_correct {
        return Feedback {
            headline: spec
                .success
                .clone()
                .unwrap_or_else(|| "🎉 Excellent! Your code does everything the challenge asks.".into()),
            details: Vec::new(),
        };
    }

    let mut details: Vec<String> = result
        .missing
        .iter()
        .map(|name| format!("Missing: {name}"))
        .collect();
    if !result.has_colons {
        details.push(format!(
            "Every `if`, `elif` and `else` line must end with a colon `{}`.",
            spec.syntax.block_delimiter
        ));
    }
    if !result.has_indentation {
        details.push(format!(
            "Indent the line after each colon by at least {} spaces.",
            spec.syntax.min_indent
        ));
    }

    Feedback {
        headline: "❌ Not quite! Make sure your code:".into(),
        details,
    }
}

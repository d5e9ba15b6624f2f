// src/data.rs

use crate::model::{Check, Curriculum, DragChallenge};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("curriculum YAML is malformed: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("curriculum has no lessons")]
    Empty,
    #[error("duplicate lesson id `{0}`")]
    DuplicateLesson(String),
    #[error("duplicate challenge id `{0}`")]
    DuplicateChallenge(String),
    #[error("challenge `{challenge}` has an invalid pattern: {source}")]
    Pattern {
        challenge: String,
        #[source]
        source: regex::Error,
    },
    #[error("drag challenge `{0}` does not match its blanks or pieces")]
    DragShape(String),
    #[error("quiz question `{0}` points at a missing option")]
    QuizAnswer(String),
}

/// Carga el temario desde el YAML embebido
pub fn read_curriculum_embedded() -> Result<Curriculum, DataError> {
    let file_content = include_str!("data/curriculum.yaml");
    parse_curriculum(file_content)
}

pub fn parse_curriculum(yaml: &str) -> Result<Curriculum, DataError> {
    let curriculum: Curriculum = serde_yaml::from_str(yaml)?;
    validate(&curriculum)?;
    log::debug!("curriculum loaded: {} lessons", curriculum.lessons.len());
    Ok(curriculum)
}

fn validate(curriculum: &Curriculum) -> Result<(), DataError> {
    if curriculum.lessons.is_empty() {
        return Err(DataError::Empty);
    }

    let mut lesson_ids = HashSet::new();
    let mut challenge_ids = HashSet::new();
    for lesson in &curriculum.lessons {
        if !lesson_ids.insert(lesson.id.as_str()) {
            return Err(DataError::DuplicateLesson(lesson.id.clone()));
        }

        let ids = lesson
            .drag
            .iter()
            .map(|d| &d.id)
            .chain(lesson.coding.iter().map(|c| &c.id))
            .chain(lesson.quiz.iter().map(|q| &q.id));
        for id in ids {
            if !challenge_ids.insert(id.as_str()) {
                return Err(DataError::DuplicateChallenge(id.clone()));
            }
        }

        for challenge in &lesson.coding {
            for req in challenge.outputs.iter().chain(&challenge.structure) {
                if let Check::Pattern { regex } = &req.check {
                    regex::Regex::new(regex).map_err(|source| DataError::Pattern {
                        challenge: challenge.id.clone(),
                        source,
                    })?;
                }
            }
        }

        for drag in &lesson.drag {
            if !drag_is_solvable(drag) {
                return Err(DataError::DragShape(drag.id.clone()));
            }
        }

        for q in &lesson.quiz {
            if q.answer >= q.options.len() {
                return Err(DataError::QuizAnswer(q.id.clone()));
            }
        }
    }
    Ok(())
}

/// Un hueco por marcador y piezas suficientes para la solución.
fn drag_is_solvable(drag: &DragChallenge) -> bool {
    if drag.segments().len() != drag.blanks.len() + 1 {
        return false;
    }
    let mut pool: Vec<&str> = drag.pieces.iter().map(String::as_str).collect();
    drag.blanks.iter().all(|blank| {
        match pool.iter().position(|p| *p == blank.as_str()) {
            Some(i) => {
                pool.swap_remove(i);
                true
            }
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge;
    use crate::model::LessonOrder;

    #[test]
    fn embedded_curriculum_loads() {
        let c = read_curriculum_embedded().expect("curriculum parses");
        assert_eq!(LessonOrder::from_curriculum(&c).len(), 22);
        let conditionals = c
            .lessons
            .iter()
            .find(|l| l.id == "conditionals")
            .expect("conditionals lesson");
        assert_eq!(conditionals.drag.len(), 4);
        assert_eq!(conditionals.coding.len(), 3);
        assert_eq!(conditionals.quiz.len(), 5);
    }

    #[test]
    fn shipped_solutions_pass() {
        let c = read_curriculum_embedded().expect("curriculum parses");
        let solutions = [
            (
                "code1",
                "x = int(input())\nif x > 0:\n    print(\"Positive\")\nelif x < 0:\n    print(\"Negative\")\nelse:\n    print(\"Zero\")",
            ),
            (
                "code2",
                "age = int(input())\nif age <= 12:\n    print(\"Child\")\nelif age <= 17:\n    print(\"Teenager\")\nelif age <= 64:\n    print(\"Adult\")\nelse:\n    print(\"Senior\")",
            ),
            (
                "code3",
                "if username == \"admin\":\n    if password == \"1234\":\n        print(\"Login successful!\")\n    else:\n        print(\"Wrong password\")\nelse:\n    print(\"User not found\")",
            ),
        ];
        for (id, code) in solutions {
            let r = judge::grade_challenge(&c, id, code);
            assert!(r.is_correct, "{id}: {r:?}");
        }
    }

    #[test]
    fn alternative_orderings_pass() {
        let c = read_curriculum_embedded().expect("curriculum parses");
        let zero_first = "if n == 0:\n    print('Zero')\nelif n > 0:\n    print('Positive')\nelse:\n    print('Negative')";
        assert!(judge::grade_challenge(&c, "code1", zero_first).is_correct);

        let seniors_first = "if age >= 65:\n    print(\"Senior\")\nelif age >= 18:\n    print(\"Adult\")\nelif age >= 13:\n    print(\"Teen\")\nelse:\n    print(\"Child\")";
        assert!(judge::grade_challenge(&c, "code2", seniors_first).is_correct);
    }

    #[test]
    fn flat_login_is_not_nested() {
        let c = read_curriculum_embedded().expect("curriculum parses");
        let flat = "if username == \"admin\" and password == \"1234\":\n    print(\"Welcome\")\nelse:\n    print(\"Access denied\")";
        let r = judge::grade_challenge(&c, "code3", flat);
        assert!(!r.is_correct);
        assert!(!r.has_required_structure);
    }

    #[test]
    fn login_without_success_message_is_rejected() {
        let c = read_curriculum_embedded().expect("curriculum parses");
        let only_failures = "if username == \"admin\":\n    if password == \"1234\":\n        print(\"Incorrect\")\n    else:\n        print(\"Incorrect\")\nelse:\n    print(\"Incorrect\")";
        let r = judge::grade_challenge(&c, "code3", only_failures);
        assert!(!r.is_correct);
        assert!(!r.has_required_outputs);
        assert!(r.missing.iter().any(|m| m == "a success message"));

        let login_failed = "if username == \"admin\":\n    if password == \"1234\":\n        print(\"Login failed\")\n    else:\n        print(\"Wrong password\")\nelse:\n    print(\"User not found\")";
        assert!(!judge::grade_challenge(&c, "code3", login_failed).is_correct);
    }

    #[test]
    fn docstring_before_solution_is_ignored() {
        let c = read_curriculum_embedded().expect("curriculum parses");
        let code = "\"\"\"\nif the number is positive say so\n\"\"\"\nx = int(input())\nif x > 0:\n    print(\"Positive\")\nelif x < 0:\n    print(\"Negative\")\nelse:\n    print(\"Zero\")";
        let r = judge::grade_challenge(&c, "code1", code);
        assert!(r.has_colons, "{r:?}");
        assert!(r.is_correct, "{r:?}");
    }

    #[test]
    fn shipped_drag_challenges_are_solvable() {
        let c = read_curriculum_embedded().expect("curriculum parses");
        for drag in c.lessons.iter().flat_map(|l| &l.drag) {
            let mut board = judge::DragBoard::new(drag);
            let mut used = vec![false; drag.pieces.len()];
            for (blank, expected) in drag.blanks.iter().enumerate() {
                let piece = drag
                    .pieces
                    .iter()
                    .enumerate()
                    .position(|(i, p)| !used[i] && p == expected)
                    .expect("piece available");
                used[piece] = true;
                assert!(board.place(blank, piece));
            }
            assert!(judge::check_drag(drag, &board).is_success(), "{}", drag.id);
        }
    }

    #[test]
    fn rejects_duplicate_lessons() {
        let yaml = "lessons:\n  - { id: a, title: A }\n  - { id: a, title: Again }\n";
        assert!(matches!(parse_curriculum(yaml), Err(DataError::DuplicateLesson(id)) if id == "a"));
    }

    #[test]
    fn rejects_bad_patterns_and_empty_files() {
        let yaml = r#"
lessons:
  - id: a
    title: A
    coding:
      - id: c1
        title: Broken
        prompt: ""
        structure:
          - name: broken
            check: { kind: pattern, regex: "(" }
"#;
        assert!(matches!(parse_curriculum(yaml), Err(DataError::Pattern { .. })));
        assert!(matches!(parse_curriculum("lessons: []"), Err(DataError::Empty)));
        assert!(matches!(parse_curriculum("lessons: ["), Err(DataError::Yaml(_))));
    }

    #[test]
    fn rejects_drag_without_enough_pieces() {
        let yaml = r#"
lessons:
  - id: a
    title: A
    drag:
      - id: d1
        title: Short
        template: "___ x:"
        blanks: [if]
        pieces: [elif]
"#;
        assert!(matches!(parse_curriculum(yaml), Err(DataError::DragShape(id)) if id == "d1"));
    }
}

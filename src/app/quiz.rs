use crate::model::QuizQuestion;
use std::collections::HashMap;

/// Fila del desglose tras enviar el quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRow {
    pub number: usize,
    pub correct: bool,
    pub chosen: Option<usize>,
    pub answer: usize,
}

impl QuizRow {
    pub fn label(&self) -> String {
        if self.correct {
            return format!("✓ Question {}: Correct", self.number);
        }
        let yours = self
            .chosen
            .map(option_letter)
            .unwrap_or_else(|| "No answer".into());
        format!(
            "✗ Question {}: Your: {} | Correct: {}",
            self.number,
            yours,
            option_letter(self.answer)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    pub score: usize,
    pub total: usize,
    pub rows: Vec<QuizRow>,
}

impl QuizReport {
    pub fn grade(questions: &[QuizQuestion], answers: &HashMap<String, usize>) -> Self {
        let rows: Vec<QuizRow> = questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let chosen = answers.get(&q.id).copied();
                QuizRow {
                    number: i + 1,
                    correct: chosen == Some(q.answer),
                    chosen,
                    answer: q.answer,
                }
            })
            .collect();
        let score = rows.iter().filter(|r| r.correct).count();
        log::debug!("quiz submitted: {score}/{}", rows.len());
        Self {
            score,
            total: rows.len(),
            rows,
        }
    }

    pub fn message(&self) -> &'static str {
        let ratio = if self.total == 0 {
            1.0
        } else {
            self.score as f32 / self.total as f32
        };
        if self.score == self.total {
            "🏆 Perfect Score! You're a Python master!"
        } else if ratio >= 0.8 {
            "🌟 Excellent! You understand this very well!"
        } else if ratio >= 0.6 {
            "👍 Good job! Review the incorrect answers above."
        } else if ratio >= 0.4 {
            "📚 Keep practicing! Go back and study the lessons."
        } else {
            "💪 Don't give up! Review each section and try again."
        }
    }

    pub fn is_correct(&self, number: usize) -> Option<bool> {
        self.rows.iter().find(|r| r.number == number).map(|r| r.correct)
    }
}

/// 0 → "A", 1 → "B"...
pub fn option_letter(index: usize) -> String {
    char::from_u32('A' as u32 + index as u32)
        .map(String::from)
        .unwrap_or_else(|| (index + 1).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, answer: usize) -> QuizQuestion {
        QuizQuestion {
            id: id.into(),
            prompt: "What does this print?".into(),
            code: None,
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            answer,
        }
    }

    fn questions() -> Vec<QuizQuestion> {
        (0..5).map(|i| question(&format!("q{i}"), i % 4)).collect()
    }

    #[test]
    fn counts_correct_answers_and_unanswered() {
        let qs = questions();
        let answers: HashMap<String, usize> =
            [("q0".to_string(), 0), ("q1".to_string(), 3), ("q2".to_string(), 2)].into();
        let report = QuizReport::grade(&qs, &answers);
        assert_eq!(report.score, 2);
        assert_eq!(report.total, 5);
        assert_eq!(report.is_correct(2), Some(false));
        assert_eq!(report.rows[1].label(), "✗ Question 2: Your: D | Correct: B");
        assert_eq!(report.rows[3].label(), "✗ Question 4: Your: No answer | Correct: D");
        assert_eq!(report.rows[0].label(), "✓ Question 1: Correct");
    }

    #[test]
    fn message_tiers() {
        let qs = questions();
        let all: HashMap<String, usize> = qs.iter().map(|q| (q.id.clone(), q.answer)).collect();
        assert!(QuizReport::grade(&qs, &all).message().starts_with("🏆"));

        let mut four = all.clone();
        four.remove("q4");
        assert!(QuizReport::grade(&qs, &four).message().starts_with("🌟"));

        let none = HashMap::new();
        assert!(QuizReport::grade(&qs, &none).message().starts_with("💪"));
    }

    #[test]
    fn letters() {
        assert_eq!(option_letter(0), "A");
        assert_eq!(option_letter(3), "D");
    }
}

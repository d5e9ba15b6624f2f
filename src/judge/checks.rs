use crate::judge::source::Submission;
use crate::model::{Check, Requirement};
use regex::{Regex, RegexBuilder};

/// Evalúa un requisito. Un patrón inválido cuenta como no cumplido.
pub fn passes(check: &Check, sub: &Submission) -> bool {
    match check {
        Check::Output { text } => sub.has_literal(text),
        Check::AnyOutput { options } => options.iter().any(|o| sub.has_literal(o)),
        Check::OutputMentions { words } => {
            let patterns: Vec<Regex> = words
                .iter()
                .filter(|w| !w.is_empty())
                .filter_map(|w| word_regex(w, false))
                .collect();
            sub.literals
                .iter()
                .any(|lit| patterns.iter().any(|re| re.is_match(lit)))
        }
        Check::Keyword { word } => keyword_count(&sub.code, word) > 0,
        Check::AnyKeyword { words } => words.iter().any(|w| keyword_count(&sub.code, w) > 0),
        Check::KeywordCount { word, min } => keyword_count(&sub.code, word) >= *min,
        Check::AnyLiteral { options } => options.iter().any(|o| sub.code.contains(o.as_str())),
        Check::Pattern { regex } => match Regex::new(regex) {
            Ok(re) => re.is_match(&sub.code),
            Err(err) => {
                log::warn!("invalid grading pattern {regex:?}: {err}");
                false
            }
        },
    }
}

/// Nombres de los requisitos que fallan, en el orden declarado.
pub fn missing<'a>(requirements: &'a [Requirement], sub: &Submission) -> Vec<&'a str> {
    requirements
        .iter()
        .filter(|r| !passes(&r.check, sub))
        .map(|r| r.name.as_str())
        .collect()
}

/// Ocurrencias de `word` como palabra completa, sin distinguir mayúsculas.
pub fn keyword_count(code: &str, word: &str) -> usize {
    word_regex(word, true)
        .map(|re| re.find_iter(code).count())
        .unwrap_or(0)
}

/// `word` al inicio de una palabra (`success` vale en "successful", `correct`
/// no vale en "Incorrect"); con `whole` también debe cerrar la palabra.
/// Los bordes que no son letra (emoji, signos) no llevan `\b`.
fn word_regex(word: &str, whole: bool) -> Option<Regex> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut pattern = String::new();
    if word.chars().next().is_some_and(is_word) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(word));
    if whole && word.chars().last().is_some_and(is_word) {
        pattern.push_str(r"\b");
    }
    RegexBuilder::new(&pattern).case_insensitive(true).build().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(code: &str) -> Submission {
        Submission::parse(code, '#')
    }

    #[test]
    fn output_requires_exact_quoted_text() {
        let s = sub("print(\"Positive\")\nPositive = 1");
        assert!(passes(&Check::Output { text: "Positive".into() }, &s));
        assert!(!passes(&Check::Output { text: "positive".into() }, &s));
        assert!(!passes(&Check::Output { text: "Negative".into() }, &sub("Negative = -1")));
    }

    #[test]
    fn output_in_single_quotes_is_accepted() {
        let s = sub("print('Zero')");
        assert!(passes(&Check::Output { text: "Zero".into() }, &s));
    }

    #[test]
    fn output_in_comment_does_not_count() {
        let s = sub("# print(\"Zero\")");
        assert!(!passes(&Check::Output { text: "Zero".into() }, &s));
    }

    #[test]
    fn mentions_ignore_case() {
        let s = sub("print(\"Access GRANTED\")");
        let check = Check::OutputMentions {
            words: vec!["granted".into(), "welcome".into()],
        };
        assert!(passes(&check, &s));
    }

    #[test]
    fn mentions_match_at_word_start_only() {
        let success = Check::OutputMentions {
            words: vec!["success".into(), "correct".into(), "✅".into()],
        };
        assert!(!passes(&success, &sub("print(\"Incorrect\")")));
        assert!(passes(&success, &sub("print(\"Login successful!\")")));
        assert!(passes(&success, &sub("print(\"Correct password\")")));
        assert!(passes(&success, &sub("print(\"Access✅\")")));
    }

    #[test]
    fn keywords_are_whole_words_outside_strings() {
        let s = sub("elif x:\n    print(\"if only\")");
        assert_eq!(keyword_count(&s.code, "if"), 0);
        assert_eq!(keyword_count(&s.code, "elif"), 1);
        assert_eq!(keyword_count("IF x:\n  if y:", "if"), 2);
    }

    #[test]
    fn any_literal_matches_boundary_numbers_outside_strings() {
        let check = Check::AnyLiteral {
            options: vec!["12".into(), "13".into()],
        };
        assert!(passes(&check, &sub("if age <= 12:")));
        assert!(passes(&check, &sub("if age < 13:")));
        assert!(!passes(&check, &sub("print(\"12\")")));
    }

    #[test]
    fn invalid_pattern_fails_closed() {
        let check = Check::Pattern { regex: "(".into() };
        assert!(!passes(&check, &sub("anything")));
    }

    #[test]
    fn missing_lists_failed_names_in_order() {
        let reqs = vec![
            Requirement {
                name: "uses if".into(),
                check: Check::Keyword { word: "if".into() },
            },
            Requirement {
                name: "uses elif".into(),
                check: Check::Keyword { word: "elif".into() },
            },
            Requirement {
                name: "uses else".into(),
                check: Check::Keyword { word: "else".into() },
            },
        ];
        assert_eq!(missing(&reqs, &sub("if x:\n  pass")), vec!["uses elif", "uses else"]);
    }
}

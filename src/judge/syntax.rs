use crate::judge::source::{Submission, leading_whitespace, starts_with_keyword};
use crate::model::SyntaxProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxReport {
    pub has_colons: bool,
    pub has_indentation: bool,
}

fn opens_block(line: &str, profile: &SyntaxProfile) -> bool {
    profile
        .openers
        .iter()
        .chain(profile.alternatives.iter())
        .any(|kw| starts_with_keyword(line, kw))
}

fn is_alternative(line: &str, profile: &SyntaxProfile) -> bool {
    profile
        .alternatives
        .iter()
        .any(|kw| starts_with_keyword(line, kw))
}

/// Revisa `:` al abrir bloque y la sangría de la línea siguiente.
///
/// Sin ninguna condicional no hay `:` que valga: `has_colons` es `false`.
pub fn check_blocks(sub: &Submission, profile: &SyntaxProfile) -> SyntaxReport {
    let lines: Vec<&str> = sub.code_lines().collect();
    let mut found = false;
    let mut has_colons = true;
    let mut has_indentation = true;

    for (i, line) in lines.iter().enumerate() {
        let folded = line.trim().to_lowercase();
        if !opens_block(&folded, profile) {
            continue;
        }
        found = true;

        if !folded.ends_with(profile.block_delimiter) {
            has_colons = false;
            continue;
        }

        match lines.get(i + 1) {
            Some(next) => {
                let next_folded = next.trim().to_lowercase();
                if !is_alternative(&next_folded, profile)
                    && leading_whitespace(next) < profile.min_indent
                {
                    has_indentation = false;
                }
            }
            // bloque abierto sin cuerpo
            None => has_indentation = false,
        }
    }

    SyntaxReport {
        has_colons: found && has_colons,
        has_indentation,
    }
}

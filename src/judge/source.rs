/// Vista preprocesada de una entrega.
///
/// - `code`: el texto sin comentarios y con el contenido de las cadenas vaciado
///   (se conservan las comillas y los saltos de línea), así las palabras clave
///   dentro de un `print("if ...")`, de un `"""..."""` o de un comentario no
///   cuentan.
/// - `literals`: el contenido de cada literal entre comillas, en orden.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub code: String,
    pub literals: Vec<String>,
}

impl Submission {
    pub fn parse(input: &str, comment_prefix: char) -> Self {
        let mut scanner = Scanner::new(input);
        let mut code = String::with_capacity(input.len());
        let mut literals = Vec::new();

        while let Some(ch) = scanner.peek() {
            if ch == '\r' {
                scanner.bump();
            } else if ch == comment_prefix {
                // comentario hasta el final de la línea
                while scanner.peek().is_some_and(|c| c != '\n') {
                    scanner.bump();
                }
            } else if ch == '"' || ch == '\'' {
                let width = if scanner.at_triple(ch) { 3 } else { 1 };
                for _ in 0..width {
                    scanner.bump();
                    code.push(ch);
                }
                let (body, closed) = scanner.string_body(ch, width == 3, &mut code);
                literals.push(body);
                if closed {
                    for _ in 0..width {
                        code.push(ch);
                    }
                }
            } else {
                scanner.bump();
                code.push(ch);
            }
        }
        if !code.is_empty() && !code.ends_with('\n') {
            code.push('\n');
        }

        Self { code, literals }
    }

    /// Líneas con contenido (las de solo comentario quedan vacías y se saltan)
    pub fn code_lines(&self) -> impl Iterator<Item = &str> {
        self.code.lines().filter(|l| !l.trim().is_empty())
    }

    pub fn has_literal(&self, text: &str) -> bool {
        self.literals.iter().any(|l| l == text)
    }
}

struct Scanner {
    chars: Vec<char>,
    idx: usize,
}

impl Scanner {
    fn new(src: &str) -> Self {
        Self {
            chars: src.chars().collect(),
            idx: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.idx).copied()
    }

    fn bump(&mut self) {
        if self.idx < self.chars.len() {
            self.idx += 1;
        }
    }

    fn at_triple(&self, quote: char) -> bool {
        self.chars
            .get(self.idx..self.idx + 3)
            .is_some_and(|s| s.iter().all(|&c| c == quote))
    }

    /// Consume el cuerpo de una cadena ya abierta, cierre incluido.
    /// Las simples terminan con la línea; las triples la cruzan y copian sus
    /// saltos a `code` para no mover la numeración. Devuelve el contenido y
    /// si llegó a cerrarse.
    fn string_body(&mut self, quote: char, triple: bool, code: &mut String) -> (String, bool) {
        let mut body = String::new();
        while let Some(ch) = self.peek() {
            if ch == '\\' {
                // escape: el siguiente carácter es parte del literal
                self.bump();
                match self.peek() {
                    Some('\n') | None => {}
                    Some(next) => {
                        body.push(next);
                        self.bump();
                    }
                }
            } else if ch == '\n' {
                if !triple {
                    return (body, false);
                }
                body.push(ch);
                code.push(ch);
                self.bump();
            } else if ch == quote && (!triple || self.at_triple(quote)) {
                let width = if triple { 3 } else { 1 };
                for _ in 0..width {
                    self.bump();
                }
                return (body, true);
            } else {
                if ch != '\r' {
                    body.push(ch);
                }
                self.bump();
            }
        }
        (body, false)
    }
}

/// Anchura de la sangría inicial; un tabulador cuenta como 4.
pub fn leading_whitespace(line: &str) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}

/// `true` si `line` empieza por la palabra `keyword` completa (`else:` sí,
/// `elsewhere` no).
pub fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    match line.strip_prefix(keyword) {
        Some(rest) => rest
            .chars()
            .next()
            .map(|c| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(true),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_comments_and_collects_literals() {
        let sub = Submission::parse("x = 1  # if here\nprint(\"if: yes\") # else", '#');
        assert_eq!(sub.literals, vec!["if: yes".to_string()]);
        assert!(!sub.code.contains("if"));
        assert!(!sub.code.contains("else"));
        assert!(sub.code.contains("print(\"\")"));
    }

    #[test]
    fn hash_inside_string_is_not_a_comment() {
        let sub = Submission::parse("print('#1 fan')", '#');
        assert_eq!(sub.literals, vec!["#1 fan".to_string()]);
        assert!(sub.code.trim_end().ends_with(')'));
    }

    #[test]
    fn escaped_quotes_stay_inside_literal() {
        let sub = Submission::parse(r#"print("say \"hi\"")"#, '#');
        assert_eq!(sub.literals, vec![r#"say "hi""#.to_string()]);
    }

    #[test]
    fn unterminated_string_ends_at_line_end() {
        let sub = Submission::parse("print(\"oops\nif x:", '#');
        assert_eq!(sub.literals, vec!["oops".to_string()]);
        assert!(sub.code.contains("if x:"));
    }

    #[test]
    fn triple_quoted_block_spans_lines() {
        let sub = Submission::parse("\"\"\"\nif the number is positive\n\"\"\"\nx = 1", '#');
        assert_eq!(sub.literals, vec!["\nif the number is positive\n".to_string()]);
        assert!(!sub.code.contains("if"));
        // mismas líneas que la entrada
        assert_eq!(sub.code.lines().count(), 4);
        assert!(sub.code.contains("x = 1"));
    }

    #[test]
    fn empty_and_triple_literals_are_told_apart() {
        let sub = Submission::parse("a = \"\"\nb = '''x'''\nc = \"\"\"\"\"\"", '#');
        assert_eq!(sub.literals, vec![String::new(), "x".to_string(), String::new()]);
    }

    #[test]
    fn keyword_prefix_requires_word_boundary() {
        assert!(starts_with_keyword("else:", "else"));
        assert!(starts_with_keyword("else", "else"));
        assert!(starts_with_keyword("if(x > 0):", "if"));
        assert!(!starts_with_keyword("elsewhere = 1", "else"));
        assert!(!starts_with_keyword("iffy = 2", "if"));
    }
}

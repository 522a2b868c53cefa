use lazy_static::lazy_static;
use regex::Regex;

use crate::Span;

use super::tokens::Lexeme;

lazy_static! {
    // A lone parenthesis, or a run of anything that is neither whitespace nor a parenthesis.
    static ref TOKEN_PATTERN: Regex = Regex::new(r"^\s*([()]|[^\s()]+)").unwrap();
}

/// Splits the next token off `remaining`.
///
/// Returns the token text and the unconsumed rest of the input, or `None`
/// once only whitespace is left.
pub fn next_token(remaining: &str) -> Option<(&str, &str)> {
    let token = TOKEN_PATTERN.captures(remaining)?.get(1)?;
    Some((token.as_str(), &remaining[token.end()..]))
}

/// Iterator over the lexemes of an expression.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer { source, pos: 0 }
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remainder();
        let (text, rest) = next_token(remaining)?;

        let end = self.source.len() - rest.len();
        let start = end - text.len();
        self.pos = end;

        Some(Lexeme {
            text,
            span: Span { start, end },
        })
    }
}

use std::fmt::Display;

use crate::{grammar::grammar::Grammar, Span};

/// A classified token.
///
/// The set of kinds is closed; anything else is reported as unrecognised
/// by the parser.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Token<'a> {
    Operand(&'a str),
    Operator(&'a str),
    OpenParen,
    CloseParen,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Operand(value) | Token::Operator(value) => write!(f, "{}", value),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
        }
    }
}

/// Raw token text and where it sits in the expression.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Lexeme<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Lexeme<'a> {
    /// Classifies the lexeme against a grammar.
    ///
    /// Operators win over operands, so a grammar may use a symbol such as
    /// `-` that the operand recognizer would also accept as a sign.
    pub fn classify(&self, grammar: &Grammar) -> Option<Token<'a>> {
        match self.text {
            "(" => Some(Token::OpenParen),
            ")" => Some(Token::CloseParen),
            text if grammar.is_operator(text) => Some(Token::Operator(text)),
            text if grammar.is_operand(text) => Some(Token::Operand(text)),
            _ => None,
        }
    }
}

//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Whitespace handling
//! - Parentheses adjacent to other tokens
//! - Token spans
//! - Classification of operators, operands and unrecognised text

use crate::{grammar::grammar::Grammar, Span};

use super::{
    lexer::{next_token, Lexer},
    tokens::Token,
};

fn texts(source: &str) -> Vec<&str> {
    Lexer::new(source).map(|lexeme| lexeme.text).collect()
}

fn classify<'a>(source: &'a str, grammar: &Grammar) -> Vec<Option<Token<'a>>> {
    Lexer::new(source)
        .map(|lexeme| lexeme.classify(grammar))
        .collect()
}

#[test]
fn test_next_token() {
    assert_eq!(next_token("3 - 4"), Some(("3", " - 4")));
    assert_eq!(next_token("  - 4"), Some(("-", " 4")));
    assert_eq!(next_token("(3)"), Some(("(", "3)")));
    assert_eq!(next_token("3)"), Some(("3", ")")));
    assert_eq!(next_token("   "), None);
    assert_eq!(next_token(""), None);
}

#[test]
fn test_tokenize_whitespace() {
    assert_eq!(texts("3 - 4 + 5"), vec!["3", "-", "4", "+", "5"]);
    assert_eq!(texts("  3\t-\n4   "), vec!["3", "-", "4"]);
    assert_eq!(texts("3\u{00a0}*\u{2003}4"), vec!["3", "*", "4"]);
}

#[test]
fn test_tokenize_parentheses_without_whitespace() {
    assert_eq!(
        texts("((2 + 3)*4)"),
        vec!["(", "(", "2", "+", "3", ")", "*4", ")"]
    );
    assert_eq!(texts("(7)"), vec!["(", "7", ")"]);
}

#[test]
fn test_operators_need_whitespace() {
    assert_eq!(texts("2+3"), vec!["2+3"]);
}

#[test]
fn test_tokenize_spans() {
    let spans = Lexer::new(" 12 + (3)")
        .map(|lexeme| lexeme.span)
        .collect::<Vec<_>>();

    assert_eq!(
        spans,
        vec![
            Span { start: 1, end: 3 },
            Span { start: 4, end: 5 },
            Span { start: 6, end: 7 },
            Span { start: 7, end: 8 },
            Span { start: 8, end: 9 },
        ]
    );
}

#[test]
fn test_tokenize_spans_multibyte() {
    let lexemes = Lexer::new("½ + ¾").collect::<Vec<_>>();

    assert_eq!(lexemes[2].text, "¾");
    assert_eq!(lexemes[2].span, Span { start: 5, end: 7 });
}

#[test]
fn test_lexer_trailing_whitespace() {
    let mut lexer = Lexer::new("3   ");

    assert_eq!(lexer.next().map(|lexeme| lexeme.text), Some("3"));
    assert_eq!(lexer.remainder(), "   ");
    assert_eq!(lexer.next(), None);
}

#[test]
fn test_classify_tokens() {
    let grammar = Grammar::default();
    assert_eq!(
        classify("( 3.5 ^ -2 ) % x", &grammar),
        vec![
            Some(Token::OpenParen),
            Some(Token::Operand("3.5")),
            Some(Token::Operator("^")),
            Some(Token::Operand("-2")),
            Some(Token::CloseParen),
            Some(Token::Operator("%")),
            None,
        ]
    );
}

#[test]
fn test_operator_wins_over_operand() {
    let grammar = Grammar::default().with_operand_recognizer(|_: &str| true);
    let tokens = classify("a - b", &grammar);

    assert_eq!(tokens[1], Some(Token::Operator("-")));
    assert_eq!(tokens[2], Some(Token::Operand("b")));
}

#[test]
fn test_token_display() {
    assert_eq!(Token::Operand("3").to_string(), "3");
    assert_eq!(Token::Operator("*").to_string(), "*");
    assert_eq!(Token::OpenParen.to_string(), "(");
    assert_eq!(Token::CloseParen.to_string(), ")");
}

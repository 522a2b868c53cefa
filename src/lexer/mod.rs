//! Lexical analysis module for the expression parser.
//!
//! This module contains the tokenizer that splits an infix expression
//! into lexemes and classifies them. It handles:
//!
//! - Whitespace-separated operator and operand tokens
//! - Parentheses, which need no surrounding whitespace
//! - Classification against a grammar's operators and operand recognizer
//! - Byte spans for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

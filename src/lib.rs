#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod grammar;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use ast::ast::{Ast, Traversal};
pub use grammar::grammar::{Associativity, Grammar};
pub use parser::parser::{parse, ExpressionParser};

/// Byte range of a token within the parsed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

pub fn display_error(error: &Error) -> String {
    /*
        Error: UnrecognisedToken (`x` is neither ...)
          |
        1 | 3 + x
          |     ^
    */

    let expression = error.get_expression();
    let span = error.get_span();
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    let padding = 3;
    output.push_str(&format!("{:>padding$}\n", "|"));
    output.push_str(&format!("1 | {}\n", expression));

    let offset = expression
        .get(..span.start)
        .map(|before| before.chars().count())
        .unwrap_or_default();
    let width = expression
        .get(span.start..span.end)
        .map(|token| token.chars().count())
        .unwrap_or_default()
        .max(1);

    output.push_str(&format!(
        "{:>padding$} {}{}\n",
        "|",
        " ".repeat(offset),
        "^".repeat(width)
    ));

    output
}

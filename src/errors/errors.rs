use std::fmt::Display;

use thiserror::Error;

use crate::Span;

/// A failed parse.
///
/// Wraps the specific cause together with the expression that was being
/// parsed and the span of the token that triggered the failure.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("unable to parse '{expression}': {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    expression: String,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, expression: &str, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            expression: expression.to_string(),
            span,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_expression(&self) -> &str {
        &self.expression
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    /// True for every failure caused by a wrong operand/operator count.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::MalformedExpression { .. } | ErrorImpl::MissingOperand { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnbalancedParentheses { .. } => "UnbalancedParentheses",
            ErrorImpl::MalformedExpression { .. } => "MalformedExpression",
            ErrorImpl::MissingOperand { .. } => "MissingOperand",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } => ErrorTip::Suggestion(format!(
                "`{}` is neither an operator nor an operand, is it separated by whitespace?",
                token
            )),
            ErrorImpl::UnbalancedParentheses { symbol } => {
                ErrorTip::Suggestion(format!("`{}` has no matching parenthesis", symbol))
            }
            ErrorImpl::MalformedExpression { operands: 0 } => {
                ErrorTip::Suggestion(String::from("The expression contains no operands"))
            }
            ErrorImpl::MalformedExpression { operands } => ErrorTip::Suggestion(format!(
                "{} operands are left without an operator joining them",
                operands
            )),
            ErrorImpl::MissingOperand { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("cannot parse token {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unbalanced parentheses at {symbol:?}")]
    UnbalancedParentheses { symbol: String },
    #[error("malformed expression: expected exactly one tree, found {operands}")]
    MalformedExpression { operands: usize },
    #[error("malformed expression: operator {operator:?} is missing an operand")]
    MissingOperand { operator: String },
}

/// Rejected grammar table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("operator {operator:?} has no precedence")]
    MissingPrecedence { operator: String },
    #[error("{symbol:?} cannot be used as an operator symbol")]
    InvalidSymbol { symbol: String },
}

/// Rejected tree node construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("node {value:?} must have either both children or neither")]
    MissingChild { value: String },
}

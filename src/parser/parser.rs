//! Shunting-yard tree builder.
//!
//! The parser walks the token stream once, keeping a stack of pending
//! operators (and open parenthesis markers) next to a stack of finished
//! subtrees. Whenever an operator is resolved it is reduced: the two most
//! recent subtrees become its children and the new node goes back on the
//! subtree stack.

use log::{debug, trace};

use crate::{
    ast::ast::Ast,
    errors::errors::{Error, ErrorImpl},
    grammar::grammar::{Associativity, Grammar},
    lexer::{lexer::Lexer, tokens::Token},
    Span,
};

/// Entry on the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending<'a> {
    OpenParen(Span),
    Operator(&'a str, Span),
}

/// Working state of one parse call.
struct ParseState<'a> {
    operators: Vec<Pending<'a>>,
    operands: Vec<Ast>,
}

impl<'a> ParseState<'a> {
    fn new() -> Self {
        ParseState {
            operators: vec![],
            operands: vec![],
        }
    }

    /// Pops two subtrees and joins them under `operator`.
    fn reduce(&mut self, operator: &str) -> Result<(), ErrorImpl> {
        let right = self.operands.pop();
        let left = self.operands.pop();

        match (left, right) {
            (Some(left), Some(right)) => {
                debug!("reducing {} {} {}", left.value(), operator, right.value());
                self.operands.push(Ast::node(operator, left, right));
                Ok(())
            }
            _ => Err(ErrorImpl::MissingOperand {
                operator: operator.to_string(),
            }),
        }
    }

    /// Reduces stacked operators down to the nearest open parenthesis.
    ///
    /// Returns the span of that parenthesis after popping it, or `None`
    /// if the stack ran out first.
    fn reduce_group(&mut self) -> Result<Option<Span>, (ErrorImpl, Span)> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::OpenParen(span) => return Ok(Some(span)),
                Pending::Operator(operator, span) => {
                    self.reduce(operator).map_err(|error| (error, span))?
                }
            }
        }

        Ok(None)
    }
}

/// Parser for infix expressions under a fixed grammar.
#[derive(Debug, Clone, Default)]
pub struct ExpressionParser {
    grammar: Grammar,
}

impl ExpressionParser {
    pub fn new(grammar: Grammar) -> Self {
        ExpressionParser { grammar }
    }

    /// Parses an infix expression into a tree.
    ///
    /// Operands and operators must be separated by whitespace; parentheses
    /// need not be.
    pub fn parse(&self, expression: &str) -> Result<Ast, Error> {
        let error = |error_impl: ErrorImpl, span: Span| Error::new(error_impl, expression, span);
        let mut state = ParseState::new();

        debug!("parsing {:?}", expression);

        for lexeme in Lexer::new(expression) {
            let Some(token) = lexeme.classify(&self.grammar) else {
                return Err(error(
                    ErrorImpl::UnrecognisedToken {
                        token: lexeme.text.to_string(),
                    },
                    lexeme.span,
                ));
            };

            trace!("token {:?} at {:?}", token, lexeme.span);

            match token {
                Token::OpenParen => state.operators.push(Pending::OpenParen(lexeme.span)),
                Token::Operand(value) => state.operands.push(Ast::leaf(value)),
                Token::Operator(operator) => {
                    while let Some(&Pending::Operator(top, span)) = state.operators.last() {
                        if !self.reduces_before(top, operator) {
                            break;
                        }
                        state.operators.pop();
                        state.reduce(top).map_err(|error_impl| error(error_impl, span))?;
                    }
                    state.operators.push(Pending::Operator(operator, lexeme.span));
                }
                Token::CloseParen => match state.reduce_group() {
                    Ok(Some(_)) => {}
                    Ok(None) => {
                        return Err(error(
                            ErrorImpl::UnbalancedParentheses {
                                symbol: String::from(")"),
                            },
                            lexeme.span,
                        ))
                    }
                    Err((error_impl, span)) => return Err(error(error_impl, span)),
                },
            }
        }

        // End of input closes the implicit outer group.
        match state.reduce_group() {
            Ok(None) => {}
            Ok(Some(span)) => {
                return Err(error(
                    ErrorImpl::UnbalancedParentheses {
                        symbol: String::from("("),
                    },
                    span,
                ))
            }
            Err((error_impl, span)) => return Err(error(error_impl, span)),
        }

        let whole = Span {
            start: 0,
            end: expression.len(),
        };
        let root = state.operands.pop();

        match root {
            Some(root) if state.operands.is_empty() => {
                debug!("parsed {:?} into {} nodes", expression, root.node_count());
                Ok(root)
            }
            root => Err(error(
                ErrorImpl::MalformedExpression {
                    operands: state.operands.len() + usize::from(root.is_some()),
                },
                whole,
            )),
        }
    }

    /// Whether the stacked operator `top` must be reduced before `incoming`
    /// is pushed.
    fn reduces_before(&self, top: &str, incoming: &str) -> bool {
        let top_precedence = self.grammar.precedence(top);
        let incoming_precedence = self.grammar.precedence(incoming);

        match self.grammar.associativity(incoming) {
            Some(Associativity::Right) => top_precedence > incoming_precedence,
            _ => top_precedence >= incoming_precedence,
        }
    }
}

/// Parses an expression with the default arithmetic grammar.
pub fn parse(expression: &str) -> Result<Ast, Error> {
    ExpressionParser::default().parse(expression)
}

//! Grammar table for the expression parser.
//!
//! A grammar names the operator symbols the tokenizer recognises, their
//! precedence rank and associativity, and the predicate used to decide
//! whether any other token is an operand.

pub mod grammar;
pub mod operand;

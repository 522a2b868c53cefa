//! Parser module for building the expression tree.
//!
//! This module contains the shunting-yard parser that turns a classified
//! token stream into a binary expression tree. It handles:
//!
//! - Operator precedence and per-operator associativity
//! - Parenthesised groups, nested to any depth
//! - Detection of unrecognised tokens, unbalanced parentheses and
//!   operator/operand count mismatches
//!
//! Precedence decisions come from the `Grammar` the parser was built with;
//! parsing never touches global state.

pub mod parser;

//! Error types and error handling for the parser.
//!
//! This module defines the error types produced while building a grammar,
//! constructing tree nodes and parsing expressions. It includes:
//!
//! - The parse error carrying the failing expression and token span
//! - Specific error variants for each way an expression can be malformed
//! - Error tips and caret diagnostics for terminal output

pub mod errors;

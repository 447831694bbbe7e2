//! Parser infrastructure for patterns.
//!
//! # Architecture
//!
//! Patterns are lexed into span-based tokens, then a recursive-descent parser
//! builds an [`Expr`] tree. Precedence, lowest to highest:
//!
//! ```text
//! expression := term ('|' term)*
//! term       := factor+
//! factor     := atom ('*' | '+' | '?')?
//! atom       := literal | '.' | '\' any | '(' expression ')'
//! ```
//!
//! Parsing is fail-fast: the first syntax error aborts with a [`PatternError`].
//!
//! # Recursion Limits
//!
//! Group nesting is capped at [`MAX_NESTING`] so hostile input cannot
//! exhaust the stack during parsing or construction.

mod ast;
mod core;
mod grammar;
pub mod lexer;

#[cfg(test)]
mod grammar_tests;

pub use ast::{Expr, Quantifier, Span};
pub use self::core::MAX_NESTING;

use crate::error::PatternError;

/// Parse a pattern into its expression tree.
pub fn parse(pattern: &str) -> Result<Expr, PatternError> {
    let tokens = lexer::lex(pattern)?;
    self::core::Parser::new(pattern, tokens).parse()
}

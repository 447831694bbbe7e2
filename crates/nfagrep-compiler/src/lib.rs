//! nfagrep compiler: pattern parser and Thompson NFA construction.
//!
//! This crate provides the compilation pipeline for patterns:
//! - `parser` - lexer, recursive-descent parser, and AST
//! - `compile` - fragment-based Thompson construction into a state table
//! - `error` - pattern errors and snippet rendering

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod error;
pub mod parser;

pub use error::{ErrorPrinter, PatternError, PatternErrorKind, RelatedInfo};
pub use parser::{Expr, Quantifier, Span, parse};

use nfagrep_table::StateTable;

/// Compile a pattern into a finalized state table.
///
/// Either the whole pattern compiles or nothing is produced.
pub fn compile(pattern: &str) -> Result<StateTable, PatternError> {
    let expr = parse(pattern)?;
    let table = compile::Compiler::compile(&expr);
    log::debug!("compiled {:?} into {} states", pattern, table.len());
    Ok(table)
}

#[cfg(test)]
mod lib_tests;

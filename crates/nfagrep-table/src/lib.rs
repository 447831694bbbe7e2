#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! State table model and persisted text format for nfagrep automata.
//!
//! This crate contains:
//! - The flat, id-indexed state table shared by the compiler and the matcher
//! - The line-oriented text format used between the two stages
//! - A human-readable dump and structural equivalence checks

pub mod colors;
pub mod dump;
pub mod format;

mod error;
mod state;
mod table;

#[cfg(test)]
mod dump_tests;

pub use colors::Colors;
pub use dump::dump;
pub use error::TableError;
pub use format::{parse_table, read_table, write_table};
pub use state::{BRANCH_TAG, FINAL_ID, Next, State, StateId, StateKind, WILDCARD_TAG};
pub use table::StateTable;

//! Errors raised while building or loading a state table.

use std::io;

use crate::state::{Next, StateId};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("automaton has no states")]
    Empty,

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("record on line {line} declares state {found}, expected state {expected}")]
    OutOfOrder {
        line: usize,
        expected: u32,
        found: u32,
    },

    #[error("state {state} points at {target}, which does not exist")]
    DanglingSuccessor { state: StateId, target: Next },

    #[error("state {state} consumes a character but has two different successors")]
    UnequalSuccessors { state: StateId },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl TableError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use nfagrep_table::{StateTable, TableError};

/// The builder only references ids it has allocated.
pub(super) fn ensure_well_formed(result: Result<StateTable, TableError>) -> StateTable {
    result.unwrap_or_else(|err| panic!("Builder: produced an invalid table ({err})"))
}

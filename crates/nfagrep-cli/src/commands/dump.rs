use std::path::PathBuf;

use nfagrep_compiler::compile;
use nfagrep_table::{Colors, StateTable, dump};

use super::table_source::load_table;
use super::{CliError, fail};

pub struct DumpArgs {
    pub pattern: Option<String>,
    pub table: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let table = resolve_table(&args).unwrap_or_else(|e| fail(e));
    print!("{}", dump(&table, Colors::new(args.color)));
}

/// A pattern is compiled; otherwise the table comes from `--table` or stdin.
fn resolve_table(args: &DumpArgs) -> Result<StateTable, CliError> {
    match &args.pattern {
        Some(pattern) => Ok(compile(pattern)?),
        None => load_table(args.table.as_deref()),
    }
}

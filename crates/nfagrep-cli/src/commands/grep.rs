use std::io::{self, BufWriter};
use std::path::PathBuf;

use nfagrep_compiler::compile;

use super::output::OutputOptions;
use super::search::{exit_with_stats, search_file};
use super::{CliError, fail};

pub struct GrepArgs {
    pub pattern: String,
    pub file: PathBuf,
    pub output: OutputOptions,
}

pub fn run(args: GrepArgs) {
    let table = compile(&args.pattern).unwrap_or_else(|e| fail(CliError::from(e)));

    let stdout = BufWriter::new(io::stdout().lock());
    let stats = search_file(&table, &args.file, &args.output, stdout, io::stderr())
        .unwrap_or_else(|e| fail(e));
    exit_with_stats(stats);
}

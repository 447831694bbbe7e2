use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use nfagrep_table::StateTable;
use nfagrep_vm::{SearchError, SearchStats, Searcher};

use super::output::{MatchPrinter, OutputOptions};
use super::table_source::load_table;
use super::{CliError, fail};

pub struct SearchArgs {
    pub file: PathBuf,
    pub table: Option<PathBuf>,
    pub output: OutputOptions,
}

pub fn run(args: SearchArgs) {
    // The table must load completely before any line is read.
    let table = load_table(args.table.as_deref()).unwrap_or_else(|e| fail(e));
    log::debug!("loaded table with {} states", table.len());

    let stdout = BufWriter::new(io::stdout().lock());
    let stats = search_file(&table, &args.file, &args.output, stdout, io::stderr())
        .unwrap_or_else(|e| fail(e));
    exit_with_stats(stats);
}

/// Print every line of `path` that `table` matches to `out`, and a warning
/// for every skipped line to `diagnostics`.
pub fn search_file(
    table: &StateTable,
    path: &Path,
    options: &OutputOptions,
    out: impl Write,
    diagnostics: impl Write,
) -> Result<SearchStats, CliError> {
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut printer = MatchPrinter::new(out, diagnostics, options);
    let stats = Searcher::builder()
        .max_count(options.max_count)
        .build(table)
        .search(BufReader::new(file), &mut printer)?;
    printer.finish().map_err(SearchError::Sink)?;

    Ok(stats)
}

/// Exit 0 when something matched, 1 otherwise.
pub fn exit_with_stats(stats: SearchStats) {
    if stats.skipped > 0 {
        log::info!("{} lines were not valid UTF-8 and were skipped", stats.skipped);
    }
    if !stats.any_matched() {
        std::process::exit(1);
    }
}

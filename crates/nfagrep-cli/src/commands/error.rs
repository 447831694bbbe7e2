use std::io;
use std::path::PathBuf;

use nfagrep_compiler::PatternError;
use nfagrep_table::TableError;
use nfagrep_vm::SearchError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("invalid state table: {0}")]
    Table(#[from] TableError),

    #[error("failed to open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl CliError {
    /// Pattern errors share the "no match" code; everything else is fatal.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Pattern(_) => 1,
            CliError::Table(_) | CliError::Open { .. } | CliError::Search(_) => 2,
        }
    }
}

/// Report `err` on stderr and exit.
pub fn fail(err: CliError) -> ! {
    log::debug!("{err:?}");
    eprintln!("error: {err}");
    std::process::exit(err.exit_code())
}

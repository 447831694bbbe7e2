//! Errors that can occur while searching lines.

use std::io;
use std::str::Utf8Error;

/// A scan-stopping failure.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("failed to read line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },

    #[error("failed to write match: {0}")]
    Sink(#[source] io::Error),
}

/// Why a single line was skipped. Scanning continues after these.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LineError {
    #[error("line is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

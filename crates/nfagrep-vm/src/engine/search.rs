//! Scanning candidate lines from a reader.

use std::io::{self, BufRead};

use nfagrep_table::StateTable;
use serde::Serialize;

use super::error::{LineError, SearchError};
use super::matcher::Matcher;

/// A line the pattern matched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineMatch<'l> {
    /// 1-based.
    pub line_number: u64,
    pub start: usize,
    pub end: usize,
    /// Without its line terminator.
    pub line: &'l str,
}

/// Receives search results in input order.
pub trait Sink {
    fn matched(&mut self, found: &LineMatch<'_>) -> io::Result<()>;

    /// A line was skipped. Scanning continues afterwards.
    fn skipped(&mut self, line_number: u64, error: &LineError) {
        let _ = (line_number, error);
    }
}

impl<F> Sink for F
where
    F: FnMut(&LineMatch<'_>) -> io::Result<()>,
{
    fn matched(&mut self, found: &LineMatch<'_>) -> io::Result<()> {
        self(found)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub lines: u64,
    pub matched: u64,
    pub skipped: u64,
}

impl SearchStats {
    pub fn any_matched(&self) -> bool {
        self.matched > 0
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SearcherBuilder {
    max_count: Option<u64>,
}

impl SearcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop after this many matching lines.
    pub fn max_count(mut self, max_count: Option<u64>) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn build(self, table: &StateTable) -> Searcher<'_> {
        Searcher {
            matcher: Matcher::new(table),
            max_count: self.max_count,
        }
    }
}

/// Runs one automaton over every line of a reader.
#[derive(Debug)]
pub struct Searcher<'t> {
    matcher: Matcher<'t>,
    max_count: Option<u64>,
}

impl<'t> Searcher<'t> {
    pub fn new(table: &'t StateTable) -> Self {
        SearcherBuilder::new().build(table)
    }

    pub fn builder() -> SearcherBuilder {
        SearcherBuilder::new()
    }

    /// Scan `reader` to the end, reporting each matching line once.
    ///
    /// Lines end at `\n`; a trailing `\r` is stripped too. A final line
    /// without a terminator is still scanned.
    pub fn search<R, S>(&mut self, mut reader: R, sink: &mut S) -> Result<SearchStats, SearchError>
    where
        R: BufRead,
        S: Sink + ?Sized,
    {
        let mut stats = SearchStats::default();
        let mut buf = Vec::new();

        loop {
            if self.max_count.is_some_and(|max| stats.matched >= max) {
                break;
            }

            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(SearchError::Read {
                        line: stats.lines + 1,
                        source,
                    });
                }
            }
            stats.lines += 1;
            let line_number = stats.lines;

            let bytes = trim_terminator(&buf);
            let line = match std::str::from_utf8(bytes) {
                Ok(line) => line,
                Err(e) => {
                    let error = LineError::from(e);
                    log::debug!("skipping line {line_number}: {error}");
                    sink.skipped(line_number, &error);
                    stats.skipped += 1;
                    continue;
                }
            };

            let Some(found) = self.matcher.find(line) else {
                continue;
            };
            stats.matched += 1;
            sink.matched(&LineMatch {
                line_number,
                start: found.start,
                end: found.end,
                line,
            })
            .map_err(SearchError::Sink)?;
        }

        log::debug!(
            "scanned {} lines: {} matched, {} skipped",
            stats.lines,
            stats.matched,
            stats.skipped
        );
        Ok(stats)
    }
}

fn trim_terminator(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

//! Printing matched lines.

use std::io::{self, Write};

use nfagrep_table::Colors;
use nfagrep_vm::{LineError, LineMatch, Sink};

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputOptions {
    pub line_number: bool,
    pub json: bool,
    pub max_count: Option<u64>,
    pub color: bool,
}

/// Writes each matched line as plain text or as a JSON object, and a
/// `warning:` line to `diagnostics` for each skipped line.
pub struct MatchPrinter<W, D> {
    out: W,
    diagnostics: D,
    line_number: bool,
    json: bool,
    colors: Colors,
}

impl<W: Write, D: Write> MatchPrinter<W, D> {
    pub fn new(out: W, diagnostics: D, options: &OutputOptions) -> Self {
        Self {
            out,
            diagnostics,
            line_number: options.line_number,
            json: options.json,
            colors: Colors::new(options.color),
        }
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_plain(&mut self, found: &LineMatch<'_>) -> io::Result<()> {
        let c = self.colors;
        if self.line_number {
            write!(self.out, "{}{}{}:", c.blue, found.line_number, c.reset)?;
        }

        if !c.is_enabled() || found.start == found.end {
            return writeln!(self.out, "{}", found.line);
        }

        let line = found.line;
        let start = byte_offset(line, found.start);
        let end = byte_offset(line, found.end);
        writeln!(
            self.out,
            "{}{}{}{}{}",
            &line[..start],
            c.green,
            &line[start..end],
            c.reset,
            &line[end..]
        )
    }
}

impl<W: Write, D: Write> Sink for MatchPrinter<W, D> {
    fn matched(&mut self, found: &LineMatch<'_>) -> io::Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, found)?;
            return writeln!(self.out);
        }
        self.write_plain(found)
    }

    fn skipped(&mut self, line_number: u64, error: &LineError) {
        // A failed diagnostic write must not stop the scan.
        if let Err(e) = writeln!(self.diagnostics, "warning: line {line_number} skipped: {error}") {
            log::debug!("failed to report skipped line {line_number}: {e}");
        }
    }
}

/// Byte offset of the char at `index`, or the line length past the end.
fn byte_offset(line: &str, index: usize) -> usize {
    line.char_indices().nth(index).map_or(line.len(), |(b, _)| b)
}

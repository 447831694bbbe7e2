//! The persisted text format shared by the compiler and the matcher.
//!
//! One record per line, in ascending state-id order starting at 0:
//!
//! ```text
//! <stateId>,<symbol>,<next1>,<next2>
//! ```
//!
//! `symbol` is a single literal character, `WC` for a wildcard or `BR` for a
//! branch. Successors are integers, `-1` meaning accept.
//!
//! The symbol is located by splitting off the first comma and the last two,
//! so a literal `,` survives the round trip.

use std::fmt::{self, Write};
use std::io::BufRead;

use crate::error::TableError;
use crate::state::{BRANCH_TAG, Next, State, StateKind, WILDCARD_TAG};
use crate::table::StateTable;

/// Write every state of `table` as one `\n`-terminated record.
pub fn write_table(table: &StateTable, out: &mut impl Write) -> fmt::Result {
    for (id, state) in table.iter() {
        writeln!(out, "{},{},{},{}", id, state.kind, state.next1, state.next2)?;
    }
    Ok(())
}

/// Parse a complete table. Blank lines are ignored; `\r\n` endings are accepted.
pub fn parse_table(text: &str) -> Result<StateTable, TableError> {
    let mut states = Vec::new();

    for (i, record) in text.lines().enumerate() {
        let line_no = i + 1;
        if record.is_empty() {
            continue;
        }

        let (id, state) = parse_record(record, line_no)?;
        let expected = states.len() as u32;
        if id != expected {
            return Err(TableError::OutOfOrder {
                line: line_no,
                expected,
                found: id,
            });
        }
        states.push(state);
    }

    let table = StateTable::from_states(states)?;
    log::debug!("loaded automaton with {} states", table.len());
    Ok(table)
}

/// Read the whole stream, then parse it.
pub fn read_table(mut reader: impl BufRead) -> Result<StateTable, TableError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_table(&text)
}

fn parse_record(record: &str, line: usize) -> Result<(u32, State), TableError> {
    let Some((id, rest)) = record.split_once(',') else {
        return Err(TableError::malformed(line, "expected 4 comma-separated fields"));
    };
    let Some((rest, next2)) = rest.rsplit_once(',') else {
        return Err(TableError::malformed(line, "expected 4 comma-separated fields"));
    };
    let Some((symbol, next1)) = rest.rsplit_once(',') else {
        return Err(TableError::malformed(line, "expected 4 comma-separated fields"));
    };

    let id: u32 = id
        .parse()
        .map_err(|_| TableError::malformed(line, format!("invalid state id `{id}`")))?;
    let kind = parse_symbol(symbol)
        .ok_or_else(|| TableError::malformed(line, format!("invalid symbol `{symbol}`")))?;
    let next1 = parse_next(next1, line)?;
    let next2 = parse_next(next2, line)?;

    Ok((id, State { kind, next1, next2 }))
}

fn parse_symbol(symbol: &str) -> Option<StateKind> {
    match symbol {
        WILDCARD_TAG => Some(StateKind::Wildcard),
        BRANCH_TAG => Some(StateKind::Branch),
        _ => {
            let mut chars = symbol.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(StateKind::Literal(c)),
                _ => None,
            }
        }
    }
}

fn parse_next(field: &str, line: usize) -> Result<Next, TableError> {
    field
        .parse::<i64>()
        .ok()
        .and_then(Next::decode)
        .ok_or_else(|| TableError::malformed(line, format!("invalid successor `{field}`")))
}

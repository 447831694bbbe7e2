//! Human-readable table dump for debugging and documentation.
//!
//! ```text
//! [states]
//! 0  BR   → 1
//! 1  'a'  → 2
//! 2  BR   → 1 | 3
//! 3  BR   → accept
//! ```

use std::fmt::Write as _;

use crate::colors::Colors;
use crate::state::{Next, StateKind};
use crate::table::StateTable;

/// Generate a human-readable dump of the table.
pub fn dump(table: &StateTable, colors: Colors) -> String {
    let mut out = String::new();
    let c = &colors;

    let id_width = width_for_count(table.len());
    let symbols: Vec<String> = table.states().iter().map(|s| symbol(s.kind)).collect();
    let symbol_width = symbols.iter().map(|s| s.chars().count()).max().unwrap_or(0);

    writeln!(out, "{}[states]{}", c.blue, c.reset).unwrap();
    for ((id, state), sym) in table.iter().zip(&symbols) {
        let pad = symbol_width - sym.chars().count();
        let sym_color = match state.kind {
            StateKind::Literal(_) => c.green,
            StateKind::Wildcard => "",
            StateKind::Branch => c.dim,
        };
        let successors = state
            .successors()
            .map(|n| successor(n, c))
            .collect::<Vec<_>>()
            .join(" | ");

        writeln!(
            out,
            "{}{:>id_width$}{}  {}{}{}{:pad$}  {}→{} {}",
            c.blue, id, c.reset, sym_color, sym, c.reset, "", c.dim, c.reset, successors
        )
        .unwrap();
    }

    out
}

/// Number of decimal digits needed to print every index below `count`.
pub fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        ((count - 1) as f64).log10().floor() as usize + 1
    }
}

/// Display form of a state's symbol. Literals are quoted and escaped.
pub fn symbol(kind: StateKind) -> String {
    match kind {
        StateKind::Literal(ch) => format!("'{}'", ch.escape_debug()),
        StateKind::Wildcard => "ANY".to_string(),
        StateKind::Branch => "BR".to_string(),
    }
}

fn successor(next: Next, c: &Colors) -> String {
    match next {
        Next::State(id) => id.to_string(),
        Next::Final => format!("{}accept{}", c.green, c.reset),
    }
}

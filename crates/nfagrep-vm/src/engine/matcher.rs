//! Line matching by frontier simulation.

use nfagrep_table::{Next, StateKind, StateTable};
use serde::Serialize;

use super::frontier::Frontier;
use super::trace::{NoopTracer, Tracer};

/// Where a pattern matched, in char indices into the line.
///
/// `end` is the position at which the accept state was reached, which is not
/// necessarily the longest possible match from `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

/// Simulates one automaton against lines.
///
/// The frontier is reused across offsets and lines, so a single matcher
/// allocates once per table.
#[derive(Debug)]
pub struct Matcher<'t> {
    table: &'t StateTable,
    frontier: Frontier,
}

impl<'t> Matcher<'t> {
    pub fn new(table: &'t StateTable) -> Self {
        Self {
            table,
            frontier: Frontier::new(table.len()),
        }
    }

    pub fn is_match(&mut self, line: &str) -> bool {
        self.find(line).is_some()
    }

    pub fn find(&mut self, line: &str) -> Option<Match> {
        self.find_with(line, &mut NoopTracer)
    }

    /// Try each start offset in increasing order and stop at the first success.
    pub fn find_with<T: Tracer>(&mut self, line: &str, tracer: &mut T) -> Option<Match> {
        let chars: Vec<char> = line.chars().collect();
        // An empty line still gets one attempt at offset 0.
        for start in 0..chars.len().max(1) {
            if let Some(end) = self.traverse_with(&chars, start, tracer) {
                log::trace!("matched at {start}..{end}");
                return Some(Match { start, end });
            }
        }
        None
    }

    pub fn traverse(&mut self, chars: &[char], start: usize) -> Option<usize> {
        self.traverse_with(chars, start, &mut NoopTracer)
    }

    /// Run the automaton over `chars` beginning at `start`.
    ///
    /// Returns the position at which `Final` was reached. Reaching `Final`
    /// does not require the input to be exhausted.
    pub fn traverse_with<T: Tracer>(
        &mut self,
        chars: &[char],
        start: usize,
        tracer: &mut T,
    ) -> Option<usize> {
        let table = self.table;
        let mut pos = start;
        self.frontier.reset(Next::State(table.start()));
        tracer.trace_start(start);

        loop {
            let Some(next) = self.frontier.pop() else {
                let carried = self.frontier.deferred_len();
                if !self.frontier.advance() {
                    tracer.trace_reject(pos);
                    return None;
                }
                pos += 1;
                tracer.trace_advance(pos, carried);
                continue;
            };

            let id = match next {
                Next::Final => {
                    tracer.trace_accept(pos);
                    return Some(pos);
                }
                Next::State(id) => id,
            };

            if !self.frontier.first_visit(id) {
                continue;
            }

            let state = &table[id];
            match state.kind {
                StateKind::Branch => {
                    tracer.trace_branch(pos, id, state);
                    // next1 is explored first.
                    if state.next2 != state.next1 {
                        self.frontier.push_now(state.next2);
                    }
                    self.frontier.push_now(state.next1);
                }
                kind => match chars.get(pos) {
                    Some(&ch) if kind.accepts(ch) => {
                        tracer.trace_consume(pos, id, state, ch);
                        self.frontier.defer(state.next1);
                    }
                    other => tracer.trace_drop(pos, id, state, other.copied()),
                },
            }
        }
    }
}

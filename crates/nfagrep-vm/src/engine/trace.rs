//! Tracing infrastructure for debugging frontier simulation.
//!
//! The matcher reports raw events (positions, state ids, states). Formatting
//! happens in the tracer. With [`NoopTracer`] every call is an empty inline
//! function and disappears from the compiled matcher.

use nfagrep_table::{Colors, Next, State, StateId, dump};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Consumed characters, position advances, accept and reject.
    #[default]
    Default,
    /// Also branch visits and states that failed to consume.
    Verbose,
}

/// Instrumentation hooks called by [`Matcher`](super::Matcher).
pub trait Tracer {
    /// A traversal begins at `offset`.
    fn trace_start(&mut self, offset: usize);

    /// A branch state was visited for the first time at `pos`.
    fn trace_branch(&mut self, pos: usize, id: StateId, state: &State);

    /// A consuming state accepted `ch` and deferred its successor.
    fn trace_consume(&mut self, pos: usize, id: StateId, state: &State, ch: char);

    /// A consuming state did not accept the character at `pos`, or the line ended.
    fn trace_drop(&mut self, pos: usize, id: StateId, state: &State, ch: Option<char>);

    /// The frontier moved to `pos` carrying `carried` deferred states.
    fn trace_advance(&mut self, pos: usize, carried: usize);

    /// Final was reached at `pos`.
    fn trace_accept(&mut self, pos: usize);

    /// The frontier emptied at `pos` without reaching Final.
    fn trace_reject(&mut self, pos: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _offset: usize) {}

    #[inline(always)]
    fn trace_branch(&mut self, _pos: usize, _id: StateId, _state: &State) {}

    #[inline(always)]
    fn trace_consume(&mut self, _pos: usize, _id: StateId, _state: &State, _ch: char) {}

    #[inline(always)]
    fn trace_drop(&mut self, _pos: usize, _id: StateId, _state: &State, _ch: Option<char>) {}

    #[inline(always)]
    fn trace_advance(&mut self, _pos: usize, _carried: usize) {}

    #[inline(always)]
    fn trace_accept(&mut self, _pos: usize) {}

    #[inline(always)]
    fn trace_reject(&mut self, _pos: usize) {}
}

/// Tracer that collects a human-readable trace.
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

#[derive(Debug, Default)]
pub struct PrintTracerBuilder {
    verbosity: Verbosity,
    colors: Colors,
}

impl PrintTracerBuilder {
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn build(self) -> PrintTracer {
        PrintTracer {
            verbosity: self.verbosity,
            colors: self.colors,
            lines: Vec::new(),
        }
    }
}

impl PrintTracer {
    pub fn builder() -> PrintTracerBuilder {
        PrintTracerBuilder::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All collected lines, newline-terminated.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Print all trace lines.
    pub fn print(&self) {
        print!("{}", self.output());
    }

    fn verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    fn state_prefix(&self, pos: usize, id: StateId, state: &State) -> String {
        let c = self.colors;
        format!(
            "  @{pos} {}#{id}{} {}",
            c.blue,
            c.reset,
            dump::symbol(state.kind)
        )
    }

    fn successor(&self, next: Next) -> String {
        let c = self.colors;
        match next {
            Next::State(id) => format!("{}{id}{}", c.blue, c.reset),
            Next::Final => format!("{}accept{}", c.green, c.reset),
        }
    }
}

impl Tracer for PrintTracer {
    fn trace_start(&mut self, offset: usize) {
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let c = self.colors;
        self.lines.push(format!("{}offset {offset}{}", c.blue, c.reset));
    }

    fn trace_branch(&mut self, pos: usize, id: StateId, state: &State) {
        if !self.verbose() {
            return;
        }
        let mut targets = vec![self.successor(state.next1)];
        if state.next2 != state.next1 {
            targets.push(self.successor(state.next2));
        }
        let prefix = self.state_prefix(pos, id, state);
        self.lines.push(format!("{prefix} → {}", targets.join(" | ")));
    }

    fn trace_consume(&mut self, pos: usize, id: StateId, state: &State, ch: char) {
        let c = self.colors;
        let prefix = self.state_prefix(pos, id, state);
        self.lines.push(format!(
            "{prefix} {}consume '{}'{}",
            c.green,
            ch.escape_debug(),
            c.reset
        ));
    }

    fn trace_drop(&mut self, pos: usize, id: StateId, state: &State, ch: Option<char>) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        let prefix = self.state_prefix(pos, id, state);
        let seen = match ch {
            Some(ch) => format!("'{}'", ch.escape_debug()),
            None => "end of line".to_string(),
        };
        self.lines.push(format!("{prefix} {}drop {seen}{}", c.dim, c.reset));
    }

    fn trace_advance(&mut self, pos: usize, carried: usize) {
        let c = self.colors;
        self.lines.push(format!(
            "  {}→ @{pos} ({carried} deferred){}",
            c.dim, c.reset
        ));
    }

    fn trace_accept(&mut self, pos: usize) {
        let c = self.colors;
        self.lines.push(format!("  {}accept at {pos}{}", c.green, c.reset));
    }

    fn trace_reject(&mut self, pos: usize) {
        let c = self.colors;
        self.lines.push(format!("  {}reject at {pos}{}", c.dim, c.reset));
    }
}

//! Frontier-simulation matcher for nfagrep automata.
//!
//! This crate loads nothing itself: it takes a [`StateTable`](nfagrep_table::StateTable)
//! and decides, for each candidate line, whether and where the pattern matches.

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    Frontier, LineError, LineMatch, Match, Matcher, NoopTracer, PrintTracer, PrintTracerBuilder,
    SearchError, SearchStats, Searcher, SearcherBuilder, Sink, Tracer, Verbosity,
};

//! Runtime engine for simulating compiled automata.
//!
//! The matcher keeps a frontier of states reachable at the current input
//! position and advances it one character at a time, so the number of parse
//! paths never has to be enumerated.

mod error;
mod frontier;
mod matcher;
mod search;
mod trace;

#[cfg(test)]
mod frontier_tests;
#[cfg(test)]
mod matcher_tests;

pub use error::{LineError, SearchError};
pub use frontier::Frontier;
pub use matcher::{Match, Matcher};
pub use search::{LineMatch, SearchStats, Searcher, SearcherBuilder, Sink};
pub use trace::{NoopTracer, PrintTracer, PrintTracerBuilder, Tracer, Verbosity};

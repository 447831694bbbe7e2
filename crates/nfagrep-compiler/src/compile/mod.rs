//! Thompson NFA construction.
//!
//! Lowers the parsed [`Expr`](crate::Expr) into a flat state table. Every
//! lowering step returns a [`Fragment`]: an entry state plus exactly one
//! open successor slot (a [`Hole`]). Holes are patched once their target
//! is known, so no slot outlives construction.
//!
//! # Module Organization
//!
//! - `builder`: state arena with open slots and back-patching
//! - `compiler`: expression lowering (concatenation, alternation, quantifiers)
//! - `invariants`: panicking checks for builder bugs

mod builder;
mod compiler;
mod invariants;


pub use builder::{Builder, Fragment, Hole};
pub use compiler::Compiler;

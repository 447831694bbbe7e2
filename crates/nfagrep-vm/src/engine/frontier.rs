//! Two-phase frontier for automaton simulation.
//!
//! The frontier separates states to explore at the current position (a work
//! stack) from states proposed for after the next character (a deferred list).
//! A per-position visited record stops loops formed by `*` and `+` from
//! re-offering the same branch forever; it is cleared when the position advances.

use nfagrep_table::{Next, StateId};

#[derive(Debug)]
pub struct Frontier {
    work: Vec<Next>,
    deferred: Vec<Next>,
    /// Epoch stamp per state: visited at this position iff `marks[id] == epoch`.
    marks: Vec<u32>,
    epoch: u32,
}

impl Frontier {
    pub fn new(state_count: usize) -> Self {
        Self {
            work: Vec::new(),
            deferred: Vec::new(),
            marks: vec![0; state_count],
            epoch: 1,
        }
    }

    /// Start over with `start` as the only state to explore.
    pub fn reset(&mut self, start: Next) {
        self.work.clear();
        self.deferred.clear();
        self.clear_visited();
        self.work.push(start);
    }

    /// Next state to explore at the current position.
    #[inline]
    pub fn pop(&mut self) -> Option<Next> {
        self.work.pop()
    }

    /// Explore `next` at the current position, before anything queued earlier.
    #[inline]
    pub fn push_now(&mut self, next: Next) {
        self.work.push(next);
    }

    /// Explore `next` after the current character has been consumed.
    #[inline]
    pub fn defer(&mut self, next: Next) {
        self.deferred.push(next);
    }

    /// Record a visit at the current position. False if already visited.
    #[inline]
    pub fn first_visit(&mut self, id: StateId) -> bool {
        let mark = &mut self.marks[id.index()];
        if *mark == self.epoch {
            return false;
        }
        *mark = self.epoch;
        true
    }

    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }

    /// Move to the next input position.
    ///
    /// Returns false when nothing was deferred, meaning no state can consume
    /// the next character. Deferred states are explored in the order they
    /// were proposed.
    pub fn advance(&mut self) -> bool {
        if self.deferred.is_empty() {
            return false;
        }
        debug_assert!(self.work.is_empty(), "advance with unexplored states");
        self.work.extend(self.deferred.drain(..).rev());
        self.clear_visited();
        true
    }

    fn clear_visited(&mut self) {
        if self.epoch == u32::MAX {
            self.marks.fill(0);
            self.epoch = 0;
        }
        self.epoch += 1;
    }
}

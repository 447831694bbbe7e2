//! State arena used during construction.

use nfagrep_table::{Next, State, StateId, StateKind, StateTable};

use super::invariants::ensure_well_formed;

/// A state whose successors may still be undecided.
#[derive(Clone, Copy, Debug)]
struct PendingState {
    kind: StateKind,
    next1: Option<Next>,
    next2: Option<Next>,
}

/// The single unresolved exit of a fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hole {
    /// Both successors of this state are open and move together.
    /// Used for consuming states and join branches.
    Both(StateId),
    /// Only the second successor of this branch is open.
    Second(StateId),
}

/// A partially built automaton piece: where to enter, and where it leaves off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub entry: StateId,
    pub hole: Hole,
}

/// Append-only state arena. Ids are assigned in creation order starting at 0.
#[derive(Debug, Default)]
pub struct Builder {
    states: Vec<PendingState>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: StateKind, next1: Option<Next>, next2: Option<Next>) -> StateId {
        let id = StateId::new(self.states.len() as u32);
        self.states.push(PendingState { kind, next1, next2 });
        id
    }

    /// A literal or wildcard state with its exit left open.
    pub fn consuming(&mut self, kind: StateKind) -> Fragment {
        let id = self.push(kind, None, None);
        Fragment {
            entry: id,
            hole: Hole::Both(id),
        }
    }

    /// A branch with both successors open, to be patched as one.
    pub fn join(&mut self) -> StateId {
        self.push(StateKind::Branch, None, None)
    }

    /// A branch whose second successor is left open when `next2` is `None`.
    pub fn branch(&mut self, next1: impl Into<Next>, next2: Option<Next>) -> StateId {
        self.push(StateKind::Branch, Some(next1.into()), next2)
    }

    /// Resolve a hole to `target`.
    pub fn patch(&mut self, hole: Hole, target: impl Into<Next>) {
        let target = Some(target.into());
        match hole {
            Hole::Both(id) => {
                let state = &mut self.states[id.index()];
                state.next1 = target;
                state.next2 = target;
            }
            Hole::Second(id) => self.states[id.index()].next2 = target,
        }
    }

    /// Resolve every slot still open to `terminal` and freeze the table.
    ///
    /// Consuming states always end with equal successors.
    pub fn finish(self, terminal: StateId) -> StateTable {
        let mut swept = 0usize;
        let states = self
            .states
            .into_iter()
            .map(|pending| {
                let mut resolve = |slot: Option<Next>| {
                    slot.unwrap_or_else(|| {
                        swept += 1;
                        Next::State(terminal)
                    })
                };
                let next1 = resolve(pending.next1);
                let next2 = if pending.kind.consumes() {
                    next1
                } else {
                    resolve(pending.next2)
                };
                State {
                    kind: pending.kind,
                    next1,
                    next2,
                }
            })
            .collect();

        if swept > 0 {
            log::debug!("resolved {swept} open slots to terminal state {terminal}");
        }

        ensure_well_formed(StateTable::from_states(states))
    }
}

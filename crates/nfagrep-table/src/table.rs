//! Flat, id-indexed automaton storage.

use std::collections::HashMap;
use std::ops::Index;

use crate::error::TableError;
use crate::state::{Next, State, StateId};

/// An ordered collection of states where a state's id is its index.
///
/// Successors are stored as ids rather than references, so loops formed by
/// `*` and `+` are plain index values. Tables are immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateTable {
    states: Vec<State>,
}

impl StateTable {
    /// Build a table, checking that every successor resolves.
    pub fn from_states(states: Vec<State>) -> Result<Self, TableError> {
        if states.is_empty() {
            return Err(TableError::Empty);
        }

        for (i, state) in states.iter().enumerate() {
            let id = StateId::new(i as u32);
            for next in [state.next1, state.next2] {
                if let Next::State(target) = next
                    && target.index() >= states.len()
                {
                    return Err(TableError::DanglingSuccessor { state: id, target: next });
                }
            }
            if state.kind.consumes() && state.next1 != state.next2 {
                return Err(TableError::UnequalSuccessors { state: id });
            }
        }

        Ok(Self { states })
    }

    /// The designated start state.
    #[inline]
    pub fn start(&self) -> StateId {
        StateId::START
    }

    #[inline]
    pub fn get(&self, id: StateId) -> Option<&State> {
        self.states.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (StateId::new(i as u32), s))
    }

    /// Serialize into the persisted text format.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        crate::format::write_table(self, &mut out).expect("String write never fails");
        out
    }

    /// Parse from the persisted text format.
    pub fn from_text(text: &str) -> Result<Self, TableError> {
        crate::format::parse_table(text)
    }

    /// Structural equivalence up to state renumbering.
    ///
    /// Walks both automata from their start states in lockstep, pairing ids.
    /// Two tables are equivalent when the pairing is a bijection over the
    /// reachable states and paired states have equal kinds and paired successors.
    /// Unreachable states are ignored.
    pub fn is_equivalent(&self, other: &StateTable) -> bool {
        let mut forward: HashMap<StateId, StateId> = HashMap::new();
        let mut backward: HashMap<StateId, StateId> = HashMap::new();
        let mut pending = vec![(self.start(), other.start())];

        while let Some((a, b)) = pending.pop() {
            match (forward.get(&a), backward.get(&b)) {
                (Some(&mapped), _) if mapped != b => return false,
                (_, Some(&mapped)) if mapped != a => return false,
                (Some(_), Some(_)) => continue,
                _ => {}
            }
            forward.insert(a, b);
            backward.insert(b, a);

            let (Some(left), Some(right)) = (self.get(a), other.get(b)) else {
                return false;
            };
            if left.kind != right.kind {
                return false;
            }

            for (l, r) in [(left.next1, right.next1), (left.next2, right.next2)] {
                match (l, r) {
                    (Next::Final, Next::Final) => {}
                    (Next::State(l), Next::State(r)) => pending.push((l, r)),
                    _ => return false,
                }
            }
        }

        true
    }
}

impl Index<StateId> for StateTable {
    type Output = State;

    #[inline]
    fn index(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }
}

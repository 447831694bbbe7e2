//! Automaton states and successor references.

use std::fmt;

/// Encoded successor of the accepting pseudo-state.
pub const FINAL_ID: i64 = -1;

/// Symbol tag for a state that matches any character.
pub const WILDCARD_TAG: &str = "WC";

/// Symbol tag for a non-consuming state with two continuations.
pub const BRANCH_TAG: &str = "BR";

/// Index of a state within its table.
///
/// Ids are assigned in creation order starting at 0 and never reused,
/// so an id is also the state's position in the backing vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u32);

impl StateId {
    /// The designated start state of every table.
    pub const START: Self = Self(0);

    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where a transition leads: another state, or acceptance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Next {
    State(StateId),
    Final,
}

impl Next {
    /// Integer encoding used by the text format (`-1` for `Final`).
    pub fn encode(self) -> i64 {
        match self {
            Next::State(id) => i64::from(id.get()),
            Next::Final => FINAL_ID,
        }
    }

    /// Inverse of [`Next::encode`]. Returns `None` for negative values other than `-1`
    /// and for ids that do not fit a `u32`.
    pub fn decode(raw: i64) -> Option<Self> {
        if raw == FINAL_ID {
            return Some(Next::Final);
        }
        u32::try_from(raw).ok().map(|id| Next::State(StateId::new(id)))
    }

    pub fn state(self) -> Option<StateId> {
        match self {
            Next::State(id) => Some(id),
            Next::Final => None,
        }
    }

    pub fn is_final(self) -> bool {
        matches!(self, Next::Final)
    }
}

impl From<StateId> for Next {
    fn from(id: StateId) -> Self {
        Next::State(id)
    }
}

impl fmt::Display for Next {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// What a state does with the current input character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// Consumes exactly this character.
    Literal(char),
    /// Consumes any one character.
    Wildcard,
    /// Consumes nothing, continues at both successors.
    Branch,
}

impl StateKind {
    /// Whether the state needs an input character to make progress.
    pub fn consumes(self) -> bool {
        !matches!(self, StateKind::Branch)
    }

    /// Does this state accept `c` at the current position?
    ///
    /// Always false for branches, which never look at input.
    #[inline]
    pub fn accepts(self, c: char) -> bool {
        match self {
            StateKind::Literal(expected) => expected == c,
            StateKind::Wildcard => true,
            StateKind::Branch => false,
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKind::Literal(c) => write!(f, "{c}"),
            StateKind::Wildcard => f.write_str(WILDCARD_TAG),
            StateKind::Branch => f.write_str(BRANCH_TAG),
        }
    }
}

/// One node of the automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State {
    pub kind: StateKind,
    pub next1: Next,
    pub next2: Next,
}

impl State {
    /// A consuming state with its single successor.
    pub fn consuming(kind: StateKind, next: Next) -> Self {
        debug_assert!(kind.consumes(), "branch states need two successors");
        Self {
            kind,
            next1: next,
            next2: next,
        }
    }

    pub fn branch(next1: Next, next2: Next) -> Self {
        Self {
            kind: StateKind::Branch,
            next1,
            next2,
        }
    }

    /// Successors in preference order, with a repeated successor listed once.
    pub fn successors(&self) -> impl Iterator<Item = Next> {
        let second = (self.next2 != self.next1).then_some(self.next2);
        std::iter::once(self.next1).chain(second)
    }
}

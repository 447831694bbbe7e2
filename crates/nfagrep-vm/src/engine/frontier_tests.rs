use nfagrep_table::{Next, StateId};

use super::Frontier;

fn id(raw: u32) -> Next {
    Next::State(StateId::new(raw))
}

#[test]
fn reset_seeds_single_state() {
    let mut frontier = Frontier::new(4);
    frontier.reset(id(2));

    assert_eq!(frontier.pop(), Some(id(2)));
    assert_eq!(frontier.pop(), None);
}

#[test]
fn work_stack_is_last_in_first_out() {
    let mut frontier = Frontier::new(4);
    frontier.reset(id(0));
    frontier.pop();
    frontier.push_now(id(2));
    frontier.push_now(id(1));

    assert_eq!(frontier.pop(), Some(id(1)));
    assert_eq!(frontier.pop(), Some(id(2)));
}

#[test]
fn advance_without_deferred_states_fails() {
    let mut frontier = Frontier::new(2);
    frontier.reset(id(0));
    frontier.pop();

    assert!(!frontier.advance());
}

#[test]
fn advance_replays_deferred_in_proposal_order() {
    let mut frontier = Frontier::new(4);
    frontier.reset(id(0));
    frontier.pop();
    frontier.defer(id(3));
    frontier.defer(Next::Final);
    frontier.defer(id(1));
    assert_eq!(frontier.deferred_len(), 3);

    assert!(frontier.advance());
    assert_eq!(frontier.deferred_len(), 0);
    assert_eq!(frontier.pop(), Some(id(3)));
    assert_eq!(frontier.pop(), Some(Next::Final));
    assert_eq!(frontier.pop(), Some(id(1)));
    assert_eq!(frontier.pop(), None);
}

#[test]
fn visited_is_per_position() {
    let mut frontier = Frontier::new(3);
    frontier.reset(id(0));
    let one = StateId::new(1);

    assert!(frontier.first_visit(one));
    assert!(!frontier.first_visit(one));

    frontier.pop();
    frontier.defer(id(1));
    assert!(frontier.advance());
    assert!(frontier.first_visit(one));
}

#[test]
fn reset_clears_everything() {
    let mut frontier = Frontier::new(3);
    frontier.reset(id(0));
    frontier.push_now(id(1));
    frontier.defer(id(2));
    assert!(frontier.first_visit(StateId::new(2)));

    frontier.reset(id(1));

    assert_eq!(frontier.deferred_len(), 0);
    assert!(frontier.first_visit(StateId::new(2)));
    assert_eq!(frontier.pop(), Some(id(1)));
    assert_eq!(frontier.pop(), None);
}

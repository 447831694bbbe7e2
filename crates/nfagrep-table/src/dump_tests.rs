use crate::{Colors, Next, State, StateId, StateKind, StateTable, dump};

fn id(raw: u32) -> Next {
    Next::State(StateId::new(raw))
}

#[test]
fn dump_plain() {
    let table = StateTable::from_states(vec![
        State::branch(id(1), id(1)),
        State::consuming(StateKind::Literal('a'), id(2)),
        State::branch(id(1), id(3)),
        State::branch(Next::Final, Next::Final),
    ])
    .unwrap();

    insta::assert_snapshot!(dump(&table, Colors::OFF), @r"
    [states]
    0  BR   → 1
    1  'a'  → 2
    2  BR   → 1 | 3
    3  BR   → accept
    ");
}

#[test]
fn dump_aligns_wide_ids() {
    let mut states: Vec<State> = (1..=10)
        .map(|i| State::consuming(StateKind::Wildcard, id(i)))
        .collect();
    states.push(State::branch(Next::Final, Next::Final));
    let table = StateTable::from_states(states).unwrap();

    let out = dump(&table, Colors::OFF);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[1], " 0  ANY  → 1");
    assert_eq!(lines[11], "10  BR   → accept");
}

#[test]
fn dump_escapes_literals() {
    let table = StateTable::from_states(vec![
        State::consuming(StateKind::Literal('\t'), id(1)),
        State::branch(Next::Final, Next::Final),
    ])
    .unwrap();

    let out = dump(&table, Colors::OFF);
    assert!(out.contains("0  '\\t'  → 1"), "{out}");
}

#[test]
fn dump_colored_marks_accept() {
    let table = StateTable::from_states(vec![State::branch(Next::Final, Next::Final)]).unwrap();

    let out = dump(&table, Colors::ON);
    assert!(out.contains("\x1b[32maccept\x1b[0m"));
}

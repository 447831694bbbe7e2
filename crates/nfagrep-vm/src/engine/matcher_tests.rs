use nfagrep_compiler::compile;
use nfagrep_table::{Next, State, StateId, StateKind, StateTable};

use super::{Match, Matcher};

fn find(pattern: &str, line: &str) -> Option<(usize, usize)> {
    let table = compile(pattern).unwrap();
    Matcher::new(&table)
        .find(line)
        .map(|Match { start, end }| (start, end))
}

fn matches(pattern: &str, line: &str) -> bool {
    find(pattern, line).is_some()
}

#[test]
fn literal_found_mid_line() {
    assert_eq!(find("cat", "concatenate"), Some((3, 6)));
    assert_eq!(find("cat", "dog"), None);
}

#[test]
fn star_matches_every_line() {
    for line in ["", "a", "aaa", "xyz", "bab"] {
        assert_eq!(find("a*", line), Some((0, 0)), "line {line:?}");
    }
}

#[test]
fn plus_needs_at_least_one() {
    assert_eq!(find("a+", "baa"), Some((1, 2)));
    assert_eq!(find("a+", "a"), Some((0, 1)));
    assert!(!matches("a+", ""));
    assert!(!matches("a+", "bcd"));
}

#[test]
fn optional_matches_empty() {
    assert_eq!(find("a?", ""), Some((0, 0)));
    assert_eq!(find("xa?y", "xy"), Some((0, 2)));
    assert_eq!(find("xa?y", "xay"), Some((0, 3)));
    assert!(!matches("xa?y", "xaay"));
}

#[test]
fn alternation_of_groups() {
    assert_eq!(find("(ab|cd)", "xxcdxx"), Some((2, 4)));
    assert_eq!(find("(ab|cd)", "ab"), Some((0, 2)));
    assert!(!matches("(ab|cd)", "acbd"));
}

#[test]
fn wildcard_consumes_any_char() {
    assert_eq!(find("a.c", "xabcx"), Some((1, 4)));
    assert_eq!(find("a.c", "axc"), Some((0, 3)));
    assert_eq!(find("a.c", "a→c"), Some((0, 3)));
    assert!(!matches("a.c", "ac"));
}

#[test]
fn escaped_metacharacters_are_literal() {
    assert_eq!(find(r"a\*b", "xa*b"), Some((1, 4)));
    assert!(!matches(r"a\*b", "aab"));
    assert_eq!(find(r"\(\)", "f()"), Some((1, 3)));
    assert_eq!(find(r"1\.5", "v1.5"), Some((1, 4)));
    assert!(!matches(r"1\.5", "125"));
}

#[test]
fn comma_is_an_ordinary_literal() {
    assert_eq!(find("a,b", "x,a,b"), Some((2, 5)));
}

#[test]
fn empty_line_gets_one_attempt() {
    assert!(!matches("a", ""));
    assert!(!matches(".", ""));
    assert!(matches("(a|b)*", ""));
}

#[test]
fn nested_nullable_loops_terminate() {
    assert_eq!(find("(a*)*", "b"), Some((0, 0)));
    assert_eq!(find("(a?)*b", "aab"), Some((0, 3)));
    assert_eq!(find("(a*)+c", "xaac"), Some((1, 4)));
}

#[test]
fn match_may_end_before_line_end() {
    assert_eq!(find("ab", "abzzz"), Some((0, 2)));
}

#[test]
fn char_indices_not_bytes() {
    assert_eq!(find("é+", "caféé!"), Some((3, 4)));
}

#[test]
fn traverse_from_offset() {
    let table = compile("ab").unwrap();
    let mut matcher = Matcher::new(&table);
    let chars: Vec<char> = "xab".chars().collect();

    assert_eq!(matcher.traverse(&chars, 0), None);
    assert_eq!(matcher.traverse(&chars, 1), Some(3));
    assert_eq!(matcher.traverse(&chars, 2), None);
}

#[test]
fn traverse_runs_out_of_input() {
    let table = compile("abc").unwrap();
    let mut matcher = Matcher::new(&table);
    let chars: Vec<char> = "ab".chars().collect();

    assert_eq!(matcher.traverse(&chars, 0), None);
}

#[test]
fn matcher_is_reusable_across_lines() {
    let table = compile("(ab|cd)+").unwrap();
    let mut matcher = Matcher::new(&table);

    assert!(matcher.is_match("zzcd"));
    assert!(!matcher.is_match("acbd"));
    assert!(matcher.is_match("abcdab"));
    assert_eq!(matcher.find("xab"), Some(Match { start: 1, end: 3 }));
}

#[test]
fn hand_built_table_with_self_loop() {
    // 0: start, 1: branch looping on itself or reaching 2, 2: 'z', 3: terminal
    let id = |raw| Next::State(StateId::new(raw));
    let table = StateTable::from_states(vec![
        State::branch(id(1), id(1)),
        State::branch(id(1), id(2)),
        State::consuming(StateKind::Literal('z'), id(3)),
        State::branch(Next::Final, Next::Final),
    ])
    .unwrap();
    let mut matcher = Matcher::new(&table);

    assert_eq!(matcher.find("yz"), Some(Match { start: 1, end: 2 }));
    assert!(!matcher.is_match("yy"));
}

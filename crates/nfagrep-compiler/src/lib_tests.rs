use crate::{PatternErrorKind, compile};

#[test]
fn compile_round_trips_through_text() {
    let table = compile("(ab|c.)*d").unwrap();
    let text = table.to_text();
    let reloaded = nfagrep_table::StateTable::from_text(&text).unwrap();

    assert_eq!(reloaded, table);
}

#[test]
fn compile_error_produces_no_table() {
    let err = compile("ab(c").unwrap_err();
    assert_eq!(err.kind, PatternErrorKind::UnmatchedOpenParen);
    assert_eq!(err.to_string(), "unmatched '(' at offset 2");
}

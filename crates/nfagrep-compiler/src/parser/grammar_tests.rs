use crate::{Expr, PatternErrorKind, parse};

fn sexpr(pattern: &str) -> String {
    parse(pattern).unwrap().to_string()
}

fn error_kind(pattern: &str) -> PatternErrorKind {
    parse(pattern).unwrap_err().kind
}

#[test]
fn single_literal() {
    insta::assert_snapshot!(sexpr("a"), @"'a'");
}

#[test]
fn concatenation() {
    insta::assert_snapshot!(sexpr("cat"), @"(cat 'c' 'a' 't')");
}

#[test]
fn alternation_binds_loosest() {
    insta::assert_snapshot!(sexpr("ab|cd|e"), @"(alt (cat 'a' 'b') (cat 'c' 'd') 'e')");
}

#[test]
fn quantifier_binds_to_atom() {
    insta::assert_snapshot!(sexpr("ab*"), @"(cat 'a' (* 'b'))");
    insta::assert_snapshot!(sexpr("a+b?"), @"(cat (+ 'a') (? 'b'))");
}

#[test]
fn group_with_quantifier() {
    insta::assert_snapshot!(sexpr("(ab|cd)*x"), @"(cat (* (group (alt (cat 'a' 'b') (cat 'c' 'd')))) 'x')");
}

#[test]
fn wildcard() {
    insta::assert_snapshot!(sexpr("a.c"), @"(cat 'a' any 'c')");
}

#[test]
fn escaped_metacharacters_are_literals() {
    insta::assert_snapshot!(sexpr(r"\(\*\.\\"), @r"(cat '(' '*' '.' '\\')");
}

#[test]
fn escaped_ordinary_character() {
    insta::assert_snapshot!(sexpr(r"\a"), @"'a'");
}

#[test]
fn nested_groups() {
    insta::assert_snapshot!(sexpr("((a))"), @"(group (group 'a'))");
}

#[test]
fn spans_cover_source() {
    let expr = parse("x(ab)+").unwrap();
    assert_eq!(expr.span(), 0..6);

    let Expr::Concat(items) = expr else {
        panic!("expected concatenation");
    };
    assert_eq!(items[1].span(), 1..6);
}

#[test]
fn empty_pattern() {
    assert_eq!(error_kind(""), PatternErrorKind::EmptyPattern);
}

#[test]
fn leading_pipe() {
    let err = parse("|a").unwrap_err();
    assert_eq!(err.kind, PatternErrorKind::EmptyAlternative);
    assert_eq!(err.span, 0..1);
}

#[test]
fn trailing_pipe() {
    let err = parse("a|").unwrap_err();
    assert_eq!(err.kind, PatternErrorKind::EmptyAlternative);
    assert_eq!(err.span, 1..2);
}

#[test]
fn double_pipe() {
    assert_eq!(error_kind("a||b"), PatternErrorKind::EmptyAlternative);
}

#[test]
fn empty_alternative_inside_group() {
    assert_eq!(error_kind("(a|)"), PatternErrorKind::EmptyAlternative);
    assert_eq!(error_kind("(|a)"), PatternErrorKind::EmptyAlternative);
}

#[test]
fn empty_group() {
    let err = parse("a()").unwrap_err();
    assert_eq!(err.kind, PatternErrorKind::EmptyGroup);
    assert_eq!(err.span, 1..3);
}

#[test]
fn unmatched_open_paren() {
    let err = parse("(ab").unwrap_err();
    assert_eq!(err.kind, PatternErrorKind::UnmatchedOpenParen);
    assert_eq!(err.span, 0..1);
    assert_eq!(err.related.unwrap().span, 3..3);
}

#[test]
fn lone_open_paren() {
    assert_eq!(error_kind("("), PatternErrorKind::UnmatchedOpenParen);
    assert_eq!(error_kind("a(("), PatternErrorKind::UnmatchedOpenParen);
}

#[test]
fn unmatched_close_paren() {
    let err = parse("ab)c").unwrap_err();
    assert_eq!(err.kind, PatternErrorKind::UnmatchedCloseParen);
    assert_eq!(err.span, 2..3);

    assert_eq!(error_kind(")"), PatternErrorKind::UnmatchedCloseParen);
    assert_eq!(error_kind("a|)"), PatternErrorKind::UnmatchedCloseParen);
}

#[test]
fn leading_quantifier() {
    let err = parse("*a").unwrap_err();
    assert_eq!(err.kind, PatternErrorKind::NothingToRepeat);
    assert_eq!(err.message, r"'*' has nothing to repeat (escape it as '\*')");
}

#[test]
fn doubled_quantifier() {
    let err = parse("a+?").unwrap_err();
    assert_eq!(err.kind, PatternErrorKind::NothingToRepeat);
    assert_eq!(err.span, 2..3);
}

#[test]
fn quantifier_after_pipe() {
    assert_eq!(error_kind("a|*"), PatternErrorKind::NothingToRepeat);
    assert_eq!(error_kind("(?)"), PatternErrorKind::NothingToRepeat);
}

#[test]
fn trailing_backslash() {
    assert_eq!(error_kind(r"a\"), PatternErrorKind::TrailingBackslash);
}

#[test]
fn line_break() {
    assert_eq!(error_kind("a\nb"), PatternErrorKind::LineBreak);
    assert_eq!(error_kind("a\\\n"), PatternErrorKind::LineBreak);
}

#[test]
fn nesting_limit() {
    let deep = format!("{}a{}", "(".repeat(300), ")".repeat(300));
    assert_eq!(error_kind(&deep), PatternErrorKind::NestingTooDeep);

    let ok = format!("{}a{}", "(".repeat(100), ")".repeat(100));
    assert!(parse(&ok).is_ok());
}

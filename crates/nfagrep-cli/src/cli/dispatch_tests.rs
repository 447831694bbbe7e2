//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Argument parsing for each subcommand
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Conversion into command args (color, verbosity, JSON)

use std::path::PathBuf;

use nfagrep_vm::Verbosity;

use super::*;
use crate::cli::commands::{
    check_command, compile_command, dump_command, grep_command, search_command, trace_command,
};
use crate::commands::output::OutputOptions;
use crate::commands::search::SearchArgs;
use crate::commands::trace::TraceArgs;

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}

#[test]
fn compile_takes_pattern() {
    let m = compile_command()
        .try_get_matches_from(["compile", "a(b|c)*"])
        .unwrap();
    let params = CompileParams::from_matches(&m);

    assert_eq!(params.pattern, "a(b|c)*");
}

#[test]
fn compile_requires_pattern() {
    let result = compile_command().try_get_matches_from(["compile"]);

    assert!(result.is_err());
}

#[test]
fn pattern_may_start_with_hyphen() {
    let m = compile_command()
        .try_get_matches_from(["compile", "-x+"])
        .unwrap();

    assert_eq!(CompileParams::from_matches(&m).pattern, "-x+");
}

#[test]
fn search_reads_table_from_stdin_by_default() {
    let m = search_command()
        .try_get_matches_from(["search", "words.txt"])
        .unwrap();
    let params = SearchParams::from_matches(&m);

    assert_eq!(params.file, PathBuf::from("words.txt"));
    assert_eq!(params.table, None);
    assert!(!params.output.line_number);
    assert_eq!(params.output.color, ColorChoice::Auto);
}

#[test]
fn search_with_table_and_flags() {
    let m = search_command()
        .try_get_matches_from([
            "search",
            "words.txt",
            "--table",
            "ab.nfa",
            "-n",
            "-m",
            "3",
            "--color",
            "never",
        ])
        .unwrap();
    let args: SearchArgs = SearchParams::from_matches(&m).into();

    assert_eq!(args.table, Some(PathBuf::from("ab.nfa")));
    assert!(args.output.line_number);
    assert_eq!(args.output.max_count, Some(3));
    assert!(!args.output.color);
}

#[test]
fn json_disables_color() {
    let m = grep_command()
        .try_get_matches_from(["grep", "a", "f.txt", "--json", "--color", "always"])
        .unwrap();
    let options: OutputOptions = GrepParams::from_matches(&m).output.into();

    assert!(options.json);
    assert!(!options.color);
}

#[test]
fn json_conflicts_with_line_numbers() {
    let result = grep_command().try_get_matches_from(["grep", "a", "f.txt", "--json", "-n"]);

    assert!(result.is_err());
}

#[test]
fn grep_takes_pattern_then_file() {
    let m = grep_command()
        .try_get_matches_from(["grep", "colou?r", "notes.txt"])
        .unwrap();
    let params = GrepParams::from_matches(&m);

    assert_eq!(params.pattern, "colou?r");
    assert_eq!(params.file, PathBuf::from("notes.txt"));
}

#[test]
fn check_color_choice() {
    let m = check_command()
        .try_get_matches_from(["check", "a|", "--color", "always"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn dump_pattern_or_table() {
    let m = dump_command().try_get_matches_from(["dump", "ab*"]).unwrap();
    let params = DumpParams::from_matches(&m);
    assert_eq!(params.pattern.as_deref(), Some("ab*"));
    assert_eq!(params.table, None);

    let m = dump_command()
        .try_get_matches_from(["dump", "--table", "ab.nfa"])
        .unwrap();
    let params = DumpParams::from_matches(&m);
    assert_eq!(params.pattern, None);
    assert_eq!(params.table, Some(PathBuf::from("ab.nfa")));

    let m = dump_command().try_get_matches_from(["dump"]).unwrap();
    assert_eq!(DumpParams::from_matches(&m).pattern, None);
}

#[test]
fn dump_rejects_pattern_with_table() {
    let result = dump_command().try_get_matches_from(["dump", "ab", "--table", "ab.nfa"]);

    assert!(result.is_err());
}

#[test]
fn trace_verbosity() {
    let m = trace_command()
        .try_get_matches_from(["trace", "a+b", "xaab"])
        .unwrap();
    let args: TraceArgs = TraceParams::from_matches(&m).into();
    assert_eq!(args.verbosity, Verbosity::Default);
    assert_eq!(args.line, "xaab");

    let m = trace_command()
        .try_get_matches_from(["trace", "a+b", "xaab", "-vv"])
        .unwrap();
    let args: TraceArgs = TraceParams::from_matches(&m).into();
    assert_eq!(args.verbosity, Verbosity::Verbose);
}

#[test]
fn top_level_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["nfagrep"]);

    assert!(result.is_err());
}

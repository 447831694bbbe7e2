//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Add the match output flags shared by `search` and `grep`.
fn with_output_args(cmd: Command) -> Command {
    cmd.arg(line_number_arg())
        .arg(json_arg())
        .arg(max_count_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("nfagrep")
        .about("Compile patterns into NFA state tables and search lines with them")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(search_command())
        .subcommand(grep_command())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(trace_command())
}

/// Compile a pattern to its state table text.
pub fn compile_command() -> Command {
    Command::new("compile")
        .about("Compile a pattern and print its state table")
        .override_usage("  nfagrep compile <PATTERN>")
        .after_help(
            r#"EXAMPLES:
  nfagrep compile 'a(b|c)*d'                        # table on stdout
  nfagrep compile 'ab+' | nfagrep search words.txt  # two-stage pipeline"#,
        )
        .arg(pattern_arg())
}

/// Search a file with a precompiled table.
pub fn search_command() -> Command {
    let cmd = Command::new("search")
        .about("Print lines of FILE matched by a state table")
        .override_usage(
            "\
  nfagrep search <FILE>
  nfagrep search <FILE> --table <PATH>",
        )
        .after_help(
            r#"EXAMPLES:
  nfagrep compile 'ab+' | nfagrep search words.txt
  nfagrep search words.txt --table ab.nfa -n
  nfagrep search words.txt --table ab.nfa --json

Exits 0 if any line matched, 1 if none did, 2 on a malformed table or I/O error."#,
        )
        .arg(file_arg())
        .arg(table_arg());

    with_output_args(cmd)
}

/// Compile and search in one process.
pub fn grep_command() -> Command {
    let cmd = Command::new("grep")
        .about("Print lines of FILE matched by PATTERN")
        .override_usage("  nfagrep grep <PATTERN> <FILE>")
        .after_help(
            r#"EXAMPLES:
  nfagrep grep 'colou?r' notes.txt
  nfagrep grep -n '(ab|cd)+' notes.txt"#,
        )
        .arg(pattern_arg())
        .arg(file_arg());

    with_output_args(cmd)
}

/// Validate a pattern.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a pattern and show annotated errors")
        .override_usage("  nfagrep check <PATTERN>")
        .arg(pattern_arg())
        .arg(color_arg())
}

/// Show a state table in readable form.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show a state table in readable form")
        .override_usage(
            "\
  nfagrep dump <PATTERN>
  nfagrep dump --table <PATH>
  nfagrep compile <PATTERN> | nfagrep dump",
        )
        .arg(table_arg())
        .arg(optional_pattern_arg())
        .arg(color_arg())
}

/// Trace matching of a single line.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Trace the frontier while matching one line")
        .override_usage("  nfagrep trace <PATTERN> <LINE> [-v]")
        .after_help(
            r#"EXAMPLES:
  nfagrep trace 'a+b' 'xaab'       # consumed characters per offset
  nfagrep trace 'a+b' 'xaab' -v    # also branches and drops"#,
        )
        .arg(pattern_arg())
        .arg(line_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}

//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern text (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .allow_hyphen_values(true)
        .help("Regular expression over literals, '.', '|', '*', '+', '?' and groups")
}

/// Optional pattern text, for commands that can also read a table.
pub fn optional_pattern_arg() -> Arg {
    pattern_arg()
        .required(false)
        .conflicts_with("table")
}

/// File of candidate lines (positional).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("File of candidate lines")
}

/// Single candidate line (positional).
pub fn line_arg() -> Arg {
    Arg::new("line")
        .value_name("LINE")
        .required(true)
        .allow_hyphen_values(true)
        .help("Candidate line to match against")
}

/// State table file (--table).
pub fn table_arg() -> Arg {
    Arg::new("table")
        .long("table")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("Read the state table from a file instead of stdin")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Prefix matches with line numbers (-n/--line-number).
pub fn line_number_arg() -> Arg {
    Arg::new("line_number")
        .short('n')
        .long("line-number")
        .action(ArgAction::SetTrue)
        .help("Prefix each matching line with its 1-based line number")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .conflicts_with("line_number")
        .help("Print one JSON object per matching line")
}

/// Stop after N matching lines (-m/--max-count).
pub fn max_count_arg() -> Arg {
    Arg::new("max_count")
        .short('m')
        .long("max-count")
        .value_name("NUM")
        .value_parser(value_parser!(u64))
        .help("Stop after NUM matching lines")
}

/// Trace verbosity (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Also show branch visits and states that fail to consume")
}

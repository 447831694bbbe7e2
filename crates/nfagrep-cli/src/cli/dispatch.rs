//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but are populated from clap;
//! the `From` impls resolve things like color choice and verbosity.

use std::path::PathBuf;

use clap::ArgMatches;
use nfagrep_vm::Verbosity;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::compile::CompileArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::grep::GrepArgs;
use crate::commands::output::OutputOptions;
use crate::commands::search::SearchArgs;
use crate::commands::trace::TraceArgs;

pub struct CompileParams {
    pub pattern: String,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: required(m, "pattern"),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self { pattern: p.pattern }
    }
}

/// Flags shared by `search` and `grep`.
pub struct OutputParams {
    pub line_number: bool,
    pub json: bool,
    pub max_count: Option<u64>,
    pub color: ColorChoice,
}

impl OutputParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            line_number: m.get_flag("line_number"),
            json: m.get_flag("json"),
            max_count: m.get_one::<u64>("max_count").copied(),
            color: parse_color(m),
        }
    }
}

impl From<OutputParams> for OutputOptions {
    fn from(p: OutputParams) -> Self {
        Self {
            line_number: p.line_number,
            json: p.json,
            max_count: p.max_count,
            // JSON output never carries escape codes.
            color: !p.json && p.color.should_colorize(),
        }
    }
}

pub struct SearchParams {
    pub file: PathBuf,
    pub table: Option<PathBuf>,
    pub output: OutputParams,
}

impl SearchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: required(m, "file"),
            table: m.get_one::<PathBuf>("table").cloned(),
            output: OutputParams::from_matches(m),
        }
    }
}

impl From<SearchParams> for SearchArgs {
    fn from(p: SearchParams) -> Self {
        Self {
            file: p.file,
            table: p.table,
            output: p.output.into(),
        }
    }
}

pub struct GrepParams {
    pub pattern: String,
    pub file: PathBuf,
    pub output: OutputParams,
}

impl GrepParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: required(m, "pattern"),
            file: required(m, "file"),
            output: OutputParams::from_matches(m),
        }
    }
}

impl From<GrepParams> for GrepArgs {
    fn from(p: GrepParams) -> Self {
        Self {
            pattern: p.pattern,
            file: p.file,
            output: p.output.into(),
        }
    }
}

pub struct CheckParams {
    pub pattern: String,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: required(m, "pattern"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern: p.pattern,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern: Option<String>,
    pub table: Option<PathBuf>,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            table: m.get_one::<PathBuf>("table").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern: p.pattern,
            table: p.table,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern: String,
    pub line: String,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: required(m, "pattern"),
            line: required(m, "line"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            _ => Verbosity::Verbose,
        };

        Self {
            pattern: p.pattern,
            line: p.line,
            verbosity,
            color: p.color.should_colorize(),
        }
    }
}

/// Value of an argument clap has already enforced as required.
fn required<T: Clone + Send + Sync + 'static>(m: &ArgMatches, id: &str) -> T {
    m.get_one::<T>(id)
        .cloned()
        .unwrap_or_else(|| unreachable!("clap enforces required argument '{id}'"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

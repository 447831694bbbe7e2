//! Trace frontier simulation for debugging.

use nfagrep_compiler::compile;
use nfagrep_vm::{Matcher, PrintTracer, Verbosity};

use super::{CliError, fail};

pub struct TraceArgs {
    pub pattern: String,
    pub line: String,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let table = compile(&args.pattern).unwrap_or_else(|e| fail(CliError::from(e)));

    let mut tracer = PrintTracer::builder()
        .verbosity(args.verbosity)
        .colored(args.color)
        .build();
    let found = Matcher::new(&table).find_with(&args.line, &mut tracer);
    tracer.print();

    if found.is_none() {
        std::process::exit(1);
    }
}

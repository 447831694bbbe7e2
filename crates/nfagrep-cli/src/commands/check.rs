use nfagrep_compiler::compile;

pub struct CheckArgs {
    pub pattern: String,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    match check(&args) {
        Ok(summary) => println!("{summary}"),
        Err(report) => {
            eprint!("{report}");
            std::process::exit(1);
        }
    }
}

/// A one-line summary for a valid pattern, or the rendered diagnostics.
pub fn check(args: &CheckArgs) -> Result<String, String> {
    match compile(&args.pattern) {
        Ok(table) => Ok(format!("ok: pattern is valid ({} states)", table.len())),
        Err(e) => Err(e.printer(&args.pattern).colored(args.color).render()),
    }
}

use std::io::{self, Write};

use nfagrep_compiler::compile;

use super::{CliError, fail};

pub struct CompileArgs {
    pub pattern: String,
}

pub fn run(args: CompileArgs) {
    let table = compile(&args.pattern).unwrap_or_else(|e| fail(CliError::from(e)));

    let text = table.to_text();
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        eprintln!("error: failed to write table: {e}");
        std::process::exit(2);
    }
}

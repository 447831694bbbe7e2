mod cli;
mod commands;

use cli::{
    CheckParams, CompileParams, DumpParams, GrepParams, SearchParams, TraceParams, build_cli,
};

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            commands::compile::run(params.into());
        }
        Some(("search", m)) => {
            let params = SearchParams::from_matches(m);
            commands::search::run(params.into());
        }
        Some(("grep", m)) => {
            let params = GrepParams::from_matches(m);
            commands::grep::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

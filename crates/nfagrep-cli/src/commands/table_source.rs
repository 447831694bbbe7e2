use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use nfagrep_table::{StateTable, read_table};

use super::CliError;

/// Load a state table from `path`, or from stdin when no path is given.
pub fn load_table(path: Option<&Path>) -> Result<StateTable, CliError> {
    let table = match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            read_table(BufReader::new(file))?
        }
        None => read_table(io::stdin().lock())?,
    };
    Ok(table)
}

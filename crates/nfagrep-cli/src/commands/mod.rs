pub mod check;
pub mod compile;
pub mod dump;
pub mod grep;
pub mod output;
pub mod search;
pub mod table_source;
pub mod trace;

mod error;


pub use error::{CliError, fail};

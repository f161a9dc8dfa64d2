mod error;
mod runner;
mod types;


pub use error::{CliError, Result};
pub use runner::run_cli;

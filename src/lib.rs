pub mod cli;
pub mod containers;
pub mod events;
pub mod logging;
pub mod model;
pub mod sorter;
pub mod ui;

pub fn run_cli() -> Result<(), cli::CliError> {
    cli::run_cli()
}

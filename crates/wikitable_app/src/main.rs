mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use engine_logging::{engine_debug, engine_error};
use wikitable_engine::export_tables_blocking;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(cli.log_level(), cli.log_file.as_deref());

    let config = cli.into_config();
    engine_debug!("export config: {:?}", config);

    match export_tables_blocking(&config) {
        Ok(summary) => {
            engine_debug!(
                "{}: {} found, {} written, {} skipped",
                summary.title,
                summary.tables_found,
                summary.written.len(),
                summary.skipped.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            engine_error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;

use clap::Parser;
use rest_cli::{logging, Cli, UreqTransport};
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match rest_cli::run(&cli, UreqTransport::new()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

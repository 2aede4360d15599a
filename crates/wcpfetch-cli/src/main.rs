use wcpfetch_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging().expect("failed to initialize logging");

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("wcpfetch error: {:#}", err);
        std::process::exit(1);
    }
}

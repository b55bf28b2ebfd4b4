//! angular-smith - a scaffolding companion for Angular / ng-alain projects
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;

use angular_smith::Cli;
use ngsmith_core::logging;

fn main() {
    let cli = Cli::parse();

    // Logging is best-effort: a read-only data dir must not block the tool.
    if let Err(e) = logging::init() {
        eprintln!("warning: logging unavailable: {e}");
    }

    if let Err(e) = angular_smith::run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

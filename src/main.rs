//! PYQ CLI - Local-first study progress tracking

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = pyq_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

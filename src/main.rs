//! habit-cli - Local-first habit tracking

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = habit_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

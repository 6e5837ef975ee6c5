//! nodo - The simple command line task manager

use std::process::ExitCode;

fn main() -> ExitCode {
    match nodo::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

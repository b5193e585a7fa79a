//! Entry point for the `courier` command.
#![forbid(unsafe_code)]

use u_courier::cli::{self, CliError};

fn main() {
    match cli::run() {
        Ok(()) => {}
        // Help, version and usage errors print themselves with clap's exit code.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("courier: {err}");
            std::process::exit(1);
        }
    }
}

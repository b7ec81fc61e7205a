//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use fairday_cli::CliError;

fn main() {
    pretty_env_logger::init();
    match fairday_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("fairday: {err}");
            std::process::exit(1);
        }
    }
}

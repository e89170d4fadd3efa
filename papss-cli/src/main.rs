//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use papss_cli::CliError;

fn main() {
    match papss_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            #[expect(clippy::print_stderr, reason = "report fatal CLI errors to the user")]
            {
                eprintln!("papss: {err}");
            }
            std::process::exit(1);
        }
    }
}

//! Command-line entry point.

use std::io;
use std::process::ExitCode;

use heatpath::cli::{self, Command};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let opts = match cli::parse(std::env::args().skip(1)) {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            eprintln!("Error: {e}\n\n{}", cli::USAGE);
            return Ok(ExitCode::from(2));
        }
    };

    let stdout = io::stdout();
    let outcome = heatpath::run(&opts, &mut stdout.lock())?;
    if outcome.is_found() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

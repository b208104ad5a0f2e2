//! Keypad calculator CLI entry point

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use keypad_cli::{execute, Cli, CliResult};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let output = execute(&cli)?;
    writeln!(std::io::stdout().lock(), "{output}")?;
    Ok(())
}

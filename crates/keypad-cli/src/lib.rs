//! Keypad calculator CLI
//!
//! ## Usage
//!
//! ```bash
//! keypad-cli 5 + 3 =                 # prints 8
//! keypad-cli "1 2 3 4 ×" --format frame
//! keypad-cli 6 ÷ 0 = --format json
//! ```

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;

pub use commands::{parse_separator, Cli, FormatArg};
pub use config::{CliConfig, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{parse_labels, run_labels};

/// Runs the CLI for parsed arguments and returns the text to print
pub fn execute(cli: &Cli) -> CliResult<String> {
    let config = CliConfig::from_cli(cli)?;
    logging::init(&config);
    tracing::debug!(?config, "configuration resolved");
    run_labels(&config, &cli.labels())
}

//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use keypad_calculator::core::format::is_valid_separator;

use crate::error::{CliError, CliResult};

/// Replay keypad presses through the calculator and print the display
#[derive(Parser, Debug)]
#[command(name = "keypad-cli")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: FormatArg,

    /// Thousands separator used in the display (not a digit, '.', '-' or '+')
    #[arg(long, default_value_t = ',', value_parser = parse_separator)]
    pub separator: char,

    /// Smallest integer magnitude that is grouped
    #[arg(long, default_value_t = 1000)]
    pub threshold: u64,

    /// Keypad labels to press, in order (e.g. 5 + 3 =). An argument may hold
    /// several labels separated by spaces.
    #[arg(required = true)]
    pub tokens: Vec<String>,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Formatted display text only
    #[default]
    Plain,
    /// Text frame with display and keypad
    Frame,
    /// Engine state and view as JSON
    Json,
}

/// Parses `--separator`: exactly one character that cannot be read as part
/// of a number
pub fn parse_separator(value: &str) -> CliResult<char> {
    let mut chars = value.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(CliError::invalid_argument(format!(
            "separator must be a single character, got {value:?}"
        )));
    };
    if !is_valid_separator(c) {
        return Err(CliError::invalid_argument(format!(
            "separator {c:?} would read as part of the number"
        )));
    }
    Ok(c)
}

impl Cli {
    /// Splits the token arguments into individual labels
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .flat_map(|arg| arg.split_whitespace())
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        let cli = Cli::try_parse_from(["keypad-cli", "5", "+", "3", "="]).unwrap();
        assert_eq!(cli.labels(), vec!["5", "+", "3", "="]);
        assert_eq!(cli.format, FormatArg::Plain);
        assert_eq!(cli.separator, ',');
        assert_eq!(cli.threshold, 1000);
    }

    #[test]
    fn test_tokens_split_on_whitespace() {
        let cli = Cli::try_parse_from(["keypad-cli", "1 2 ×", "3 ="]).unwrap();
        assert_eq!(cli.labels(), vec!["1", "2", "×", "3", "="]);
    }

    #[test]
    fn test_lone_dash_is_a_token() {
        let cli = Cli::try_parse_from(["keypad-cli", "9", "-", "4"]).unwrap();
        assert_eq!(cli.labels(), vec!["9", "-", "4"]);
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "keypad-cli",
            "-vv",
            "--format",
            "json",
            "--separator",
            ".",
            "--threshold",
            "10000",
            "1",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, FormatArg::Json);
        assert_eq!(cli.separator, '.');
        assert_eq!(cli.threshold, 10_000);
    }

    #[test]
    fn test_separator_rejects_number_characters() {
        for bad in ["0", "5", ".", "-", "+", ",,", ""] {
            let result = Cli::try_parse_from(["keypad-cli", "--separator", bad, "1"]);
            assert!(result.is_err(), "separator {bad:?} was accepted");
        }
        assert!(matches!(
            parse_separator("."),
            Err(CliError::InvalidArgument { .. })
        ));
        assert_eq!(parse_separator("'").unwrap(), '\'');
        let cli = Cli::try_parse_from(["keypad-cli", "--separator", "_", "1"]).unwrap();
        assert_eq!(cli.separator, '_');
    }

    #[test]
    fn test_tokens_required() {
        assert!(Cli::try_parse_from(["keypad-cli"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

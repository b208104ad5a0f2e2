//! CLI configuration

use keypad_calculator::core::format::DisplayConfig;
use serde::{Deserialize, Serialize};

use crate::commands::{Cli, FormatArg};
use crate::error::CliResult;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - engine decisions
    Verbose,
    /// Debug - every token
    Debug,
}

impl Verbosity {
    /// Builds the level from `-q` and the `-v` count
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Log filter used when `RUST_LOG` is not set
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "warn,keypad_calculator=debug,keypad_cli=debug",
            Self::Debug => "warn,keypad_calculator=trace,keypad_cli=trace",
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Formatted display text
    #[default]
    Plain,
    /// Terminal frame
    Frame,
    /// JSON report
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => Self::Plain,
            FormatArg::Frame => Self::Frame,
            FormatArg::Json => Self::Json,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Emit logs as JSON
    pub log_json: bool,
    /// Output format
    pub format: OutputFormat,
    /// Display formatting
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the configuration from parsed arguments
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let display = DisplayConfig::new()
            .with_group_separator(cli.separator)?
            .with_group_threshold(cli.threshold);
        Ok(Self::new()
            .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
            .with_log_json(cli.log_json)
            .with_format(cli.format.into())
            .with_display(display))
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set JSON logging
    #[must_use]
    pub const fn with_log_json(mut self, log_json: bool) -> Self {
        self.log_json = log_json;
        self
    }

    /// Set output format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set display formatting
    #[must_use]
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 5), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(true, 3), Verbosity::Quiet);
    }

    #[test]
    fn test_filter_directives() {
        assert_eq!(Verbosity::Quiet.filter_directive(), "error");
        assert!(Verbosity::Debug
            .filter_directive()
            .contains("keypad_calculator=trace"));
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert_eq!(config.format, OutputFormat::Plain);
        assert!(!config.log_json);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from([
            "keypad-cli",
            "-q",
            "--format",
            "frame",
            "--separator",
            " ",
            "7",
        ])
        .unwrap();
        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(config.verbosity, Verbosity::Quiet);
        assert_eq!(config.format, OutputFormat::Frame);
        assert_eq!(config.display.group_separator, ' ');
        assert_eq!(config.display.group_threshold, 1000);
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_string(&CliConfig::default()).unwrap();
        assert!(json.contains("\"verbosity\":\"Normal\""));
        assert!(json.contains("\"group_separator\":\",\""));
    }
}

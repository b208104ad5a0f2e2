//! Running a token sequence and rendering the result

use keypad_calculator::core::{Calculator, Token};
use keypad_calculator::render::Session;
use keypad_calculator::terminal::TerminalRenderer;
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, CliResult};

/// Parses every label up front, so a typo fails before anything is applied
pub fn parse_labels(labels: &[&str]) -> CliResult<Vec<Token>> {
    if labels.is_empty() {
        return Err(CliError::invalid_argument("no tokens given"));
    }
    labels
        .iter()
        .map(|label| label.parse::<Token>().map_err(CliError::from))
        .collect()
}

/// Applies the labels and renders the final state in the configured format
pub fn run_labels(config: &CliConfig, labels: &[&str]) -> CliResult<String> {
    let tokens = parse_labels(labels)?;
    let calculator = Calculator::with_config(config.display.clone());
    let mut session = Session::with_calculator(calculator, TerminalRenderer::new());
    for token in &tokens {
        session.apply(*token);
    }

    let state = session.calculator().state();
    info!(
        tokens = tokens.len(),
        display = %state.display(),
        error = state.is_error(),
        "run finished"
    );

    let output = match config.format {
        OutputFormat::Plain => session.calculator().view().text,
        OutputFormat::Frame => session.renderer().frame(),
        OutputFormat::Json => session.calculator().snapshot_json()?,
    };
    Ok(output)
}

//! Calculator engine: tokens, arithmetic, and the keypad state machine
//!
//! Everything in here is presentation-agnostic. Front-ends feed [`Token`]s
//! into a [`Calculator`] and read back its observable state.

mod engine;
pub mod format;
mod number;
mod operations;
mod token;

pub use engine::{transition, Calculator, CalculatorState, Snapshot};
pub use number::{parse_operand, to_display_string};
pub use operations::{Operator, Outcome};
pub use token::Token;

use thiserror::Error;

/// Display text shown after a division by zero.
pub const DIVISION_BY_ZERO: &str = "Cannot divide by 0";

/// Result type for calculator boundary operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised at the edges of the calculator.
///
/// The engine itself never fails; these come from translating outside input
/// (labels, element ids, display options) into engine terms, or from
/// serializing state.
#[derive(Debug, Error)]
pub enum CalcError {
    /// A keypad label or token name that maps to nothing
    #[error("Unknown token: {0:?}")]
    UnknownToken(String),

    /// A mock DOM element id with no keypad button behind it
    #[error("Unknown element: {0:?}")]
    UnknownElement(String),

    /// A grouping separator that would be read as part of the number
    #[error("Invalid group separator: {0:?}")]
    InvalidSeparator(char),

    /// State snapshot could not be serialized
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

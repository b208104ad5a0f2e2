//! Binary operators and their arithmetic

use serde::{Deserialize, Serialize};

use super::number::{parse_operand, to_display_string};

/// The four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (–)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

/// What a binary operation produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A number, already serialized for the display
    Value(String),
    /// The right operand was zero under division
    DivisionByZero,
}

impl Operator {
    /// Returns the glyph shown on the keypad and in the operator indicator
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "–",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Applies the operator to two numbers.
    ///
    /// Returns `None` only for division by zero (either sign).
    #[must_use]
    pub fn apply(&self, left: f64, right: f64) -> Option<f64> {
        match self {
            Self::Add => Some(left + right),
            Self::Subtract => Some(left - right),
            Self::Multiply => Some(left * right),
            Self::Divide if right == 0.0 => None,
            Self::Divide => Some(left / right),
        }
    }

    /// Applies the operator to two display strings and serializes the result.
    #[must_use]
    pub fn evaluate(&self, left: &str, right: &str) -> Outcome {
        match self.apply(parse_operand(left), parse_operand(right)) {
            Some(value) => Outcome::Value(to_display_string(value)),
            None => Outcome::DivisionByZero,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

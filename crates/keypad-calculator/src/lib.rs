//! Keypad Calculator
//!
//! A four-function calculator engine driven by keypad tokens, with one
//! pending binary operation and a running display value. The engine is
//! presentation-agnostic; front-ends implement [`render::Renderer`] and are
//! wired to the engine through a [`render::Session`].
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for label in ["1", "2", "3", "4", "+", "6", "="] {
//!     calc.press(label).unwrap();
//! }
//! assert_eq!(calc.state().display(), "1240");
//! assert_eq!(calc.view().text, "1,240");
//!
//! // The same engine as a pure transition function
//! let state = transition(CalculatorState::new(), Token::Digit(5));
//! let state = transition(state, Token::Percent);
//! assert_eq!(state.display(), "0.05");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;
pub mod render;
pub mod terminal;
pub mod web;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::format::{format_display, format_display_with, DisplayConfig};
    pub use crate::core::{
        transition, CalcError, CalcResult, Calculator, CalculatorState, Operator, Snapshot, Token,
        DIVISION_BY_ZERO,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{ButtonKind, Keypad, KeypadButton};
    pub use crate::render::{DisplayView, RecordingRenderer, Renderer, Session};
    pub use crate::terminal::{TerminalDriver, TerminalRenderer};
    pub use crate::web::{DomElement, DomEvent, MockDom, WebDriver, WebRenderer};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new();
        calc.apply_all([
            Token::Digit(5),
            Token::Operator(Operator::Add),
            Token::Digit(3),
            Token::Equals,
        ]);
        assert_eq!(calc.state().display(), "8");
    }

    #[test]
    fn test_both_front_ends_agree() {
        let labels = ["9", "9", "9", "×", "2", "=", "±", "%"];
        let mut terminal = TerminalDriver::new();
        let mut web = WebDriver::new();
        terminal.press_all(&labels).unwrap();
        web.press_all(&labels).unwrap();
        assert_eq!(terminal.display(), "-19.98");
        assert_eq!(web.display(), terminal.display());
    }

    #[test]
    fn test_formatting_examples() {
        assert_eq!(format_display("1234"), "1,234");
        assert_eq!(format_display("999"), "999");
    }
}

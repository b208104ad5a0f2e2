//! Keypad state machine
//!
//! Holds one pending binary operation and the value being typed. Every token
//! is a total transition: bad input degrades to a no-op or to the
//! division-by-zero sentinel, never to an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::format::{DisplayConfig, DisplayView};
use super::number::{parse_operand, to_display_string};
use super::{CalcResult, Operator, Outcome, Token, DIVISION_BY_ZERO};

/// The complete state of one calculator session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    display: String,
    previous_value: Option<String>,
    pending_operator: Option<Operator>,
    awaiting_new_value: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            pending_operator: None,
            awaiting_new_value: false,
        }
    }
}

/// Applies one token to an owned state and hands the new state back.
#[must_use]
pub fn transition(mut state: CalculatorState, token: Token) -> CalculatorState {
    state.apply(token);
    state
}

impl CalculatorState {
    /// Creates the start-of-session state (`"0"`, nothing pending)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw display text: a number being typed or the error sentinel
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The saved left operand
    #[must_use]
    pub fn previous_value(&self) -> Option<&str> {
        self.previous_value.as_deref()
    }

    /// The operator waiting for its right operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Whether the next entry token starts a fresh number
    #[must_use]
    pub fn awaiting_new_value(&self) -> bool {
        self.awaiting_new_value
    }

    /// Whether the display holds the division-by-zero sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == DIVISION_BY_ZERO
    }

    /// Applies a single token in place.
    pub fn apply(&mut self, token: Token) {
        trace!(%token, display = %self.display, "applying token");
        match token {
            Token::Clear => *self = Self::default(),
            Token::Digit(_) | Token::Point => self.enter(token),
            Token::Operator(op) => self.press_operator(op),
            Token::Equals => self.press_equals(),
            Token::ToggleSign => self.toggle_sign(),
            Token::Percent => self.percent(),
        }
    }

    fn enter(&mut self, token: Token) {
        let Some(ch) = token.entry_char() else {
            return;
        };

        if self.is_error() {
            self.previous_value = None;
            self.pending_operator = None;
            self.awaiting_new_value = false;
            self.display = start_entry(ch);
            return;
        }

        if self.awaiting_new_value {
            self.awaiting_new_value = false;
            self.display = start_entry(ch);
            return;
        }

        if ch == '.' {
            if !self.display.contains('.') {
                self.display.push('.');
            }
        } else if self.display == "0" {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
    }

    fn press_operator(&mut self, op: Operator) {
        if self.is_error() {
            return;
        }

        if self.awaiting_new_value {
            debug!(from = ?self.pending_operator, to = ?op, "operator substituted");
            self.pending_operator = Some(op);
            return;
        }

        if let Some(pending) = self.pending_operator {
            if self.store_result(pending) {
                self.pending_operator = Some(op);
            }
        } else {
            self.previous_value = Some(self.display.clone());
            self.pending_operator = Some(op);
        }
        self.awaiting_new_value = true;
    }

    fn press_equals(&mut self) {
        if self.is_error() || self.previous_value.is_none() {
            return;
        }
        let Some(pending) = self.pending_operator else {
            return;
        };

        if self.store_result(pending) {
            self.pending_operator = None;
        }
        self.awaiting_new_value = true;
    }

    /// Evaluates `previous (op) display` into the display.
    ///
    /// Returns false when the result was the division-by-zero sentinel, in
    /// which case the operands and pending operator have been dropped.
    fn store_result(&mut self, op: Operator) -> bool {
        let outcome = match &self.previous_value {
            Some(left) => op.evaluate(left, &self.display),
            None => Outcome::Value(self.display.clone()),
        };

        match outcome {
            Outcome::Value(result) => {
                debug!(
                    left = ?self.previous_value,
                    %op,
                    right = %self.display,
                    %result,
                    "evaluated pending operation"
                );
                self.previous_value = Some(result.clone());
                self.display = result;
                true
            }
            Outcome::DivisionByZero => {
                debug!(left = ?self.previous_value, "division by zero");
                self.display = DIVISION_BY_ZERO.to_string();
                self.previous_value = None;
                self.pending_operator = None;
                false
            }
        }
    }

    fn toggle_sign(&mut self) {
        if self.display == "0" || self.is_error() {
            return;
        }
        self.display = match self.display.strip_prefix('-') {
            Some(unsigned) => unsigned.to_string(),
            None => format!("-{}", self.display),
        };
    }

    fn percent(&mut self) {
        if self.is_error() {
            return;
        }
        self.display = to_display_string(parse_operand(&self.display) / 100.0);
    }
}

fn start_entry(ch: char) -> String {
    if ch == '.' {
        "0.".to_string()
    } else {
        ch.to_string()
    }
}

/// Engine state together with what a front-end would draw for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Raw engine state
    pub state: CalculatorState,
    /// Formatted view of that state
    pub view: DisplayView,
}

/// A calculator session: engine state plus display configuration
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    config: DisplayConfig,
}

impl Calculator {
    /// Creates a calculator with default display settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with custom display settings
    #[must_use]
    pub fn with_config(config: DisplayConfig) -> Self {
        Self {
            state: CalculatorState::default(),
            config,
        }
    }

    /// Applies a token
    pub fn apply(&mut self, token: Token) {
        self.state.apply(token);
    }

    /// Applies a sequence of tokens in order
    pub fn apply_all<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            self.apply(token);
        }
    }

    /// Parses a keypad label and applies it
    pub fn press(&mut self, label: &str) -> CalcResult<()> {
        let token = label.parse()?;
        self.apply(token);
        Ok(())
    }

    /// Returns the engine state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the display configuration
    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Returns what a front-end should draw right now
    #[must_use]
    pub fn view(&self) -> DisplayView {
        DisplayView::from_state(&self.state, &self.config)
    }

    /// Resets to the start-of-session state
    pub fn reset(&mut self) {
        self.apply(Token::Clear);
    }

    /// Captures the state and its view
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            view: self.view(),
        }
    }

    /// Serializes [`Self::snapshot`] as pretty-printed JSON
    pub fn snapshot_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

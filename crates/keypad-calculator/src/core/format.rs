//! Display formatting
//!
//! Read-only presentation of the display text: thousands grouping on the
//! integer part, fractional part passed through untouched. Nothing here feeds
//! back into the engine.

use serde::{Deserialize, Serialize};

use super::{CalcError, CalcResult, CalculatorState, DIVISION_BY_ZERO};

/// Display formatting options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Character inserted between digit groups
    pub group_separator: char,
    /// Smallest absolute integer value that gets grouped
    pub group_threshold: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_separator: ',',
            group_threshold: 1000,
        }
    }
}

impl DisplayConfig {
    /// Create a default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the group separator.
    ///
    /// Digits, `.`, `-` and `+` are rejected: they would make the grouped
    /// text read as a different number.
    pub fn with_group_separator(mut self, separator: char) -> CalcResult<Self> {
        if !is_valid_separator(separator) {
            return Err(CalcError::InvalidSeparator(separator));
        }
        self.group_separator = separator;
        Ok(self)
    }

    /// Set the grouping threshold
    #[must_use]
    pub const fn with_group_threshold(mut self, threshold: u64) -> Self {
        self.group_threshold = threshold;
        self
    }
}

/// Returns true if `c` can separate digit groups without changing the number
#[must_use]
pub const fn is_valid_separator(c: char) -> bool {
    !matches!(c, '0'..='9' | '.' | '-' | '+')
}

/// Formats display text for presentation with the default config.
#[must_use]
pub fn format_display(display: &str) -> String {
    format_display_with(display, &DisplayConfig::default())
}

/// Formats display text for presentation.
///
/// The sentinel and anything whose integer part is not a plain digit run
/// (`1e+21`, `NaN`, `Infinity`) are returned unchanged.
#[must_use]
pub fn format_display_with(display: &str, config: &DisplayConfig) -> String {
    if display == DIVISION_BY_ZERO {
        return display.to_string();
    }

    let (integer, fraction) = match display.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (display, None),
    };

    let Some(grouped) = group_integer(integer, config) else {
        return display.to_string();
    };

    match fraction {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}

/// Groups an optionally signed run of digits. `None` if it is anything else.
fn group_integer(integer: &str, config: &DisplayConfig) -> Option<String> {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    if !exceeds_threshold(significant, config.group_threshold) {
        return Some(integer.to_string());
    }

    let mut grouped = String::with_capacity(significant.len() + significant.len() / 3);
    for (i, ch) in significant.chars().enumerate() {
        if i > 0 && (significant.len() - i) % 3 == 0 {
            grouped.push(config.group_separator);
        }
        grouped.push(ch);
    }
    Some(format!("{sign}{grouped}"))
}

/// Compares a digit string against the threshold without parsing into a
/// fixed-width integer.
fn exceeds_threshold(significant: &str, threshold: u64) -> bool {
    let threshold = threshold.to_string();
    match significant.len().cmp(&threshold.len()) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => significant >= threshold.as_str(),
    }
}

/// Observable calculator state, ready for a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayView {
    /// Formatted display text
    pub text: String,
    /// Glyph of the pending operator, hidden while in the error state
    pub pending_operator: Option<String>,
    /// Whether the display shows the division-by-zero sentinel
    pub is_error: bool,
}

impl DisplayView {
    /// Builds the view of a state
    #[must_use]
    pub fn from_state(state: &CalculatorState, config: &DisplayConfig) -> Self {
        let is_error = state.is_error();
        Self {
            text: format_display_with(state.display(), config),
            pending_operator: state
                .pending_operator()
                .filter(|_| !is_error)
                .map(|op| op.symbol().to_string()),
            is_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{transition, Token};

    #[test]
    fn test_grouping_threshold() {
        assert_eq!(format_display("999"), "999");
        assert_eq!(format_display("1000"), "1,000");
        assert_eq!(format_display("1234"), "1,234");
        assert_eq!(format_display("1234567"), "1,234,567");
    }

    #[test]
    fn test_negative_grouping() {
        assert_eq!(format_display("-999"), "-999");
        assert_eq!(format_display("-1234"), "-1,234");
    }

    #[test]
    fn test_fraction_passed_through() {
        assert_eq!(format_display("1234.5600"), "1,234.5600");
        assert_eq!(format_display("12."), "12.");
        assert_eq!(format_display("0.000123"), "0.000123");
        assert_eq!(format_display("-0."), "-0.");
    }

    #[test]
    fn test_long_integers_keep_every_digit() {
        assert_eq!(
            format_display("12345678901234567890"),
            "12,345,678,901,234,567,890"
        );
    }

    #[test]
    fn test_sentinel_unchanged() {
        assert_eq!(format_display(DIVISION_BY_ZERO), DIVISION_BY_ZERO);
    }

    #[test]
    fn test_non_digit_integer_parts_unchanged() {
        assert_eq!(format_display("1e+21"), "1e+21");
        assert_eq!(format_display("1.5e-7"), "1.5e-7");
        assert_eq!(format_display("NaN"), "NaN");
        assert_eq!(format_display("-Infinity"), "-Infinity");
    }

    #[test]
    fn test_custom_separator_and_threshold() {
        let config = DisplayConfig::new()
            .with_group_separator(' ')
            .unwrap()
            .with_group_threshold(10_000);
        assert_eq!(format_display_with("9999", &config), "9999");
        assert_eq!(format_display_with("10000", &config), "10 000");
    }

    #[test]
    fn test_separators_that_read_as_numbers_are_rejected() {
        for c in ['0', '7', '.', '-', '+'] {
            assert!(!is_valid_separator(c));
            assert!(matches!(
                DisplayConfig::new().with_group_separator(c),
                Err(CalcError::InvalidSeparator(rejected)) if rejected == c
            ));
        }
        for c in [',', ' ', '\'', '_', '\u{202f}'] {
            assert!(is_valid_separator(c));
            assert_eq!(DisplayConfig::new().with_group_separator(c).unwrap().group_separator, c);
        }
    }

    #[test]
    fn test_view_shows_pending_operator() {
        let state = transition(CalculatorState::new(), Token::Digit(4));
        let state = transition(state, "×".parse().unwrap());
        let view = DisplayView::from_state(&state, &DisplayConfig::default());
        assert_eq!(view.text, "4");
        assert_eq!(view.pending_operator.as_deref(), Some("×"));
        assert!(!view.is_error);
    }

    #[test]
    fn test_view_hides_operator_on_error() {
        let state = ["6", "/", "0", "="]
            .iter()
            .fold(CalculatorState::new(), |s, l| transition(s, l.parse().unwrap()));
        let view = DisplayView::from_state(&state, &DisplayConfig::default());
        assert!(view.is_error);
        assert_eq!(view.pending_operator, None);
        assert_eq!(view.text, DIVISION_BY_ZERO);
    }
}

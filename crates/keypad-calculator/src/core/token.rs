//! Input tokens: one per keypad press

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CalcError, Operator};

/// One discrete unit of keypad input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Point,
    /// A binary operator
    Operator(Operator),
    /// Reset everything
    Clear,
    /// Flip the sign of the display
    ToggleSign,
    /// Divide the display by 100
    Percent,
    /// Evaluate the pending operation
    Equals,
}

impl Token {
    /// Returns the label printed on the keypad button for this token
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Clear => "C".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
            Self::Equals => "=".to_string(),
        }
    }

    /// The character appended to the display for entry tokens
    #[must_use]
    pub(crate) fn entry_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Point => Some('.'),
            _ => None,
        }
    }
}

impl FromStr for Token {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s.trim() {
            "." | "point" => Self::Point,
            "+" | "add" => Self::Operator(Operator::Add),
            "-" | "−" | "–" | "subtract" => Self::Operator(Operator::Subtract),
            "*" | "×" | "x" | "multiply" => Self::Operator(Operator::Multiply),
            "/" | "÷" | "divide" => Self::Operator(Operator::Divide),
            "C" | "c" | "clear" => Self::Clear,
            "±" | "+/-" | "toggle-sign" => Self::ToggleSign,
            "%" | "percent" => Self::Percent,
            "=" | "equals" => Self::Equals,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(c as u8 - b'0'),
                    _ => return Err(CalcError::UnknownToken(s.to_string())),
                }
            }
        };
        Ok(token)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        for d in 0..=9u8 {
            assert_eq!(d.to_string().parse::<Token>().unwrap(), Token::Digit(d));
        }
    }

    #[test]
    fn test_parse_operator_aliases() {
        for label in ["-", "−", "–", "subtract"] {
            assert_eq!(
                label.parse::<Token>().unwrap(),
                Token::Operator(Operator::Subtract)
            );
        }
        for label in ["*", "×", "x"] {
            assert_eq!(
                label.parse::<Token>().unwrap(),
                Token::Operator(Operator::Multiply)
            );
        }
        assert_eq!(
            "÷".parse::<Token>().unwrap(),
            Token::Operator(Operator::Divide)
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("C".parse::<Token>().unwrap(), Token::Clear);
        assert_eq!("±".parse::<Token>().unwrap(), Token::ToggleSign);
        assert_eq!("toggle-sign".parse::<Token>().unwrap(), Token::ToggleSign);
        assert_eq!("%".parse::<Token>().unwrap(), Token::Percent);
        assert_eq!("=".parse::<Token>().unwrap(), Token::Equals);
        assert_eq!(" . ".parse::<Token>().unwrap(), Token::Point);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "12".parse::<Token>(),
            Err(CalcError::UnknownToken(s)) if s == "12"
        ));
        assert!("sqrt".parse::<Token>().is_err());
        assert!("".parse::<Token>().is_err());
    }

    #[test]
    fn test_label_parses_back() {
        let tokens = [
            Token::Digit(7),
            Token::Point,
            Token::Operator(Operator::Subtract),
            Token::Clear,
            Token::ToggleSign,
            Token::Percent,
            Token::Equals,
        ];
        for token in tokens {
            assert_eq!(token.label().parse::<Token>().unwrap(), token);
        }
    }

    #[test]
    fn test_entry_chars() {
        assert_eq!(Token::Digit(4).entry_char(), Some('4'));
        assert_eq!(Token::Point.entry_char(), Some('.'));
        assert_eq!(Token::Equals.entry_char(), None);
        assert_eq!(Token::Percent.entry_char(), None);
    }
}

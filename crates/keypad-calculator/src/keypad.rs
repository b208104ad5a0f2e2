//! Keypad layout shared by every front-end
//!
//! ```text
//! [ C ] [ ± ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ – ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```

use crate::core::{Operator, Token};

/// Visual category of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digits and the decimal point
    Entry,
    /// One of the four operators
    Operator,
    /// The equals key
    Equals,
    /// Clear, toggle-sign and percent
    Function,
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Token sent to the engine
    pub token: Token,
    /// Row in the grid
    pub row: usize,
    /// Column in the grid
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button at a grid position
    #[must_use]
    pub const fn new(token: Token, row: usize, col: usize) -> Self {
        Self { token, row, col }
    }

    /// The text printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.token.label()
    }

    /// Stable element id, e.g. `btn-7`, `btn-divide`, `btn-toggle-sign`
    #[must_use]
    pub fn id(&self) -> String {
        let name = match self.token {
            Token::Digit(d) => return format!("btn-{d}"),
            Token::Point => "point",
            Token::Operator(Operator::Add) => "add",
            Token::Operator(Operator::Subtract) => "subtract",
            Token::Operator(Operator::Multiply) => "multiply",
            Token::Operator(Operator::Divide) => "divide",
            Token::Clear => "clear",
            Token::ToggleSign => "toggle-sign",
            Token::Percent => "percent",
            Token::Equals => "equals",
        };
        format!("btn-{name}")
    }

    /// Visual category
    #[must_use]
    pub const fn kind(&self) -> ButtonKind {
        match self.token {
            Token::Digit(_) | Token::Point => ButtonKind::Entry,
            Token::Operator(_) => ButtonKind::Operator,
            Token::Equals => ButtonKind::Equals,
            Token::Clear | Token::ToggleSign | Token::Percent => ButtonKind::Function,
        }
    }

    /// Number of grid columns the button spans (the zero key is wide)
    #[must_use]
    pub const fn span(&self) -> usize {
        if matches!(self.token, Token::Digit(0)) {
            2
        } else {
            1
        }
    }
}

/// The standard calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Grid width in columns
    pub const COLUMNS: usize = 4;

    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let layout: [&[Token]; 5] = [
            &[
                Token::Clear,
                Token::ToggleSign,
                Token::Percent,
                Token::Operator(Operator::Divide),
            ],
            &[
                Token::Digit(7),
                Token::Digit(8),
                Token::Digit(9),
                Token::Operator(Operator::Multiply),
            ],
            &[
                Token::Digit(4),
                Token::Digit(5),
                Token::Digit(6),
                Token::Operator(Operator::Subtract),
            ],
            &[
                Token::Digit(1),
                Token::Digit(2),
                Token::Digit(3),
                Token::Operator(Operator::Add),
            ],
            &[Token::Digit(0), Token::Point, Token::Equals],
        ];

        let rows = layout
            .iter()
            .enumerate()
            .map(|(row, tokens)| {
                let mut col = 0;
                tokens
                    .iter()
                    .map(|&token| {
                        let button = KeypadButton::new(token, row, col);
                        col += button.span();
                        button
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { rows }
    }

    /// Returns the rows of buttons
    #[must_use]
    pub fn rows(&self) -> &[Vec<KeypadButton>] {
        &self.rows
    }

    /// Iterates over every button in row-major order
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.rows.iter().flatten()
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons().count()
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows
            .get(row)?
            .iter()
            .find(|b| (b.col..b.col + b.span()).contains(&col))
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons().find(|b| b.id() == id)
    }

    /// Finds the button that sends a token
    #[must_use]
    pub fn find_by_token(&self, token: Token) -> Option<&KeypadButton> {
        self.buttons().find(|b| b.token == token)
    }
}

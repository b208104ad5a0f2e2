//! Terminal front-end
//!
//! Draws the calculator as a boxed text frame:
//!
//! ```text
//! +------------------------+
//! |×                  1,234|
//! +------------------------+
//! |[ C  ][ ±  ][ %  ][ ÷  ]|
//! |[ 7  ][ 8  ][ 9  ][ ×  ]|
//! |[ 4  ][ 5  ][ 6  ][ –  ]|
//! |[ 1  ][ 2  ][ 3  ][ +  ]|
//! |[    0     ][ .  ][ =  ]|
//! +------------------------+
//! ```

use crate::core::{CalcError, CalcResult, Token};
use crate::driver::CalculatorDriver;
use crate::keypad::{Keypad, KeypadButton};
use crate::render::{DisplayView, Renderer, Session};

/// Characters per keypad column
const CELL_WIDTH: usize = 6;

/// Inner width of the frame
const INNER_WIDTH: usize = CELL_WIDTH * Keypad::COLUMNS;

/// Line index of the display inside a frame
const DISPLAY_LINE: usize = 1;

/// Renders into an in-memory text frame
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    keypad: Keypad,
    lines: Vec<String>,
    last_view: Option<DisplayView>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    /// Creates a renderer with an empty frame
    #[must_use]
    pub fn new() -> Self {
        Self {
            keypad: Keypad::new(),
            lines: Vec::new(),
            last_view: None,
        }
    }

    /// The last drawn frame, one entry per line
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The last drawn frame as a single string
    #[must_use]
    pub fn frame(&self) -> String {
        self.lines.join("\n")
    }

    /// The view behind the last drawn frame.
    ///
    /// The frame may shorten long display text; this keeps it whole.
    #[must_use]
    pub fn last_view(&self) -> Option<&DisplayView> {
        self.last_view.as_ref()
    }

    /// The inner text of the display line, or empty before the first draw
    #[must_use]
    pub fn display_line(&self) -> &str {
        self.lines
            .get(DISPLAY_LINE)
            .and_then(|line| line.strip_prefix('|'))
            .and_then(|line| line.strip_suffix('|'))
            .unwrap_or_default()
    }

    fn display_row(view: &DisplayView) -> String {
        let indicator = view.pending_operator.as_deref().unwrap_or(" ");
        let room = INNER_WIDTH - indicator.chars().count();
        let text = fit(&view.text, room);
        format!("|{indicator}{text:>room$}|")
    }

    fn keypad_row(row: &[KeypadButton]) -> String {
        let cells: String = row
            .iter()
            .map(|button| {
                let inner = CELL_WIDTH * button.span() - 2;
                format!("[{:^inner$}]", button.label())
            })
            .collect();
        let width = INNER_WIDTH;
        format!("|{cells:<width$}|")
    }
}

/// Keeps the rightmost characters of `text` so it fits in `width`
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    let tail: String = text.chars().skip(len - width + 1).collect();
    format!("…{tail}")
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &DisplayView) {
        let border = format!("+{}+", "-".repeat(INNER_WIDTH));
        let mut lines = Vec::with_capacity(self.keypad.rows().len() + 4);
        lines.push(border.clone());
        lines.push(Self::display_row(view));
        lines.push(border.clone());
        lines.extend(self.keypad.rows().iter().map(|row| Self::keypad_row(row)));
        lines.push(border);
        self.lines = lines;
        self.last_view = Some(view.clone());
    }
}

/// Driver for the terminal front-end
#[derive(Debug)]
pub struct TerminalDriver {
    session: Session<TerminalRenderer>,
}

impl Default for TerminalDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalDriver {
    /// Creates a driver with a fresh session
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: Session::new(TerminalRenderer::new()),
        }
    }

    /// Returns the underlying session
    #[must_use]
    pub fn session(&self) -> &Session<TerminalRenderer> {
        &self.session
    }

    /// The last drawn frame
    #[must_use]
    pub fn frame(&self) -> String {
        self.session.renderer().frame()
    }
}

impl CalculatorDriver for TerminalDriver {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        let token: Token = label.parse()?;
        let on_keypad = self
            .session
            .renderer()
            .keypad
            .find_by_token(token)
            .is_some();
        if !on_keypad {
            return Err(CalcError::UnknownToken(label.to_string()));
        }
        self.session.apply(token);
        Ok(())
    }

    fn display(&self) -> String {
        self.session
            .renderer()
            .last_view()
            .map(|view| view.text.clone())
            .unwrap_or_default()
    }

    fn pending_operator(&self) -> Option<String> {
        self.session
            .renderer()
            .display_line()
            .chars()
            .next()
            .filter(|c| *c != ' ')
            .map(String::from)
    }

    fn is_error(&self) -> bool {
        self.session
            .renderer()
            .last_view()
            .is_some_and(|view| view.is_error)
    }
}

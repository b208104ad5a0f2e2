//! Renderer abstraction and the session that drives it
//!
//! A front-end only has to implement [`Renderer`]: it receives the
//! observable state after every token and redraws. The engine never knows
//! which front-end is attached.

use crate::core::{CalcResult, Calculator, Token};

pub use crate::core::format::DisplayView;

/// Something that can draw the calculator's observable state
pub trait Renderer {
    /// Redraws from the given view
    fn render(&mut self, view: &DisplayView);
}

/// Renderer that keeps every frame it was asked to draw
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    frames: Vec<DisplayView>,
}

impl RecordingRenderer {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames, oldest first
    #[must_use]
    pub fn frames(&self) -> &[DisplayView] {
        &self.frames
    }

    /// The most recent frame
    #[must_use]
    pub fn last(&self) -> Option<&DisplayView> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &DisplayView) {
        self.frames.push(view.clone());
    }
}

/// One calculator wired to one renderer
#[derive(Debug)]
pub struct Session<R: Renderer> {
    calculator: Calculator,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Creates a session with a fresh calculator and draws the first frame
    pub fn new(renderer: R) -> Self {
        Self::with_calculator(Calculator::new(), renderer)
    }

    /// Creates a session around an existing calculator and draws it
    pub fn with_calculator(calculator: Calculator, renderer: R) -> Self {
        let mut session = Self {
            calculator,
            renderer,
        };
        session.redraw();
        session
    }

    /// Applies a token and redraws
    pub fn apply(&mut self, token: Token) {
        self.calculator.apply(token);
        self.redraw();
    }

    /// Parses a label, applies it and redraws
    pub fn press(&mut self, label: &str) -> CalcResult<()> {
        let token = label.parse()?;
        self.apply(token);
        Ok(())
    }

    /// Forces a redraw of the current state
    pub fn redraw(&mut self) {
        let view = self.calculator.view();
        self.renderer.render(&view);
    }

    /// Returns the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the renderer
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer mutably
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Splits the session back into its parts
    pub fn into_parts(self) -> (Calculator, R) {
        (self.calculator, self.renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    #[test]
    fn test_session_draws_initial_frame() {
        let session = Session::new(RecordingRenderer::new());
        let frames = session.renderer().frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].text, "0");
        assert_eq!(frames[0].pending_operator, None);
    }

    #[test]
    fn test_session_redraws_after_every_token() {
        let mut session = Session::new(RecordingRenderer::new());
        for label in ["1", "2", "3", "4", "+"] {
            session.press(label).unwrap();
        }
        let texts: Vec<&str> = session
            .renderer()
            .frames()
            .iter()
            .map(|f| f.text.as_str())
            .collect();
        assert_eq!(texts, vec!["0", "1", "12", "123", "1,234", "1,234"]);
        assert_eq!(
            session.renderer().last().unwrap().pending_operator.as_deref(),
            Some("+")
        );
    }

    #[test]
    fn test_session_rejects_unknown_label_without_redraw() {
        let mut session = Session::new(RecordingRenderer::new());
        assert!(session.press("sqrt").is_err());
        assert_eq!(session.renderer().frames().len(), 1);
    }

    #[test]
    fn test_session_into_parts() {
        let mut session = Session::new(RecordingRenderer::new());
        session.apply(Token::Digit(9));
        session.apply(Token::Operator(Operator::Divide));
        let (calculator, renderer) = session.into_parts();
        assert_eq!(calculator.state().previous_value(), Some("9"));
        assert_eq!(renderer.frames().len(), 3);
    }

    #[test]
    fn test_session_with_configured_calculator() {
        use crate::core::format::DisplayConfig;

        let config = DisplayConfig::new().with_group_separator('\'').unwrap();
        let calculator = Calculator::with_config(config);
        let mut session = Session::with_calculator(calculator, RecordingRenderer::new());
        for label in ["5", "0", "0", "0"] {
            session.press(label).unwrap();
        }
        assert_eq!(session.renderer().last().unwrap().text, "5'000");
    }
}

//! Web front-end
//!
//! Renders the calculator into a [`MockDom`] shaped like the browser view and
//! turns button clicks back into tokens.

mod dom;

pub use dom::{DomElement, DomEvent, MockDom, MAX_EVENT_HISTORY};

use tracing::trace;

use crate::core::{CalcError, CalcResult, Token};
use crate::driver::CalculatorDriver;
use crate::keypad::{ButtonKind, Keypad, KeypadButton};
use crate::render::{DisplayView, Renderer, Session};

/// Id of the element holding the display text
pub const DISPLAY_VALUE_ID: &str = "display-value";

/// Id of the pending-operator indicator
pub const OPERATOR_INDICATOR_ID: &str = "operator-indicator";

const DISPLAY_ID: &str = "display";

/// Renders into a mock DOM
#[derive(Debug, Clone)]
pub struct WebRenderer {
    dom: MockDom,
    keypad: Keypad,
}

impl Default for WebRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl WebRenderer {
    /// Builds the calculator document
    #[must_use]
    pub fn new() -> Self {
        let keypad = Keypad::new();

        let display = DomElement::new("div")
            .with_id(DISPLAY_ID)
            .with_class("display")
            .with_child(
                DomElement::new("span")
                    .with_id(DISPLAY_VALUE_ID)
                    .with_class("display-value")
                    .with_attr("data-error", "false")
                    .with_text("0"),
            );

        let grid = keypad.rows().iter().fold(
            DomElement::new("div")
                .with_id("button-grid")
                .with_class("button-grid")
                .with_attr("role", "group")
                .with_attr("aria-label", "Calculator keypad"),
            |grid, row| {
                let row_el = row
                    .iter()
                    .fold(DomElement::new("div").with_class("button-row"), |row_el, b| {
                        row_el.with_child(button_element(b))
                    });
                grid.with_child(row_el)
            },
        );

        let root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator")
            .with_child(display)
            .with_child(grid);

        Self {
            dom: MockDom::new(root),
            keypad,
        }
    }

    /// Returns the document
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns the keypad the document was built from
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Records a click and resolves it to the token of the clicked button
    pub fn click(&mut self, element_id: &str) -> CalcResult<Token> {
        self.dom.dispatch_event(DomEvent::click(element_id));
        self.keypad
            .find_by_id(element_id)
            .map(|b| b.token)
            .ok_or_else(|| CalcError::UnknownElement(element_id.to_string()))
    }
}

fn button_element(button: &KeypadButton) -> DomElement {
    let mut el = DomElement::new("button")
        .with_id(&button.id())
        .with_class("button")
        .with_attr("type", "button")
        .with_text(&button.label());
    if button.span() > 1 {
        el.add_class("button-zero");
    }
    match button.kind() {
        ButtonKind::Operator => el.add_class("button-operator"),
        ButtonKind::Equals => el.add_class("button-equals"),
        ButtonKind::Entry | ButtonKind::Function => {}
    }
    el
}

impl Renderer for WebRenderer {
    fn render(&mut self, view: &DisplayView) {
        if let Some(value) = self.dom.get_element_mut(DISPLAY_VALUE_ID) {
            value.set_text(&view.text);
            value.set_attr("data-error", if view.is_error { "true" } else { "false" });
        }

        let Some(display) = self.dom.get_element_mut(DISPLAY_ID) else {
            return;
        };
        display.remove_child(OPERATOR_INDICATOR_ID);
        if let Some(op) = &view.pending_operator {
            display.children.push(
                DomElement::new("span")
                    .with_id(OPERATOR_INDICATOR_ID)
                    .with_class("operator-indicator")
                    .with_attr("aria-live", "polite")
                    .with_text(op),
            );
        }
        trace!(text = %view.text, operator = ?view.pending_operator, "web view rendered");
    }
}

/// Driver for the web front-end: presses become clicks on button elements
#[derive(Debug)]
pub struct WebDriver {
    session: Session<WebRenderer>,
}

impl Default for WebDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WebDriver {
    /// Creates a driver with a fresh session
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: Session::new(WebRenderer::new()),
        }
    }

    /// Returns the underlying session
    #[must_use]
    pub fn session(&self) -> &Session<WebRenderer> {
        &self.session
    }

    /// Returns the document
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.session.renderer().dom()
    }

    /// Clicks an element by id
    pub fn click(&mut self, element_id: &str) -> CalcResult<()> {
        let token = self.session.renderer_mut().click(element_id)?;
        self.session.apply(token);
        Ok(())
    }
}

impl CalculatorDriver for WebDriver {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        let token: Token = label.parse()?;
        let id = self
            .session
            .renderer()
            .keypad()
            .find_by_token(token)
            .map(KeypadButton::id)
            .ok_or_else(|| CalcError::UnknownToken(label.to_string()))?;
        self.click(&id)
    }

    fn display(&self) -> String {
        self.dom()
            .get_element_text(DISPLAY_VALUE_ID)
            .unwrap_or_default()
            .to_string()
    }

    fn pending_operator(&self) -> Option<String> {
        self.dom()
            .get_element_text(OPERATOR_INDICATOR_ID)
            .map(str::to_string)
    }

    fn is_error(&self) -> bool {
        self.dom()
            .get_element(DISPLAY_VALUE_ID)
            .and_then(|e| e.get_attr("data-error"))
            == Some("true")
    }
}

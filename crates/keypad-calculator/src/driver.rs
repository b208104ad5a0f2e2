//! Unified calculator driver
//!
//! Behavioral checks are written once against [`CalculatorDriver`] and run
//! against every front-end. Drivers press keypad buttons and read back from
//! the renderer (its document, or the view behind its frame), so the checks
//! cover the renderers as well as the engine.

use crate::core::{CalcResult, DIVISION_BY_ZERO};

/// Interface implemented by every front-end driver
pub trait CalculatorDriver {
    /// Presses the keypad button with the given label
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// The display text as drawn
    fn display(&self) -> String;

    /// The operator indicator as drawn, if any
    fn pending_operator(&self) -> Option<String>;

    /// Whether the front-end shows the error state
    fn is_error(&self) -> bool;

    /// Presses clear
    fn clear(&mut self) -> CalcResult<()> {
        self.press("C")
    }

    /// Presses several buttons in order
    fn press_all(&mut self, labels: &[&str]) -> CalcResult<()> {
        labels.iter().try_for_each(|label| self.press(label))
    }
}

/// Checks entry rules: leading zero, decimal point, grouping
pub fn verify_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_all(&["0", "0", "5"])?;
    assert_eq!(driver.display(), "5");
    driver.clear()?;

    driver.press_all(&[".", "5", "."])?;
    assert_eq!(driver.display(), "0.5");
    driver.clear()?;

    driver.press_all(&["1", "2", "3", "4"])?;
    assert_eq!(driver.display(), "1,234");
    driver.clear()?;

    driver.press_all(&["9", "9", "9"])?;
    assert_eq!(driver.display(), "999");
    driver.clear()?;

    driver.press_all(&["9"; 21])?;
    assert_eq!(driver.display(), "999,999,999,999,999,999,999");
    driver.clear()
}

/// Checks the four operations through equals
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_all(&["5", "+", "3", "="])?;
    assert_eq!(driver.display(), "8");
    driver.clear()?;

    driver.press_all(&["1", "0", "–", "4", "="])?;
    assert_eq!(driver.display(), "6");
    driver.clear()?;

    driver.press_all(&["6", "×", "7", "="])?;
    assert_eq!(driver.display(), "42");
    driver.clear()?;

    driver.press_all(&["2", "0", "÷", "8", "="])?;
    assert_eq!(driver.display(), "2.5");
    driver.clear()
}

/// Checks chaining and operator substitution
pub fn verify_operator_chaining<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_all(&["2", "+", "3", "×"])?;
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.pending_operator().as_deref(), Some("×"));
    driver.press_all(&["4", "="])?;
    assert_eq!(driver.display(), "20");
    assert_eq!(driver.pending_operator(), None);
    driver.clear()?;

    driver.press_all(&["9", "+", "÷"])?;
    assert_eq!(driver.display(), "9");
    assert_eq!(driver.pending_operator().as_deref(), Some("÷"));
    driver.clear()
}

/// Checks the division-by-zero sentinel and recovery
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_all(&["6", "÷", "0", "="])?;
    assert!(driver.is_error());
    assert_eq!(driver.display(), DIVISION_BY_ZERO);
    assert_eq!(driver.pending_operator(), None);

    driver.press_all(&["+", "="])?;
    assert!(driver.is_error());

    driver.press("3")?;
    assert!(!driver.is_error());
    assert_eq!(driver.display(), "3");
    driver.clear()
}

/// Checks toggle-sign and percent
pub fn verify_sign_and_percent<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press("±")?;
    assert_eq!(driver.display(), "0");

    driver.press_all(&["7", "±"])?;
    assert_eq!(driver.display(), "-7");
    driver.press("±")?;
    assert_eq!(driver.display(), "7");
    driver.clear()?;

    driver.press_all(&["5", "0", "%"])?;
    assert_eq!(driver.display(), "0.5");
    driver.clear()
}

/// Runs every check
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_entry(driver)?;
    verify_basic_arithmetic(driver)?;
    verify_operator_chaining(driver)?;
    verify_division_by_zero(driver)?;
    verify_sign_and_percent(driver)
}

//! Conversion between display strings and `f64`
//!
//! Serialization follows the usual shortest round-trip rules for doubles,
//! switching to exponent notation for very large and very small magnitudes.
//! Float artifacts such as `0.1 + 0.2 = 0.30000000000000004` are kept.

/// Magnitude at or above which results print in exponent form
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which non-zero results print in exponent form
const EXPONENT_LOWER: f64 = 1e-6;

/// Parses a display string as a number. Unparseable text becomes NaN.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

/// Serializes a number to its minimal display form.
#[must_use]
pub fn to_display_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Covers negative zero as well
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        format!("{value}")
    } else {
        with_signed_exponent(&format!("{value:e}"))
    }
}

/// Turns `1e21` into `1e+21`; negative exponents already carry a sign.
fn with_signed_exponent(formatted: &str) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_plain_and_partial_literals() {
        assert_eq!(parse_operand("42"), 42.0);
        assert_eq!(parse_operand("-3.5"), -3.5);
        assert_eq!(parse_operand("0."), 0.0);
        assert_eq!(parse_operand("-0."), 0.0);
        assert_eq!(parse_operand("1e+21"), 1e21);
    }

    #[test]
    fn test_parse_garbage_is_nan() {
        assert!(parse_operand("Cannot divide by 0").is_nan());
        assert!(parse_operand("-").is_nan());
    }

    #[test]
    fn test_integral_values_have_no_fraction() {
        assert_eq!(to_display_string(8.0), "8");
        assert_eq!(to_display_string(-1200.0), "-1200");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(to_display_string(0.5), "0.5");
        assert_eq!(to_display_string(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(to_display_string(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        assert_eq!(to_display_string(-0.0), "0");
    }

    #[test]
    fn test_large_magnitudes_use_exponent() {
        assert_eq!(to_display_string(1e21), "1e+21");
        assert_eq!(to_display_string(-2.5e22), "-2.5e+22");
        assert_eq!(to_display_string(1e20), "100000000000000000000");
    }

    #[test]
    fn test_small_magnitudes_use_exponent() {
        assert_eq!(to_display_string(1.5e-7), "1.5e-7");
        assert_eq!(to_display_string(0.000001), "0.000001");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(to_display_string(f64::NAN), "NaN");
        assert_eq!(to_display_string(f64::INFINITY), "Infinity");
        assert_eq!(to_display_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_non_finite_text_parses_back() {
        assert_eq!(parse_operand("Infinity"), f64::INFINITY);
        assert_eq!(parse_operand("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_operand("NaN").is_nan());
    }

    proptest! {
        #[test]
        fn prop_serialization_round_trips(value in proptest::num::f64::NORMAL) {
            let text = to_display_string(value);
            prop_assert_eq!(parse_operand(&text), value);
        }
    }
}

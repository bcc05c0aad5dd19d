//! The three core operations. All of them are pure and infallible, except
//! [`checked_divide`] which reports division by zero as an error.

use crate::utils::error::{OpsError, Result};

/// Formats `name` as `"Hello, {name}!"` without touching its contents.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Unguarded division: a zero divisor yields `inf`, `-inf` or `NaN`.
pub fn divide(x: f64, y: f64) -> f64 {
    x / y
}

/// Like [`divide`], but a zero divisor (of either sign) is an error.
pub fn checked_divide(x: f64, y: f64) -> Result<f64> {
    if y == 0.0 {
        return Err(OpsError::DivisionByZero { dividend: x });
    }
    Ok(divide(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet() {
        assert_eq!(greet("World"), "Hello, World!");
        assert_eq!(greet(""), "Hello, !");
        assert_eq!(greet("  Ada "), "Hello,   Ada !");
        assert_eq!(greet("<b>"), "Hello, <b>!");
    }

    #[test]
    fn test_greet_matches_concatenation() {
        for name in ["a", "Ünïcödé", "😀", "multi\nline"] {
            assert_eq!(greet(name), format!("Hello, {}!", name));
            assert_eq!(greet(name), "Hello, ".to_string() + name + "!");
        }
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(subtract(3.0, 5.0), -2.0);
        assert_eq!(subtract(-1.5, -1.5), 0.0);
    }

    #[test]
    fn test_subtract_antisymmetry() {
        let pairs = [(5.0, 3.0), (0.1, 0.7), (-42.0, 1e10), (1e-300, -1e-300)];
        for (a, b) in pairs {
            assert_eq!(subtract(a, b), -subtract(b, a));
        }
    }

    #[test]
    fn test_subtract_overflow_follows_ieee() {
        assert_eq!(subtract(f64::MAX, -f64::MAX), f64::INFINITY);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 2.0), 5.0);
        assert_eq!(divide(7.0, 2.0), 3.5);
    }

    #[test]
    fn test_divide_inverts_multiplication() {
        let pairs = [(1.0, 3.0), (-7.25, 0.5), (1e8, -3e-4), (0.0, 9.0)];
        for (x, y) in pairs {
            let q = divide(x, y);
            assert!((q * y - x).abs() <= 1e-9 * x.abs().max(1.0));
        }
    }

    #[test]
    fn test_divide_by_zero_is_not_an_error() {
        assert_eq!(divide(1.0, 0.0), f64::INFINITY);
        assert_eq!(divide(-1.0, 0.0), f64::NEG_INFINITY);
        assert_eq!(divide(1.0, -0.0), f64::NEG_INFINITY);
        assert!(divide(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_checked_divide() {
        assert_eq!(checked_divide(7.0, 2.0).unwrap(), 3.5);

        match checked_divide(4.0, 0.0) {
            Err(OpsError::DivisionByZero { dividend }) => assert_eq!(dividend, 4.0),
            other => panic!("expected division by zero, got {other:?}"),
        }
        assert!(checked_divide(4.0, -0.0).is_err());
    }
}

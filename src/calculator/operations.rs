//! The arithmetic primitives behind every calculation. All functions are pure
//! and return a `Result` so callers can treat them uniformly.

use crate::errors::{Error, Result};

/// Returns `a + b`
pub fn addition(a: f64, b: f64) -> Result<f64> {
    Ok(a + b)
}

/// Returns `a - b`
pub fn subtraction(a: f64, b: f64) -> Result<f64> {
    Ok(a - b)
}

/// Returns `a * b`
pub fn multiplication(a: f64, b: f64) -> Result<f64> {
    Ok(a * b)
}

/// Returns `a / b`, or `Error::DivisionByZero` if `b` is zero of either sign
pub fn division(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }

    Ok(a / b)
}

/// Returns `a` raised to the power `b`. Not offered by the standard registry.
pub fn power(a: f64, b: f64) -> Result<f64> {
    Ok(a.powf(b))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_addition() -> Result<()> {
        assert_eq!(addition(10.0, 5.0)?, 15.0);
        assert_eq!(addition(-10.0, -5.0)?, -15.0);
        assert_eq!(addition(10.0, -5.0)?, 5.0);
        assert_eq!(addition(10.0, 0.0)?, 10.0);

        Ok(())
    }

    #[test]
    fn test_subtraction() -> Result<()> {
        assert_eq!(subtraction(10.0, 5.0)?, 5.0);
        assert_eq!(subtraction(-10.0, -5.0)?, -5.0);
        assert_eq!(subtraction(10.0, -5.0)?, 15.0);
        assert_eq!(subtraction(10.0, 0.0)?, 10.0);

        Ok(())
    }

    #[test]
    fn test_subtraction_is_addition_of_negation() -> Result<()> {
        let pairs = [(10.0, 5.0), (-3.25, 7.5), (0.1, 0.2), (1e300, -1e300)];
        for (a, b) in pairs {
            assert_eq!(subtraction(a, b)?, addition(a, -b)?);
        }

        Ok(())
    }

    #[test]
    fn test_multiplication() -> Result<()> {
        assert_eq!(multiplication(10.0, 5.0)?, 50.0);
        assert_eq!(multiplication(-10.0, -5.0)?, 50.0);
        assert_eq!(multiplication(10.0, -5.0)?, -50.0);
        assert_eq!(multiplication(10.0, 0.0)?, 0.0);

        Ok(())
    }

    #[test]
    fn test_division() -> Result<()> {
        assert_eq!(division(10.0, 5.0)?, 2.0);
        assert_eq!(division(-10.0, -5.0)?, 2.0);
        assert_eq!(division(10.0, -5.0)?, -2.0);
        assert_eq!(division(0.0, 5.0)?, 0.0);

        Ok(())
    }

    #[test]
    fn test_division_inverts_multiplication() -> Result<()> {
        let pairs = [(10.0, 3.0), (-7.5, 0.25), (1.0, 1e-9), (123456.789, -42.0)];
        for (a, b) in pairs {
            let q = division(a, b)?;
            assert!((q * b - a).abs() <= 1e-9 * a.abs().max(1.0));
        }

        Ok(())
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(division(10.0, 0.0), Err(Error::DivisionByZero));
        assert_eq!(division(10.0, -0.0), Err(Error::DivisionByZero));
        assert_eq!(division(0.0, 0.0), Err(Error::DivisionByZero));
        assert!(division(10.0, f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn test_power() -> Result<()> {
        assert_eq!(power(2.0, 2.0)?, 4.0);
        assert_eq!(power(2.0, -2.0)?, 0.25);
        assert_eq!(power(25.0, 0.5)?, 5.0);

        Ok(())
    }
}

use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Arithmetic on the top of the stack. For binary operations `lhs` is
/// the deeper operand, so `5 2 -` is `subtract(5, 2)`.
pub struct Operation {}

impl Operation {
    pub fn negate(val: f64) -> f64 {
        -val
    }

    pub fn square(val: f64) -> f64 {
        val * val
    }

    pub fn sum(lhs: f64, rhs: f64) -> f64 {
        lhs + rhs
    }

    pub fn subtract(lhs: f64, rhs: f64) -> f64 {
        lhs - rhs
    }

    pub fn multiply(lhs: f64, rhs: f64) -> f64 {
        lhs * rhs
    }

    pub fn divide(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs == 0.0 {
            Err(error!(DivisionByZero))
        } else {
            Ok(lhs / rhs)
        }
    }

    /// Real exponentiation. Invalid combinations such as a negative base
    /// with a fractional exponent give `NaN` and are not reported.
    pub fn power(lhs: f64, rhs: f64) -> f64 {
        lhs.powf(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_divide() {
        assert_eq!(Operation::divide(10.0, 4.0), Ok(2.5));
        assert_eq!(
            Operation::divide(1.0, 0.0).unwrap_err().code(),
            ErrorCode::DivisionByZero
        );
        assert_eq!(
            Operation::divide(1.0, -0.0).unwrap_err().code(),
            ErrorCode::DivisionByZero
        );
    }

    #[test]
    fn test_power_is_untrapped() {
        assert_eq!(Operation::power(2.0, 10.0), 1024.0);
        assert!(Operation::power(-8.0, 0.5).is_nan());
        assert!(Operation::power(0.0, -1.0).is_infinite());
    }
}

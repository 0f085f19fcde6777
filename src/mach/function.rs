use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Transcendental functions. Arguments are in radians.
pub struct Function {}

impl Function {
    pub fn sin(val: f64) -> f64 {
        val.sin()
    }

    pub fn cos(val: f64) -> f64 {
        val.cos()
    }

    /// Not checked near the asymptotes; large results are fine.
    pub fn tan(val: f64) -> f64 {
        val.tan()
    }

    pub fn inv(val: f64) -> Result<f64> {
        if val == 0.0 {
            Err(error!(DivisionByZero; "cannot invert zero"))
        } else {
            Ok(1.0 / val)
        }
    }

    pub fn sqrt(val: f64) -> Result<f64> {
        if val < 0.0 {
            Err(error!(DomainError; "square root of a negative number"))
        } else {
            Ok(val.sqrt())
        }
    }

    pub fn log(val: f64) -> Result<f64> {
        if val <= 0.0 {
            Err(error!(DomainError; "log of a non-positive number"))
        } else {
            Ok(val.log10())
        }
    }

    pub fn ln(val: f64) -> Result<f64> {
        if val <= 0.0 {
            Err(error!(DomainError; "ln of a non-positive number"))
        } else {
            Ok(val.ln())
        }
    }
}

/// Display wrapper for stack values.
///
/// Integral values print without a fraction, `-0` included. Everything
/// else prints like C's `%.10g`: ten significant digits, trailing zeros
/// removed, and an exponent once the value is below `1e-4` or has more
/// integer digits than fit.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Number(pub f64);

const SIGNIFICANT: i32 = 10;

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let n = self.0;
        if !n.is_finite() {
            return write!(f, "{}", n);
        }
        if n == n.trunc() {
            // Fixed precision prints every digit of the stored value, and
            // `+ 0.0` folds -0.
            return write!(f, "{:.0}", n + 0.0);
        }
        let sci = format!("{:.*e}", (SIGNIFICANT - 1) as usize, n);
        let (mantissa, exp) = match sci.split_once('e') {
            Some(parts) => parts,
            None => return Err(std::fmt::Error),
        };
        let exp: i32 = exp.parse().map_err(|_| std::fmt::Error)?;
        if exp < -4 || exp >= SIGNIFICANT {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
        } else {
            let decimals = (SIGNIFICANT - 1 - exp) as usize;
            write!(f, "{}", trim_fraction(&format!("{:.*}", decimals, n)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Number;

    fn fmt(n: f64) -> String {
        Number(n).to_string()
    }

    #[test]
    fn test_integers() {
        assert_eq!(fmt(7.0), "7");
        assert_eq!(fmt(-42.0), "-42");
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(1e20), "100000000000000000000");
        assert_eq!(fmt(2f64.powi(60)), "1152921504606846976");
        assert_eq!(fmt(-(2f64.powi(54)) - 2.0), "-18014398509481986");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(fmt(2.5), "2.5");
        assert_eq!(fmt(std::f64::consts::PI), "3.141592654");
        assert_eq!(fmt(std::f64::consts::E), "2.718281828");
        assert_eq!(fmt(0.1 + 0.2), "0.3");
        assert_eq!(fmt(1.0 / 3.0), "0.3333333333");
        assert_eq!(fmt(9.99999999999), "10");
    }

    #[test]
    fn test_exponents() {
        assert_eq!(fmt(0.00001), "1e-05");
        assert_eq!(fmt(0.000123456), "0.000123456");
        assert_eq!(fmt(-1.5e-7), "-1.5e-07");
        assert_eq!(fmt(12345678901.5), "1.23456789e+10");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(fmt(f64::INFINITY), "inf");
        assert_eq!(fmt(f64::NEG_INFINITY), "-inf");
        assert_eq!(fmt(f64::NAN), "NaN");
    }
}

//! Fixed-width scientific notation.
//!
//! FISPACT inputs carry numbers like `4.5605e+14`: lowercase marker, explicit
//! exponent sign, at least two exponent digits. Rust's `{:e}` emits `4.5605e14`
//! with no sign and no padding, so the exponent is rewritten here.

/// Format `value` as `d.dd…e±dd` with `precision` digits after the point.
pub fn sci(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(rest) => ('-', rest),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        // inf / NaN have no exponent part; pass through
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_exponent_padded() {
        assert_eq!(sci(4.5605e14, 4), "4.5605e+14");
        assert_eq!(sci(3.0e6, 6), "3.000000e+06");
    }

    #[test]
    fn test_single_digit_exponent_zero_padded() {
        assert_eq!(sci(12.5, 4), "1.2500e+01");
        assert_eq!(sci(1.0, 6), "1.000000e+00");
    }

    #[test]
    fn test_negative_exponent() {
        assert_eq!(sci(2.5e-7, 4), "2.5000e-07");
    }

    #[test]
    fn test_negative_value() {
        assert_eq!(sci(-6.0e10, 4), "-6.0000e+10");
    }

    #[test]
    fn test_zero() {
        assert_eq!(sci(0.0, 4), "0.0000e+00");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(sci(9.99999e3, 4), "1.0000e+04");
    }

    #[test]
    fn test_three_digit_exponent_kept() {
        assert_eq!(sci(1.0e120, 4), "1.0000e+120");
    }
}

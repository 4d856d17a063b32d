//! Number formatting for the displays and the input buffer.
//!
//! Output is always something `str::parse::<f64>()` accepts for finite
//! values, because a shown result becomes the next input buffer.

/// Integers up to this magnitude print without a decimal point.
const INTEGER_LIMIT: f64 = 1e15;
/// Non-zero magnitudes below this switch to exponent form.
const SMALL_LIMIT: f64 = 1e-6;
/// Fractional digits kept before trimming.
const FRACTION_DIGITS: usize = 10;

pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    if n == 0.0 {
        // covers -0.0
        return "0".to_string();
    }

    let abs = n.abs();
    if n == n.trunc() && abs < INTEGER_LIMIT {
        format!("{}", n as i64)
    } else if abs >= INTEGER_LIMIT || abs < SMALL_LIMIT {
        format!("{:e}", n)
    } else {
        let s = format!("{:.*}", FRACTION_DIGITS, n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(891.0), "891");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_fractions_are_trimmed() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_number(-0.125), "-0.125");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(format_number(1.5e20), "1.5e20");
        assert_eq!(format_number(2.5e-7), "2.5e-7");
        assert_eq!(format_number(1e15), "1e15");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_finite_output_parses_back() {
        for n in [0.0, 7.0, -42.0, 0.75, 123.456, 9.99e18, 3.2e-9, 999_999_999_999_999.0] {
            let s = format_number(n);
            assert_eq!(s.parse::<f64>().ok(), Some(n), "{s} should parse back to {n}");
        }
    }
}

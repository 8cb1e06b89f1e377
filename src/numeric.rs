//! Lenient numeric parsing for card parameters.
//!
//! Card fields are plain strings typed by editors, so a height may arrive as
//! `"4"`, `" 4px"` or `"abc"`. These helpers read the leading number the
//! way a browser reads a CSS-ish value and always land on a usable number:
//!
//! - [`parse_int`] / [`parse_float`] read a numeric prefix and ignore
//!   trailing junk (`"12px"` → 12).
//! - [`int_or`] treats a missing, unparsable *or zero* value as "use the
//!   default".
//! - [`clamped_int`], [`unit_interval`] and [`percent`] additionally clamp
//!   into a valid domain so nothing out of range reaches inline CSS.

/// Parse a leading decimal integer. Returns `None` if there are no digits.
pub fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = split_sign(s);
    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return None;
    }
    // Saturate rather than fail on absurdly long inputs.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Parse a leading decimal number with optional fraction and exponent.
pub fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integer value, or `default` when missing, unparsable or zero.
pub fn int_or(s: &str, default: i64) -> i64 {
    match parse_int(s) {
        Some(0) | None => default,
        Some(v) => v,
    }
}

/// [`int_or`] clamped into `min..=max`.
pub fn clamped_int(s: &str, default: i64, min: i64, max: i64) -> i64 {
    int_or(s, default).clamp(min, max)
}

/// A fraction in `[0, 1]`, e.g. an opacity. Parse failures give `default`.
pub fn unit_interval(s: &str, default: f64) -> f64 {
    parse_float(s).unwrap_or(default).clamp(0.0, 1.0)
}

/// A percentage in `[0, 100]`. Parse failures give `default`.
pub fn percent(s: &str, default: f64) -> f64 {
    parse_float(s).unwrap_or(default).clamp(0.0, 100.0)
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // parse_int
    // =========================================================================

    #[test]
    fn parse_int_plain() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("+3"), Some(3));
    }

    #[test]
    fn parse_int_ignores_trailing_junk_and_leading_space() {
        assert_eq!(parse_int("12px"), Some(12));
        assert_eq!(parse_int("  8 "), Some(8));
        assert_eq!(parse_int("3.9"), Some(3));
    }

    #[test]
    fn parse_int_rejects_non_numbers() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("px12"), None);
    }

    #[test]
    fn parse_int_saturates() {
        assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX));
    }

    // =========================================================================
    // parse_float
    // =========================================================================

    #[test]
    fn parse_float_prefixes() {
        assert_eq!(parse_float("0.75"), Some(0.75));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("1e2x"), Some(100.0));
        assert_eq!(parse_float("2e"), Some(2.0));
        assert_eq!(parse_float("-0.25rem"), Some(-0.25));
    }

    #[test]
    fn parse_float_rejects_non_numbers() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("e5"), None);
        assert_eq!(parse_float("1e999"), None);
    }

    // =========================================================================
    // defaulting and clamping
    // =========================================================================

    #[test]
    fn int_or_treats_zero_as_missing() {
        assert_eq!(int_or("0", 4), 4);
        assert_eq!(int_or("", 4), 4);
        assert_eq!(int_or("x", 4), 4);
        assert_eq!(int_or("6", 4), 6);
    }

    #[test]
    fn clamped_int_bounds() {
        assert_eq!(clamped_int("200", 18, 0, 80), 80);
        assert_eq!(clamped_int("-5", 18, 0, 80), 0);
        assert_eq!(clamped_int("nope", 18, 0, 80), 18);
    }

    #[test]
    fn unit_interval_clamps() {
        assert_eq!(unit_interval("0.4", 0.6), 0.4);
        assert_eq!(unit_interval("3", 0.6), 1.0);
        assert_eq!(unit_interval("-1", 0.6), 0.0);
        assert_eq!(unit_interval("", 0.6), 0.6);
        assert_eq!(unit_interval("0", 0.6), 0.0);
    }

    #[test]
    fn percent_clamps() {
        assert_eq!(percent("150", 50.0), 100.0);
        assert_eq!(percent("abc", 50.0), 50.0);
        assert_eq!(percent("33.5%", 50.0), 33.5);
    }
}

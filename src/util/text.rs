//! Lenient parsing for numeric text fields.

/// Parse a coordinate typed into a text field.
///
/// Leading whitespace is skipped and the longest decimal prefix wins, so
/// `"3.5m"` reads as `3.5`. A prefix is an optional sign followed by
/// either digits (with an optional fraction and exponent) or the exact
/// word `Infinity`. Anything else, including `inf` or `NaN`, reads as `0`,
/// and so does negative zero.
#[must_use]
pub fn parse_coord(text: &str) -> f32 {
    let trimmed = text.trim_start();
    let len = decimal_prefix_len(trimmed);
    if len == 0 {
        return 0.0;
    }
    let value = trimmed[..len].parse::<f32>().unwrap_or(0.0);
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Byte length of the longest decimal literal at the start of `s`, or `0`
/// when there is none.
fn decimal_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return end + "Infinity".len();
    }

    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digit_run(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    end
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_coord("5"), 5.0);
        assert_eq!(parse_coord("-2.25"), -2.25);
        assert_eq!(parse_coord("  7.5"), 7.5);
        assert_eq!(parse_coord("+4"), 4.0);
        assert_eq!(parse_coord(".5"), 0.5);
        assert_eq!(parse_coord("5."), 5.0);
    }

    #[test]
    fn numeric_prefix_is_kept() {
        assert_eq!(parse_coord("3.5m"), 3.5);
        assert_eq!(parse_coord("12 units"), 12.0);
        assert_eq!(parse_coord("1.2.3"), 1.2);
        assert_eq!(parse_coord("-.5x"), -0.5);
        assert_eq!(parse_coord("0x10"), 0.0);
    }

    #[test]
    fn exponents_need_digits() {
        assert_eq!(parse_coord("1e3"), 1000.0);
        assert_eq!(parse_coord("2.5E-1"), 0.25);
        assert_eq!(parse_coord("2e"), 2.0);
        assert_eq!(parse_coord("2e+"), 2.0);
    }

    #[test]
    fn garbage_reads_as_zero() {
        assert_eq!(parse_coord(""), 0.0);
        assert_eq!(parse_coord("abc"), 0.0);
        assert_eq!(parse_coord("NaN"), 0.0);
        assert_eq!(parse_coord("-"), 0.0);
        assert_eq!(parse_coord("."), 0.0);
    }

    #[test]
    fn only_the_exact_infinity_word_is_infinite() {
        assert_eq!(parse_coord("inf"), 0.0);
        assert_eq!(parse_coord("-inf"), 0.0);
        assert_eq!(parse_coord("INF"), 0.0);
        assert_eq!(parse_coord("infinity"), 0.0);
        assert_eq!(parse_coord("Infinity"), f32::INFINITY);
        assert_eq!(parse_coord("-Infinity!"), f32::NEG_INFINITY);
    }

    #[test]
    fn negative_zero_reads_as_positive_zero() {
        assert!(parse_coord("-0").is_sign_positive());
        assert!(parse_coord("-0.0e5").is_sign_positive());
    }
}

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Converts a number to a list or text index.
///
/// Only non-negative, integral values inside the exactly representable range
/// are valid indices. Everything else (negative, fractional, `NaN`, infinite)
/// yields `None`, which callers turn into a null read or a type error.
///
/// ## Parameters
/// - `value`: The number to convert.
///
/// ## Returns
/// - `Some(usize)`: The index if `value` is a valid one.
/// - `None`: Otherwise.
///
/// ## Example
/// ```
/// use sathi::util::num::f64_to_index;
///
/// assert_eq!(f64_to_index(3.0), Some(3));
/// assert_eq!(f64_to_index(-1.0), None);
/// assert_eq!(f64_to_index(1.5), None);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_index(value: f64) -> Option<usize> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= MAX_SAFE_INT {
        usize::try_from(value as u64).ok()
    } else {
        None
    }
}

/// Converts a count or index into a number.
///
/// Lengths and positions in Sathi are always far below `2^53`, so the
/// conversion is exact in practice.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Truncates a number towards zero and clamps it to the `i64` range.
///
/// `NaN` becomes `0`, matching how slice bounds treat it.
///
/// ## Example
/// ```
/// use sathi::util::num::f64_to_i64_saturating;
///
/// assert_eq!(f64_to_i64_saturating(-2.7), -2);
/// assert_eq!(f64_to_i64_saturating(f64::NAN), 0);
/// assert_eq!(f64_to_i64_saturating(f64::INFINITY), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_saturating(value: f64) -> i64 {
    if value.is_nan() {
        0
    } else {
        // `as` saturates at the bounds of the target type.
        value.trunc() as i64
    }
}

/// Formats a number the way Sathi prints it.
///
/// Integral values print without a fractional part, negative zero prints as
/// `0`, and the non-finite values print as `NaN`, `Infinity` and `-Infinity`.
///
/// ## Example
/// ```
/// use sathi::util::num::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(5.5), "5.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Parses text into a number using the loose rules shared by `sankhya` and
/// `==`.
///
/// Surrounding whitespace is ignored and empty text is `0`. `Infinity` with an
/// optional sign is accepted; anything else that is not a plain decimal
/// literal is `NaN`.
///
/// ## Example
/// ```
/// use sathi::util::num::parse_number;
///
/// assert_eq!(parse_number(" 42 "), 42.0);
/// assert_eq!(parse_number(""), 0.0);
/// assert!(parse_number("abc").is_nan());
/// assert!(parse_number("inf").is_nan());
/// ```
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();

    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if trimmed.chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) =>
        {
            trimmed.parse().unwrap_or(f64::NAN)
        },
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_integers_format_without_exponent() {
        assert_eq!(format_number(1_000_000.0), "1000000");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn index_rejects_out_of_range_values() {
        assert_eq!(f64_to_index(f64::INFINITY), None);
        assert_eq!(f64_to_index(f64::NAN), None);
        assert_eq!(f64_to_index(0.0), Some(0));
    }

    #[test]
    fn parse_number_accepts_exponents() {
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("-2.5"), -2.5);
        assert!(parse_number("1..2").is_nan());
    }
}

//! Input coercion for user-supplied numbers.
//!
//! Every number entering the planner passes through here, so the allocator
//! itself never has to deal with negative, fractional or garbage values.

/// Largest accepted troop count or capacity.
///
/// Counts are also handled as `f64` during allocation; staying at or below
/// 2^53 - 1 keeps every count exact there and keeps capacity sums far from
/// `u64` overflow.
pub const MAX_COUNT: u64 = (1 << 53) - 1;

/// Cap a count at [`MAX_COUNT`]
pub fn clamp_count(value: u64) -> u64 {
    value.min(MAX_COUNT)
}

/// Parse the leading integer of `input`, treating anything unusable as 0.
///
/// Leading whitespace and an optional sign are accepted, then the leading
/// run of ASCII digits is read and the rest ignored (`"12abc"` is 12).
/// Negative values and strings without digits yield 0. Values beyond
/// [`MAX_COUNT`] saturate.
pub fn parse_count(input: &str) -> u64 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(b - b'0'))
            .min(MAX_COUNT);
    }

    if !seen_digit || negative {
        0
    } else {
        value
    }
}

/// Coerce a real number to a troop count: non-finite or negative is 0,
/// anything else is floored.
pub fn coerce_count(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // `as` saturates for values above u64::MAX
    clamp_count(value.floor() as u64)
}

/// Coerce a signed integer to a troop count.
pub fn coerce_signed(value: i64) -> u64 {
    u64::try_from(value).map_or(0, clamp_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1500", 1500 ; "plain")]
    #[test_case("  42", 42 ; "leading whitespace")]
    #[test_case("+7", 7 ; "explicit plus")]
    #[test_case("12abc", 12 ; "trailing garbage")]
    #[test_case("3.9", 3 ; "fraction truncated")]
    #[test_case("-5", 0 ; "negative")]
    #[test_case("abc", 0 ; "no digits")]
    #[test_case("", 0 ; "empty")]
    #[test_case("-", 0 ; "bare sign")]
    #[test_case("99999999999999999999999", MAX_COUNT ; "saturates")]
    #[test_case("9007199254740992", MAX_COUNT ; "one past the cap")]
    fn test_parse_count(input: &str, expected: u64) {
        assert_eq!(parse_count(input), expected);
    }

    #[test]
    fn test_coerce_count() {
        assert_eq!(coerce_count(f64::NAN), 0);
        assert_eq!(coerce_count(f64::INFINITY), 0);
        assert_eq!(coerce_count(-3.0), 0);
        assert_eq!(coerce_count(12.99), 12);
        assert_eq!(coerce_count(1e300), MAX_COUNT);
    }

    #[test]
    fn test_coerce_signed() {
        assert_eq!(coerce_signed(-1), 0);
        assert_eq!(coerce_signed(250), 250);
        assert_eq!(coerce_signed(i64::MAX), MAX_COUNT);
    }
}

//! Parser for Korean bucketed range descriptions.
//!
//! Survey exports describe counts either as a bare value ("3개"), an
//! open-closed interval ("3개초과 5개이하", i.e. more than 3 and at most 5),
//! or a lower bound only ("5개 초과"). This module classifies a raw string
//! into exactly one [`RangeExpression`] variant; anything else is
//! [`RangeExpression::Unparseable`], never an error.

/// Marker for an exclusive lower bound ("more than").
const EXCEEDS: &str = "초과";
/// Marker for an inclusive upper bound ("at most").
const AT_MOST: &str = "이하";

/// Count-noun unit suffixes accepted after a number: 개 (items), 건 (cases).
const UNITS: [char; 2] = ['개', '건'];

/// Parsed shape of one raw range string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeExpression {
    /// A bare count, e.g. "3개".
    Single(i64),
    /// Open-closed interval `(low, high]`, e.g. "3개초과 5개이하".
    Bounded { low: i64, high: i64 },
    /// Lower bound only, e.g. "5개 초과".
    ExceedsOnly(i64),
    /// Text matches none of the recognized shapes.
    Unparseable,
}

/// Classify a raw string into a [`RangeExpression`].
///
/// Total and deterministic: the same input always yields the same variant
/// and no input panics. Shapes are tried in a fixed priority order because
/// they are not mutually exclusive by prefix: bounded range first, then
/// exceeds-only, then bare count guarded by the absence of the bound
/// markers anywhere in the string.
pub fn parse_range(text: &str) -> RangeExpression {
    if let Some((low, high)) = parse_bounded(text) {
        return RangeExpression::Bounded { low, high };
    }
    if let Some(threshold) = parse_exceeds(text) {
        return RangeExpression::ExceedsOnly(threshold);
    }
    if let Some(value) = parse_single(text) {
        return RangeExpression::Single(value);
    }
    RangeExpression::Unparseable
}

/// `<low><unit>초과 <high><unit>이하`, exactly one space between the halves.
/// Trailing text after the inclusive marker is not validated.
fn parse_bounded(text: &str) -> Option<(i64, i64)> {
    let (low, rest) = split_leading_int(text)?;
    let rest = strip_unit(rest)?;
    let rest = rest.strip_prefix(EXCEEDS)?;
    let rest = rest.strip_prefix(' ')?;
    let (high, rest) = split_leading_int(rest)?;
    let rest = strip_unit(rest)?;
    rest.strip_prefix(AT_MOST)?;
    Some((low, high))
}

/// `<n><unit> 초과` with nothing after the marker.
fn parse_exceeds(text: &str) -> Option<i64> {
    let (threshold, rest) = split_leading_int(text)?;
    let rest = strip_unit(rest)?;
    let rest = rest.strip_prefix(' ')?;
    let rest = rest.strip_prefix(EXCEEDS)?;
    rest.is_empty().then_some(threshold)
}

/// `<n><unit>`, only when neither bound marker appears anywhere in the
/// string. The guard prevents partial prefix matches against the other two
/// shapes; trailing text after the unit is otherwise ignored.
fn parse_single(text: &str) -> Option<i64> {
    if text.contains(EXCEEDS) || text.contains(AT_MOST) {
        return None;
    }
    let (value, rest) = split_leading_int(text)?;
    strip_unit(rest)?;
    Some(value)
}

/// Split a leading run of ASCII digits off the front of `text`.
///
/// Returns `None` when there is no digit or when the run overflows `i64`,
/// so malformed numbers degrade to `Unparseable` instead of panicking.
fn split_leading_int(text: &str) -> Option<(i64, &str)> {
    let digits = text.len() - text.trim_start_matches(|ch: char| ch.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let value = text[..digits].parse::<i64>().ok()?;
    Some((value, &text[digits..]))
}

fn strip_unit(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    let first = chars.next()?;
    UNITS.contains(&first).then(|| chars.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_range_shape() {
        assert_eq!(
            parse_range("3개초과 5개이하"),
            RangeExpression::Bounded { low: 3, high: 5 }
        );
        assert_eq!(
            parse_range("10건초과 20건이하"),
            RangeExpression::Bounded { low: 10, high: 20 }
        );
    }

    #[test]
    fn exceeds_only_shape() {
        assert_eq!(parse_range("5개 초과"), RangeExpression::ExceedsOnly(5));
        assert_eq!(parse_range("0건 초과"), RangeExpression::ExceedsOnly(0));
    }

    #[test]
    fn single_shape() {
        assert_eq!(parse_range("3개"), RangeExpression::Single(3));
        assert_eq!(parse_range("12건"), RangeExpression::Single(12));
    }

    #[test]
    fn single_ignores_trailing_text_without_markers() {
        assert_eq!(parse_range("3개 보유"), RangeExpression::Single(3));
    }

    #[test]
    fn single_guard_rejects_partial_bound_matches() {
        // Prefix of a bounded range with the second half mangled: neither a
        // valid bounded range nor a bare count.
        assert_eq!(parse_range("3개초과"), RangeExpression::Unparseable);
        assert_eq!(parse_range("5개이하"), RangeExpression::Unparseable);
        assert_eq!(parse_range("3개초과 5개"), RangeExpression::Unparseable);
    }

    #[test]
    fn exceeds_requires_exact_tail() {
        assert_eq!(parse_range("5개 초과입니다"), RangeExpression::Unparseable);
    }

    #[test]
    fn unparseable_inputs() {
        assert_eq!(parse_range(""), RangeExpression::Unparseable);
        assert_eq!(parse_range("abc"), RangeExpression::Unparseable);
        assert_eq!(parse_range("개3"), RangeExpression::Unparseable);
        assert_eq!(parse_range("3마리"), RangeExpression::Unparseable);
        assert_eq!(parse_range("-3개"), RangeExpression::Unparseable);
        assert_eq!(parse_range("3.5개"), RangeExpression::Unparseable);
    }

    #[test]
    fn integer_overflow_degrades_to_unparseable() {
        assert_eq!(
            parse_range("99999999999999999999개"),
            RangeExpression::Unparseable
        );
    }
}

//! Property tests for the parser and reduction policies.

use proptest::prelude::*;
use riskprep_encode::{RangeExpression, ReductionPolicy, parse_range};

proptest! {
    /// The mean of consecutive integers equals their midpoint, so the two
    /// policies must agree on every non-empty normalized range.
    #[test]
    fn mean_and_middle_agree_on_bounded_ranges(low in 0i64..500, span in 1i64..200) {
        let expr = RangeExpression::Bounded { low, high: low + span };
        let middle = ReductionPolicy::Middle.reduce(expr);
        let mean = ReductionPolicy::Mean.reduce(expr);
        prop_assert!(middle.is_some());
        prop_assert_eq!(middle, mean);
    }

    /// The exceeds offset is a fixed rule independent of policy.
    #[test]
    fn exceeds_offset_is_threshold_plus_five(threshold in 0i64..10_000) {
        let expr = RangeExpression::ExceedsOnly(threshold);
        prop_assert_eq!(
            ReductionPolicy::Middle.reduce(expr),
            Some((threshold + 5) as f64)
        );
        prop_assert_eq!(
            ReductionPolicy::Mean.reduce(expr),
            Some((threshold + 5) as f64)
        );
    }

    /// The parser is total and deterministic over arbitrary input.
    #[test]
    fn parser_never_panics_and_is_deterministic(text in ".*") {
        let first = parse_range(&text);
        let second = parse_range(&text);
        prop_assert_eq!(first, second);
    }

    /// Well-formed bounded strings always parse back to their bounds.
    #[test]
    fn bounded_strings_round_trip(low in 0i64..1_000, high in 0i64..1_000) {
        let text = format!("{low}개초과 {high}개이하");
        prop_assert_eq!(parse_range(&text), RangeExpression::Bounded { low, high });
    }

    /// Bare counts parse regardless of unit suffix.
    #[test]
    fn single_strings_round_trip(value in 0i64..1_000_000) {
        prop_assert_eq!(parse_range(&format!("{value}개")), RangeExpression::Single(value));
        prop_assert_eq!(parse_range(&format!("{value}건")), RangeExpression::Single(value));
    }
}

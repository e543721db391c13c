//! Reduction policies collapsing a parsed range into one representative value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use riskprep_model::EncodeError;

use crate::parse::{RangeExpression, parse_range};

/// Fixed offset applied to an unbounded "exceeds" threshold. Business rule,
/// not configurable: "5개 초과" encodes as 10 under every policy.
const EXCEEDS_OFFSET: i64 = 5;

/// Strategy for reducing a bounded range to a single number.
///
/// The two policies coincide for every closed finite integer range (the mean
/// of consecutive integers equals their midpoint) but both entry points are
/// part of the public contract; see the equivalence property test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReductionPolicy {
    /// Midpoint of the normalized closed interval.
    #[default]
    Middle,
    /// Arithmetic mean of every integer in the normalized closed interval.
    Mean,
}

impl ReductionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReductionPolicy::Middle => "middle",
            ReductionPolicy::Mean => "mean",
        }
    }

    /// Reduce a parsed expression to its representative value.
    ///
    /// `None` is the missing value: unparseable text, and a bounded range
    /// whose normalized interval `[low+1, high]` is empty.
    pub fn reduce(&self, expr: RangeExpression) -> Option<f64> {
        match expr {
            RangeExpression::Single(value) => Some(value as f64),
            RangeExpression::Bounded { low, high } => {
                let start = low + 1;
                if start > high {
                    return None;
                }
                match self {
                    ReductionPolicy::Middle => Some((start + high) as f64 / 2.0),
                    ReductionPolicy::Mean => {
                        let sum: f64 = (start..=high).map(|v| v as f64).sum();
                        let count = (high - start + 1) as f64;
                        Some(sum / count)
                    }
                }
            }
            RangeExpression::ExceedsOnly(threshold) => Some((threshold + EXCEEDS_OFFSET) as f64),
            RangeExpression::Unparseable => None,
        }
    }

    /// Parse and reduce a raw string in one step.
    pub fn encode_text(&self, text: &str) -> Option<f64> {
        self.reduce(parse_range(text))
    }
}

impl fmt::Display for ReductionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReductionPolicy {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "middle" => Ok(ReductionPolicy::Middle),
            "mean" => Ok(ReductionPolicy::Mean),
            other => Err(EncodeError::InvalidPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_passes_through() {
        assert_eq!(ReductionPolicy::Middle.encode_text("3개"), Some(3.0));
        assert_eq!(ReductionPolicy::Mean.encode_text("3개"), Some(3.0));
    }

    #[test]
    fn bounded_range_reduces_to_midpoint() {
        // (3, 5] normalizes to [4, 5]; midpoint and mean are both 4.5.
        assert_eq!(
            ReductionPolicy::Middle.encode_text("3개초과 5개이하"),
            Some(4.5)
        );
        assert_eq!(
            ReductionPolicy::Mean.encode_text("3개초과 5개이하"),
            Some(4.5)
        );
    }

    #[test]
    fn exceeds_applies_fixed_offset_under_every_policy() {
        assert_eq!(ReductionPolicy::Middle.encode_text("5개 초과"), Some(10.0));
        assert_eq!(ReductionPolicy::Mean.encode_text("5개 초과"), Some(10.0));
    }

    #[test]
    fn unparseable_is_missing() {
        assert_eq!(ReductionPolicy::Middle.encode_text("abc"), None);
        assert_eq!(ReductionPolicy::Mean.encode_text(""), None);
    }

    #[test]
    fn inverted_bounds_are_missing_under_both_policies() {
        let expr = RangeExpression::Bounded { low: 5, high: 3 };
        assert_eq!(ReductionPolicy::Middle.reduce(expr), None);
        assert_eq!(ReductionPolicy::Mean.reduce(expr), None);
    }

    #[test]
    fn policy_name_round_trip() {
        assert_eq!("middle".parse::<ReductionPolicy>().unwrap().as_str(), "middle");
        assert_eq!("mean".parse::<ReductionPolicy>().unwrap().as_str(), "mean");
        assert!("median".parse::<ReductionPolicy>().is_err());
    }
}

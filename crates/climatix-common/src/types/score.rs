//! Best-so-far comparison under a total order
//!
//! Objective values are compared through `OrderedFloat` so NaN has a fixed
//! place in the ordering, and non-finite candidates never win.

use ordered_float::OrderedFloat;

/// Returns true if `candidate` should replace `incumbent` as the best value.
///
/// Only finite candidates strictly below the incumbent improve it, so ties
/// keep the earlier value.
#[inline]
pub fn improves(candidate: f64, incumbent: f64) -> bool {
    candidate.is_finite() && OrderedFloat(candidate) < OrderedFloat(incumbent)
}

/// Smallest finite value in `values`, if any.
pub fn best_of<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .min_by_key(|v| OrderedFloat(*v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strict_improvement() {
        assert!(improves(1.0, 2.0));
        assert!(improves(1.0, f64::INFINITY));
        assert!(!improves(2.0, 2.0));
        assert!(!improves(3.0, 2.0));
    }

    #[test]
    fn test_non_finite_never_improves() {
        assert!(!improves(f64::NAN, f64::INFINITY));
        assert!(!improves(f64::NEG_INFINITY, 0.0));
        assert!(!improves(f64::INFINITY, f64::INFINITY));
        assert!(!improves(f64::NAN, 1.0));
    }

    #[test]
    fn test_best_of_skips_non_finite() {
        assert_eq!(best_of(vec![3.0, f64::NAN, 1.5, f64::NEG_INFINITY]), Some(1.5));
        assert_eq!(best_of(vec![f64::NAN, f64::INFINITY]), None);
        assert_eq!(best_of(Vec::new()), None);
    }

    proptest! {
        #[test]
        fn finite_improvement_matches_less_than(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            prop_assert_eq!(improves(a, b), a < b);
        }
    }
}

//! Bounds - admissible range for each dimension of the search space
//!
//! Bounds are fixed for the duration of a run. They define both the range
//! particles are initialized in and the feasible region positions are
//! clamped back into after every move.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Closed interval `[low, high]` for one search dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub low: f64,
    pub high: f64,
}

impl Bound {
    /// Width of the interval (zero for a pinned dimension)
    #[inline]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Clamp `value` into `[low, high]`.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.low, self.high)
    }
}

/// Ordered sequence of per-dimension bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct Bounds {
    dims: Vec<Bound>,
}

impl Bounds {
    /// Validate and build bounds from `(low, high)` pairs.
    ///
    /// Fails on an empty list, non-finite limits, or `low > high`.
    pub fn new(pairs: Vec<(f64, f64)>) -> Result<Self, ConfigError> {
        if pairs.is_empty() {
            return Err(ConfigError::EmptyBounds);
        }

        let mut dims = Vec::with_capacity(pairs.len());
        for (dimension, (low, high)) in pairs.into_iter().enumerate() {
            if !low.is_finite() || !high.is_finite() {
                return Err(ConfigError::NonFiniteBound { dimension });
            }
            if low > high {
                return Err(ConfigError::InvertedBound {
                    dimension,
                    low,
                    high,
                });
            }
            dims.push(Bound { low, high });
        }

        Ok(Self { dims })
    }

    /// Single dimension spanning `[0, 1]`, the range of a normalized control level
    pub fn unit() -> Self {
        Self {
            dims: vec![Bound {
                low: 0.0,
                high: 1.0,
            }],
        }
    }

    /// Number of search dimensions
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dims.len()
    }

    pub fn get(&self, dimension: usize) -> Option<&Bound> {
        self.dims.get(dimension)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bound> {
        self.dims.iter()
    }

    /// True when every component of `position` lies inside its bound.
    pub fn contains(&self, position: &[f64]) -> bool {
        position.len() == self.dims.len()
            && self
                .dims
                .iter()
                .zip(position)
                .all(|(bound, &value)| bound.contains(value))
    }
}

impl TryFrom<Vec<(f64, f64)>> for Bounds {
    type Error = ConfigError;

    fn try_from(pairs: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Self::new(pairs)
    }
}

impl From<Bounds> for Vec<(f64, f64)> {
    fn from(bounds: Bounds) -> Self {
        bounds.dims.iter().map(|b| (b.low, b.high)).collect()
    }
}

impl<'a> IntoIterator for &'a Bounds {
    type Item = &'a Bound;
    type IntoIter = std::slice::Iter<'a, Bound>;

    fn into_iter(self) -> Self::IntoIter {
        self.dims.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounds() {
        let bounds = Bounds::new(vec![(0.0, 1.0), (-5.0, 5.0), (2.0, 2.0)]).unwrap();
        assert_eq!(bounds.dimensions(), 3);
        assert_eq!(bounds.get(1).unwrap().width(), 10.0);
        assert_eq!(bounds.get(2).unwrap().width(), 0.0);
    }

    #[test]
    fn test_inverted_bound_rejected() {
        let err = Bounds::new(vec![(0.0, 1.0), (3.0, 2.0)]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvertedBound {
                dimension: 1,
                low: 3.0,
                high: 2.0
            }
        );
    }

    #[test]
    fn test_empty_and_non_finite_rejected() {
        assert_eq!(Bounds::new(vec![]).unwrap_err(), ConfigError::EmptyBounds);
        assert_eq!(
            Bounds::new(vec![(f64::NEG_INFINITY, 0.0)]).unwrap_err(),
            ConfigError::NonFiniteBound { dimension: 0 }
        );
        assert_eq!(
            Bounds::new(vec![(0.0, 1.0), (0.0, f64::NAN)]).unwrap_err(),
            ConfigError::NonFiniteBound { dimension: 1 }
        );
    }

    #[test]
    fn test_unit_bounds() {
        let unit = Bounds::unit();
        assert_eq!(unit, Bounds::new(vec![(0.0, 1.0)]).unwrap());
    }

    #[test]
    fn test_contains_and_clamp() {
        let bounds = Bounds::new(vec![(0.0, 1.0), (-1.0, 1.0)]).unwrap();
        assert!(bounds.contains(&[0.5, -1.0]));
        assert!(!bounds.contains(&[1.5, 0.0]));
        assert!(!bounds.contains(&[0.5]));

        let b = bounds.get(0).unwrap();
        assert_eq!(b.clamp(7.0), 1.0);
        assert_eq!(b.clamp(-7.0), 0.0);
    }

    #[test]
    fn test_deserialize_validates() {
        let bounds: Bounds = serde_json::from_str("[[0.0, 1.0], [10, 20]]").unwrap();
        assert_eq!(bounds.dimensions(), 2);

        let err = serde_json::from_str::<Bounds>("[[1.0, 0.0]]");
        assert!(err.is_err());
    }
}

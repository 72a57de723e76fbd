//! Membership functions

use climatix_common::FuzzyError;
use serde::{Deserialize, Serialize};

/// Shape of a linguistic term over its variable's universe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MembershipFunction {
    /// Rises from `a` to a peak at `b`, falls to zero at `c`
    Triangular { a: f64, b: f64, c: f64 },
    /// Rises from `a` to `b`, flat at 1 until `c`, falls to zero at `d`
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
}

impl MembershipFunction {
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self, FuzzyError> {
        let mf = Self::Triangular { a, b, c };
        mf.validate()?;
        Ok(mf)
    }

    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Self, FuzzyError> {
        let mf = Self::Trapezoidal { a, b, c, d };
        mf.validate()?;
        Ok(mf)
    }

    /// Check breakpoints are finite and ordered.
    pub fn validate(&self) -> Result<(), FuzzyError> {
        let points: &[f64] = match self {
            Self::Triangular { a, b, c } => &[*a, *b, *c],
            Self::Trapezoidal { a, b, c, d } => &[*a, *b, *c, *d],
        };
        if points.iter().any(|p| !p.is_finite()) {
            return Err(FuzzyError::InvalidMembership(format!(
                "non-finite breakpoint in {:?}",
                self
            )));
        }
        if points.windows(2).any(|w| w[0] > w[1]) {
            return Err(FuzzyError::InvalidMembership(format!(
                "breakpoints out of order in {:?}",
                self
            )));
        }
        Ok(())
    }

    /// Membership degree of `x`, in [0, 1].
    ///
    /// Shoulders of zero width (`a == b` or `c == d`) give a vertical edge
    /// with degree 1 on the plateau side.
    pub fn degree(&self, x: f64) -> f64 {
        match *self {
            Self::Triangular { a, b, c } => {
                if x == b {
                    1.0
                } else if x <= a || x >= c {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (c - x) / (c - b)
                }
            }
            Self::Trapezoidal { a, b, c, d } => {
                if x >= b && x <= c {
                    1.0
                } else if x <= a || x >= d {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (d - x) / (d - c)
                }
            }
        }
    }
}

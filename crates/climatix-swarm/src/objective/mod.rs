//! Objective functions
//!
//! The swarm only needs a total map from a candidate vector to a scalar
//! cost (lower is better). Any `Fn(&[f64]) -> f64` qualifies.

pub mod hvac;

/// Scalar cost of a candidate position
pub trait Objective {
    fn evaluate(&self, position: &[f64]) -> f64;

    /// Dimensionality the objective requires, if it is fixed
    fn dimensions(&self) -> Option<usize> {
        None
    }
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, position: &[f64]) -> f64 {
        self(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    #[test]
    fn test_closures_are_objectives() {
        let offset = 0.5;
        let shifted = move |x: &[f64]| (x[0] - offset).powi(2);
        assert_eq!(shifted.evaluate(&[1.5]), 1.0);
        assert_eq!(shifted.dimensions(), None);

        assert_eq!(sphere.evaluate(&[3.0, 4.0]), 25.0);
    }
}

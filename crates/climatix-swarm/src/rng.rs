//! Uniform random draws for particle initialization and velocity updates

use rand::Rng;

/// Source of uniform reals
pub trait UniformSource {
    /// Next draw in [0, 1)
    fn next_unit(&mut self) -> f64;

    /// Next draw in `[low, high]`, or exactly `low` when the range is empty.
    ///
    /// Interpolates between the endpoints so ranges wider than `f64::MAX`
    /// never overflow.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let u = self.next_unit();
        if low == high {
            return low;
        }
        low * (1.0 - u) + high * u
    }
}

impl<R: Rng + ?Sized> UniformSource for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed sequence of unit draws, wrapping around at the end
#[derive(Debug, Clone)]
pub struct CyclicSource {
    values: Vec<f64>,
    cursor: usize,
}

impl CyclicSource {
    /// Values are clamped into [0, 1); an empty sequence always yields 0.
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for CyclicSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_draws_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u));
            let x = rng.uniform(-1.0, 1.0);
            assert!((-1.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_pinned_range() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(rng.uniform(3.0, 3.0), 3.0);
    }

    #[test]
    fn test_uniform_over_full_f64_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let x = rng.uniform(-f64::MAX, f64::MAX);
            assert!(x.is_finite(), "x = {}", x);
        }
    }

    #[test]
    fn test_cyclic_source_wraps() {
        let mut source = CyclicSource::new(vec![0.25, 0.5]);
        assert_eq!(source.next_unit(), 0.25);
        assert_eq!(source.next_unit(), 0.5);
        assert_eq!(source.next_unit(), 0.25);
        assert_eq!(source.uniform(0.0, 4.0), 2.0);
        assert_eq!(source.draws(), 4);
    }
}

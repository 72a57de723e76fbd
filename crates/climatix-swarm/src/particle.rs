//! Particle - one candidate solution and its best-known result

use climatix_common::{score::improves, Bounds};

use crate::rng::UniformSource;
use crate::SwarmConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Vec<f64>,
    velocity: Vec<f64>,
    best_position: Vec<f64>,
    best_value: f64,
}

impl Particle {
    /// Sample a particle uniformly inside `bounds`, with each velocity
    /// component drawn from `[-velocity_range, velocity_range]`.
    pub fn spawn<R>(bounds: &Bounds, velocity_range: f64, rng: &mut R) -> Self
    where
        R: UniformSource + ?Sized,
    {
        let position: Vec<f64> = bounds
            .iter()
            .map(|b| b.clamp(rng.uniform(b.low, b.high)))
            .collect();
        let velocity = (0..bounds.dimensions())
            .map(|_| rng.uniform(-velocity_range, velocity_range))
            .collect();
        Self::new(position, velocity)
    }

    /// Particle at an explicit state with no personal best yet.
    pub fn new(position: Vec<f64>, velocity: Vec<f64>) -> Self {
        Self {
            best_position: position.clone(),
            position,
            velocity,
            best_value: f64::INFINITY,
        }
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn best_position(&self) -> &[f64] {
        &self.best_position
    }

    /// Lowest objective value observed, `+inf` until the first finite one
    pub fn best_value(&self) -> f64 {
        self.best_value
    }

    /// Fold the value observed at the current position into the personal best.
    pub(crate) fn record(&mut self, value: f64) -> bool {
        if improves(value, self.best_value) {
            self.best_value = value;
            self.best_position.clone_from(&self.position);
            true
        } else {
            false
        }
    }

    /// Apply one velocity and position update.
    ///
    /// The social term is skipped while the swarm has no global best.
    pub(crate) fn advance(
        &mut self,
        config: &SwarmConfig,
        r1: f64,
        r2: f64,
        global_best: Option<&[f64]>,
        bounds: &Bounds,
    ) {
        for (d, bound) in bounds.iter().enumerate() {
            let x = self.position[d];
            let mut v = config.inertia * self.velocity[d]
                + config.cognitive * r1 * (self.best_position[d] - x);
            if let Some(global) = global_best {
                v += config.social * r2 * (global[d] - x);
            }
            self.velocity[d] = v;

            // Overflowed velocities can produce NaN; stay put rather than leave the bounds.
            let proposed = x + v;
            if !proposed.is_nan() {
                self.position[d] = bound.clamp(proposed);
            }
        }
    }
}

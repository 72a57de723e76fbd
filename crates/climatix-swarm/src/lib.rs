//! # Swarm
//!
//! Particle swarm optimization of HVAC control settings for Climatix.
//!
//! ## Update Rule
//!
//! ```text
//! v ← w·v + c1·r1·(pbest − x) + c2·r2·(gbest − x)
//! x ← clamp(x + v, low, high)
//! ```
//!
//! Where:
//! - w: Inertia weight
//! - c1: Cognitive coefficient (pull toward the particle's own best)
//! - c2: Social coefficient (pull toward the swarm's best)
//! - r1, r2: Uniform draws in [0, 1), one pair per particle per iteration
//!
//! ## Iteration
//!
//! Every iteration evaluates all particles first, folding each value into
//! the personal and global bests, and only then moves them. The run stops
//! after a fixed number of iterations.

pub mod objective;
pub mod particle;
pub mod report;
pub mod rng;
pub mod settings;
pub mod swarm;

use climatix_common::{
    ConfigError, DEFAULT_COGNITIVE, DEFAULT_INERTIA, DEFAULT_ITERATIONS, DEFAULT_POPULATION,
    DEFAULT_SOCIAL, DEFAULT_VELOCITY_RANGE,
};
use serde::{Deserialize, Serialize};

pub use self::objective::{hvac::HvacObjective, hvac::HvacScenario, Objective};
pub use self::particle::Particle;
pub use self::report::{OptimizationReport, Solution};
pub use self::rng::{CyclicSource, UniformSource};
pub use self::settings::ClimatixSettings;
pub use self::swarm::Swarm;

/// Swarm run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    /// Number of particles
    pub population: usize,
    /// Number of evaluate-then-move iterations
    pub iterations: usize,
    /// Inertia weight (w)
    pub inertia: f64,
    /// Cognitive coefficient (c1)
    pub cognitive: f64,
    /// Social coefficient (c2)
    pub social: f64,
    /// Initial velocity components are drawn from `[-velocity_range, velocity_range]`
    pub velocity_range: f64,
    /// Seed for reproducible runs; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            iterations: DEFAULT_ITERATIONS,
            inertia: DEFAULT_INERTIA,
            cognitive: DEFAULT_COGNITIVE,
            social: DEFAULT_SOCIAL,
            velocity_range: DEFAULT_VELOCITY_RANGE,
            seed: None,
        }
    }
}

impl SwarmConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteCoefficient { name, value });
            }
        }
        if !self.velocity_range.is_finite() || self.velocity_range < 0.0 {
            return Err(ConfigError::InvalidVelocityRange(self.velocity_range));
        }
        Ok(())
    }
}

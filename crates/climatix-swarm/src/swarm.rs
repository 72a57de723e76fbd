//! Swarm optimizer
//!
//! Owns the particles and the global best. Each iteration runs an
//! evaluation phase over every particle before any particle moves, so the
//! social term always sees the global best of the just-finished phase.

use climatix_common::{score::improves, Bounds, ConfigError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument, warn};

use crate::objective::Objective;
use crate::particle::Particle;
use crate::report::{OptimizationReport, Solution};
use crate::rng::UniformSource;
use crate::SwarmConfig;

pub struct Swarm<O, R = StdRng> {
    bounds: Bounds,
    config: SwarmConfig,
    objective: O,
    rng: R,
    particles: Vec<Particle>,
    global_best: Option<Solution>,
    iteration: usize,
    evaluations: u64,
    rejected_evaluations: u64,
    history: Vec<f64>,
}

impl<O: Objective> Swarm<O, StdRng> {
    /// Build a swarm seeded from `config.seed`, or from entropy when unset.
    pub fn new(bounds: Bounds, config: SwarmConfig, objective: O) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_source(bounds, config, objective, rng)
    }
}

impl<O: Objective, R: UniformSource> Swarm<O, R> {
    /// Build a swarm drawing all randomness from `rng`.
    ///
    /// Configuration is checked before the first draw.
    pub fn with_source(bounds: Bounds, config: SwarmConfig, objective: O, mut rng: R) -> Result<Self> {
        config.validate()?;
        if let Some(actual) = objective.dimensions() {
            if actual != bounds.dimensions() {
                return Err(ConfigError::DimensionMismatch {
                    expected: bounds.dimensions(),
                    actual,
                }
                .into());
            }
        }

        let particles = (0..config.population)
            .map(|_| Particle::spawn(&bounds, config.velocity_range, &mut rng))
            .collect();

        Ok(Self {
            bounds,
            config,
            objective,
            rng,
            particles,
            global_best: None,
            iteration: 0,
            evaluations: 0,
            rejected_evaluations: 0,
            history: Vec::new(),
        })
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn global_best(&self) -> Option<&Solution> {
        self.global_best.as_ref()
    }

    /// Iterations completed so far
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Run one iteration: evaluate every particle, then move every particle.
    ///
    /// Returns the global best value after the evaluation phase (`+inf` if
    /// nothing finite has been observed yet).
    pub fn step(&mut self) -> f64 {
        self.evaluate();
        let best = self.global_best.as_ref().map_or(f64::INFINITY, |b| b.value);
        self.history.push(best);
        self.advance();
        self.iteration += 1;
        best
    }

    /// Run the remaining iterations of the budget and report the result.
    #[instrument(skip(self), fields(population = self.config.population, iterations = self.config.iterations))]
    pub fn run(&mut self) -> OptimizationReport {
        info!(dimensions = self.bounds.dimensions(), "Starting swarm run");

        while self.iteration < self.config.iterations {
            let best = self.step();
            debug!(iteration = self.iteration, global_best = best, "Iteration complete");
        }

        let report = self.report();
        match report.best() {
            Some(best) => info!(
                value = best.value,
                position = ?best.position,
                evaluations = report.evaluations,
                "Swarm run complete"
            ),
            None => warn!(
                evaluations = report.evaluations,
                "Swarm run found no finite objective value"
            ),
        }
        report
    }

    /// Snapshot of the current result
    pub fn report(&self) -> OptimizationReport {
        OptimizationReport {
            best: self.global_best.clone(),
            iterations: self.iteration,
            evaluations: self.evaluations,
            rejected_evaluations: self.rejected_evaluations,
            history: self.history.clone(),
        }
    }

    fn evaluate(&mut self) {
        for particle in &mut self.particles {
            let value = self.objective.evaluate(particle.position());
            self.evaluations += 1;

            if !value.is_finite() {
                self.rejected_evaluations += 1;
                if self.rejected_evaluations == 1 {
                    warn!(value, position = ?particle.position(), "Objective returned a non-finite value");
                }
                continue;
            }

            particle.record(value);
            let incumbent = self.global_best.as_ref().map_or(f64::INFINITY, |b| b.value);
            if improves(value, incumbent) {
                self.global_best = Some(Solution {
                    position: particle.position().to_vec(),
                    value,
                });
            }
        }
    }

    fn advance(&mut self) {
        let global = self.global_best.as_ref().map(|b| b.position.as_slice());
        for particle in &mut self.particles {
            let r1 = self.rng.next_unit();
            let r2 = self.rng.next_unit();
            particle.advance(&self.config, r1, r2, global, &self.bounds);
        }
    }
}

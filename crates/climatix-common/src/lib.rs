//! # Climatix Common
//!
//! Shared types, errors, and defaults for the Climatix HVAC optimizer.
//!
//! ## Core Types
//!
//! - [`Bounds`]: per-dimension `[low, high]` search ranges
//! - [`score::improves`]: best-so-far comparison that rejects non-finite values
//! - [`ClimatixError`]: unified error with configuration, fuzzy and objective variants

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ClimatixError, ConfigError, FuzzyError, ObjectiveError, Result};
pub use types::{
    bounds::{Bound, Bounds},
    score,
};

/// Climatix version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default swarm population
pub const DEFAULT_POPULATION: usize = 30;

/// Default iteration budget
pub const DEFAULT_ITERATIONS: usize = 100;

/// Default inertia weight (w)
pub const DEFAULT_INERTIA: f64 = 0.5;

/// Default cognitive coefficient (c1)
pub const DEFAULT_COGNITIVE: f64 = 1.3;

/// Default social coefficient (c2)
pub const DEFAULT_SOCIAL: f64 = 1.3;

/// Initial velocities are drawn from `[-range, range]`
pub const DEFAULT_VELOCITY_RANGE: f64 = 1.0;

/// Comfort setpoint in degrees Celsius
pub const TARGET_TEMPERATURE: f64 = 22.0;

/// Degrees of correction delivered per unit of HVAC control level
pub const RESPONSIVENESS_FACTOR: f64 = 5.0;

//! Error types for Climatix
//!
//! Provides a unified error type and domain-specific error variants

use thiserror::Error;

/// Result type alias using ClimatixError
pub type Result<T> = std::result::Result<T, ClimatixError>;

/// Unified error type for Climatix operations
#[derive(Debug, Error)]
pub enum ClimatixError {
    // Run configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Fuzzy inference errors
    #[error("Fuzzy inference error: {0}")]
    Fuzzy(#[from] FuzzyError),

    // Objective errors
    #[error("Objective error: {0}")]
    Objective(#[from] ObjectiveError),

    // Settings loading errors
    #[error("Settings error: {0}")]
    Settings(String),
}

/// Malformed run configuration, detected before any particle is created
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Bounds must describe at least one dimension")]
    EmptyBounds,

    #[error("Bound {dimension} is inverted: low {low} > high {high}")]
    InvertedBound { dimension: usize, low: f64, high: f64 },

    #[error("Bound {dimension} is not finite")]
    NonFiniteBound { dimension: usize },

    #[error("Population size must be positive")]
    ZeroPopulation,

    #[error("Iteration count must be positive")]
    ZeroIterations,

    #[error("Coefficient {name} must be finite, got {value}")]
    NonFiniteCoefficient { name: &'static str, value: f64 },

    #[error("Initial velocity range must be finite and non-negative, got {0}")]
    InvalidVelocityRange(f64),

    #[error("Dimension mismatch: bounds have {expected}, objective expects {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Fuzzy inference errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    #[error("Unknown linguistic variable: {0}")]
    UnknownVariable(String),

    #[error("Unknown term {term} for variable {variable}")]
    UnknownTerm { variable: String, term: String },

    #[error("No crisp input supplied for variable {0}")]
    MissingInput(String),

    #[error("Invalid membership function: {0}")]
    InvalidMembership(String),

    #[error("Invalid universe for {variable}: {reason}")]
    InvalidUniverse { variable: String, reason: String },

    #[error("Input {variable} is not finite: {value}")]
    NonFiniteInput { variable: String, value: f64 },

    #[error("No rule activated for inputs {0}")]
    NoRuleActivated(String),
}

/// Objective construction errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObjectiveError {
    #[error("Invalid scenario {field}: {value}")]
    InvalidScenario { field: &'static str, value: f64 },

    #[error("Candidate has {actual} dimensions, objective expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl From<config::ConfigError> for ClimatixError {
    fn from(err: config::ConfigError) -> Self {
        ClimatixError::Settings(err.to_string())
    }
}

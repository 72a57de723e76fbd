//! # Fuzzy
//!
//! Rule-based HVAC control recommendations for Climatix.
//!
//! ## Reference Rule Base
//!
//! ```text
//! IF temperature is hot         AND occupancy is high   THEN setting is high
//! IF temperature is warm        AND occupancy is medium THEN setting is medium
//! IF temperature is comfortable AND occupancy is low    THEN setting is low
//! ```
//!
//! Membership shapes and rules are plain data (serde-friendly), so a
//! controller can be loaded from settings instead of [`FuzzyController::hvac`].

pub mod controller;
pub mod membership;
pub mod rules;
pub mod variable;

use climatix_common::FuzzyError;

pub use self::controller::FuzzyController;
pub use self::membership::MembershipFunction;
pub use self::rules::{Clause, FuzzyRule};
pub use self::variable::{LinguisticVariable, Term, Universe};

/// Temperature input variable name
pub const TEMPERATURE: &str = "temperature";

/// Occupancy input variable name
pub const OCCUPANCY: &str = "occupancy";

/// HVAC control level output variable name
pub const HVAC_SETTING: &str = "hvac_setting";

/// Anything that can turn a (temperature, occupancy) reading into a
/// recommended control level in [0, 1]
pub trait ControlRecommender {
    fn recommend(&self, temperature: f64, occupancy: f64) -> Result<f64, FuzzyError>;
}

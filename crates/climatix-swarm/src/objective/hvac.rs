//! HVAC control objective: energy usage plus comfort penalty
//!
//! ```text
//! energy  = level × occupancy × |T − T_target|
//! comfort = |T − T_target − level × responsiveness| × occupancy
//! cost    = energy + comfort
//! ```

use climatix_common::{ObjectiveError, RESPONSIVENESS_FACTOR, TARGET_TEMPERATURE};
use climatix_fuzzy::ControlRecommender;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Objective;

/// Fixed environmental reading the control level is optimized for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HvacScenario {
    /// Room temperature (°C)
    pub temperature: f64,
    /// Number of occupants
    pub occupancy: f64,
    /// Comfort setpoint (°C)
    pub target_temperature: f64,
    /// Degrees of correction per unit control level
    pub responsiveness: f64,
}

impl Default for HvacScenario {
    fn default() -> Self {
        Self {
            temperature: 26.0,
            occupancy: 15.0,
            target_temperature: TARGET_TEMPERATURE,
            responsiveness: RESPONSIVENESS_FACTOR,
        }
    }
}

impl HvacScenario {
    pub fn validate(&self) -> Result<(), ObjectiveError> {
        for (field, value) in [
            ("temperature", self.temperature),
            ("occupancy", self.occupancy),
            ("target_temperature", self.target_temperature),
            ("responsiveness", self.responsiveness),
        ] {
            if !value.is_finite() {
                return Err(ObjectiveError::InvalidScenario { field, value });
            }
        }
        if self.occupancy < 0.0 {
            return Err(ObjectiveError::InvalidScenario {
                field: "occupancy",
                value: self.occupancy,
            });
        }
        if self.responsiveness < 0.0 {
            return Err(ObjectiveError::InvalidScenario {
                field: "responsiveness",
                value: self.responsiveness,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn energy_usage(&self, level: f64) -> f64 {
        level * self.occupancy * (self.temperature - self.target_temperature).abs()
    }

    #[inline]
    pub fn comfort_penalty(&self, level: f64) -> f64 {
        (self.temperature - self.target_temperature - level * self.responsiveness).abs()
            * self.occupancy
    }

    #[inline]
    pub fn cost(&self, level: f64) -> f64 {
        self.energy_usage(level) + self.comfort_penalty(level)
    }
}

/// One-dimensional objective over the HVAC control level
#[derive(Debug, Clone)]
pub struct HvacObjective {
    scenario: HvacScenario,
    recommendation: Option<f64>,
}

impl HvacObjective {
    pub fn new(scenario: HvacScenario) -> Result<Self, ObjectiveError> {
        scenario.validate()?;
        Ok(Self {
            scenario,
            recommendation: None,
        })
    }

    /// Also ask `recommender` for its control level for this scenario.
    ///
    /// The recommendation is reported alongside the optimum and does not
    /// enter the cost. A failed recommendation is logged and left empty.
    pub fn with_recommender(
        scenario: HvacScenario,
        recommender: &dyn ControlRecommender,
    ) -> Result<Self, ObjectiveError> {
        let mut objective = Self::new(scenario)?;
        match recommender.recommend(objective.scenario.temperature, objective.scenario.occupancy)
        {
            Ok(level) => {
                debug!(level, "Recommended control level");
                objective.recommendation = Some(level);
            }
            Err(e) => warn!("Control recommendation unavailable: {}", e),
        }
        Ok(objective)
    }

    pub fn scenario(&self) -> &HvacScenario {
        &self.scenario
    }

    pub fn recommendation(&self) -> Option<f64> {
        self.recommendation
    }

    /// Cost of a one-component candidate `[level]`.
    pub fn try_cost(&self, position: &[f64]) -> Result<f64, ObjectiveError> {
        match position {
            [level] => Ok(self.scenario.cost(*level)),
            _ => Err(ObjectiveError::DimensionMismatch {
                expected: 1,
                actual: position.len(),
            }),
        }
    }
}

impl Objective for HvacObjective {
    fn evaluate(&self, position: &[f64]) -> f64 {
        self.try_cost(position).unwrap_or(f64::NAN)
    }

    fn dimensions(&self) -> Option<usize> {
        Some(1)
    }
}

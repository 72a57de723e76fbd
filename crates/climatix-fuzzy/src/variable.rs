//! Linguistic variables and their universes of discourse

use climatix_common::FuzzyError;
use serde::{Deserialize, Serialize};

use crate::membership::MembershipFunction;

/// Discretized range of a variable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    pub min: f64,
    pub max: f64,
    /// Spacing between sample points used for defuzzification
    pub step: f64,
}

impl Universe {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    fn validate(&self, variable: &str) -> Result<(), FuzzyError> {
        let invalid = |reason: &str| FuzzyError::InvalidUniverse {
            variable: variable.to_string(),
            reason: reason.to_string(),
        };
        if !self.min.is_finite() || !self.max.is_finite() || !self.step.is_finite() {
            return Err(invalid("limits must be finite"));
        }
        if self.min >= self.max {
            return Err(invalid("min must be below max"));
        }
        if self.step <= 0.0 {
            return Err(invalid("step must be positive"));
        }
        Ok(())
    }

    /// Sample points `min, min + step, ...` up to and including `max`.
    pub fn points(&self) -> Vec<f64> {
        // Rounding absorbs float drift so the endpoint is kept.
        let count = ((self.max - self.min) / self.step + 1e-9).floor() as usize;
        (0..=count)
            .map(|i| self.min + self.step * i as f64)
            .collect()
    }

    /// Crisp inputs outside the universe saturate at its edges.
    #[inline]
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }
}

/// Named fuzzy set on a variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub name: String,
    pub function: MembershipFunction,
}

/// A variable described by linguistic terms, e.g. temperature is "warm"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinguisticVariable {
    pub name: String,
    pub universe: Universe,
    pub terms: Vec<Term>,
}

impl LinguisticVariable {
    pub fn new(name: impl Into<String>, universe: Universe) -> Self {
        Self {
            name: name.into(),
            universe,
            terms: Vec::new(),
        }
    }

    /// Builder-style term registration
    pub fn with_term(
        mut self,
        name: impl Into<String>,
        function: MembershipFunction,
    ) -> Result<Self, FuzzyError> {
        function.validate()?;
        self.terms.push(Term {
            name: name.into(),
            function,
        });
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), FuzzyError> {
        self.universe.validate(&self.name)?;
        for term in &self.terms {
            term.function.validate()?;
        }
        Ok(())
    }

    pub fn term(&self, name: &str) -> Result<&Term, FuzzyError> {
        self.terms
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| FuzzyError::UnknownTerm {
                variable: self.name.clone(),
                term: name.to_string(),
            })
    }

    /// Degree to which crisp `x` belongs to term `name`
    pub fn membership(&self, name: &str, x: f64) -> Result<f64, FuzzyError> {
        let term = self.term(name)?;
        Ok(term.function.degree(self.universe.clamp(x)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_include_endpoint() {
        let output = Universe::new(0.0, 1.0, 0.1);
        let points = output.points();
        assert_eq!(points.len(), 11);
        assert!((points[10] - 1.0).abs() < 1e-9);

        let temperature = Universe::new(15.0, 34.0, 1.0);
        assert_eq!(temperature.points().len(), 20);
    }

    #[test]
    fn test_membership_clamps_input() {
        let occupancy = LinguisticVariable::new("occupancy", Universe::new(0.0, 20.0, 1.0))
            .with_term("high", MembershipFunction::triangular(14.0, 17.0, 20.0).unwrap())
            .unwrap();

        assert!((occupancy.membership("high", 15.5).unwrap() - 0.5).abs() < 1e-12);
        // 25 saturates to 20, the foot of the triangle
        assert_eq!(occupancy.membership("high", 25.0).unwrap(), 0.0);
    }

    #[test]
    fn test_unknown_term() {
        let var = LinguisticVariable::new("temperature", Universe::new(15.0, 34.0, 1.0));
        let err = var.membership("tepid", 20.0).unwrap_err();
        assert!(matches!(err, FuzzyError::UnknownTerm { .. }));
    }

    #[test]
    fn test_invalid_universe() {
        let var = LinguisticVariable::new("setting", Universe::new(1.0, 0.0, 0.1));
        assert!(var.validate().is_err());

        let var = LinguisticVariable::new("setting", Universe::new(0.0, 1.0, 0.0));
        assert!(var.validate().is_err());
    }
}

//! Mamdani fuzzy controller
//!
//! Inference runs in three steps:
//! 1. Fuzzification: crisp inputs are clamped into their universes and
//!    mapped to term membership degrees
//! 2. Rule evaluation: each rule fires with the `min` of its antecedents
//! 3. Aggregation and defuzzification: consequents are clipped at their
//!    rule strength, combined with `max`, and reduced to the centroid over
//!    the output universe's sample points

use climatix_common::FuzzyError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::membership::MembershipFunction;
use crate::rules::FuzzyRule;
use crate::variable::{LinguisticVariable, Term, Universe};
use crate::{ControlRecommender, HVAC_SETTING, OCCUPANCY, TEMPERATURE};

/// Rule base plus the variables it ranges over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyController {
    inputs: Vec<LinguisticVariable>,
    output: LinguisticVariable,
    rules: Vec<FuzzyRule>,
}

impl FuzzyController {
    /// Build a controller, checking every rule against the declared variables.
    pub fn new(
        inputs: Vec<LinguisticVariable>,
        output: LinguisticVariable,
        rules: Vec<FuzzyRule>,
    ) -> Result<Self, FuzzyError> {
        let controller = Self {
            inputs,
            output,
            rules,
        };
        controller.validate()?;
        Ok(controller)
    }

    /// Reference HVAC rule base over temperature (°C) and occupancy (people).
    pub fn hvac() -> Self {
        let tri = |name: &str, a: f64, b: f64, c: f64| Term {
            name: name.to_string(),
            function: MembershipFunction::Triangular { a, b, c },
        };

        let temperature = LinguisticVariable {
            name: TEMPERATURE.to_string(),
            universe: Universe::new(15.0, 34.0, 1.0),
            terms: vec![
                tri("comfortable", 20.0, 22.0, 24.0),
                tri("warm", 23.0, 26.0, 29.0),
                tri("hot", 28.0, 32.0, 35.0),
            ],
        };
        let occupancy = LinguisticVariable {
            name: OCCUPANCY.to_string(),
            universe: Universe::new(0.0, 20.0, 1.0),
            terms: vec![
                tri("low", 0.0, 5.0, 10.0),
                tri("medium", 8.0, 12.0, 16.0),
                tri("high", 14.0, 17.0, 20.0),
            ],
        };
        let setting = LinguisticVariable {
            name: HVAC_SETTING.to_string(),
            universe: Universe::new(0.0, 1.0, 0.1),
            terms: vec![
                tri("low", 0.0, 0.3, 0.5),
                tri("medium", 0.4, 0.6, 0.8),
                tri("high", 0.7, 0.9, 1.0),
            ],
        };

        let rules = vec![
            FuzzyRule::when(TEMPERATURE, "hot").and(OCCUPANCY, "high").then("high"),
            FuzzyRule::when(TEMPERATURE, "warm").and(OCCUPANCY, "medium").then("medium"),
            FuzzyRule::when(TEMPERATURE, "comfortable").and(OCCUPANCY, "low").then("low"),
        ];

        Self {
            inputs: vec![temperature, occupancy],
            output: setting,
            rules,
        }
    }

    pub fn validate(&self) -> Result<(), FuzzyError> {
        for var in self.inputs.iter().chain(std::iter::once(&self.output)) {
            var.validate()?;
        }
        for rule in &self.rules {
            for clause in &rule.antecedents {
                self.input(&clause.variable)?.term(&clause.term)?;
            }
            self.output.term(&rule.consequent)?;
        }
        Ok(())
    }

    pub fn output(&self) -> &LinguisticVariable {
        &self.output
    }

    pub fn rules(&self) -> &[FuzzyRule] {
        &self.rules
    }

    fn input(&self, name: &str) -> Result<&LinguisticVariable, FuzzyError> {
        self.inputs
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| FuzzyError::UnknownVariable(name.to_string()))
    }

    /// Run inference for named crisp inputs and return the crisp output.
    #[instrument(skip(self))]
    pub fn infer(&self, crisp: &[(&str, f64)]) -> Result<f64, FuzzyError> {
        for (variable, value) in crisp {
            if !value.is_finite() {
                return Err(FuzzyError::NonFiniteInput {
                    variable: variable.to_string(),
                    value: *value,
                });
            }
        }

        let mut activations = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let strength = rule.strength(|clause| -> Result<f64, FuzzyError> {
                let value = crisp
                    .iter()
                    .find(|(name, _)| *name == clause.variable)
                    .map(|(_, v)| *v)
                    .ok_or_else(|| FuzzyError::MissingInput(clause.variable.clone()))?;
                self.input(&clause.variable)?.membership(&clause.term, value)
            })?;
            if strength > 0.0 {
                let term = self.output.term(&rule.consequent)?;
                activations.push((term.function, strength));
            }
        }

        let mut weighted = 0.0;
        let mut area = 0.0;
        for x in self.output.universe.points() {
            let degree = activations
                .iter()
                .map(|(function, strength)| function.degree(x).min(*strength))
                .fold(0.0, f64::max);
            weighted += x * degree;
            area += degree;
        }

        if area <= 0.0 {
            return Err(FuzzyError::NoRuleActivated(format!("{:?}", crisp)));
        }

        let crisp_output = self.output.universe.clamp(weighted / area);
        debug!(
            rules_fired = activations.len(),
            output = crisp_output,
            "Fuzzy inference complete"
        );
        Ok(crisp_output)
    }
}

impl ControlRecommender for FuzzyController {
    fn recommend(&self, temperature: f64, occupancy: f64) -> Result<f64, FuzzyError> {
        self.infer(&[(TEMPERATURE, temperature), (OCCUPANCY, occupancy)])
    }
}

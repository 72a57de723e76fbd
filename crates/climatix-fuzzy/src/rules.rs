//! IF-THEN fuzzy rules

use serde::{Deserialize, Serialize};

/// `(variable, term)` pair, e.g. `("temperature", "hot")`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub variable: String,
    pub term: String,
}

impl Clause {
    pub fn new(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            term: term.into(),
        }
    }
}

/// IF every antecedent holds THEN the output is `consequent`
///
/// Antecedents are combined with `min`; the result is scaled by `weight`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyRule {
    pub antecedents: Vec<Clause>,
    /// Term of the output variable
    pub consequent: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl FuzzyRule {
    /// Start a rule from its first antecedent.
    pub fn when(variable: impl Into<String>, term: impl Into<String>) -> RuleBuilder {
        RuleBuilder {
            antecedents: vec![Clause::new(variable, term)],
        }
    }

    /// Firing strength given a membership lookup for each antecedent.
    pub fn strength<F, E>(&self, mut membership: F) -> Result<f64, E>
    where
        F: FnMut(&Clause) -> Result<f64, E>,
    {
        let mut strength: f64 = 1.0;
        for clause in &self.antecedents {
            strength = strength.min(membership(clause)?);
        }
        Ok(strength * self.weight)
    }
}

pub struct RuleBuilder {
    antecedents: Vec<Clause>,
}

impl RuleBuilder {
    pub fn and(mut self, variable: impl Into<String>, term: impl Into<String>) -> Self {
        self.antecedents.push(Clause::new(variable, term));
        self
    }

    pub fn then(self, consequent: impl Into<String>) -> FuzzyRule {
        FuzzyRule {
            antecedents: self.antecedents,
            consequent: consequent.into(),
            weight: default_weight(),
        }
    }
}

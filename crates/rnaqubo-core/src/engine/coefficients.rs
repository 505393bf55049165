use crate::core::models::ids::{QuartetId, QuartetPair};
use crate::core::qubo::traits::{LinearTerms, QuadraticTerms, VariableIndex};
use std::collections::BTreeMap;

/// Linear and quadratic QUBO coefficients keyed by quartet.
///
/// Quadratic keys are unordered pairs, so every pair of quartets owns at most one slot
/// and all interaction contributions for that pair are summed into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoefficientModel {
    pub linear: BTreeMap<QuartetId, f64>,
    pub quadratic: BTreeMap<QuartetPair, f64>,
}

impl CoefficientModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_linear(&mut self, id: QuartetId, value: f64) {
        self.linear.insert(id, value);
    }

    pub fn add_quadratic(&mut self, pair: QuartetPair, value: f64) {
        *self.quadratic.entry(pair).or_insert(0.0) += value;
    }

    pub fn linear_coefficient(&self, id: QuartetId) -> Option<f64> {
        self.linear.get(&id).copied()
    }

    pub fn quadratic_coefficient(&self, a: QuartetId, b: QuartetId) -> Option<f64> {
        QuartetPair::new(a, b).and_then(|pair| self.quadratic.get(&pair).copied())
    }

    pub fn linear_sum(&self) -> f64 {
        self.linear.values().sum()
    }

    /// Re-keys the coefficients by the variable indices an objective container assigned,
    /// where `variables[id]` is the variable declared for quartet `id`.
    ///
    /// `variables` must hold distinct indices; the formulation workflow checks this
    /// before calling here.
    ///
    /// # Panics
    ///
    /// Panics if a coefficient references a quartet without a declared variable.
    pub fn to_variable_terms(&self, variables: &[VariableIndex]) -> (LinearTerms, QuadraticTerms) {
        debug_assert!(
            variables.iter().collect::<std::collections::HashSet<_>>().len() == variables.len(),
            "variable indices must be distinct"
        );
        let linear = self
            .linear
            .iter()
            .map(|(id, &v)| (variables[id.index()], v))
            .collect();
        let quadratic = self
            .quadratic
            .iter()
            .map(|(pair, &v)| {
                let a = variables[pair.first().index()];
                let b = variables[pair.second().index()];
                ((a.min(b), a.max(b)), v)
            })
            .collect();
        (linear, quadratic)
    }
}

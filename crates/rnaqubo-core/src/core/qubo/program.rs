use super::lp;
use super::traits::{LinearTerms, QuadraticTerms, QuboObjective, VariableIndex};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ProgramError {
    #[error("Variable '{0}' is already declared")]
    DuplicateVariable(String),
    #[error("Coefficient references undeclared variable index {0}")]
    UnknownVariable(VariableIndex),
    #[error("Objective has already been set")]
    ObjectiveAlreadySet,
    #[error("Objective has not been set")]
    ObjectiveNotSet,
    #[error("Assignment has {actual} values but the program has {expected} variables")]
    AssignmentLength { expected: usize, actual: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveSense {
    Minimize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticObjective {
    pub sense: ObjectiveSense,
    pub linear: LinearTerms,
    pub quadratic: QuadraticTerms,
}

/// One non-zero entry of the upper-triangular QUBO matrix. Diagonal entries carry the
/// linear coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuboEntry {
    pub row: VariableIndex,
    pub col: VariableIndex,
    pub value: f64,
}

/// A named set of binary variables together with a quadratic objective.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticProgram {
    name: String,
    variables: Vec<String>,
    index: HashMap<String, VariableIndex>,
    objective: Option<QuadraticObjective>,
}

impl QuadraticProgram {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            variables: Vec::new(),
            index: HashMap::new(),
            objective: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn variable_names(&self) -> &[String] {
        &self.variables
    }

    pub fn variable_name(&self, index: VariableIndex) -> Option<&str> {
        self.variables.get(index).map(String::as_str)
    }

    pub fn variable_index(&self, name: &str) -> Option<VariableIndex> {
        self.index.get(name).copied()
    }

    pub fn objective(&self) -> Option<&QuadraticObjective> {
        self.objective.as_ref()
    }

    /// Linear coefficient of a variable, looked up by name.
    pub fn linear_coefficient(&self, name: &str) -> Option<f64> {
        let index = self.variable_index(name)?;
        self.objective.as_ref()?.linear.get(&index).copied()
    }

    /// Quadratic coefficient of an unordered variable pair, looked up by name.
    pub fn quadratic_coefficient(&self, a: &str, b: &str) -> Option<f64> {
        let (a, b) = (self.variable_index(a)?, self.variable_index(b)?);
        let key = (a.min(b), a.max(b));
        self.objective.as_ref()?.quadratic.get(&key).copied()
    }

    /// Energy of a full assignment, `x[k] == true` meaning variable `k` is selected.
    pub fn evaluate(&self, assignment: &[bool]) -> Result<f64, ProgramError> {
        let objective = self.objective.as_ref().ok_or(ProgramError::ObjectiveNotSet)?;
        if assignment.len() != self.variables.len() {
            return Err(ProgramError::AssignmentLength {
                expected: self.variables.len(),
                actual: assignment.len(),
            });
        }
        let linear: f64 = objective
            .linear
            .iter()
            .filter(|(k, _)| assignment[**k])
            .map(|(_, v)| v)
            .sum();
        let quadratic: f64 = objective
            .quadratic
            .iter()
            .filter(|((a, b), _)| assignment[*a] && assignment[*b])
            .map(|(_, v)| v)
            .sum();
        Ok(linear + quadratic)
    }

    /// Sparse upper-triangular view of the objective, sorted by `(row, col)`.
    pub fn qubo_entries(&self) -> Vec<QuboEntry> {
        let Some(objective) = &self.objective else {
            return Vec::new();
        };
        let mut entries: Vec<QuboEntry> = objective
            .linear
            .iter()
            .filter(|(_, v)| **v != 0.0)
            .map(|(&k, &value)| QuboEntry {
                row: k,
                col: k,
                value,
            })
            .chain(
                objective
                    .quadratic
                    .iter()
                    .filter(|(_, v)| **v != 0.0)
                    .map(|(&(row, col), &value)| QuboEntry { row, col, value }),
            )
            .collect();
        entries.sort_by_key(|e| (e.row, e.col));
        entries
    }

    pub fn export_lp_string(&self) -> String {
        lp::to_lp_string(self)
    }

    fn check_index(&self, index: VariableIndex) -> Result<(), ProgramError> {
        if index < self.variables.len() {
            Ok(())
        } else {
            Err(ProgramError::UnknownVariable(index))
        }
    }
}

impl QuboObjective for QuadraticProgram {
    type Error = ProgramError;

    fn add_binary_variable(&mut self, name: &str) -> Result<VariableIndex, Self::Error> {
        if self.index.contains_key(name) {
            return Err(ProgramError::DuplicateVariable(name.to_string()));
        }
        let index = self.variables.len();
        self.variables.push(name.to_string());
        self.index.insert(name.to_string(), index);
        Ok(index)
    }

    fn minimize(
        &mut self,
        linear: &LinearTerms,
        quadratic: &QuadraticTerms,
    ) -> Result<(), Self::Error> {
        if self.objective.is_some() {
            return Err(ProgramError::ObjectiveAlreadySet);
        }

        let mut linear_terms = LinearTerms::new();
        for (&k, &v) in linear {
            self.check_index(k)?;
            *linear_terms.entry(k).or_insert(0.0) += v;
        }

        let mut quadratic_terms = QuadraticTerms::new();
        for (&(a, b), &v) in quadratic {
            self.check_index(a)?;
            self.check_index(b)?;
            if a == b {
                // x * x == x for binary variables.
                *linear_terms.entry(a).or_insert(0.0) += v;
            } else {
                *quadratic_terms.entry((a.min(b), a.max(b))).or_insert(0.0) += v;
            }
        }

        self.objective = Some(QuadraticObjective {
            sense: ObjectiveSense::Minimize,
            linear: linear_terms,
            quadratic: quadratic_terms,
        });
        Ok(())
    }
}

use std::collections::BTreeMap;
use std::error::Error;

/// Index of a binary variable in the order it was declared.
pub type VariableIndex = usize;

/// Linear coefficients keyed by variable.
pub type LinearTerms = BTreeMap<VariableIndex, f64>;

/// Quadratic coefficients keyed by an unordered variable pair, stored as `(low, high)`.
pub type QuadraticTerms = BTreeMap<(VariableIndex, VariableIndex), f64>;

/// Defines the capability a QUBO target must offer to receive a formulation.
///
/// Any QUBO-representing library or plain data structure can serve as the target.
/// Implementors decide how names are stored; the formulation only relies on the
/// returned indices to address variables in the coefficient maps.
pub trait QuboObjective {
    /// The error type reported when the container rejects a variable or objective.
    type Error: Error + Send + Sync + 'static;

    /// Declares a named binary decision variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the container refuses the name, e.g. because it is already
    /// declared.
    fn add_binary_variable(&mut self, name: &str) -> Result<VariableIndex, Self::Error>;

    /// Sets the objective to be minimized.
    ///
    /// Called exactly once per formulation, after every variable has been declared.
    ///
    /// # Errors
    ///
    /// Returns an error if a coefficient references an unknown variable or the
    /// container does not accept the objective.
    fn minimize(
        &mut self,
        linear: &LinearTerms,
        quadratic: &QuadraticTerms,
    ) -> Result<(), Self::Error>;
}

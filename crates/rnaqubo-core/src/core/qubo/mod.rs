//! QUBO objective containers.
//!
//! The formulation engine never depends on a concrete optimization library. It writes
//! into any type implementing [`traits::QuboObjective`]: declare binary variables by
//! name, then set a minimization objective from linear and quadratic coefficient maps.
//! [`program::QuadraticProgram`] is the in-crate reference container, with LP text
//! export in [`lp`] and a sparse upper-triangular view for matrix-based solvers.

pub mod lp;
pub mod program;
pub mod traits;

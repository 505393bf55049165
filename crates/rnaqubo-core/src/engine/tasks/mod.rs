//! Tasks that build the pieces of a QUBO formulation.
//!
//! Each submodule performs one step of the pipeline: enumerating candidate quartets,
//! assigning their intrinsic energies as linear terms, and scanning every unordered
//! quartet pair for stacking rewards and crossing penalties. Tasks are pure functions
//! of their inputs and are composed by [`crate::workflows::formulate`].

pub mod interaction_terms;
pub mod linear_terms;
pub mod quartet_generation;

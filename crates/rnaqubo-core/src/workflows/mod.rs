//! # Workflows Module
//!
//! High-level entry points that run a complete formulation.
//!
//! ## Overview
//!
//! A workflow takes the caller's sequence, energy table and interaction parameters,
//! drives the [`crate::engine`] tasks in order, and hands the finished coefficients to
//! an objective container exactly once.
//!
//! - **Formulation Workflow** ([`formulate`]) - RNA sequence to QUBO objective

pub mod formulate;

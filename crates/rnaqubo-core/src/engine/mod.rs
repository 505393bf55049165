//! # Engine Module
//!
//! This module implements the formulation engine that turns an RNA sequence and its
//! energy data into QUBO coefficients.
//!
//! ## Overview
//!
//! The engine is purely sequential and holds no state across formulations. Every call
//! receives read-only inputs and produces freshly allocated outputs, so independent
//! formulations can run side by side without coordination.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Interaction parameters and their builder
//! - **Coefficients** ([`coefficients`]) - The quartet-keyed linear and quadratic maps
//! - **Progress Monitoring** ([`progress`]) - Phase and task events for front ends
//! - **Error Handling** ([`error`]) - Engine-level error type
//! - **Tasks** ([`tasks`]) - Quartet generation, linear terms and interaction terms

pub mod coefficients;
pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;

//! # Core Module
//!
//! This module provides the stateless building blocks of the RNA QUBO formulation.
//!
//! ## Overview
//!
//! Everything here is a pure data model, a pure predicate, or an I/O helper. Nothing in
//! this layer orchestrates a formulation; that is the job of the [`crate::engine`] tasks
//! and the [`crate::workflows`] entry points.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Sequences, quartets and their index-based identifiers
//! - **Pairing Rules** ([`pairing`]) - Watson-Crick and G-U wobble pair validation
//! - **Quartet Relations** ([`relations`]) - Stacking and crossing (pseudoknot) predicates
//! - **Input Files** ([`io`]) - FASTA sequences and CSV free-energy tables
//! - **Objective Sinks** ([`qubo`]) - The QUBO container abstraction and a reference
//!   implementation with LP export

pub mod io;
pub mod models;
pub mod pairing;
pub mod qubo;
pub mod relations;

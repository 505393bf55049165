//! Provides input functionality for the data an RNA formulation consumes.
//!
//! This module reads the two externally supplied inputs of a formulation: the RNA
//! sequence itself (from FASTA or bare sequence files) and the sparse table of
//! intrinsic quartet free energies (from CSV files).

pub mod energy_table;
pub mod fasta;

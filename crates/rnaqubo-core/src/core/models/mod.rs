//! # Core Models Module
//!
//! This module contains the fundamental data structures used to describe an RNA
//! folding problem before it is turned into a QUBO objective.
//!
//! ## Overview
//!
//! The models are deliberately small and immutable once constructed:
//!
//! - **Represent the input** - An RNA [`sequence`] of single-character bases
//! - **Represent candidate structure** - A [`quartet`] of two stacked base pairs
//! - **Identify decision variables** - Index-based [`ids`] for quartets and quartet pairs
//!
//! ## Usage
//!
//! ```
//! use rnaqubo::core::models::{quartet::Quartet, sequence::Sequence};
//!
//! let sequence = Sequence::new("GCGAUAGCGC").unwrap();
//! let quartet = Quartet::new(0, 9);
//! assert_eq!(quartet.positions(), [0, 9, 1, 8]);
//! assert_eq!(sequence.base(quartet.i), 'G');
//! ```

pub mod ids;
pub mod quartet;
pub mod sequence;

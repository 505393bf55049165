//! # rnaqubo Core Library
//!
//! A library that formulates RNA secondary structure prediction as a Quadratic
//! Unconstrained Binary Optimization (QUBO) problem, ready for quantum annealers or
//! classical QUBO solvers.
//!
//! ## Formulation
//!
//! Every candidate *quartet* (two adjacent stacked base pairs) becomes a binary
//! variable. The objective to minimize is
//!
//! ```text
//! F(q) = Σ e_q · q  +  Σ r · q_a · q_b  +  Σ t · q_a · q_b
//!        linear        stacked pairs       crossing pairs
//! ```
//!
//! where `e_q` is the intrinsic free energy of a quartet, `r` a (negative) stacking
//! reward and `t` a (large, positive) crossing penalty. Moving the no-crossing rule into
//! the objective as a penalty is what makes the problem unconstrained.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Stateless models (`Sequence`, `Quartet`), pure pairing
//!   and relation predicates, input readers and the abstract objective sink.
//!
//! - **[`engine`]: The Logic Core.** Configuration, progress reporting and the tasks
//!   that enumerate quartets and assemble coefficients.
//!
//! - **[`workflows`]: The Public API.** End-to-end formulation into any
//!   [`core::qubo::traits::QuboObjective`].
//!
//! ## Example
//!
//! ```
//! use rnaqubo::core::io::energy_table::EnergyTable;
//! use rnaqubo::engine::config::FormulationConfigBuilder;
//! use rnaqubo::workflows::formulate::build_qubo;
//!
//! let energies = EnergyTable::from_tuples([([0, 9, 1, 8], -3.3)]).unwrap();
//! let config = FormulationConfigBuilder::new()
//!     .stacking_reward(-1.5)
//!     .crossing_penalty(100.0)
//!     .build()
//!     .unwrap();
//!
//! let (program, formulation) = build_qubo("GCGAUAGCGC", &energies, &config).unwrap();
//! assert_eq!(program.num_variables(), formulation.quartets.len());
//! assert_eq!(program.linear_coefficient("q_0_9_1_8"), Some(-3.3));
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

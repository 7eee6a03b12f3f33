//! Gröbner-basis saturation over polynomial decision diagrams.
//!
//! Given a finite system of polynomial equations `p_i = 0`, the
//! [`Solver`] computes a saturated, inter-reduced basis closed under
//! S-polynomial superposition. Either a nonzero constant is derived —
//! the system is inconsistent and [`Solver::conflict`] reports the
//! witness with the joined dependencies of the inputs that produced it
//! — or the surviving basis is usable as a decision procedure for
//! ideal membership.
//!
//! Polynomials are hash-consed decision diagrams owned by a
//! [`PddManager`]; see the [`pdd`] module for the representation and
//! the supported coefficient [`Semantics`].
//!
//! # Examples
//!
//! Refuting `{x, x + 1}` over the Boolean ring:
//!
//! ```
//! use pdd_grobner::{PddManager, Semantics, Solver};
//!
//! let m = PddManager::new(1, Semantics::Mod2);
//! let mut solver = Solver::new(m);
//!
//! let x = solver.pdd_mut().mk_var(0).unwrap();
//! let one = solver.pdd().one();
//! let x_plus_1 = solver.pdd_mut().add(x, one).unwrap();
//!
//! let d0 = solver.deps_mut().mk_leaf(0);
//! let d1 = solver.deps_mut().mk_leaf(1);
//! solver.add(x, Some(d0));
//! solver.add(x_plus_1, Some(d1));
//!
//! solver.saturate();
//! let conflict = solver.conflict().expect("inconsistent system");
//! assert_eq!(solver.deps().labels(conflict.dep()), vec![0, 1]);
//! ```
//!
//! Solving a consistent linear system over 0/1 variables:
//!
//! ```
//! use pdd_grobner::{EqState, PddManager, Semantics, Solver};
//!
//! let m = PddManager::new(2, Semantics::ZeroOneVars);
//! let mut solver = Solver::new(m);
//!
//! let x = solver.pdd_mut().mk_var(1).unwrap();
//! let y = solver.pdd_mut().mk_var(0).unwrap();
//! let sum = solver.pdd_mut().add(x, y).unwrap();
//! let diff = solver.pdd_mut().sub(x, y).unwrap();
//! solver.add(sum, None);
//! solver.add(diff, None);
//!
//! solver.saturate();
//! assert!(solver.conflict().is_none());
//! assert!(solver
//!     .equations()
//!     .iter()
//!     .any(|eq| eq.state() == EqState::Solved));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod dep;
pub mod equation;
pub mod pdd;
pub mod resource;
mod simplifier;
pub mod solver;
pub mod statistics;

pub use config::SolverConfig;
pub use dep::{DepId, DepManager};
pub use equation::{EqState, Equation};
pub use pdd::{Monomial, PddDisplay, PddError, PddId, PddManager, Semantics, Var};
pub use resource::ResourceLimit;
pub use solver::{EquationDisplay, Solver};
pub use statistics::{SolverStats, Statistics};

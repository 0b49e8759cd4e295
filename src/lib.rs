//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form, by exhaustive search over a network of watched-literal clauses.
//!
//! # Orientation
//!
//! The library is built around three layers:
//! - [Constraint states](crate::state), which map each variable to a [domain](crate::structures::domain) of values still possible for the variable.
//!   States are described by traits, and any representation implementing the traits may be used with the clauses of the library.
//! - [Watched clauses](crate::clause), which test satisfaction against a state and react to a narrowed domain by moving one of two watched literals, forcing a value, or noting a violation.
//! - An [exhaustive solver](crate::solver), which owns a state and a collection of clauses, and performs a depth-first backtracking search over the variables of the formula.
//!
//! Formulas may be added through the [DIMACS](crate::builder::dimacs) representation or [programatically](crate::solver::ExhaustiveSolver::add_clause).
//!
//! Useful starting points, then, may be:
//! - The [search procedure](crate::procedures::search) to inspect the dynamics of a solve.
//! - The [propagation](crate::clause::WatchedClause::propagate) method of a clause, for the watched literal scheme.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use watchful::config::Config;
//! # use watchful::reports::Report;
//! # use watchful::solver::ExhaustiveSolver;
//! let dimacs = b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! let (mut solver, _info) = ExhaustiveSolver::from_dimacs(dimacs.as_slice(), Config::default()).unwrap();
//! assert_eq!(solver.solve(), Ok(false));
//! assert_eq!(solver.report(), Report::Unsatisfiable);
//! ```
//!
//! + Build a formula clause by clause, and read a model.
//!
//! ```rust
//! # use watchful::config::Config;
//! # use watchful::solver::ExhaustiveSolver;
//! let mut solver = ExhaustiveSolver::new(3, Config::default()).unwrap();
//!
//! assert!(solver.add_clause(&[1, -2]).is_ok());
//! assert!(solver.add_clause(&[2, 3]).is_ok());
//! assert!(solver.add_clause(&[-3]).is_ok());
//!
//! assert_eq!(solver.solve(), Ok(true));
//! assert_eq!(solver.value_of(0), Ok(true));
//! assert_eq!(solver.value_of(1), Ok(true));
//! assert_eq!(solver.value_of(2), Ok(false));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with a variety of targets to help narrow output to relevant parts of the library.
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to the search can be filtered with `RUST_LOG=search …` or,
//! - Logs of forced values and violated clauses with `RUST_LOG=propagation=debug …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod clause;
pub mod config;
pub mod reports;
pub mod solver;
pub mod state;
pub mod structures;
pub mod types;

pub mod misc;

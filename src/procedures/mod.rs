//! Procedures for deciding the satisfiability of the formula of a solver.
//!
//! For the most part these are methods accessed via a solver, and primarily placed here for documentation.

pub mod search;
pub mod solve;

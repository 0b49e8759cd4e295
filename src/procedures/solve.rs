//! Determines the satisfiability of the formula of a solver.
//!
//! # Overview
//!
//! A solve is a depth-first [search](crate::procedures::search) over every assignment to the variables of the solver, with variables decided in index order and values tried false before true.
//!
//! - If some clause of the formula is empty, the formula is unsatisfiable and no search is made.
//! - Otherwise, the formula is satisfiable exactly when the search finds a complete assignment which satisfies every clause.
//!
//! Each solve starts afresh, with fresh [counters](crate::solver::Counters) and without any model from a previous solve.
//! So, a solver may be solved, extended with further clauses, and solved again.
//!
//! On return, every domain of the state is as it was before the solve, including after an error.

use std::time::Instant;

use crate::{
    misc::log::targets::{self},
    reports::Report,
    solver::{Counters, ExhaustiveSolver},
    types::err::{self},
};

use super::search::Search;

impl ExhaustiveSolver {
    /// Determines the satisfiability of the formula of the solver.
    ///
    /// Returns true if the formula is satisfiable, and false otherwise.
    /// After a solve returns true, a satisfying assignment is available through [value_of](ExhaustiveSolver::value_of).
    ///
    /// An error during the search ends the search, and the [report](ExhaustiveSolver::report) of the solver remains [Unknown](Report::Unknown).
    pub fn solve(&mut self) -> Result<bool, err::ErrorKind> {
        self.model = None;
        self.report = Report::Unknown;
        self.counters = Counters::default();

        if self.empty_clause {
            log::info!(target: targets::SEARCH, "The formula contains an empty clause.");
            self.report = Report::Unsatisfiable;
            return Ok(false);
        }

        log::info!(target: targets::SEARCH, "Solve over {} variables and {} clauses.", self.variable_count(), self.clause_count());

        let start = Instant::now();

        let mut search = Search::new(
            &mut self.clauses,
            &self.occurrences,
            &self.units,
            &mut self.counters,
            self.config.propagation.value,
        );

        let result = search.try_assignments(&mut self.state);
        let model = search.take_model();

        self.counters.time = start.elapsed();

        match result {
            Ok(true) => {
                self.model = model;
                self.report = Report::Satisfiable;
            }

            Ok(false) => self.report = Report::Unsatisfiable,

            Err(ref e) => {
                log::error!(target: targets::SEARCH, "Solve failed: {e}");
            }
        }

        log::info!(target: targets::SEARCH, "{} with {}", self.report, self.counters);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, structures::domain::BoolDomain};

    fn solver_with(variables: usize, clauses: &[&[i32]], propagation: bool) -> ExhaustiveSolver {
        let mut config = Config::default();
        config.propagation.value = propagation;

        let mut solver = ExhaustiveSolver::new(variables, config).unwrap();
        for clause in clauses {
            solver.add_clause(clause).unwrap();
        }
        solver
    }

    #[test]
    fn empty_formula() {
        for propagation in [false, true] {
            let mut solver = solver_with(2, &[], propagation);
            assert_eq!(solver.solve(), Ok(true));
            assert_eq!(solver.valuation_string(), "-1 -2");

            let mut solver = solver_with(0, &[], propagation);
            assert_eq!(solver.solve(), Ok(true));
            assert_eq!(solver.model(), Some([].as_slice()));
        }
    }

    #[test]
    fn empty_clause() {
        let mut solver = solver_with(2, &[&[1, 2], &[]], false);
        assert_eq!(solver.solve(), Ok(false));
        assert_eq!(solver.report(), Report::Unsatisfiable);
        assert_eq!(solver.counters.leaves, 0);
    }

    #[test]
    fn first_model_in_order() {
        for propagation in [false, true] {
            let mut solver = solver_with(3, &[&[1, 2], &[2, 3], &[-2, 3]], propagation);
            assert_eq!(solver.solve(), Ok(true));
            assert_eq!(solver.model(), Some([false, true, true].as_slice()));
        }
    }

    #[test]
    fn restored_after_solve() {
        for propagation in [false, true] {
            let mut solver = solver_with(3, &[&[1, -2], &[2, 3], &[-3]], propagation);
            assert_eq!(solver.solve(), Ok(true));
            assert!(solver
                .state()
                .domains()
                .iter()
                .all(|domain| *domain == BoolDomain::full()));
        }
    }

    #[test]
    fn pruning_reduces_leaves() {
        let clauses: &[&[i32]] = &[&[1, 2], &[1, -2], &[-1, 3], &[-1, -3]];

        let mut baseline = solver_with(3, clauses, false);
        assert_eq!(baseline.solve(), Ok(false));
        assert_eq!(baseline.counters.leaves, 8);

        let mut pruned = solver_with(3, clauses, true);
        assert_eq!(pruned.solve(), Ok(false));
        assert!(pruned.counters.leaves < baseline.counters.leaves);
        assert!(pruned.counters.conflicts > 0);
    }

    #[test]
    fn resolve_after_extension() {
        let mut solver = solver_with(2, &[&[1, 2]], false);
        assert_eq!(solver.solve(), Ok(true));
        assert_eq!(solver.value_of(1), Ok(true));

        solver.add_clause(&[-2]).unwrap();
        assert_eq!(solver.report(), Report::Unknown);
        assert_eq!(solver.solve(), Ok(true));
        assert_eq!(solver.value_of(0), Ok(true));
        assert_eq!(solver.value_of(1), Ok(false));

        solver.add_clause(&[-1]).unwrap();
        assert_eq!(solver.solve(), Ok(false));
        assert!(solver.model().is_none());
    }
}

/*!
The exhaustive solver.

A solver owns:
- A [state](crate::state) with a boolean domain for each variable.
- The clauses of a formula, as [watched clauses](WatchedClause) for clauses of two or more literals, and as literals for unit clauses.
- For each variable, a note of each clause containing the variable, for propagation.
- The most recent model, if one has been found.

Clauses are added through the [builder](crate::builder) methods, and satisfiability is decided by [solve](crate::procedures::solve).

# Variables

A solver is built with a fixed count of variables, and every clause added must use only those variables.
Variables are indexed from zero, while literals are written as DIMACS integers.
So, the literal `-3` refers to variable `2`.

# Models

Every domain of the state is restored once a solve returns, and so the satisfying assignment found is captured when found.
After a satisfiable solve, [value_of](ExhaustiveSolver::value_of) and [valuation](ExhaustiveSolver::valuation) read the captured assignment.
*/

mod counters;
pub use counters::Counters;

use crate::{
    clause::WatchedClause,
    config::Config,
    misc::log::targets::{self},
    reports::Report,
    state::{ConstraintState, WatchedState},
    structures::{literal::Literal, parameter::Parameter, variable::Variable},
    types::err::{self},
};

/// A note of a literal of some clause on a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Occurrence {
    /// The variable is the literal of a unit clause, with the given polarity.
    Unit(bool),

    /// The variable is the literal at index `literal` of clause `clause`.
    Clause { clause: usize, literal: usize },
}

/// A solver for deciding the satisfiability of a formula by exhaustive search.
pub struct ExhaustiveSolver {
    /// The configuration of the solver.
    pub config: Config,

    /// The state of the search, where only watched literals trigger propagation.
    pub(crate) state: WatchedState<true>,

    /// Clauses of two or more literals.
    pub(crate) clauses: Vec<WatchedClause<Parameter>>,

    /// The literals of unit clauses.
    pub(crate) units: Vec<Literal>,

    /// Whether an empty clause has been added.
    pub(crate) empty_clause: bool,

    /// For each variable, each clause containing the variable.
    pub(crate) occurrences: Vec<Vec<Occurrence>>,

    /// The assignment found by the most recent solve, if satisfiable.
    pub(crate) model: Option<Vec<bool>>,

    pub(crate) report: Report,

    /// Counts from the most recent solve.
    pub counters: Counters,
}

impl ExhaustiveSolver {
    /// A solver over the given count of variables, with no clauses.
    ///
    /// An error is returned if the count exceeds the [variable limit](crate::config::Config::variable_limit) of the configuration.
    pub fn new(variables: usize, config: Config) -> Result<Self, err::ErrorKind> {
        let limit = config.variable_limit.value;
        if variables > limit as usize {
            log::error!(target: targets::CLAUSE_DB, "A solver over {variables} variables was requested, exceeding the limit of {limit}.");
            return Err(err::ErrorKind::from(err::BuildError::VariableLimit {
                requested: variables,
                limit,
            }));
        }

        Ok(ExhaustiveSolver {
            config,
            state: WatchedState::new(variables),
            clauses: Vec::default(),
            units: Vec::default(),
            empty_clause: false,
            occurrences: vec![Vec::default(); variables],
            model: None,
            report: Report::Unknown,
            counters: Counters::default(),
        })
    }

    /// A count of the variables of the solver.
    pub fn variable_count(&self) -> usize {
        self.state.len()
    }

    /// A count of the clauses added to the solver, including unit and empty clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len() + self.units.len() + usize::from(self.empty_clause)
    }

    /// The watched clauses of the solver.
    pub fn clauses(&self) -> &[WatchedClause<Parameter>] {
        &self.clauses
    }

    /// The literals of the unit clauses of the solver.
    pub fn units(&self) -> &[Literal] {
        &self.units
    }

    /// The state of the solver.
    ///
    /// Outside of a solve, every domain is as it was before the most recent solve.
    pub fn state(&self) -> &WatchedState<true> {
        &self.state
    }

    /// The value of the given variable.
    ///
    /// The value is read from the model of the most recent solve, if the solve found the formula satisfiable.
    /// Otherwise, the value is read from the state, and is an error unless the domain of the variable is a singleton.
    pub fn value_of(&self, variable: usize) -> Result<bool, err::ErrorKind> {
        if variable >= self.variable_count() {
            return Err(err::ErrorKind::from(err::StateError::UnknownParameter));
        }

        match &self.model {
            Some(model) => Ok(model[variable]),
            None => {
                let value = self.state.get_value(Parameter::new(variable as Variable))?;
                Ok(value)
            }
        }
    }

    /// The model of the most recent solve, in variable order, if the solve found the formula satisfiable.
    pub fn model(&self) -> Option<&[bool]> {
        self.model.as_deref()
    }

    /// The model of the most recent solve as literals, in variable order, if the solve found the formula satisfiable.
    pub fn valuation(&self) -> Option<Vec<Literal>> {
        self.model.as_ref().map(|model| {
            model
                .iter()
                .enumerate()
                .map(|(variable, value)| Literal::new(variable as Variable, *value))
                .collect()
        })
    }

    /// The model of the most recent solve as a string of DIMACS literals, separated by spaces.
    ///
    /// The string is empty if there is no model.
    pub fn valuation_string(&self) -> String {
        match self.valuation() {
            None => String::default(),
            Some(valuation) => valuation
                .iter()
                .map(|literal| literal.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// A report on the most recent solve.
    pub fn report(&self) -> Report {
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_limit() {
        let mut config = Config::default();
        config.variable_limit.value = 4;

        assert!(ExhaustiveSolver::new(4, config.clone()).is_ok());
        assert_eq!(
            ExhaustiveSolver::new(5, config).err(),
            Some(err::ErrorKind::Build(err::BuildError::VariableLimit {
                requested: 5,
                limit: 4
            }))
        );
    }

    #[test]
    fn value_before_solve() {
        let solver = ExhaustiveSolver::new(2, Config::default()).unwrap();

        assert_eq!(
            solver.value_of(0),
            Err(err::ErrorKind::State(err::StateError::NotSingleton))
        );
        assert_eq!(
            solver.value_of(2),
            Err(err::ErrorKind::State(err::StateError::UnknownParameter))
        );
        assert_eq!(solver.report(), Report::Unknown);
        assert!(solver.valuation().is_none());
        assert_eq!(solver.valuation_string(), "");
    }
}

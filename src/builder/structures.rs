use crate::{
    clause::WatchedClause,
    misc::log::targets::{self},
    reports::Report,
    solver::{ExhaustiveSolver, Occurrence},
    structures::literal::Literal,
    types::err::{self},
};

use super::ClauseOk;

impl ExhaustiveSolver {
    /// Adds a clause to the solver, from DIMACS integers.
    ///
    /// - A clause of two or more literals is stored as a [watched clause](WatchedClause), and the watches of the clause are registered with the state.
    /// - A clause of a single literal is stored as a unit.
    /// - An empty clause is noted, and any solve after is unsatisfiable.
    ///
    /// Literals are kept in the order given, including any duplicates.
    ///
    /// Adding a clause discards any model from a previous solve.
    pub fn add_clause(&mut self, literals: &[i32]) -> Result<ClauseOk, err::ErrorKind> {
        let mut clause = Vec::with_capacity(literals.len());
        for int in literals {
            let literal = Literal::from_dimacs(*int)?;
            if literal.variable() as usize >= self.variable_count() {
                log::error!(target: targets::CLAUSE_DB, "Literal {int} is outside of the {} variables of the solver.", self.variable_count());
                return Err(err::ErrorKind::from(err::ClauseError::UnknownVariable(
                    *int,
                )));
            }
            clause.push(literal);
        }

        self.model = None;
        self.report = Report::Unknown;

        match clause.as_slice() {
            [] => {
                log::info!(target: targets::CLAUSE_DB, "Empty clause added.");
                self.empty_clause = true;
                Ok(ClauseOk::Empty)
            }

            [unit] => {
                log::trace!(target: targets::CLAUSE_DB, "Unit {unit} added.");
                self.occurrences[unit.variable() as usize].push(Occurrence::Unit(unit.polarity()));
                self.units.push(*unit);
                Ok(ClauseOk::Unit)
            }

            _ => {
                let watched = WatchedClause::from_dimacs_literals(&clause)?;
                let key = self.clauses.len();

                for (index, literal) in clause.iter().enumerate() {
                    self.occurrences[literal.variable() as usize].push(Occurrence::Clause {
                        clause: key,
                        literal: index,
                    });
                }

                watched.attach_watches(&mut self.state);
                log::trace!(target: targets::CLAUSE_DB, "Clause {key}: {}", watched.as_dimacs(false));
                self.clauses.push(watched);
                Ok(ClauseOk::Added)
            }
        }
    }
}

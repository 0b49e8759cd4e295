/*!
The depth-first search over assignments.

# Overview

At depth *d* the search decides variable *d*:
- Each value of the domain of the variable is tried in turn, false before true, by narrowing the domain to the value and searching from depth *d + 1*.
- The first success ends the search, and if every value fails the search backtracks to depth *d - 1*.

At depth *n*, for *n* the count of variables, every variable is decided, and the assignment is checked against every clause (and unit).
The check is the sole test of satisfiability, and if the check passes the assignment is noted as a model before the state is restored.

The search is a loop over an explicit stack of levels, one level per decided variable, so the depth of the search is not bounded by the call stack.

# Restoration

Every narrowed domain is saved to a [TrailGuard] before the narrowing, and each level notes the length of the trail on entry.
To try another value, or to backtrack, the trail is restored to the mark of the level.
The guard restores the remainder of the trail when dropped, and so the state is restored on every exit from the search, including early return of an error.

# Propagation

If [propagation](crate::config::Config::propagation) is enabled, each decision is propagated through the clauses of the formula before the search continues.

- Each clause watching a literal on the decided variable is [propagated](crate::clause::WatchedClause::propagate) with the index of the literal, and a unit on the variable is checked against the value.
- Values forced by a clause are noted on the trail and propagated in turn.
- If some clause (or unit) is violated, the branch is pruned.

As the state of a solver fixes [ONLY_WATCHES_TRIGGER](crate::state::WatchState::ONLY_WATCHES_TRIGGER), propagation is only requested for watched indicies.

Watches are not restored on backtrack.
Pruning is only made on a clause with every literal false, and values are only forced by a clause with every other literal false, regardless of where the watches of the clause are.
So, positions of watches are only relevant to whether a violation is noticed before the check of a complete assignment.
*/

use crate::{
    clause::{PropagationResult, WatchedClause},
    misc::log::targets::{self},
    solver::{Counters, Occurrence},
    state::{ConstraintState, TrailGuard, WatchedState},
    structures::{
        domain::{BoolDomain, Domain},
        literal::Literal,
        parameter::Parameter,
        variable::Variable,
    },
    types::err::{self},
};

/// A decided variable, with the values of the variable when decided and a count of those values tried.
struct Level {
    parameter: Parameter,
    candidates: BoolDomain,
    tried: usize,
    /// The length of the trail before any value was tried.
    mark: usize,
}

/// The parts of a solver used during a search, borrowed from the solver for the duration of the search.
pub(crate) struct Search<'s> {
    clauses: &'s mut [WatchedClause<Parameter>],
    occurrences: &'s [Vec<Occurrence>],
    units: &'s [Literal],
    counters: &'s mut Counters,
    propagation: bool,
    model: Option<Vec<bool>>,
}

impl<'s> Search<'s> {
    pub(crate) fn new(
        clauses: &'s mut [WatchedClause<Parameter>],
        occurrences: &'s [Vec<Occurrence>],
        units: &'s [Literal],
        counters: &'s mut Counters,
        propagation: bool,
    ) -> Self {
        Search {
            clauses,
            occurrences,
            units,
            counters,
            propagation,
            model: None,
        }
    }

    /// The model found by the search, if any.
    pub(crate) fn take_model(&mut self) -> Option<Vec<bool>> {
        self.model.take()
    }

    /// Searches for a satisfying assignment, restoring every domain of `state` before returning.
    pub(crate) fn try_assignments(
        &mut self,
        state: &mut WatchedState<true>,
    ) -> Result<bool, err::ErrorKind> {
        let variable_count = state.len();
        let mut trail = TrailGuard::new(state);
        let mut levels: Vec<Level> = Vec::with_capacity(variable_count);

        'search_loop: loop {
            let depth = levels.len();
            match depth == variable_count {
                true => {
                    if self.check_assignment(&trail)? {
                        return Ok(true);
                    }
                }

                false => {
                    let parameter = Parameter::new(depth as Variable);
                    levels.push(Level {
                        parameter,
                        candidates: *trail.get_domain(parameter),
                        tried: 0,
                        mark: trail.mark(),
                    });
                }
            }

            'decision_loop: loop {
                let depth = levels.len().saturating_sub(1);
                let Some(level) = levels.last_mut() else {
                    return Ok(false);
                };
                trail.restore_to(level.mark);

                let candidates = level.candidates;
                let Some(value) = candidates.values().nth(level.tried) else {
                    log::trace!(target: targets::SEARCH, "Depth {depth}: values of {} exhausted, backtracking.", level.parameter);
                    levels.pop();
                    continue 'decision_loop;
                };
                level.tried += 1;
                let parameter = level.parameter;

                self.counters.decisions += 1;
                log::trace!(target: targets::SEARCH, "Depth {depth}: {parameter} set to {value}.");
                trail.save(parameter);
                trail.set_value(parameter, value);

                match self.propagation {
                    false => continue 'search_loop,

                    true => match self.propagate_from(&mut trail, parameter)? {
                        true => continue 'search_loop,
                        false => self.counters.conflicts += 1,
                    },
                }
            }
        }
    }

    /// Checks a complete assignment against every clause and unit, and notes the assignment as a model if every check passes.
    fn check_assignment(&mut self, state: &WatchedState<true>) -> Result<bool, err::ErrorKind> {
        self.counters.leaves += 1;

        let clauses_satisfied = self.clauses.iter().all(|clause| clause.is_satisfied(state));
        let units_satisfied = self
            .units
            .iter()
            .all(|unit| state.get_value(unit.parameter()) == Ok(unit.polarity()));

        if !(clauses_satisfied && units_satisfied) {
            return Ok(false);
        }

        let model = state
            .parameters()
            .map(|parameter| state.get_value(parameter))
            .collect::<Result<Vec<bool>, _>>()?;

        log::debug!(target: targets::SEARCH, "Model found after {} assignments.", self.counters.leaves);
        self.model = Some(model);
        Ok(true)
    }

    /// Propagates the value of `parameter`, and any values forced as a consequence.
    /// Domains narrowed by a forced value are noted on the trail.
    ///
    /// Returns false if some clause or unit is violated, and true otherwise.
    fn propagate_from(
        &mut self,
        trail: &mut TrailGuard<WatchedState<true>>,
        parameter: Parameter,
    ) -> Result<bool, err::ErrorKind> {
        let occurrences = self.occurrences;
        let mut queue = vec![parameter];

        while let Some(decided) = queue.pop() {
            let value = trail.get_value(decided)?;

            for occurrence in &occurrences[decided.index()] {
                match *occurrence {
                    Occurrence::Unit(polarity) => {
                        if polarity != value {
                            log::debug!(target: targets::PROPAGATION, "Unit on {decided} violated.");
                            return Ok(false);
                        }
                    }

                    Occurrence::Clause { clause, literal } => {
                        let the_clause = &mut self.clauses[clause];

                        let Some(other) = the_clause.other_watch(literal) else {
                            continue;
                        };
                        let other_parameter = the_clause.literals()[other].0;
                        let other_domain = *trail.get_domain(other_parameter);

                        match the_clause.propagate(&mut **trail, literal)? {
                            PropagationResult::Unsat => {
                                log::debug!(target: targets::PROPAGATION, "Clause {clause} violated by {decided}.");
                                return Ok(false);
                            }

                            PropagationResult::Sat => {
                                if !other_domain.is_singleton()
                                    && trail.get_domain(other_parameter).is_singleton()
                                {
                                    trail.note(other_parameter, other_domain);
                                    self.counters.forced += 1;
                                    queue.push(other_parameter);
                                }
                            }

                            PropagationResult::Consistent => {}
                        }
                    }
                }
            }
        }

        Ok(true)
    }
}

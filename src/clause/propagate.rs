/*!
Propagation of a narrowed domain through a watched clause.

See [WatchedClause::propagate] and [WatchedClause::propagate_rewatch].
*/

use crate::{
    misc::log::targets::{self},
    state::{ConstraintState, WatchState},
    structures::domain::Domain,
    types::err::{self},
};

use super::{PropagationResult, Watch, WatchedClause};

impl<P: Copy + PartialEq + std::fmt::Debug> WatchedClause<P> {
    /// Updates the clause after the domain of the literal at index `trigger` has narrowed.
    ///
    /// # Selecting a watch
    ///
    /// - If `trigger` is watch A, watch A is processed (against watch B).
    /// - Otherwise, if the state fixes [ONLY_WATCHES_TRIGGER](WatchState::ONLY_WATCHES_TRIGGER), the trigger is trusted to be watch B and watch B is processed (against watch A), without any check.
    /// - Otherwise, `trigger` is checked against the length of the clause, with an [out of range](err::PropagationError::TriggerOutOfRange) error if it is not the index of some literal.
    ///   Then, if `trigger` is watch B, watch B is processed (against watch A), and if `trigger` is not watched the clause is unchanged and [Consistent](PropagationResult::Consistent).
    ///
    /// # Processing a watch
    ///
    /// 1. If the literal of the triggered watch is decided to its polarity, the clause is [Sat](PropagationResult::Sat).
    /// 2. Otherwise, a circular sweep is made from the triggered watch for a literal (other than the other watch) whose domain contains its polarity.
    ///    - If the domain of the literal found is decided, the clause is [Sat](PropagationResult::Sat).
    ///    - Otherwise, the triggered watch moves to the literal found, the move is registered with the state, and the clause is [Consistent](PropagationResult::Consistent).
    /// 3. If no literal is found, all hope is on the other watch:
    ///    - If the domain of the other watch does not contain its polarity, the clause is [Unsat](PropagationResult::Unsat).
    ///    - If the domain is undecided, the value of the literal is forced with [set_value](ConstraintState::set_value), and the clause is [Sat](PropagationResult::Sat).
    ///    - If the domain is decided to the polarity of the literal, the clause is [Sat](PropagationResult::Sat).
    ///
    /// # Errors
    ///
    /// The triggered literal is expected to be decided, and a [NotSingleton](err::StateError::NotSingleton) error is returned otherwise.
    pub fn propagate<S>(
        &mut self,
        state: &mut S,
        trigger: usize,
    ) -> Result<PropagationResult, err::ErrorKind>
    where
        S: WatchState<Parameter = P>,
        S::Domain: Domain<Value = bool>,
    {
        if !S::ONLY_WATCHES_TRIGGER {
            self.check_trigger(trigger)?;
        }

        let watch = if trigger == self.watch_a {
            Watch::A
        } else if S::ONLY_WATCHES_TRIGGER || trigger == self.watch_b {
            Watch::B
        } else {
            log::trace!(target: targets::PROPAGATION, "Index {trigger} is not watched, clause unchanged.");
            return Ok(PropagationResult::Consistent);
        };

        let index_before = self.watch_index(watch);
        let result = self.process_watch(state, watch)?;

        let index_after = self.watch_index(watch);
        if index_after != index_before {
            state.unregister_watch(self.literals[index_before].0);
            state.register_watch(self.literals[index_after].0);
        }

        Ok(result)
    }

    /// Updates the clause after the domain of the literal at index `trigger` has narrowed, for states without watch registration.
    ///
    /// The legacy form of [propagate](WatchedClause::propagate).
    /// `trigger` is always checked against the length of the clause, and if `trigger` is not watch A then watch B is reassigned to `trigger` before watch B is processed.
    /// As the state keeps no record of watches, moves of a watch are not registered.
    pub fn propagate_rewatch<S>(
        &mut self,
        state: &mut S,
        trigger: usize,
    ) -> Result<PropagationResult, err::ErrorKind>
    where
        S: ConstraintState<Parameter = P>,
        S::Domain: Domain<Value = bool>,
    {
        self.check_trigger(trigger)?;

        let watch = match trigger == self.watch_a {
            true => Watch::A,
            false => {
                if trigger != self.watch_b {
                    log::trace!(target: targets::PROPAGATION, "Watch B reassigned from {} to {trigger}.", self.watch_b);
                    self.watch_b = trigger;
                }
                Watch::B
            }
        };

        self.process_watch(state, watch)
    }

    fn check_trigger(&self, trigger: usize) -> Result<(), err::PropagationError> {
        match trigger < self.literals.len() {
            true => Ok(()),
            false => Err(err::PropagationError::TriggerOutOfRange {
                trigger,
                length: self.literals.len(),
            }),
        }
    }

    /// Processes the given watch, against the other watch.
    ///
    /// The index of the given watch is updated if the status of the clause is consistent, and left unchanged otherwise.
    fn process_watch<S>(
        &mut self,
        state: &mut S,
        watch: Watch,
    ) -> Result<PropagationResult, err::ErrorKind>
    where
        S: ConstraintState<Parameter = P>,
        S::Domain: Domain<Value = bool>,
    {
        let (triggered, other) = match watch {
            Watch::A => (self.watch_a, self.watch_b),
            Watch::B => (self.watch_b, self.watch_a),
        };

        let (parameter, polarity) = self.literals[triggered];
        if state.get_value(parameter)? == polarity {
            return Ok(PropagationResult::Sat);
        }

        let mut index = self.next_index(triggered);
        while index != triggered {
            if index != other {
                let (parameter, polarity) = self.literals[index];
                let domain = state.get_domain(parameter);

                if domain.contains(polarity) {
                    if domain.is_singleton() {
                        return Ok(PropagationResult::Sat);
                    }

                    self.set_watch_index(watch, index);
                    return Ok(PropagationResult::Consistent);
                }
            }
            index = self.next_index(index);
        }

        let (parameter, polarity) = self.literals[other];
        let domain = state.get_domain(parameter);

        if !domain.contains(polarity) {
            log::debug!(target: targets::PROPAGATION, "Every literal is falsified, with {parameter:?} last.");
            Ok(PropagationResult::Unsat)
        } else if domain.is_singleton() {
            Ok(PropagationResult::Sat)
        } else {
            log::debug!(target: targets::PROPAGATION, "Forced {parameter:?} to {polarity}.");
            state.set_value(parameter, polarity);
            Ok(PropagationResult::Sat)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::{
        state::UniformState,
        structures::{domain::BoolDomain, parameter::Parameter},
    };

    /// A state over sets of booleans, with watches noted as a set of variables.
    #[derive(Default)]
    struct TestState<const ONLY_WATCHES: bool> {
        variables: Vec<BTreeSet<bool>>,
        watches: BTreeSet<usize>,
    }

    impl<const ONLY_WATCHES: bool> ConstraintState for TestState<ONLY_WATCHES> {
        type Parameter = usize;
        type Domain = BTreeSet<bool>;

        fn get_domain(&self, parameter: usize) -> &BTreeSet<bool> {
            &self.variables[parameter]
        }

        fn set_domain(&mut self, parameter: usize, domain: BTreeSet<bool>) {
            self.variables[parameter] = domain;
        }
    }

    impl<const ONLY_WATCHES: bool> WatchState for TestState<ONLY_WATCHES> {
        const ONLY_WATCHES_TRIGGER: bool = ONLY_WATCHES;

        fn register_watch(&mut self, parameter: usize) {
            self.watches.insert(parameter);
        }

        fn unregister_watch(&mut self, parameter: usize) {
            self.watches.remove(&parameter);
        }
    }

    fn unset() -> BTreeSet<bool> {
        BTreeSet::from([false, true])
    }

    fn set(value: bool) -> BTreeSet<bool> {
        BTreeSet::from([value])
    }

    /// The clause x0 ∨ -x1 ∨ x2 ∨ -x3.
    fn example_clause() -> WatchedClause<usize> {
        WatchedClause::new(&[0, 1, 2, 3], &[true, false, true, false]).unwrap()
    }

    struct Step {
        variables: Vec<BTreeSet<bool>>,
        trigger: usize,
        expected_watches: BTreeSet<usize>,
        expected_result: PropagationResult,
    }

    fn sequence() -> Vec<Step> {
        vec![
            Step {
                variables: vec![set(false), unset(), unset(), unset()],
                trigger: 0,
                expected_watches: BTreeSet::from([2]),
                expected_result: PropagationResult::Consistent,
            },
            Step {
                variables: vec![set(false), unset(), set(true), unset()],
                trigger: 2,
                expected_watches: BTreeSet::from([2]),
                expected_result: PropagationResult::Sat,
            },
            Step {
                variables: vec![unset(), unset(), set(false), unset()],
                trigger: 2,
                expected_watches: BTreeSet::from([3]),
                expected_result: PropagationResult::Consistent,
            },
            Step {
                variables: vec![unset(), set(true), set(false), unset()],
                trigger: 1,
                expected_watches: BTreeSet::from([0, 3]),
                expected_result: PropagationResult::Consistent,
            },
            Step {
                variables: vec![set(false), set(true), set(false), set(true)],
                trigger: 3,
                expected_watches: BTreeSet::from([0, 3]),
                expected_result: PropagationResult::Unsat,
            },
            Step {
                variables: vec![unset(), unset(), unset(), set(true)],
                trigger: 3,
                expected_watches: BTreeSet::from([0, 1]),
                expected_result: PropagationResult::Consistent,
            },
            Step {
                variables: vec![set(false), set(true), set(false), set(false)],
                trigger: 0,
                expected_watches: BTreeSet::from([0, 1]),
                expected_result: PropagationResult::Sat,
            },
        ]
    }

    fn run_sequence<const ONLY_WATCHES: bool>() {
        let mut clause = example_clause();
        let mut state = TestState::<ONLY_WATCHES>::default();

        for step in sequence() {
            state.variables = step.variables;
            assert_eq!(
                clause.propagate(&mut state, step.trigger),
                Ok(step.expected_result)
            );
            assert_eq!(state.watches, step.expected_watches);
        }
    }

    #[test]
    fn sequence_only_watches() {
        run_sequence::<true>();
    }

    #[test]
    fn sequence_any_trigger() {
        run_sequence::<false>();
    }

    fn run_forcing<const ONLY_WATCHES: bool>() {
        let mut clause = example_clause();
        let mut state = TestState::<ONLY_WATCHES> {
            variables: vec![set(false), unset(), set(false), set(true)],
            watches: BTreeSet::default(),
        };

        assert_eq!(clause.propagate(&mut state, 0), Ok(PropagationResult::Sat));
        assert_eq!(
            state.variables,
            vec![set(false), set(false), set(false), set(true)]
        );
        assert_eq!(clause.watches(), (0, 1));
    }

    #[test]
    fn forcing_only_watches() {
        run_forcing::<true>();
    }

    #[test]
    fn forcing_any_trigger() {
        run_forcing::<false>();
    }

    #[test]
    fn unwatched_trigger_checked() {
        let mut clause = example_clause();
        let mut state = TestState::<false> {
            variables: vec![unset(), unset(), unset(), set(true)],
            watches: BTreeSet::default(),
        };

        assert_eq!(
            clause.propagate(&mut state, 3),
            Ok(PropagationResult::Consistent)
        );
        assert!(state.watches.is_empty());
        assert_eq!(clause.watches(), (0, 1));

        assert_eq!(
            clause.propagate(&mut state, 4),
            Err(err::ErrorKind::Propagation(
                err::PropagationError::TriggerOutOfRange {
                    trigger: 4,
                    length: 4
                }
            ))
        );
    }

    #[test]
    fn unwatched_trigger_trusted() {
        let mut clause = example_clause();
        let mut state = TestState::<true> {
            variables: vec![unset(), unset(), unset(), set(true)],
            watches: BTreeSet::default(),
        };

        // Trusted as watch B, whose variable is undecided.
        assert_eq!(
            clause.propagate(&mut state, 3),
            Err(err::ErrorKind::State(err::StateError::NotSingleton))
        );
        assert!(state.watches.is_empty());
        assert_eq!(clause.watches(), (0, 1));
    }

    #[test]
    fn rewatch_unwatched_trigger() {
        let mut clause = WatchedClause::new(
            &[0, 1, 2, 3].map(Parameter::new),
            &[true, false, true, false],
        )
        .unwrap();
        let mut state = UniformState::new(4, BoolDomain::full());
        state.set_value(Parameter::new(3), true);

        assert_eq!(
            clause.propagate_rewatch(&mut state, 3),
            Ok(PropagationResult::Consistent)
        );
        assert_eq!(clause.watches(), (0, 1));
        assert_eq!(
            clause.watched_parameters(),
            [Parameter::new(0), Parameter::new(1)]
        );

        assert_eq!(
            clause.propagate_rewatch(&mut state, 4),
            Err(err::ErrorKind::Propagation(
                err::PropagationError::TriggerOutOfRange {
                    trigger: 4,
                    length: 4
                }
            ))
        );
    }

    #[test]
    fn rewatch_violation_and_forcing() {
        let parameters = [0, 1, 2].map(Parameter::new);
        let mut clause = WatchedClause::new(&parameters, &[true, true, true]).unwrap();
        let mut state = UniformState::new(3, BoolDomain::full());

        state.set_value(parameters[2], false);
        assert_eq!(
            clause.propagate_rewatch(&mut state, 2),
            Ok(PropagationResult::Consistent)
        );
        assert_eq!(clause.watches(), (0, 1));

        state.set_value(parameters[0], false);
        assert_eq!(
            clause.propagate_rewatch(&mut state, 0),
            Ok(PropagationResult::Sat)
        );
        assert_eq!(state.get_value(parameters[1]), Ok(true));

        state.set_value(parameters[1], false);
        assert_eq!(
            clause.propagate_rewatch(&mut state, 1),
            Ok(PropagationResult::Unsat)
        );
    }

    /// Every result is checked against the literals which may still be satisfied, and watches against the registered set.
    #[test]
    fn exhaustive_soundness() {
        let domains = [set(false), set(true), unset()];

        for code in 0..(domains.len().pow(4)) {
            let variables = (0..4)
                .map(|position| domains[(code / 3_usize.pow(position)) % 3].clone())
                .collect::<Vec<_>>();
            let polarities = [true, false, true, false];

            for trigger in 0..2 {
                if variables[trigger].len() != 1 {
                    continue;
                }

                let mut clause = example_clause();
                let mut state = TestState::<true> {
                    variables: variables.clone(),
                    watches: BTreeSet::from([0, 1]),
                };

                let possible = (0..4).any(|index| variables[index].contains(&polarities[index]));
                let result = clause.propagate(&mut state, trigger).unwrap();

                match result {
                    PropagationResult::Sat => {
                        assert!(possible);
                        assert!((0..4).any(|index| state.variables[index] == set(polarities[index])));
                    }
                    PropagationResult::Unsat => assert!(!possible),
                    PropagationResult::Consistent => {
                        let (a, b) = clause.watches();
                        assert_eq!(state.watches, BTreeSet::from([a, b]));
                    }
                }
            }
        }
    }
}

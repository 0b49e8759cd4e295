/*!
Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.

A [WatchedClause] stores its literals as (parameter, polarity) pairs, in the order given, together with two *watches* --- indicies of literals whose narrowing could still change the status of the clause.

# Theory

A clause is satisfied on a state when the variable of some literal is decided to the polarity of the literal.

To decide whether a clause is satisfied it is sufficient to examine every literal.
Though, during a search it is useful to know whether a clause is violated, or forces some value, without examining every literal on every change to a domain.
For, a clause can only be violated, or force a value, when at most one literal may still be satisfied.
So, it is enough to watch two literals which may still be satisfied, and to revisit the clause only when the domain of a watched literal narrows.

Knuth discusses watched literals in the *Lazy data structures* section of *Backtracking Algorithms* in [The art of computer programming, Volume 4](https://www-cs-faculty.stanford.edu/~knuth/taocp.html).

# Implementation

- Literal content is fixed on construction, and only the watches of a clause are mutated.
- Initially, watch A is the first literal and watch B is the second literal.
- On [propagation](WatchedClause::propagate), the triggered watch makes a circular sweep forward over the clause (skipping the other watch) in search of a literal which may still be satisfied.

For the details of propagation see [propagate](WatchedClause::propagate).

```rust
# use watchful::clause::WatchedClause;
# use watchful::state::{ConstraintState, UniformState};
# use watchful::structures::{domain::BoolDomain, parameter::Parameter};
let parameters = [0, 1, 2, 3].map(Parameter::new);
let clause = WatchedClause::new(&parameters, &[true, false, true, false]).unwrap();

let mut state = UniformState::new(4, BoolDomain::full());
for (parameter, value) in parameters.iter().zip([false, true, false, true]) {
    state.set_value(*parameter, value);
}
assert!(!clause.is_satisfied(&state));

state.set_value(parameters[3], false);
assert!(clause.is_satisfied(&state));
```
*/

mod propagate;

use crate::{
    state::{ConstraintState, WatchState},
    structures::{domain::Domain, literal::Literal, parameter::Parameter},
    types::err::{self},
};

/// The status of a clause after propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationResult {
    /// The clause is violated on the state, and the search must backtrack.
    Unsat,

    /// The status of the clause is undecided, though watches may have moved.
    Consistent,

    /// The clause is satisfied on the state, regardless of any unwatched literals.
    Sat,
}

/// Which of the two watches of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Watch {
    A,
    B,
}

/// A clause, as an ordered sequence of (parameter, polarity) pairs together with two watched indicies.
#[derive(Clone, Debug)]
pub struct WatchedClause<P> {
    literals: Vec<(P, bool)>,
    watch_a: usize,
    watch_b: usize,
}

impl<P: Copy + PartialEq + std::fmt::Debug> WatchedClause<P> {
    /// A clause from parallel lists of parameters and polarities.
    ///
    /// The lists must be of equal length, and contain at least two elements.
    pub fn new(parameters: &[P], polarities: &[bool]) -> Result<Self, err::ClauseError> {
        if parameters.len() != polarities.len() {
            return Err(err::ClauseError::LengthMismatch);
        }

        Self::from_literals(parameters.iter().copied().zip(polarities.iter().copied()))
    }

    /// A clause from (parameter, polarity) pairs, with at least two pairs.
    pub fn from_literals(
        literals: impl IntoIterator<Item = (P, bool)>,
    ) -> Result<Self, err::ClauseError> {
        let literals: Vec<(P, bool)> = literals.into_iter().collect();
        if literals.len() < 2 {
            return Err(err::ClauseError::TooShort);
        }

        Ok(Self {
            literals,
            watch_a: 0,
            watch_b: 1,
        })
    }

    /// The number of literals in the clause.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Always false, as a watched clause has at least two literals.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The literals of the clause, in order.
    pub fn literals(&self) -> &[(P, bool)] {
        &self.literals
    }

    /// The indicies of watch A and watch B.
    pub fn watches(&self) -> (usize, usize) {
        (self.watch_a, self.watch_b)
    }

    /// The parameters of watch A and watch B.
    pub fn watched_parameters(&self) -> [P; 2] {
        [
            self.literals[self.watch_a].0,
            self.literals[self.watch_b].0,
        ]
    }

    /// Whether the literal at the given index is watched.
    pub fn is_watching(&self, index: usize) -> bool {
        index == self.watch_a || index == self.watch_b
    }

    /// The index of the watch other than the watch at the given index, if the index is watched.
    pub fn other_watch(&self, index: usize) -> Option<usize> {
        if index == self.watch_a {
            Some(self.watch_b)
        } else if index == self.watch_b {
            Some(self.watch_a)
        } else {
            None
        }
    }

    /// Registers the parameters of both watches with the state.
    pub fn attach_watches<S: WatchState<Parameter = P>>(&self, state: &mut S) {
        for parameter in self.watched_parameters() {
            state.register_watch(parameter);
        }
    }

    /// Whether the variable of some literal is decided to the polarity of the literal.
    ///
    /// Examines every literal, and so is intended for verification of a complete assignment, rather than for use during propagation.
    pub fn is_satisfied<S>(&self, state: &S) -> bool
    where
        S: ConstraintState<Parameter = P>,
        S::Domain: Domain<Value = bool>,
    {
        self.literals
            .iter()
            .any(|&(parameter, polarity)| state.get_value(parameter) == Ok(polarity))
    }

    fn watch_index(&self, watch: Watch) -> usize {
        match watch {
            Watch::A => self.watch_a,
            Watch::B => self.watch_b,
        }
    }

    fn set_watch_index(&mut self, watch: Watch, index: usize) {
        match watch {
            Watch::A => self.watch_a = index,
            Watch::B => self.watch_b = index,
        }
    }

    fn next_index(&self, index: usize) -> usize {
        match index + 1 == self.literals.len() {
            true => 0,
            false => index + 1,
        }
    }
}

impl WatchedClause<Parameter> {
    /// A clause from literals, with at least two literals.
    pub fn from_dimacs_literals(literals: &[Literal]) -> Result<Self, err::ClauseError> {
        Self::from_literals(
            literals
                .iter()
                .map(|literal| (literal.parameter(), literal.polarity())),
        )
    }

    /// The literal at the given index.
    pub fn literal(&self, index: usize) -> Literal {
        let (parameter, polarity) = self.literals[index];
        Literal::new(parameter.variable(), polarity)
    }

    /// The clause in DIMACS form, with the terminating `0` as optional.
    pub fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for index in 0..self.literals.len() {
            the_string.push_str(&format!("{} ", self.literal(index)));
        }
        if zero {
            the_string.push('0');
        } else {
            the_string.pop();
        }
        the_string
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{state::UniformState, structures::domain::BoolDomain};

    fn decided_state(values: &[bool]) -> UniformState {
        let mut state = UniformState::new(values.len(), BoolDomain::full());
        for (index, value) in values.iter().enumerate() {
            state.set_value(Parameter::new(index as u32), *value);
        }
        state
    }

    fn example_clause() -> WatchedClause<Parameter> {
        let literals = [1, -2, 3, -4].map(|int| Literal::from_dimacs(int).unwrap());
        WatchedClause::from_dimacs_literals(&literals).unwrap()
    }

    #[test]
    fn construction() {
        let clause = example_clause();
        assert_eq!(clause.len(), 4);
        assert_eq!(clause.watches(), (0, 1));
        assert_eq!(clause.as_dimacs(true), "1 -2 3 -4 0");
        assert_eq!(clause.as_dimacs(false), "1 -2 3 -4");

        let p = Parameter::new(0);
        assert_eq!(
            WatchedClause::new(&[p], &[true]).err(),
            Some(err::ClauseError::TooShort)
        );
        assert_eq!(
            WatchedClause::new(&[p, p], &[true]).err(),
            Some(err::ClauseError::LengthMismatch)
        );
    }

    #[test]
    fn satisfied() {
        let clause = example_clause();

        assert!(clause.is_satisfied(&decided_state(&[true, false, false, false])));
        assert!(!clause.is_satisfied(&decided_state(&[false, true, false, true])));
    }

    #[test]
    fn satisfied_by_each() {
        let clause = example_clause();
        let initial = [false, true, false, true];
        assert!(!clause.is_satisfied(&decided_state(&initial)));

        for index in 0..initial.len() {
            let mut values = initial;
            values[index] = !values[index];
            assert!(clause.is_satisfied(&decided_state(&values)));
        }
    }

    #[test]
    fn undecided_is_not_satisfied() {
        let clause = example_clause();
        let state = UniformState::new(4, BoolDomain::full());
        assert!(!clause.is_satisfied(&state));
    }

    #[test]
    fn other_watch() {
        let clause = example_clause();
        assert_eq!(clause.other_watch(0), Some(1));
        assert_eq!(clause.other_watch(1), Some(0));
        assert_eq!(clause.other_watch(2), None);
        assert!(!clause.is_watching(3));
    }
}

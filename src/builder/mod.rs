/*!
Tools for building a solver.

# Basic methods

A solver is built in two steps:
- [new](crate::solver::ExhaustiveSolver::new), to obtain a solver over some count of variables.
- [add_clause](crate::solver::ExhaustiveSolver::add_clause), to add a clause, written as DIMACS integers.

Or, a formula may be read from its DIMACS representation with [from_dimacs](crate::solver::ExhaustiveSolver::from_dimacs), which calls the two basic methods as the formula is read.
The reader itself is [parse_dimacs], which is independent of the solver and reports the problem and each clause through a pair of callbacks.

# Examples

```rust
# use watchful::builder::ClauseOk;
# use watchful::config::Config;
# use watchful::reports::Report;
# use watchful::solver::ExhaustiveSolver;
let mut solver = ExhaustiveSolver::new(2, Config::default()).unwrap();

assert_eq!(solver.add_clause(&[1, -2]), Ok(ClauseOk::Added));
assert_eq!(solver.add_clause(&[-1, 2]), Ok(ClauseOk::Added));
assert_eq!(solver.add_clause(&[2]), Ok(ClauseOk::Unit));

assert_eq!(solver.solve(), Ok(true));
assert_eq!(solver.report(), Report::Satisfiable);
assert_eq!(solver.valuation_string(), "1 2");
```

Clauses must use only the variables of the solver.

```rust
# use watchful::config::Config;
# use watchful::solver::ExhaustiveSolver;
# use watchful::types::err::{ClauseError, ErrorKind};
let mut solver = ExhaustiveSolver::new(2, Config::default()).unwrap();

assert_eq!(
    solver.add_clause(&[1, 3]),
    Err(ErrorKind::Clause(ClauseError::UnknownVariable(3)))
);
```
*/

pub mod dimacs;
pub use dimacs::{parse_dimacs, ParserInfo};

mod structures;

/// Ok results when adding a clause to a solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the solver as a watched clause.
    Added,

    /// The clause was a single literal, and was added to the solver as a unit.
    Unit,

    /// The clause was empty, and so the formula of the solver is unsatisfiable.
    Empty,
}

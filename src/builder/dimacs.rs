/*!
Reading formulas written in the DIMACS CNF format.

The format is line based:
- Leading spaces and tabs are ignored, and lines which are then empty, or begin with `c`, are skipped.
- The first remaining line is the problem specification, `p cnf <variables> <clauses>`, with both counts non-negative 32-bit integers.
- Each line after is a clause, written as whitespace separated literals and terminated by a single `0`, which must end the line.
- There is no end marker other than the end of input, and a line such as `%` is an invalid clause.

The clause count of the problem specification is noted, though not checked against the count of clause lines.

```rust
# use watchful::builder::parse_dimacs;
let dimacs = b"
c an example
p cnf 4 5
 1 -2  3    0
 2  3       0
-1  2 -3  4 0
 1 -2 -3 -4 0
";

let mut counts = (0, 0);
let mut clauses = Vec::default();
let info = parse_dimacs(
    dimacs.as_slice(),
    |variables, clause_count| {
        counts = (variables, clause_count);
        Ok(())
    },
    |clause| {
        clauses.push(clause.to_vec());
        Ok(())
    },
)
.unwrap();

assert_eq!(counts, (4, 5));
assert_eq!(info.added_clauses, 4);
assert_eq!(clauses[2], vec![-1, 2, -3, 4]);
```
*/

use std::{cell::RefCell, io::BufRead};

use crate::{
    config::Config,
    misc::log::targets::{self},
    solver::ExhaustiveSolver,
    types::err::{self},
};

/// Information regarding a parse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of variables of the problem specification.
    pub expected_variables: usize,

    /// The count of clauses of the problem specification.
    pub expected_clauses: usize,

    /// The count of clause lines read.
    pub added_clauses: usize,
}

/// Reads a DIMACS formula from `reader`.
///
/// - `construct_problem` is called once, with the counts of the problem specification, immediately after the specification is read.
/// - `register_clause` is called once for each clause line, with the literals of the line (excluding the terminating `0`).
///
/// Any error from a callback ends the parse, and is returned.
///
/// Line numbers of errors are counted from one, and include skipped lines.
pub fn parse_dimacs<R, C, A>(
    mut reader: R,
    mut construct_problem: C,
    mut register_clause: A,
) -> Result<ParserInfo, err::ErrorKind>
where
    R: BufRead,
    C: FnMut(usize, usize) -> Result<(), err::ErrorKind>,
    A: FnMut(&[i32]) -> Result<(), err::ErrorKind>,
{
    let mut info = ParserInfo::default();

    let mut buffer = String::with_capacity(1024);
    let mut clause_buffer: Vec<i32> = Vec::default();
    let mut line_counter = 0;

    // first phase, read until the problem specification
    'preamble_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => return Err(err::ErrorKind::from(err::ParseError::Empty)),
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Read(line_counter + 1))),
        }

        let line = trim_line(&buffer);
        if skip_line(line) {
            continue 'preamble_loop;
        }

        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("p") || tokens.next() != Some("cnf") {
            return Err(err::ErrorKind::from(err::ParseError::ProblemPrefix {
                line: line_counter,
                text: line.to_owned(),
            }));
        }

        let mut count = || {
            tokens
                .next()
                .and_then(|token| token.parse::<i32>().ok())
                .and_then(|count| usize::try_from(count).ok())
        };

        let (variables, clauses) = match (count(), count()) {
            (Some(variables), Some(clauses)) => (variables, clauses),
            _ => {
                return Err(err::ErrorKind::from(err::ParseError::ProblemCounts {
                    line: line_counter,
                    text: line.to_owned(),
                }))
            }
        };

        if let Some(token) = tokens.next() {
            return Err(err::ErrorKind::from(err::ParseError::ProblemJunk {
                line: line_counter,
                token: token.to_owned(),
            }));
        }

        log::info!(target: targets::PARSER, "Expecting {variables} variables and {clauses} clauses.");
        info.expected_variables = variables;
        info.expected_clauses = clauses;
        construct_problem(variables, clauses)?;

        break 'preamble_loop;
    }

    // second phase, read until the formula ends
    'formula_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break 'formula_loop,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Read(line_counter + 1))),
        }

        let line = trim_line(&buffer);
        if skip_line(line) {
            continue 'formula_loop;
        }

        clause_buffer.clear();
        let mut terminated = false;

        for token in line.split_whitespace() {
            if terminated {
                return Err(err::ErrorKind::from(err::ParseError::MisplacedZero {
                    line: line_counter,
                    text: line.to_owned(),
                }));
            }

            match token.parse::<i32>() {
                Ok(0) => terminated = true,
                Ok(literal) => clause_buffer.push(literal),
                Err(_) => {
                    return Err(err::ErrorKind::from(err::ParseError::Literal {
                        line: line_counter,
                        token: token.to_owned(),
                        text: line.to_owned(),
                    }))
                }
            }
        }

        if !terminated {
            return Err(err::ErrorKind::from(err::ParseError::MissingZero {
                line: line_counter,
                text: line.to_owned(),
            }));
        }

        log::trace!(target: targets::PARSER, "Clause from line {line_counter}: {clause_buffer:?}");
        register_clause(&clause_buffer)?;
        info.added_clauses += 1;
    }

    log::info!(target: targets::PARSER, "Read {} clauses from {line_counter} lines.", info.added_clauses);
    Ok(info)
}

/// The line without leading spaces and tabs, or trailing whitespace.
fn trim_line(line: &str) -> &str {
    line.trim_start_matches([' ', '\t']).trim_end()
}

/// Whether the (trimmed) line is empty or a comment.
fn skip_line(line: &str) -> bool {
    line.is_empty() || line.starts_with('c')
}

impl ExhaustiveSolver {
    /// A solver built from the DIMACS formula read from `reader`.
    ///
    /// The solver is made when the problem specification is read, over the count of variables given, and each clause is [added](ExhaustiveSolver::add_clause) as read.
    ///
    /// ```rust
    /// # use watchful::config::Config;
    /// # use watchful::solver::ExhaustiveSolver;
    /// let dimacs = b"p cnf 3 2\n1 -2 0\n2 3 0\n";
    ///
    /// let (solver, info) = ExhaustiveSolver::from_dimacs(dimacs.as_slice(), Config::default()).unwrap();
    /// assert_eq!(solver.variable_count(), 3);
    /// assert_eq!(info.added_clauses, 2);
    /// ```
    pub fn from_dimacs(
        reader: impl BufRead,
        config: Config,
    ) -> Result<(Self, ParserInfo), err::ErrorKind> {
        let solver: RefCell<Option<ExhaustiveSolver>> = RefCell::new(None);

        let info = parse_dimacs(
            reader,
            |variables, _| {
                let fresh = ExhaustiveSolver::new(variables, config.clone())?;
                *solver.borrow_mut() = Some(fresh);
                Ok(())
            },
            |literals| match solver.borrow_mut().as_mut() {
                Some(solver) => solver.add_clause(literals).map(|_| ()),
                None => Err(err::ErrorKind::from(err::BuildError::MissingProblem)),
            },
        )?;

        match solver.into_inner() {
            Some(solver) => Ok((solver, info)),
            None => Err(err::ErrorKind::from(err::BuildError::MissingProblem)),
        }
    }
}

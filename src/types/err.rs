//! Error types used in the library.
//!
//! - Parse errors are fatal to reading a formula, and carry the (one-based) line number of the issue.
//! - Domain misuse and out-of-range triggers are fatal to the call which raised them, and are propagated to the top-level caller.
//! - A violated clause is *not* an error. Instead, see [PropagationResult](crate::clause::PropagationResult) and the result of a [solve](crate::solver::ExhaustiveSolver::solve).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::variable::Variable;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Clause(ClauseError),
    Parse(ParseError),
    Propagation(PropagationError),
    State(StateError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(e) => write!(f, "Build error: {e:?}"),
            Self::Clause(e) => write!(f, "Clause error: {e:?}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Propagation(e) => write!(f, "Propagation error: {e:?}"),
            Self::State(e) => write!(f, "State error: {e:?}"),
        }
    }
}

/// Noted errors when building a solver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// The formula requires more variables than permitted by the configuration.
    VariableLimit { requested: usize, limit: Variable },

    /// Clauses were read before any problem specification.
    MissingProblem,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Noted errors when constructing a clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseError {
    /// A watched clause requires at least two literals.
    TooShort,

    /// The parameters and polarities of a clause differ in length.
    LengthMismatch,

    /// A literal was zero, which is reserved as the DIMACS clause terminator.
    ZeroLiteral,

    /// A literal refers to a variable the solver does not have.
    UnknownVariable(i32),
}

impl From<ClauseError> for ErrorKind {
    fn from(e: ClauseError) -> Self {
        ErrorKind::Clause(e)
    }
}

/// Errors during parsing.
///
/// Each error, excepting [Empty](ParseError::Empty), notes the line of the issue and the offending text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Every line of the input is either empty or a comment.
    Empty,

    /// The first substantive line does not begin `p cnf`.
    ProblemPrefix { line: usize, text: String },

    /// The counts of the problem specification are missing, negative, or not 32-bit integers.
    ProblemCounts { line: usize, text: String },

    /// Something follows the counts of the problem specification.
    ProblemJunk { line: usize, token: String },

    /// A `0` appears before the end of a clause line.
    MisplacedZero { line: usize, text: String },

    /// A clause line is not terminated with a `0`.
    MissingZero { line: usize, text: String },

    /// A token of a clause line is not a 32-bit integer.
    Literal {
        line: usize,
        token: String,
        text: String,
    },

    /// The source could not be read at some line.
    Read(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(
                f,
                "Invalid dimacs input format - all lines are either empty or commented out"
            ),

            Self::ProblemPrefix { line, text } => write!(
                f,
                "{line}: Invalid dimacs input format, expecting a line prefix 'p cnf ' but got '{text}'"
            ),

            Self::ProblemCounts { line, text } => write!(
                f,
                "{line}: Invalid dimacs input format, expecting a header 'p cnf <variables: unsigned int> <clauses: unsigned int>' but got '{text}'"
            ),

            Self::ProblemJunk { line, token } => write!(
                f,
                "{line}: Invalid dimacs input format, junk after header '{token}'"
            ),

            Self::MisplacedZero { line, text } => {
                write!(f, "{line}: 0 should be only at the end for the line '{text}'")
            }

            Self::MissingZero { line, text } => write!(
                f,
                "{line}: Missing 0 at the end of the line for line '{text}'"
            ),

            Self::Literal { line, token, text } => {
                write!(f, "{line}: Invalid literal '{token}' in line '{text}'")
            }

            Self::Read(line) => write!(f, "{line}: Failed to read line"),
        }
    }
}

/// Noted errors during propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PropagationError {
    /// The trigger index is not the index of any literal of the clause.
    TriggerOutOfRange { trigger: usize, length: usize },
}

impl From<PropagationError> for ErrorKind {
    fn from(e: PropagationError) -> Self {
        ErrorKind::Propagation(e)
    }
}

/// Noted errors when reading from a constraint state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// A value was requested from a domain which does not contain exactly one value.
    NotSingleton,

    /// A parameter outside of the state was requested.
    UnknownParameter,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

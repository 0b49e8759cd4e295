//! Literals are variables paired with a required (boolean) polarity.
//!
//! Externally, a literal is written as a non-zero signed integer: the magnitude is one more than the variable and the sign is the polarity.
//!
//! ```rust
//! # use watchful::structures::literal::Literal;
//! let literal = Literal::from_dimacs(-3).unwrap();
//!
//! assert_eq!(literal.variable(), 2);
//! assert!(!literal.polarity());
//! assert_eq!(literal.as_dimacs(), -3);
//! assert_eq!(literal.negate(), Literal::new(2, true));
//! ```
//!
//! Literals are immutable once stored in a clause.

use crate::{
    structures::{parameter::Parameter, variable::Variable},
    types::err::{self},
};

/// A variable paired with the value required of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// The variable of a literal.
    variable: Variable,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal {
    pub fn new(variable: Variable, polarity: bool) -> Self {
        Self { variable, polarity }
    }

    /// The literal written by a (non-zero) DIMACS integer.
    pub fn from_dimacs(int: i32) -> Result<Self, err::ClauseError> {
        match int {
            0 => Err(err::ClauseError::ZeroLiteral),
            _ => Ok(Self {
                variable: int.unsigned_abs() - 1,
                polarity: int.is_positive(),
            }),
        }
    }

    /// The literal as a DIMACS integer.
    pub fn as_dimacs(&self) -> i64 {
        let int = self.variable as i64 + 1;
        match self.polarity {
            true => int,
            false => -int,
        }
    }

    pub fn negate(&self) -> Self {
        Self {
            variable: self.variable,
            polarity: !self.polarity,
        }
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The parameter of the variable of the literal.
    pub fn parameter(&self) -> Parameter {
        Parameter::new(self.variable)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_dimacs())
    }
}

//! Parameters, index-based references to the domain of a variable in some [state](crate::state).
//!
//! A parameter is a lookup key, and never owns the domain it refers to.

use super::variable::Variable;

/// A reference to the domain of a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Parameter {
    variable: Variable,
}

impl Parameter {
    pub fn new(variable: Variable) -> Self {
        Self { variable }
    }

    /// The variable referred to.
    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// The index of the domain referred to.
    pub fn index(&self) -> usize {
        self.variable as usize
    }
}

impl From<Variable> for Parameter {
    fn from(variable: Variable) -> Self {
        Self::new(variable)
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.variable)
    }
}

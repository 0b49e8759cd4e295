/*!
Reports for a solver.
*/

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the solver is satisfiable.
    Satisfiable,

    /// The formula of the solver is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the solver is unknown, for some reason.
    ///
    /// E.g. no solve has been made since the last clause was added, or the solve returned an error.
    Unknown,
}

/// As written on the status line of a DIMACS solution, e.g. `s SATISFIABLE`.
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

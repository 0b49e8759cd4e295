use std::time::Duration;

/// Counts for various things which count, roughly.
///
/// Counters are reset at the start of each solve.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every value tried for a variable.
    pub decisions: usize,

    /// A count of complete assignments checked against the formula.
    pub leaves: usize,

    /// A count of branches pruned by a violated clause, when propagation is enabled.
    pub conflicts: usize,

    /// A count of values forced by a clause, when propagation is enabled.
    pub forced: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl std::fmt::Display for Counters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "decisions: {}, leaves: {}, conflicts: {}, forced: {}, time: {:.2?}",
            self.decisions, self.leaves, self.conflicts, self.forced, self.time
        )
    }
}

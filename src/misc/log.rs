/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided by the library.
The cli installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `logging` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [reading DIMACS](crate::builder::dimacs)
    pub const PARSER: &str = "parser";

    /// Logs related to adding clauses to a [solver](crate::solver)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [propagation](crate::clause::WatchedClause::propagate)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [search](crate::procedures::search)
    pub const SEARCH: &str = "search";
}

/*!
Constraint states, mappings from variables to [domains](crate::structures::domain).

# Theory

A state records, for each variable, the values still possible for the variable on the current branch of a search.
Narrowing a domain to a single value decides the variable, and a decided variable has a *value*.

# Contracts

Two contracts are given, as traits:

- [ConstraintState], the base contract, with read and write access to the domain of each parameter.
- [WatchState], an extension for states which keep a record of the parameters watched by clauses.

The extension is pure bookkeeping.
A watch state does not itself run propagation, and instead records which parameters a caller must revisit after narrowing a domain.

A watch state also fixes, as an associated constant, whether clauses may assume propagation is only ever requested for a watched literal.
See [propagate](crate::clause::WatchedClause::propagate) for the two paths this selects between.

# Implementations

- [UniformState], a vector of domains, implementing only the base contract.
- [WatchedState], a uniform state together with a count of watches for each parameter.

Any other representation implementing the traits may be used with the clauses of the library, e.g. a state whose domains are [BTreeSet](std::collections::BTreeSet)s.

# Save and restore

States are mutated destructively during a search, and are restored explicitly on backtrack (rather than versioned).
Restoration is tied to scope through the [guards](guard), which restore the saved domains when dropped on any exit path.
*/

pub mod guard;
pub use guard::{DomainGuard, TrailGuard};

mod uniform;
pub use uniform::UniformState;

mod watched;
pub use watched::WatchedState;

use crate::{
    structures::domain::Domain,
    types::err::{self},
};

/// The base contract of a state: read and write access to the domain of each parameter.
pub trait ConstraintState {
    /// A reference to the domain of some variable.
    type Parameter: Copy + PartialEq + std::fmt::Debug;

    /// The domain of each variable.
    type Domain: Domain;

    /// The domain of the given parameter.
    fn get_domain(&self, parameter: Self::Parameter) -> &Self::Domain;

    /// Replaces the domain of the given parameter.
    fn set_domain(&mut self, parameter: Self::Parameter, domain: Self::Domain);

    /// The value of the given parameter, if the domain of the parameter is a singleton, and otherwise a [NotSingleton](err::StateError::NotSingleton) error.
    fn get_value(
        &self,
        parameter: Self::Parameter,
    ) -> Result<<Self::Domain as Domain>::Value, err::StateError> {
        let domain = self.get_domain(parameter);
        match domain.is_singleton() {
            true => domain.values().next().ok_or(err::StateError::NotSingleton),
            false => Err(err::StateError::NotSingleton),
        }
    }

    /// Narrows the domain of the given parameter to the given value.
    fn set_value(&mut self, parameter: Self::Parameter, value: <Self::Domain as Domain>::Value) {
        self.set_domain(parameter, <Self::Domain as Domain>::singleton(value))
    }
}

/// The propagation-capable extension of a state.
pub trait WatchState: ConstraintState {
    /// If true, a clause may assume propagation is only requested with the index of a literal the clause is watching.
    const ONLY_WATCHES_TRIGGER: bool;

    /// Notes the parameter is watched (once more).
    fn register_watch(&mut self, parameter: Self::Parameter);

    /// Notes the parameter is watched (once less).
    fn unregister_watch(&mut self, parameter: Self::Parameter);
}

use crate::structures::{domain::BoolDomain, parameter::Parameter};

use super::{ConstraintState, UniformState, WatchState};

/// A [uniform state](UniformState) over boolean domains, together with a count of the watches registered on each parameter.
///
/// The const parameter fixes [ONLY_WATCHES_TRIGGER](WatchState::ONLY_WATCHES_TRIGGER) for the state.
/// It is a property of the state, and so cannot be changed during a solve.
///
/// A parameter may be watched by many clauses, and so watches are counted rather than noted.
#[derive(Clone, Debug)]
pub struct WatchedState<const WATCHES_ONLY: bool> {
    domains: UniformState<BoolDomain>,
    watches: Vec<u32>,
}

impl<const WATCHES_ONLY: bool> WatchedState<WATCHES_ONLY> {
    /// A state of the given number of undecided variables, none of which are watched.
    pub fn new(variables: usize) -> Self {
        Self {
            domains: UniformState::new(variables, BoolDomain::full()),
            watches: vec![0; variables],
        }
    }

    /// A count of the variables of the state.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// The domains of the state, in variable order.
    pub fn domains(&self) -> &[BoolDomain] {
        self.domains.domains()
    }

    /// An iterator over the parameters of the state, in variable order.
    pub fn parameters(&self) -> impl Iterator<Item = Parameter> {
        self.domains.parameters()
    }

    /// Whether the given parameter refers to some domain of the state.
    pub fn contains(&self, parameter: Parameter) -> bool {
        self.domains.contains(parameter)
    }

    /// A count of the watches registered on the parameter.
    pub fn watch_count(&self, parameter: Parameter) -> u32 {
        self.watches[parameter.index()]
    }

    /// Whether some watch is registered on the parameter.
    pub fn is_watched(&self, parameter: Parameter) -> bool {
        self.watch_count(parameter) > 0
    }
}

impl<const WATCHES_ONLY: bool> ConstraintState for WatchedState<WATCHES_ONLY> {
    type Parameter = Parameter;
    type Domain = BoolDomain;

    fn get_domain(&self, parameter: Parameter) -> &BoolDomain {
        self.domains.get_domain(parameter)
    }

    fn set_domain(&mut self, parameter: Parameter, domain: BoolDomain) {
        self.domains.set_domain(parameter, domain)
    }
}

impl<const WATCHES_ONLY: bool> WatchState for WatchedState<WATCHES_ONLY> {
    const ONLY_WATCHES_TRIGGER: bool = WATCHES_ONLY;

    fn register_watch(&mut self, parameter: Parameter) {
        self.watches[parameter.index()] += 1;
    }

    // Clause watches are registered by `attach_watches` when the clause is added, so each unregistration pairs with some registration.
    fn unregister_watch(&mut self, parameter: Parameter) {
        let count = &mut self.watches[parameter.index()];
        debug_assert!(*count > 0, "Unregistered an unwatched parameter {parameter}");
        *count = count.saturating_sub(1);
    }
}

use crate::structures::{
    domain::{BoolDomain, Domain},
    parameter::Parameter,
    variable::Variable,
};

use super::ConstraintState;

/// A state as a vector of domains, one for each variable, each initialised to a common domain.
///
/// Implements only the base [contract](ConstraintState), and so clauses over a uniform state use the [rewatch](crate::clause::WatchedClause::propagate_rewatch) form of propagation.
///
/// ```rust
/// # use watchful::state::{ConstraintState, UniformState};
/// # use watchful::structures::{domain::BoolDomain, parameter::Parameter};
/// let mut state = UniformState::new(3, BoolDomain::full());
/// let p = Parameter::new(1);
///
/// assert!(state.get_value(p).is_err());
/// state.set_value(p, true);
/// assert_eq!(state.get_value(p), Ok(true));
/// ```
#[derive(Clone, Debug)]
pub struct UniformState<D: Domain = BoolDomain> {
    domains: Vec<D>,
}

impl<D: Domain> UniformState<D> {
    pub fn new(variables: usize, domain: D) -> Self {
        Self {
            domains: vec![domain; variables],
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
    pub fn domains(&self) -> &[D] {
        &self.domains
    }

    /// An iterator over the parameters of the state, in variable order.
    pub fn parameters(&self) -> impl Iterator<Item = Parameter> {
        (0..self.domains.len() as Variable).map(Parameter::new)
    }

    /// Whether the given parameter refers to some domain of the state.
    pub fn contains(&self, parameter: Parameter) -> bool {
        parameter.index() < self.domains.len()
    }
}

impl<D: Domain> ConstraintState for UniformState<D> {
    type Parameter = Parameter;
    type Domain = D;

    fn get_domain(&self, parameter: Parameter) -> &D {
        &self.domains[parameter.index()]
    }

    fn set_domain(&mut self, parameter: Parameter, domain: D) {
        self.domains[parameter.index()] = domain;
    }
}

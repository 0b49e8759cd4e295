/*!
Guards to save and restore domains across a scope.

A guard takes a mutable borrow of a state, saves some domains, and restores those domains when dropped.
While the guard lives, the state is available through the guard (by [Deref] and [DerefMut]).

As restoration happens in [Drop], domains are restored on every exit path from the scope of the guard: a return after success, a return after failure, and early return of an error through `?`, as well as unwinding.

```rust
# use watchful::state::{ConstraintState, DomainGuard, UniformState};
# use watchful::structures::{domain::BoolDomain, parameter::Parameter};
let mut state = UniformState::new(2, BoolDomain::full());
let p = Parameter::new(0);

{
    let mut guard = DomainGuard::new(&mut state, p);
    guard.set_value(p, false);
    assert_eq!(guard.get_value(p), Ok(false));
}

assert_eq!(state.get_domain(p), &BoolDomain::full());
```
*/

use std::ops::{Deref, DerefMut};

use super::ConstraintState;

/// Saves the domain of a single parameter, restored on drop.
pub struct DomainGuard<'s, S: ConstraintState> {
    state: &'s mut S,
    parameter: S::Parameter,
    saved: S::Domain,
}

impl<'s, S: ConstraintState> DomainGuard<'s, S> {
    pub fn new(state: &'s mut S, parameter: S::Parameter) -> Self {
        let saved = state.get_domain(parameter).clone();
        Self {
            state,
            parameter,
            saved,
        }
    }

    /// The domain as it was when the guard was made, and as it will be after the guard is dropped.
    pub fn saved(&self) -> &S::Domain {
        &self.saved
    }

    pub fn parameter(&self) -> S::Parameter {
        self.parameter
    }
}

impl<S: ConstraintState> Deref for DomainGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.state
    }
}

impl<S: ConstraintState> DerefMut for DomainGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.state
    }
}

impl<S: ConstraintState> Drop for DomainGuard<'_, S> {
    fn drop(&mut self) {
        self.state.set_domain(self.parameter, self.saved.clone());
    }
}

/// A trail of saved domains, each restored on drop, latest first.
///
/// Entries are pushed as domains are narrowed, and [restore_to](TrailGuard::restore_to) undoes every entry after a [mark](TrailGuard::mark).
/// So, one guard covers any number of nested scopes without a borrow (or a stack frame) per scope.
pub struct TrailGuard<'s, S: ConstraintState> {
    state: &'s mut S,
    saved: Vec<(S::Parameter, S::Domain)>,
}

impl<'s, S: ConstraintState> TrailGuard<'s, S> {
    pub fn new(state: &'s mut S) -> Self {
        Self {
            state,
            saved: Vec::default(),
        }
    }

    /// Saves the current domain of `parameter`.
    pub fn save(&mut self, parameter: S::Parameter) {
        let domain = self.state.get_domain(parameter).clone();
        self.saved.push((parameter, domain));
    }

    /// Saves the current domain of each parameter.
    pub fn save_all(&mut self, parameters: impl Iterator<Item = S::Parameter>) {
        for parameter in parameters {
            self.save(parameter);
        }
    }

    /// Notes `domain` as the domain of `parameter` before some narrowing already made.
    pub fn note(&mut self, parameter: S::Parameter, domain: S::Domain) {
        self.saved.push((parameter, domain));
    }

    /// A mark of the current length of the trail.
    pub fn mark(&self) -> usize {
        self.saved.len()
    }

    /// Restores every domain saved after `mark`, latest first.
    pub fn restore_to(&mut self, mark: usize) {
        while self.saved.len() > mark {
            if let Some((parameter, domain)) = self.saved.pop() {
                self.state.set_domain(parameter, domain);
            }
        }
    }

    /// A count of the domains saved.
    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }
}

impl<S: ConstraintState> Deref for TrailGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.state
    }
}

impl<S: ConstraintState> DerefMut for TrailGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.state
    }
}

impl<S: ConstraintState> Drop for TrailGuard<'_, S> {
    fn drop(&mut self) {
        self.restore_to(0);
    }
}

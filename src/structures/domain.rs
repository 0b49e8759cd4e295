/*!
Domains, the values still possible for a variable.

A domain is never empty during a solve.
And, for boolean variables, a domain contains either one value (and the variable is *decided*), or both values.

Domains are replaced wholesale on assignment or restoration, rather than edited in place.

The canonical implementation of a domain is [BoolDomain], a two-bit set.
For the sake of states which prefer a general set, the domain trait is also implemented for [BTreeSet]s.

```rust
# use watchful::structures::domain::{BoolDomain, Domain};
let domain = BoolDomain::full();
assert_eq!(domain.values().collect::<Vec<_>>(), vec![false, true]);

let decided = BoolDomain::singleton(true);
assert!(decided.contains(true));
assert!(!decided.contains(false));
assert_eq!(decided.size(), 1);
```
*/

use std::collections::BTreeSet;

/// Something which stores a set of values possible for a variable.
pub trait Domain: Clone + std::fmt::Debug {
    /// The type of value stored in the domain.
    type Value: Copy + PartialEq + std::fmt::Debug;

    /// A domain containing only the given value.
    fn singleton(value: Self::Value) -> Self;

    /// Whether the given value is in the domain.
    fn contains(&self, value: Self::Value) -> bool;

    /// The count of values in the domain.
    fn size(&self) -> usize;

    /// An iterator over the values of the domain, in a stable order.
    fn values(&self) -> impl Iterator<Item = Self::Value>;

    /// Whether the domain contains exactly one value.
    fn is_singleton(&self) -> bool {
        self.size() == 1
    }
}

/// The domain of a boolean variable, as a two-bit set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoolDomain {
    bits: u8,
}

const FALSE_BIT: u8 = 0b01;
const TRUE_BIT: u8 = 0b10;

impl BoolDomain {
    /// The domain of an undecided variable.
    pub const fn full() -> Self {
        Self {
            bits: FALSE_BIT | TRUE_BIT,
        }
    }

    const fn bit(value: bool) -> u8 {
        match value {
            true => TRUE_BIT,
            false => FALSE_BIT,
        }
    }
}

impl Default for BoolDomain {
    fn default() -> Self {
        Self::full()
    }
}

impl Domain for BoolDomain {
    type Value = bool;

    fn singleton(value: bool) -> Self {
        Self {
            bits: Self::bit(value),
        }
    }

    fn contains(&self, value: bool) -> bool {
        self.bits & Self::bit(value) != 0
    }

    fn size(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// False before true.
    fn values(&self) -> impl Iterator<Item = bool> {
        let domain = *self;
        [false, true]
            .into_iter()
            .filter(move |value| domain.contains(*value))
    }
}

impl std::fmt::Debug for BoolDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.values()).finish()
    }
}

impl<T: Copy + Ord + std::fmt::Debug> Domain for BTreeSet<T> {
    type Value = T;

    fn singleton(value: T) -> Self {
        BTreeSet::from([value])
    }

    fn contains(&self, value: T) -> bool {
        BTreeSet::contains(self, &value)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn values(&self) -> impl Iterator<Item = T> {
        self.iter().copied()
    }
}

/*!
(The internal representation of) a variable.

Each variable is a u32 *v* such that either:
- *v* is 0, or:
- *v - 1* is a variable.

That is, the variables of a solver are [0..*n*) for some *n*, and so may be used as indicies of a structure, e.g. the domains of a [state](crate::state).

Externally, e.g. in DIMACS, variables are counted from one and the variable *v* is written *v + 1*.
*/

/// A variable, aka. an 'atom'.
pub type Variable = u32;

/// The maximum count of variables.
///
/// Limited by the representation of literals as 32-bit signed integers.
pub const VARIABLE_MAX: Variable = i32::MAX.unsigned_abs();

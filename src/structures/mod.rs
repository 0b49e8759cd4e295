//! Key structures, such as variables, domains, and literals.
//!
//! ## Formulas
//!
//! A formula is a set of [clauses](crate::clause), interpreted as the conjunction of those clauses, each of which is a disjunction of [literals](literal).
//!
//! ## Values
//!
//! Each variable takes one of two (boolean) values, and the values still possible for a variable during a solve are recorded as a [domain](domain).

pub mod domain;
pub mod literal;
pub mod parameter;
pub mod variable;

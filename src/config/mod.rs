/*!
Configuration of a solver.

All configuration for a solver is contained within a [Config], and each configurable value is a [ConfigOption], which notes the bounds of the value.

The default configuration is the baseline exhaustive search, where every complete assignment is checked against every clause and nothing is pruned.

```rust
# use watchful::config::Config;
let mut config = Config::default();
assert!(!config.propagation.value);

assert!(config.propagation.set(true));
assert!(!config.variable_limit.set(config.variable_limit.max + 1));
```
*/

mod config_option;
pub use config_option::ConfigOption;

use crate::structures::variable::{Variable, VARIABLE_MAX};

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Propagate each decision through the watched literals of clauses, and prune branches on which some clause is violated.
    ///
    /// Complete assignments are checked against every clause regardless.
    pub propagation: ConfigOption<bool>,

    /// The maximum count of variables a solver may be built with.
    pub variable_limit: ConfigOption<Variable>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            propagation: ConfigOption {
                name: "propagation",
                min: false,
                max: true,
                value: false,
            },

            variable_limit: ConfigOption {
                name: "variable_limit",
                min: 0,
                max: VARIABLE_MAX,
                value: VARIABLE_MAX,
            },
        }
    }
}

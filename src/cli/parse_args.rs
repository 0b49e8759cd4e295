use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use watchful::config::Config;

pub fn cli() -> Command {
    Command::new("watchful")
        .about("Determines whether a formula is satisfiable or unsatisfiable, by exhaustive search.")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(false)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file to solve."))

        .arg(Arg::new("dimacs")
            .long("dimacs")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .conflicts_with("path")
            .help("The DIMACS form CNF file to solve, as an alternative to the positional path."))

        .arg(Arg::new("exhaustive")
            .long("exhaustive")
            .action(ArgAction::SetTrue)
            .help("Solve by exhaustive search.")
            .long_help("Solve by exhaustive search.

Exhaustive search is the only strategy, and so the flag is accepted though has no effect."))

        .arg(Arg::new("propagate")
            .long("propagate")
            .action(ArgAction::SetTrue)
            .help("Prune the search by propagating each decision through watched literals.")
            .long_help("Prune the search by propagating each decision through watched literals.

Every complete assignment is checked against every clause, with or without propagation."))
}

/// The path to the formula, from either the positional argument or `--dimacs`.
pub fn path_from_args(args: &ArgMatches) -> Option<PathBuf> {
    args.get_one::<PathBuf>("dimacs")
        .or_else(|| args.get_one::<PathBuf>("path"))
        .cloned()
}

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut config = Config::default();

    if args.get_flag("propagate") {
        config.propagation.value = true;
        println!("c Propagation enabled.");
    }

    config
}

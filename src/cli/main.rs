#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::path::Path;

use watchful::{config::Config, reports::Report, solver::ExhaustiveSolver};

mod parse_args;
mod read;

use read::load_dimacs;

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let matches = parse_args::cli().get_matches();
    let config = parse_args::config_from_args(&matches);
    let path = parse_args::path_from_args(&matches);

    let (lines, code) = run(path.as_deref(), config);
    for line in lines {
        println!("{line}");
    }

    if code != 0 {
        std::process::exit(code);
    }
}

/// Reads and solves the formula at `path`, returning the closing comment and solution lines and the exit code.
///
/// Any failure is reported as `s UNKNOWN`, with exit code 1 for a failure to read and 2 for a failure to solve.
fn run(path: Option<&Path>, config: Config) -> (Vec<String>, i32) {
    let mut solver = match load_dimacs(path, config) {
        Ok(solver) => solver,
        Err(e) => return (unknown_lines(e), 1),
    };

    if let Err(e) = solver.solve() {
        return (unknown_lines(format!("Solve error: {e}")), 2);
    }

    let mut lines = vec![
        format!("c {}", solver.counters),
        format!("s {}", solver.report()),
    ];

    if solver.report() == Report::Satisfiable {
        lines.push(valuation_line(&solver));
    }

    (lines, 0)
}

fn unknown_lines(reason: impl std::fmt::Display) -> Vec<String> {
    vec![format!("c {reason}"), format!("s {}", Report::Unknown)]
}

/// The model of the solver as a DIMACS value line, `v <literals> 0`.
fn valuation_line(solver: &ExhaustiveSolver) -> String {
    let valuation = solver.valuation_string();
    match valuation.is_empty() {
        true => "v 0".to_string(),
        false => format!("v {valuation} 0"),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn fixture(subdir: &str, name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("cnf")
            .join(subdir)
            .join(name)
    }

    /// Runs on `dimacs` written to a file of the temporary directory.
    fn run_on_text(name: &str, dimacs: &str, config: Config) -> (Vec<String>, i32) {
        let path = std::env::temp_dir().join(format!("watchful_{}_{name}.cnf", std::process::id()));
        std::fs::write(&path, dimacs).expect("Failed to write formula");
        let outcome = run(Some(&path), config);
        let _ = std::fs::remove_file(&path);
        outcome
    }

    #[test]
    fn valuation_lines() {
        let mut solver = ExhaustiveSolver::new(0, Config::default()).unwrap();
        assert_eq!(solver.solve(), Ok(true));
        assert_eq!(valuation_line(&solver), "v 0");

        let mut solver = ExhaustiveSolver::new(2, Config::default()).unwrap();
        assert!(solver.add_clause(&[-1]).is_ok());
        assert!(solver.add_clause(&[1, 2]).is_ok());
        assert_eq!(solver.solve(), Ok(true));
        assert_eq!(valuation_line(&solver), "v -1 2 0");
    }

    #[test]
    fn satisfiable() {
        let (lines, code) = run(Some(&fixture("sat", "example.cnf")), Config::default());

        assert_eq!(code, 0);
        assert!(lines[0].starts_with("c "));
        assert_eq!(lines[1..], ["s SATISFIABLE", "v -1 -2 3 -4 0"]);
    }

    #[test]
    fn unsatisfiable() {
        let (lines, code) = run(Some(&fixture("unsat", "two_variables.cnf")), Config::default());

        assert_eq!(code, 0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "s UNSATISFIABLE");
    }

    #[test]
    fn unknown_without_path() {
        let (lines, code) = run(None, Config::default());

        assert_eq!(code, 1);
        assert_eq!(lines, ["c Some path to a CNF formula is required.", "s UNKNOWN"]);
    }

    #[test]
    fn unknown_on_missing_file() {
        let (lines, code) = run(Some(&fixture("sat", "missing.cnf")), Config::default());

        assert_eq!(code, 1);
        assert_eq!(lines, ["c Failed to open CNF file.", "s UNKNOWN"]);
    }

    #[test]
    fn unknown_on_parse_error() {
        let (lines, code) = run_on_text("parse_error", "p cnf 2 1\n1 2\n", Config::default());

        assert_eq!(code, 1);
        assert_eq!(
            lines,
            [
                "c Parse error: 2: Missing 0 at the end of the line for line '1 2'",
                "s UNKNOWN"
            ]
        );
    }

    #[test]
    fn unknown_over_variable_limit() {
        let mut config = Config::default();
        config.variable_limit.value = 4;

        let (lines, code) = run_on_text("variable_limit", "p cnf 5 1\n1 5 0\n", config);

        assert_eq!(code, 1);
        assert_eq!(lines.last().map(String::as_str), Some("s UNKNOWN"));
    }

    #[test]
    fn many_variables() {
        let (lines, code) = run_on_text("many_variables", "p cnf 200000 0\n", Config::default());

        assert_eq!(code, 0);
        assert_eq!(lines[1], "s SATISFIABLE");
        assert!(lines[2].starts_with("v -1 -2 -3 "));
        assert!(lines[2].ends_with(" -199999 -200000 0"));
    }
}

use std::{io::BufReader, path::Path};

use watchful::{
    builder::ParserInfo, config::Config, solver::ExhaustiveSolver, types::err::ErrorKind,
};

pub(super) enum ReadError {
    NoPath,
    FailedToOpen,
    ParseError(ErrorKind),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::NoPath => write!(f, "Some path to a CNF formula is required."),
            Self::FailedToOpen => write!(f, "Failed to open CNF file."),
            Self::ParseError(err) => write!(f, "Parse error: {err}"),
        }
    }
}

/// Reads the DIMACS file at `path` to a solver, and writes a report of the read.
///
/// Files with an `xz` extension are decompressed, if the `xz` feature is enabled.
pub(super) fn load_dimacs(
    path: Option<&Path>,
    config: Config,
) -> Result<ExhaustiveSolver, ReadError> {
    let Some(path) = path else {
        return Err(ReadError::NoPath);
    };

    println!("c Reading DIMACS file from {path:?}");

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let parse_report = match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => ExhaustiveSolver::from_dimacs(
            BufReader::new(xz2::read::XzDecoder::new(&file)),
            config,
        ),

        _ => ExhaustiveSolver::from_dimacs(BufReader::new(&file), config),
    };

    match parse_report {
        Ok((solver, info)) => {
            report_parse(&info);
            Ok(solver)
        }

        Err(e) => Err(ReadError::ParseError(e)),
    }
}

fn report_parse(info: &ParserInfo) {
    println!("c Expected variables: {}", info.expected_variables);
    println!("c Expected clauses:   {}", info.expected_clauses);
    println!("c Clause count:       {}", info.added_clauses);
}

//! # rebut-solver
//!
//! External Dung-style solver driver for the Rebut ABA+ workbench.
//!
//! The solver itself stays outside the process: clingo for most semantics,
//! DLV for ideal extensions. This crate renders the invocation, scans the
//! solver's stdout for `in(i)` / `ideal(i)` atoms inside answer-set blocks,
//! and translates the recovered node-index sets back into assumption sets
//! and their deductive conclusions.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::PathBuf;
use std::process::Command;
use std::str::FromStr;

use regex::Regex;

use rebut_core::{Framework, Sentence};
use rebut_engine::all_deductions;
use rebut_graph::ArgumentGraph;

/// A Dung-style acceptability semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Semantics {
    /// Admissible extensions.
    Admissible,
    /// Stable extensions.
    Stable,
    /// Complete extensions.
    Complete,
    /// Preferred extensions.
    Preferred,
    /// Grounded extensions.
    Grounded,
    /// The ideal extension (DLV).
    Ideal,
}

impl Semantics {
    /// The ASP encoding file consumed alongside the fact file.
    pub fn encoding_file(&self) -> &'static str {
        match self {
            Semantics::Admissible => "adm.dl",
            Semantics::Stable => "stable.dl",
            Semantics::Complete => "comp.dl",
            Semantics::Preferred => "prefex_gringo.lp",
            Semantics::Grounded => "ground.dl",
            Semantics::Ideal => "ideal.dl",
        }
    }

    /// Whether this semantics runs on DLV rather than clingo.
    pub fn uses_dlv(&self) -> bool {
        matches!(self, Semantics::Ideal)
    }

    fn answer_header(&self) -> &'static str {
        if self.uses_dlv() {
            "Best model:"
        } else {
            "Answer:"
        }
    }

    fn member_pattern(&self) -> &'static str {
        if self.uses_dlv() {
            r"ideal\((\d+)\)"
        } else {
            r"in\((\d+)\)"
        }
    }
}

impl FromStr for Semantics {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admissible" => Ok(Semantics::Admissible),
            "stable" => Ok(Semantics::Stable),
            "complete" => Ok(Semantics::Complete),
            "preferred" => Ok(Semantics::Preferred),
            "grounded" => Ok(Semantics::Grounded),
            "ideal" => Ok(Semantics::Ideal),
            other => Err(SolverError::UnknownSemantics(other.to_string())),
        }
    }
}

/// Where to find the external solvers and their encodings.
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Path to the clingo binary.
    pub clingo: PathBuf,
    /// Path to the DLV binary.
    pub dlv: PathBuf,
    /// Directory holding the semantics encodings.
    pub encoding_dir: PathBuf,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            clingo: PathBuf::from("clingo"),
            dlv: PathBuf::from("dlv"),
            encoding_dir: PathBuf::from("encodings"),
        }
    }
}

/// Errors raised while driving the external solver.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The semantics name was not recognized.
    #[error("unknown semantics `{0}`")]
    UnknownSemantics(String),

    /// The solver process could not be launched.
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        /// The program that failed to start.
        program: String,
        /// The underlying launch failure.
        source: io::Error,
    },

    /// The solver produced non-UTF-8 output.
    #[error("solver output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Reading or writing the fact file failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The answer-set pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

/// Run the external solver over a rendered fact file.
///
/// Returns one node-index set per extension; an output without the answer
/// header means no extension exists and yields an empty list.
///
/// # Errors
///
/// Launch failures, I/O failures around the fact file, and malformed solver
/// output.
pub fn solve(
    config: &SolverConfig,
    semantics: Semantics,
    facts: &str,
) -> Result<Vec<BTreeSet<usize>>, SolverError> {
    let fact_file = std::env::temp_dir().join(format!("rebut-{}.lp", std::process::id()));
    std::fs::write(&fact_file, facts)?;

    let encoding = config.encoding_dir.join(semantics.encoding_file());
    let mut command = if semantics.uses_dlv() {
        let mut cmd = Command::new(&config.dlv);
        cmd.arg(&fact_file)
            .arg(&encoding)
            .arg("-filter=ideal")
            .arg("-n=1");
        cmd
    } else {
        let mut cmd = Command::new(&config.clingo);
        cmd.arg(&fact_file).arg(&encoding).arg("0");
        cmd
    };

    let output = command.output().map_err(|source| SolverError::Launch {
        program: if semantics.uses_dlv() {
            config.dlv.display().to_string()
        } else {
            config.clingo.display().to_string()
        },
        source,
    })?;
    let _ = std::fs::remove_file(&fact_file);

    let stdout = String::from_utf8(output.stdout)?;
    scan_extensions(semantics, &stdout)
}

/// Scan solver stdout for extensions.
///
/// The output is split on the semantics' answer header; each following block
/// contributes the set of node indices matched by the member pattern.
///
/// # Errors
///
/// [`SolverError::Pattern`] if the member pattern fails to compile.
pub fn scan_extensions(
    semantics: Semantics,
    stdout: &str,
) -> Result<Vec<BTreeSet<usize>>, SolverError> {
    let header = semantics.answer_header();
    if !stdout.contains(header) {
        return Ok(Vec::new());
    }

    let pattern = Regex::new(semantics.member_pattern())?;
    let mut extensions = Vec::new();
    for block in stdout.split(header).skip(1) {
        let extension: BTreeSet<usize> = pattern
            .captures_iter(block)
            .filter_map(|cap| cap[1].parse().ok())
            .collect();
        extensions.push(extension);
    }

    Ok(extensions)
}

/// Translate extension node sets into assumption sets.
pub fn assumption_extensions(
    graph: &ArgumentGraph,
    extensions: &[BTreeSet<usize>],
) -> BTreeSet<BTreeSet<Sentence>> {
    extensions
        .iter()
        .map(|extension| graph.premises(extension))
        .collect()
}

/// Map each extension's assumption set to everything it deduces.
pub fn extension_conclusions(
    framework: &Framework,
    graph: &ArgumentGraph,
    extensions: &[BTreeSet<usize>],
) -> BTreeMap<BTreeSet<Sentence>, BTreeSet<Sentence>> {
    let mut conclusions = BTreeMap::new();
    for extension in extensions {
        let premises = graph.premises(extension);
        let deduced = all_deductions(framework, &premises);
        conclusions.insert(premises, deduced);
    }
    conclusions
}

#[cfg(test)]
mod tests {
    use super::*;

    use rebut_core::Rule;
    use rebut_engine::derive_for_contraries;

    fn asm(sym: &str) -> Sentence {
        Sentence::asm(sym)
    }

    #[test]
    fn test_semantics_round_trip() {
        for (name, semantics) in [
            ("stable", Semantics::Stable),
            ("GROUNDED", Semantics::Grounded),
            ("ideal", Semantics::Ideal),
        ] {
            assert_eq!(name.parse::<Semantics>().unwrap(), semantics);
        }
        assert!(matches!(
            "stable-ish".parse::<Semantics>(),
            Err(SolverError::UnknownSemantics(_))
        ));
    }

    #[test]
    fn test_scan_clingo_answer_sets() {
        let stdout = "clingo version 5.4.0\n\
                      Reading from facts.lp ...\n\
                      Solving...\n\
                      Answer: 1\n\
                      in(0) in(2)\n\
                      Answer: 2\n\
                      in(1)\n\
                      SATISFIABLE\n";
        let extensions = scan_extensions(Semantics::Stable, stdout).unwrap();
        assert_eq!(
            extensions,
            vec![BTreeSet::from([0, 2]), BTreeSet::from([1])]
        );
    }

    #[test]
    fn test_scan_dlv_ideal_output() {
        let stdout = "DLV [build BEN]\n\nBest model: {ideal(0), ideal(3)}\n";
        let extensions = scan_extensions(Semantics::Ideal, stdout).unwrap();
        assert_eq!(extensions, vec![BTreeSet::from([0, 3])]);
    }

    #[test]
    fn test_missing_header_means_no_extensions() {
        let stdout = "clingo version 5.4.0\nUNSATISFIABLE\n";
        assert!(scan_extensions(Semantics::Stable, stdout)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_empty_answer_set_is_an_empty_extension() {
        let stdout = "Answer: 1\n\nSATISFIABLE\n";
        let extensions = scan_extensions(Semantics::Complete, stdout).unwrap();
        assert_eq!(extensions, vec![BTreeSet::new()]);
    }

    #[test]
    fn test_extension_translation() {
        let (a, b) = (asm("a"), asm("b"));
        let fw = Framework::new(
            [a.clone(), b.clone()].into(),
            BTreeSet::new(),
            [Rule::new([a.clone()], b.contrary())].into(),
        )
        .unwrap();
        let graph = ArgumentGraph::build(&derive_for_contraries(&fw));
        let idx_a = graph.node_index(&BTreeSet::from([a.clone()])).unwrap();

        let extensions = vec![BTreeSet::from([idx_a])];
        let premises = assumption_extensions(&graph, &extensions);
        assert_eq!(premises, BTreeSet::from([BTreeSet::from([a.clone()])]));

        let conclusions = extension_conclusions(&fw, &graph, &extensions);
        assert_eq!(
            conclusions[&BTreeSet::from([a.clone()])],
            BTreeSet::from([a, b.contrary()])
        );
    }
}

//! Rebut - ABA+ Workbench CLI
//!
//! A toolkit for assumption-based argumentation with preferences: parsing
//! frameworks, enumerating arguments and attacks, checking and repairing
//! weak contraposition, and driving an external Dung-style solver.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use rebut_core::{AttackKind, Sentence};
use rebut_engine::{attacks, supports, wcp};
use rebut_graph::ArgumentGraph;
use rebut_parse::{parse_framework, ContraryTable, ParsedFramework};
use rebut_solver::{extension_conclusions, solve, Semantics, SolverConfig};

mod repl;

#[derive(Parser)]
#[command(name = "rebut")]
#[command(version)]
#[command(about = "ABA+ workbench - arguments, attacks, weak contraposition, extensions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate a framework, checking weak contraposition
    Check {
        /// Framework file
        file: PathBuf,

        /// Repair weak contraposition instead of rejecting the framework
        #[arg(long)]
        repair: bool,
    },

    /// Enumerate the supports of a sentence
    Arguments {
        /// Framework file
        file: PathBuf,

        /// Target sentence (an assumption, a declared contrary name, or !sym)
        sentence: String,
    },

    /// List all attacks between derived arguments
    Attacks {
        /// Framework file
        file: PathBuf,
    },

    /// Emit the argument graph
    Graph {
        /// Framework file
        file: PathBuf,

        /// Output format: asp, dot
        #[arg(short, long, default_value = "asp")]
        format: String,
    },

    /// Compute extensions with the external solver
    Solve {
        /// Framework file
        file: PathBuf,

        /// Semantics: admissible, stable, complete, preferred, grounded, ideal
        #[arg(short, long)]
        semantics: String,

        /// Repair weak contraposition before solving
        #[arg(long)]
        repair: bool,

        /// Path to the clingo binary
        #[arg(long, default_value = "clingo")]
        clingo: PathBuf,

        /// Path to the DLV binary
        #[arg(long, default_value = "dlv")]
        dlv: PathBuf,

        /// Directory holding the semantics encodings
        #[arg(long, default_value = "encodings")]
        encodings: PathBuf,
    },

    /// Run the interactive REPL
    Repl,
}

/// Anything a subcommand can fail with.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] rebut_parse::ParseError),

    #[error(transparent)]
    Framework(#[from] rebut_core::FrameworkError),

    #[error(transparent)]
    Solver(#[from] rebut_solver::SolverError),

    #[error("unknown graph format `{0}`, expected `asp` or `dot`")]
    UnknownFormat(String),

    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli.command) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Check { file, repair } => {
            let mut parsed = load(&file)?;
            let added = wcp::check_or_enforce(&mut parsed.framework, repair)?;
            println!(
                "{} {} assumptions, {} rules, {} preferences",
                "ok:".green().bold(),
                parsed.framework.assumptions().len(),
                parsed.framework.rules().len(),
                parsed.framework.preferences().len(),
            );
            if repair {
                if added.is_empty() {
                    println!("weak contraposition already holds");
                } else {
                    println!("rules added to restore weak contraposition:");
                    for rule in &added {
                        println!("  {}", rule.to_string().yellow());
                    }
                }
            } else {
                println!("weak contraposition holds");
            }
            Ok(())
        }

        Commands::Arguments { file, sentence } => {
            let parsed = load(&file)?;
            let target = parsed.contraries.resolve(&sentence);
            let target_supports = supports(&parsed.framework, &target);
            if target_supports.is_empty() {
                println!("no arguments for {}", parsed.contraries.surface(&target));
            } else {
                for support in target_supports {
                    println!(
                        "{} |- {}",
                        surface_set(&parsed.contraries, &support),
                        parsed.contraries.surface(&target)
                    );
                }
            }
            Ok(())
        }

        Commands::Attacks { file } => {
            let parsed = load(&file)?;
            let derivation = attacks::derive_for_contraries(&parsed.framework);
            for attack in &derivation.attacks {
                let label = match attack.kind {
                    AttackKind::Normal => "normal".red(),
                    AttackKind::Reverse => "reverse".cyan(),
                };
                println!(
                    "{} -[{}]-> {}",
                    surface_set(&parsed.contraries, &attack.attacker.premise),
                    label,
                    surface_set(&parsed.contraries, &attack.attackee.premise),
                );
            }
            Ok(())
        }

        Commands::Graph { file, format } => {
            let parsed = load(&file)?;
            let derivation = attacks::derive_for_contraries(&parsed.framework);
            let graph = ArgumentGraph::build(&derivation);
            match format.as_str() {
                "asp" => print!("{}", graph.asp_facts()),
                "dot" => print!("{}", graph.dot()),
                other => return Err(CliError::UnknownFormat(other.to_string())),
            }
            Ok(())
        }

        Commands::Solve {
            file,
            semantics,
            repair,
            clingo,
            dlv,
            encodings,
        } => {
            let mut parsed = load(&file)?;
            let semantics: Semantics = semantics.parse()?;
            let added = wcp::check_or_enforce(&mut parsed.framework, repair)?;
            for rule in &added {
                println!("{} {}", "added rule:".yellow(), rule);
            }

            let derivation = attacks::derive_for_contraries(&parsed.framework);
            let graph = ArgumentGraph::build(&derivation);
            let config = SolverConfig {
                clingo,
                dlv,
                encoding_dir: encodings,
            };
            let extensions = solve(&config, semantics, &graph.asp_facts())?;
            if extensions.is_empty() {
                println!("no extensions");
                return Ok(());
            }

            let conclusions = extension_conclusions(&parsed.framework, &graph, &extensions);
            for (premises, deduced) in &conclusions {
                println!(
                    "{} {} {}",
                    surface_set(&parsed.contraries, premises).green(),
                    "concludes".bold(),
                    surface_set(&parsed.contraries, deduced),
                );
            }
            Ok(())
        }

        Commands::Repl => repl::run(),
    }
}

fn load(file: &Path) -> Result<ParsedFramework, CliError> {
    let input = std::fs::read_to_string(file)?;
    Ok(parse_framework(&input)?)
}

fn surface_set(contraries: &ContraryTable, set: &BTreeSet<Sentence>) -> String {
    let inner: Vec<String> = set.iter().map(|s| contraries.surface(s)).collect();
    format!("{{{}}}", inner.join(", "))
}

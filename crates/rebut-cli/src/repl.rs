//! Interactive session.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use rebut_core::AttackKind;
use rebut_engine::{attacks, supports, wcp};
use rebut_parse::{parse_framework, ParsedFramework};

use crate::{surface_set, CliError};

pub fn run() -> Result<(), CliError> {
    println!("Rebut ABA+ workbench REPL");
    println!("type :help for commands");

    let mut editor = DefaultEditor::new()?;
    let mut session: Option<ParsedFramework> = None;

    loop {
        match editor.readline("rebut> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                if !dispatch(line, &mut session) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Handle one REPL line; returns false on `:quit`.
fn dispatch(line: &str, session: &mut Option<ParsedFramework>) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match command {
        ":quit" | ":q" => return false,

        ":help" => {
            println!("  :load FILE      load a framework");
            println!("  :args SENTENCE  list the supports of a sentence");
            println!("  :attacks        list all attacks");
            println!("  :wcp            check weak contraposition");
            println!("  :quit           exit");
        }

        ":load" => match std::fs::read_to_string(rest).map_err(CliError::from).and_then(
            |input| parse_framework(&input).map_err(CliError::from),
        ) {
            Ok(parsed) => {
                println!(
                    "loaded {} assumptions, {} rules",
                    parsed.framework.assumptions().len(),
                    parsed.framework.rules().len()
                );
                *session = Some(parsed);
            }
            Err(err) => eprintln!("{} {}", "error:".red().bold(), err),
        },

        ":args" => {
            let Some(parsed) = session else {
                eprintln!("no framework loaded, use :load FILE");
                return true;
            };
            let target = parsed.contraries.resolve(rest);
            let target_supports = supports(&parsed.framework, &target);
            if target_supports.is_empty() {
                println!("no arguments for {}", parsed.contraries.surface(&target));
            }
            for support in target_supports {
                println!(
                    "{} |- {}",
                    surface_set(&parsed.contraries, &support),
                    parsed.contraries.surface(&target)
                );
            }
        }

        ":attacks" => {
            let Some(parsed) = session else {
                eprintln!("no framework loaded, use :load FILE");
                return true;
            };
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
        }

        ":wcp" => {
            let Some(parsed) = session else {
                eprintln!("no framework loaded, use :load FILE");
                return true;
            };
            if wcp::check(&parsed.framework) {
                println!("{}", "weak contraposition holds".green());
            } else {
                println!("{}", "weak contraposition is violated".red());
            }
        }

        other => eprintln!("unknown command `{other}`, try :help"),
    }

    true
}

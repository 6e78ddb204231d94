//! # rebut-parse
//!
//! Parser for the Rebut ABA+ workbench surface syntax.
//!
//! The surface syntax declares assumptions, contrary names, rules, and
//! preferences as `.`-terminated statements in any order:
//!
//! ```text
//! myAsm(a).  myAsm(b).
//! contrary(a, ca).
//! myRule(ca, [b]).
//! myPrefLT(b, a).
//! ```
//!
//! Contrary names are surface sugar: `ca` above parses to the contrary of
//! `a`, and the [`ContraryTable`] remembers the spelling so output can be
//! rendered back in the user's vocabulary.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::collections::{BTreeSet, HashMap};

use pest::Parser;
use pest_derive::Parser;

use rebut_core::{Framework, FrameworkError, Preference, Relation, Sentence};

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct SurfaceParser;

/// Errors raised while parsing a framework declaration.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// `contrary(x, _)` where `x` is not an assumption, or the contrary name
    /// collides with an assumption symbol.
    #[error("invalid contrary declaration: {0}")]
    InvalidContraryDeclaration(String),

    /// A symbol used as the contrary of two assumptions, or an assumption
    /// given two contrary names.
    #[error("duplicate symbol in contrary declarations: {0}")]
    DuplicateSymbol(String),

    /// A preference mentioning a symbol that is not an assumption.
    #[error("invalid preference declaration: {0}")]
    InvalidPreferenceDeclaration(String),

    /// Malformed input.
    #[error("syntax error: {0}")]
    Syntax(#[from] Box<pest::error::Error<Rule>>),

    /// The parsed sets do not form a valid framework.
    #[error(transparent)]
    Framework(#[from] FrameworkError),
}

/// Two-way mapping between assumptions and their declared contrary names.
#[derive(Clone, Debug, Default)]
pub struct ContraryTable {
    by_contrary: HashMap<String, String>,
    by_assumption: HashMap<String, String>,
}

impl ContraryTable {
    fn insert(&mut self, assumption: String, contrary: String) -> Result<(), ParseError> {
        if self.by_contrary.contains_key(&contrary) {
            return Err(ParseError::DuplicateSymbol(contrary));
        }
        if self.by_assumption.contains_key(&assumption) {
            return Err(ParseError::DuplicateSymbol(assumption));
        }
        self.by_contrary.insert(contrary.clone(), assumption.clone());
        self.by_assumption.insert(assumption, contrary);
        Ok(())
    }

    /// Translate a surface symbol to a sentence.
    ///
    /// A declared contrary name maps to the contrary of its assumption; a
    /// `!`-prefixed symbol maps to the contrary of the rest; anything else
    /// is a plain sentence.
    pub fn resolve(&self, symbol: &str) -> Sentence {
        if let Some(assumption) = self.by_contrary.get(symbol) {
            return Sentence::neg(assumption.clone());
        }
        if let Some(stripped) = symbol.strip_prefix('!') {
            return Sentence::neg(stripped);
        }
        Sentence::asm(symbol)
    }

    /// Render a sentence in the user's vocabulary, preferring the declared
    /// contrary name over the `!` prefix.
    pub fn surface(&self, sentence: &Sentence) -> String {
        if sentence.negated {
            if let Some(contrary) = self.by_assumption.get(&sentence.symbol) {
                return contrary.clone();
            }
        }
        sentence.to_string()
    }
}

/// A parsed framework together with its contrary-name table.
#[derive(Clone, Debug)]
pub struct ParsedFramework {
    /// The validated framework.
    pub framework: Framework,
    /// Surface spellings of the contraries.
    pub contraries: ContraryTable,
}

/// Parse a full framework declaration.
///
/// # Errors
///
/// Syntax errors, the contrary/preference constraint violations described on
/// [`ParseError`], and framework validation failures.
pub fn parse_framework(input: &str) -> Result<ParsedFramework, ParseError> {
    let pairs = SurfaceParser::parse(Rule::program, input).map_err(Box::new)?;

    let mut assumptions: BTreeSet<String> = BTreeSet::new();
    let mut contrary_decls: Vec<(String, String)> = Vec::new();
    let mut rule_decls: Vec<(String, Vec<String>)> = Vec::new();
    let mut pref_decls: Vec<(String, String, Relation)> = Vec::new();

    for pair in pairs {
        match pair.as_rule() {
            Rule::assumption_decl => {
                assumptions.insert(first_symbol(pair));
            }
            Rule::contrary_decl => {
                let mut inner = pair.into_inner();
                let assumption = inner.next().map(symbol_text).unwrap_or_default();
                let contrary = inner.next().map(symbol_text).unwrap_or_default();
                contrary_decls.push((assumption, contrary));
            }
            Rule::rule_decl => {
                let mut inner = pair.into_inner();
                let head = inner.next().map(symbol_text).unwrap_or_default();
                let body = inner
                    .next()
                    .map(|list| list.into_inner().map(symbol_text).collect())
                    .unwrap_or_default();
                rule_decls.push((head, body));
            }
            Rule::pref_lt_decl | Rule::pref_le_decl => {
                let relation = if pair.as_rule() == Rule::pref_lt_decl {
                    Relation::LessThan
                } else {
                    Relation::LessEqual
                };
                let mut inner = pair.into_inner();
                let first = inner.next().map(symbol_text).unwrap_or_default();
                let second = inner.next().map(symbol_text).unwrap_or_default();
                pref_decls.push((first, second, relation));
            }
            Rule::EOI => {}
            _ => unreachable!("no other rules are emitted by the grammar"),
        }
    }

    let mut contraries = ContraryTable::default();
    for (assumption, contrary) in contrary_decls {
        if !assumptions.contains(&assumption) {
            return Err(ParseError::InvalidContraryDeclaration(assumption));
        }
        if assumptions.contains(&contrary) {
            return Err(ParseError::InvalidContraryDeclaration(contrary));
        }
        contraries.insert(assumption, contrary)?;
    }

    let assumption_set: BTreeSet<Sentence> =
        assumptions.iter().map(|symbol| Sentence::asm(symbol.as_str())).collect();

    let rules: BTreeSet<rebut_core::Rule> = rule_decls
        .into_iter()
        .map(|(head, body)| {
            rebut_core::Rule::new(
                body.iter().map(|symbol| contraries.resolve(symbol)),
                contraries.resolve(&head),
            )
        })
        .collect();

    let mut preferences: BTreeSet<Preference> = BTreeSet::new();
    for (first, second, relation) in pref_decls {
        if !assumptions.contains(&first) {
            return Err(ParseError::InvalidPreferenceDeclaration(first));
        }
        if !assumptions.contains(&second) {
            return Err(ParseError::InvalidPreferenceDeclaration(second));
        }
        preferences.insert(Preference::new(
            Sentence::asm(first),
            Sentence::asm(second),
            relation,
        ));
    }

    let framework = Framework::new(assumption_set, preferences, rules)?;
    Ok(ParsedFramework {
        framework,
        contraries,
    })
}

fn symbol_text(pair: pest::iterators::Pair<'_, Rule>) -> String {
    pair.as_str().to_string()
}

fn first_symbol(pair: pest::iterators::Pair<'_, Rule>) -> String {
    pair.into_inner()
        .next()
        .map(symbol_text)
        .unwrap_or_default()
}

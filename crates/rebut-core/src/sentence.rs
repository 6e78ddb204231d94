//! Sentence representation.
//!
//! A sentence is an atomic symbol, optionally marked as the contrary of that
//! symbol. Contrariness is a flag rather than a wrapper type so that sets of
//! sentences stay flat and cheap to hash.

use std::collections::BTreeSet;
use std::fmt;

/// An atomic sentence or its contrary.
///
/// Equality and hashing are structural over `(symbol, negated)`, and the
/// derived ordering (symbol first, then negation) gives every sentence set a
/// stable iteration order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sentence {
    /// The atom's name.
    pub symbol: String,
    /// Whether this sentence is the contrary of `symbol`.
    pub negated: bool,
}

impl Sentence {
    /// Create a plain (non-contrary) sentence.
    pub fn asm(symbol: impl Into<String>) -> Self {
        Sentence {
            symbol: symbol.into(),
            negated: false,
        }
    }

    /// Create the contrary of `symbol` directly.
    pub fn neg(symbol: impl Into<String>) -> Self {
        Sentence {
            symbol: symbol.into(),
            negated: true,
        }
    }

    /// The contrary of this sentence.
    ///
    /// Taking the contrary is involutive: `s.contrary().contrary() == s`.
    pub fn contrary(&self) -> Sentence {
        Sentence {
            symbol: self.symbol.clone(),
            negated: !self.negated,
        }
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "!{}", self.symbol)
        } else {
            write!(f, "{}", self.symbol)
        }
    }
}

/// Render a set of sentences as `{a, b, !c}`.
pub fn sentence_set(set: &BTreeSet<Sentence>) -> String {
    let inner: Vec<String> = set.iter().map(|s| s.to_string()).collect();
    format!("{{{}}}", inner.join(", "))
}

//! Inference rules.

use std::collections::BTreeSet;
use std::fmt;

use crate::sentence::{sentence_set, Sentence};

/// A forward-chaining inference rule `antecedent ⊢ consequent`.
///
/// The antecedent may be empty, in which case the rule is a fact and fires
/// from any state. The antecedent is a [`BTreeSet`], so equality and hashing
/// are independent of declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule {
    /// Body of the rule.
    pub antecedent: BTreeSet<Sentence>,
    /// Head of the rule.
    pub consequent: Sentence,
}

impl Rule {
    /// Create a rule from its body and head.
    pub fn new(antecedent: impl IntoIterator<Item = Sentence>, consequent: Sentence) -> Self {
        Rule {
            antecedent: antecedent.into_iter().collect(),
            consequent,
        }
    }

    /// Create a fact, a rule with an empty body.
    pub fn fact(consequent: Sentence) -> Self {
        Rule {
            antecedent: BTreeSet::new(),
            consequent,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} |- {}", sentence_set(&self.antecedent), self.consequent)
    }
}

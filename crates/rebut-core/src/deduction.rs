//! Deductions and attacks.
//!
//! A [`Deduction`] witnesses that a set of assumptions derives a set of
//! sentences; it is the node identity in the attack graph. An [`Attack`] is
//! a directed edge between two deductions, either *normal* (the attacker
//! derives the contrary of an assumption in the attackee's premise) or
//! *reverse* (a preferred assumption strikes back against a derivation that
//! leans on strictly weaker assumptions).

use std::collections::BTreeSet;
use std::fmt;

use crate::sentence::{sentence_set, Sentence};

/// A witnessed derivation `premise ⊢ conclusion`.
///
/// Two deductions with equal premise and equal conclusion are the same node;
/// both sides are ordered sets, so equality and hashing are structural.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Deduction {
    /// The supporting assumptions.
    pub premise: BTreeSet<Sentence>,
    /// What the premise derives.
    pub conclusion: BTreeSet<Sentence>,
}

impl Deduction {
    /// Create a deduction from its premise and conclusion.
    pub fn new(
        premise: impl IntoIterator<Item = Sentence>,
        conclusion: impl IntoIterator<Item = Sentence>,
    ) -> Self {
        Deduction {
            premise: premise.into_iter().collect(),
            conclusion: conclusion.into_iter().collect(),
        }
    }

    /// The trivial deduction `{a} ⊢ {a}` for an assumption.
    pub fn trivial(assumption: Sentence) -> Self {
        Deduction {
            premise: [assumption.clone()].into(),
            conclusion: [assumption].into(),
        }
    }
}

impl fmt::Display for Deduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} |- {}",
            sentence_set(&self.premise),
            sentence_set(&self.conclusion)
        )
    }
}

/// The direction-defining kind of an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttackKind {
    /// The attacker derives the contrary of an assumption at least as
    /// preferred as everything in the attacker's premise.
    Normal,
    /// The attacked assumption is strictly preferred to some member of the
    /// would-be attacker, so the attack flips direction.
    Reverse,
}

/// A directed attack between two deductions.
///
/// Identity is the full triple, so a normal and a reverse attack may coexist
/// between the same ordered pair of deductions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Attack {
    /// The attacking deduction.
    pub attacker: Deduction,
    /// The attacked deduction.
    pub attackee: Deduction,
    /// Normal or reverse.
    pub kind: AttackKind,
}

impl Attack {
    /// Create an attack.
    pub fn new(attacker: Deduction, attackee: Deduction, kind: AttackKind) -> Self {
        Attack {
            attacker,
            attackee,
            kind,
        }
    }
}

impl fmt::Display for Attack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            AttackKind::Normal => "normal",
            AttackKind::Reverse => "reverse",
        };
        write!(f, "{} -[{}]-> {}", self.attacker, label, self.attackee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_identity() {
        let d1 = Deduction::new(
            [Sentence::asm("a"), Sentence::asm("b")],
            [Sentence::neg("c")],
        );
        let d2 = Deduction::new(
            [Sentence::asm("b"), Sentence::asm("a")],
            [Sentence::neg("c")],
        );
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_attacks_differ_by_kind() {
        let x = Deduction::trivial(Sentence::asm("a"));
        let y = Deduction::trivial(Sentence::asm("b"));
        let normal = Attack::new(x.clone(), y.clone(), AttackKind::Normal);
        let reverse = Attack::new(x, y, AttackKind::Reverse);
        assert_ne!(normal, reverse);
    }

    #[test]
    fn test_display() {
        let d = Deduction::trivial(Sentence::asm("a"));
        assert_eq!(d.to_string(), "{a} |- {a}");
    }
}

//! ABA+ framework construction and preference queries.
//!
//! A [`Framework`] owns the assumption, preference, and rule sets and is
//! validated on construction: rules must not derive assumptions (flatness),
//! preferences must stay within the assumptions, and the transitive closure
//! of the preference relation must not order any assumption strictly below
//! itself. After construction the framework is immutable except for
//! [`Framework::add_rule`], which the weak-contraposition repair uses to
//! grow the rule set.

use std::collections::{BTreeSet, HashMap};

use crate::error::FrameworkError;
use crate::preference::{Preference, Relation};
use crate::rule::Rule;
use crate::sentence::Sentence;

/// A validated ABA+ framework.
#[derive(Clone, Debug)]
pub struct Framework {
    assumptions: BTreeSet<Sentence>,
    preferences: BTreeSet<Preference>,
    rules: BTreeSet<Rule>,
    /// Strongest known relation per directed assumption pair, filled from
    /// the closed preference set for O(1) queries.
    relations: HashMap<(Sentence, Sentence), Relation>,
}

impl Framework {
    /// Build and validate a framework.
    ///
    /// The declared preferences are replaced by their transitive closure, so
    /// [`Framework::preferences`] afterwards contains every derivable
    /// relation, not just the declared ones.
    ///
    /// # Errors
    ///
    /// - [`FrameworkError::NonFlat`] if a rule's consequent is an assumption
    /// - [`FrameworkError::InvalidPreference`] if a preference mentions a
    ///   non-assumption
    /// - [`FrameworkError::CyclicPreference`] if closure yields `a < a`
    pub fn new(
        assumptions: BTreeSet<Sentence>,
        preferences: BTreeSet<Preference>,
        rules: BTreeSet<Rule>,
    ) -> Result<Self, FrameworkError> {
        for rule in &rules {
            if assumptions.contains(&rule.consequent) {
                return Err(FrameworkError::NonFlat(rule.consequent.clone()));
            }
        }

        for pref in &preferences {
            if !assumptions.contains(&pref.first) || !assumptions.contains(&pref.second) {
                return Err(FrameworkError::InvalidPreference(pref.clone()));
            }
        }

        let mut framework = Framework {
            assumptions,
            preferences,
            rules,
            relations: HashMap::new(),
        };
        framework.close_preferences()?;
        Ok(framework)
    }

    /// The assumption set.
    pub fn assumptions(&self) -> &BTreeSet<Sentence> {
        &self.assumptions
    }

    /// The transitively closed preference set.
    pub fn preferences(&self) -> &BTreeSet<Preference> {
        &self.preferences
    }

    /// The rule set.
    pub fn rules(&self) -> &BTreeSet<Rule> {
        &self.rules
    }

    /// Whether `sentence` is an assumption.
    pub fn is_assumption(&self, sentence: &Sentence) -> bool {
        self.assumptions.contains(sentence)
    }

    /// All rules whose consequent is `sentence`.
    pub fn deriving_rules(&self, sentence: &Sentence) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| rule.consequent == *sentence)
            .collect()
    }

    /// The strongest known relation `first REL second`.
    pub fn relation(&self, first: &Sentence, second: &Sentence) -> Relation {
        self.relations
            .get(&(first.clone(), second.clone()))
            .copied()
            .unwrap_or(Relation::NoRelation)
    }

    /// Whether `first` is strictly preferred to `second`, i.e. `second < first`.
    pub fn is_preferred(&self, first: &Sentence, second: &Sentence) -> bool {
        self.relation(second, first) == Relation::LessThan
    }

    /// Insert a rule, returning whether it was new.
    ///
    /// Adding rules cannot introduce preference cycles, so no re-validation
    /// of the preference order is needed; flatness of the new rule is the
    /// caller's obligation (the repair step only synthesizes contraries as
    /// consequents, which are never assumptions).
    pub fn add_rule(&mut self, rule: Rule) -> bool {
        self.rules.insert(rule)
    }

    /// Matrix-based transitive closure of the declared preferences.
    ///
    /// The diagonal starts at `LessEqual` (reflexivity), every declared
    /// preference overwrites its cell with the stronger relation, and the
    /// standard three-loop relaxation propagates chains. A `LessThan` on the
    /// diagonal afterwards means the strict order is cyclic.
    fn close_preferences(&mut self) -> Result<(), FrameworkError> {
        let index: Vec<Sentence> = self.assumptions.iter().cloned().collect();
        let position: HashMap<&Sentence, usize> =
            index.iter().enumerate().map(|(i, s)| (s, i)).collect();
        let n = index.len();

        let mut matrix = vec![vec![Relation::NoRelation; n]; n];
        for (i, row) in matrix.iter_mut().enumerate() {
            row[i] = Relation::LessEqual;
        }
        for pref in &self.preferences {
            let i = position[&pref.first];
            let j = position[&pref.second];
            matrix[i][j] = matrix[i][j].min(pref.relation);
        }

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through_k = if matrix[i][k] == Relation::NoRelation
                        || matrix[k][j] == Relation::NoRelation
                    {
                        Relation::NoRelation
                    } else {
                        matrix[i][k].min(matrix[k][j])
                    };
                    matrix[i][j] = matrix[i][j].min(through_k);
                }
            }
        }

        for i in 0..n {
            for j in 0..n {
                let relation = matrix[i][j];
                if i == j && relation == Relation::LessThan {
                    return Err(FrameworkError::CyclicPreference);
                }
                if i != j && relation != Relation::NoRelation {
                    let first = index[i].clone();
                    let second = index[j].clone();
                    self.preferences
                        .insert(Preference::new(first.clone(), second.clone(), relation));
                    let entry = self
                        .relations
                        .entry((first, second))
                        .or_insert(Relation::NoRelation);
                    *entry = (*entry).min(relation);
                }
            }
        }

        Ok(())
    }
}

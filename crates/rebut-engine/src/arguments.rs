//! Support (argument) enumeration.
//!
//! A *support* for a sentence is a set of assumptions from which the sentence
//! is deducible. Enumeration walks the rules as an AND/OR graph: a rule's
//! supports are the cross-product unions of one support per antecedent
//! member, and a sentence's supports are the union over its deriving rules.
//!
//! Rules currently on the activation path are skipped, which keeps the walk
//! terminating on cyclic rule graphs. The guard set is cloned per branch so
//! sibling explorations never see each other's guards. In a flat framework
//! re-entering a rule cannot produce a new minimal assumption set, so the
//! guard loses no supports.

use std::collections::{BTreeSet, HashSet};

use rebut_core::{Framework, Rule, Sentence};

/// A single support: a set of assumptions.
pub type Support = BTreeSet<Sentence>;

/// All supports of `target` under the framework's rules.
///
/// Returns the empty set when `target` is underivable. For an assumption the
/// only support is the assumption itself.
pub fn supports(framework: &Framework, target: &Sentence) -> BTreeSet<Support> {
    let rules: Vec<&Rule> = framework.rules().iter().collect();
    supports_guarded(framework, &rules, target, &HashSet::new())
}

fn supports_guarded(
    framework: &Framework,
    rules: &[&Rule],
    target: &Sentence,
    on_path: &HashSet<usize>,
) -> BTreeSet<Support> {
    if framework.is_assumption(target) {
        return BTreeSet::from([Support::from([target.clone()])]);
    }

    let mut results = BTreeSet::new();
    for (idx, rule) in rules.iter().enumerate() {
        if rule.consequent != *target || on_path.contains(&idx) {
            continue;
        }

        let mut branch_path = on_path.clone();
        branch_path.insert(idx);

        // One group of supports per antecedent member; a rule with an empty
        // antecedent is backed by the single empty support.
        let mut groups: Vec<BTreeSet<Support>> = Vec::new();
        if rule.antecedent.is_empty() {
            groups.push(BTreeSet::from([Support::new()]));
        }
        let mut viable = true;
        for member in &rule.antecedent {
            let member_supports = supports_guarded(framework, rules, member, &branch_path);
            if member_supports.is_empty() {
                viable = false;
                break;
            }
            groups.push(member_supports);
        }

        if viable {
            results.extend(combinations(&groups));
        }
    }

    results
}

/// Cross-product unions over groups of supports.
///
/// `combinations([{ {b} }, { {e}, {f} }])` is `{ {b,e}, {b,f} }`. The empty
/// group list yields no combinations.
pub fn combinations(groups: &[BTreeSet<Support>]) -> BTreeSet<Support> {
    let Some((first, rest)) = groups.split_first() else {
        return BTreeSet::new();
    };

    let tail = combinations(rest);
    let mut out = BTreeSet::new();
    for support in first {
        if tail.is_empty() {
            out.insert(support.clone());
        } else {
            for combined in &tail {
                out.insert(support.union(combined).cloned().collect());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asm(sym: &str) -> Sentence {
        Sentence::asm(sym)
    }

    fn fw(assumptions: &[Sentence], rules: &[Rule]) -> Framework {
        Framework::new(
            assumptions.iter().cloned().collect(),
            BTreeSet::new(),
            rules.iter().cloned().collect(),
        )
        .unwrap()
    }

    fn support(sentences: &[Sentence]) -> Support {
        sentences.iter().cloned().collect()
    }

    #[test]
    fn test_assumption_supports_itself() {
        let a = asm("a");
        let fw = fw(&[a.clone()], &[]);
        assert_eq!(supports(&fw, &a), BTreeSet::from([support(&[a])]));
    }

    #[test]
    fn test_single_rule() {
        let (a, b) = (asm("a"), asm("b"));
        let fw = fw(&[b.clone()], &[Rule::new([b.clone()], a.clone())]);
        assert_eq!(supports(&fw, &a), BTreeSet::from([support(&[b])]));
    }

    #[test]
    fn test_fact_has_empty_support() {
        let a = asm("a");
        let fw = fw(&[], &[Rule::fact(a.clone())]);
        assert_eq!(supports(&fw, &a), BTreeSet::from([Support::new()]));
    }

    #[test]
    fn test_transitive_support() {
        let (a, b, c) = (asm("a"), asm("b"), asm("c"));
        let fw = fw(
            &[b.clone()],
            &[
                Rule::new([b.clone()], c.clone()),
                Rule::new([c.clone()], a.clone()),
            ],
        );
        assert_eq!(supports(&fw, &a), BTreeSet::from([support(&[b])]));
    }

    #[test]
    fn test_multiple_rules_multiple_supports() {
        let (a, b, c) = (asm("a"), asm("b"), asm("c"));
        let fw = fw(
            &[b.clone(), c.clone()],
            &[
                Rule::new([b.clone()], a.clone()),
                Rule::new([c.clone()], a.clone()),
            ],
        );
        assert_eq!(
            supports(&fw, &a),
            BTreeSet::from([support(&[b]), support(&[c])])
        );
    }

    #[test]
    fn test_conjunctive_antecedent_crosses_supports() {
        let (a, x, y) = (asm("a"), asm("x"), asm("y"));
        let (b, c) = (asm("b"), asm("c"));
        // x is derivable from b or c, so {x, y} ⊢ a yields two supports.
        let fw = fw(
            &[b.clone(), c.clone(), y.clone()],
            &[
                Rule::new([b.clone()], x.clone()),
                Rule::new([c.clone()], x.clone()),
                Rule::new([x.clone(), y.clone()], a.clone()),
            ],
        );
        assert_eq!(
            supports(&fw, &a),
            BTreeSet::from([support(&[b, y.clone()]), support(&[c, y])])
        );
    }

    #[test]
    fn test_underivable_sentence_has_no_support() {
        let (a, b) = (asm("a"), asm("b"));
        let fw = fw(&[b], &[]);
        assert!(supports(&fw, &a).is_empty());
    }

    #[test]
    fn test_rule_with_underivable_antecedent_contributes_nothing() {
        let (a, b, ghost) = (asm("a"), asm("b"), asm("ghost"));
        let fw = fw(
            &[b.clone()],
            &[Rule::new([b.clone(), ghost], a.clone())],
        );
        assert!(supports(&fw, &a).is_empty());
    }

    #[test]
    fn test_cycle_yields_no_spurious_supports() {
        // b, c, d only feed each other; e is the only grounded path to a.
        let (a, b, c, d, e) = (asm("a"), asm("b"), asm("c"), asm("d"), asm("e"));
        let fw = fw(
            &[e.clone()],
            &[
                Rule::new([b.clone()], a.clone()),
                Rule::new([c.clone()], b.clone()),
                Rule::new([d.clone()], c.clone()),
                Rule::new([b.clone()], d.clone()),
                Rule::new([e.clone()], a.clone()),
            ],
        );
        assert_eq!(supports(&fw, &a), BTreeSet::from([support(&[e])]));
    }

    #[test]
    fn test_self_cycle_rule_is_ignored() {
        let (a, b, c) = (asm("a"), asm("b"), asm("c"));
        let fw = fw(
            &[b.clone()],
            &[
                Rule::new([c.clone()], a.clone()),
                Rule::new([c.clone()], c.clone()),
                Rule::new([b.clone()], c.clone()),
            ],
        );
        assert_eq!(supports(&fw, &a), BTreeSet::from([support(&[b])]));
    }

    #[test]
    fn test_soundness_every_support_deduces_target() {
        let (a, b, c, e) = (asm("a"), asm("b"), asm("c"), asm("e"));
        let x = asm("x");
        let fw = fw(
            &[a.clone(), b.clone(), c.clone(), e.clone()],
            &[
                Rule::new([a.clone(), b.clone()], x.clone()),
                Rule::new([c.clone(), e.clone()], x.clone()),
            ],
        );
        for support in supports(&fw, &x) {
            assert!(crate::deduce::deduction_exists(&fw, &x, &support));
        }
    }

    #[test]
    fn test_combinations() {
        let group = |names: &[&[&str]]| -> BTreeSet<Support> {
            names
                .iter()
                .map(|sup| sup.iter().map(|s| asm(s)).collect())
                .collect()
        };

        let groups = vec![
            group(&[&["b"]]),
            group(&[&["e"], &["f"]]),
            group(&[&["g"]]),
            group(&[&["i"], &["k"]]),
        ];
        let expected = group(&[
            &["b", "e", "g", "i"],
            &["b", "e", "g", "k"],
            &["b", "f", "g", "i"],
            &["b", "f", "g", "k"],
        ]);
        assert_eq!(combinations(&groups), expected);
    }

    #[test]
    fn test_combinations_base_cases() {
        assert!(combinations(&[]).is_empty());

        let single = BTreeSet::from([support(&[asm("b")])]);
        assert_eq!(combinations(&[single.clone()]), single);
    }
}

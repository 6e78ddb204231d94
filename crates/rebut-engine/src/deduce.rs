//! Forward-chaining deduction.
//!
//! Both entry points run the same fixed-point loop: scan the rules, fire any
//! unused rule whose antecedent is already deduced, and stop once a full pass
//! fires nothing. Every pass consumes at least one rule, so the loop
//! terminates even when the rule graph is cyclic.

use std::collections::BTreeSet;

use rebut_core::{Framework, Rule, Sentence};

/// Whether `target` is deducible from `seeds` under the framework's rules.
pub fn deduction_exists(
    framework: &Framework,
    target: &Sentence,
    seeds: &BTreeSet<Sentence>,
) -> bool {
    if seeds.contains(target) {
        return true;
    }

    let mut deduced = seeds.clone();
    let mut used: BTreeSet<&Rule> = BTreeSet::new();
    let mut fired = true;
    while fired {
        fired = false;
        for rule in framework.rules() {
            if !used.contains(rule) && rule.antecedent.is_subset(&deduced) {
                fired = true;
                if rule.consequent == *target {
                    return true;
                }
                deduced.insert(rule.consequent.clone());
                used.insert(rule);
            }
        }
    }

    false
}

/// The set of all sentences deducible from `seeds`, `seeds` included.
///
/// Running the closure twice changes nothing: the result is a fixed point.
pub fn all_deductions(framework: &Framework, seeds: &BTreeSet<Sentence>) -> BTreeSet<Sentence> {
    let mut deduced = seeds.clone();
    let mut used: BTreeSet<&Rule> = BTreeSet::new();
    let mut fired = true;
    while fired {
        fired = false;
        for rule in framework.rules() {
            if !used.contains(rule) && rule.antecedent.is_subset(&deduced) {
                fired = true;
                deduced.insert(rule.consequent.clone());
                used.insert(rule);
            }
        }
    }

    deduced
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

    fn seeds(sentences: &[Sentence]) -> BTreeSet<Sentence> {
        sentences.iter().cloned().collect()
    }

    #[test]
    fn test_simple_deduction_exists() {
        let (a, b) = (asm("a"), asm("b"));
        let fw = fw(&[b.clone()], &[Rule::new([b.clone()], a.clone())]);
        assert!(deduction_exists(&fw, &a, &seeds(&[b])));
    }

    #[test]
    fn test_deduction_from_empty_set_exists() {
        let (a, b) = (asm("a"), asm("b"));
        let fw = fw(&[b], &[Rule::fact(a.clone())]);
        assert!(deduction_exists(&fw, &a, &BTreeSet::new()));
    }

    #[test]
    fn test_simple_deduction_does_not_exist() {
        let (a, b, c) = (asm("a"), asm("b"), asm("c"));
        let fw = fw(&[a.clone(), b.clone()], &[Rule::new([b.clone()], c)]);
        assert!(!deduction_exists(&fw, &a, &seeds(&[b])));
    }

    #[test]
    fn test_transitive_deduction_exists() {
        let (a, b, c) = (asm("a"), asm("b"), asm("c"));
        let fw = fw(
            &[b.clone()],
            &[Rule::new([b.clone()], c.clone()), Rule::new([c], a.clone())],
        );
        assert!(deduction_exists(&fw, &a, &seeds(&[b])));
    }

    #[test]
    fn test_transitive_deduction_from_empty_set_exists() {
        let (a, b) = (asm("a"), asm("b"));
        let fw = fw(
            &[],
            &[Rule::new([b.clone()], a.clone()), Rule::fact(b)],
        );
        assert!(deduction_exists(&fw, &a, &BTreeSet::new()));
    }

    #[test]
    fn test_complex_deduction() {
        let (a, b, c) = (asm("a"), asm("b"), asm("c"));
        let (e, f, g) = (asm("e"), asm("f"), asm("g"));
        let fw = fw(
            &[a.clone(), b.clone(), e.clone()],
            &[
                Rule::new([a.clone(), b.clone()], c.clone()),
                Rule::new([e.clone()], f.clone()),
                Rule::new([c, f], g.clone()),
            ],
        );
        assert!(deduction_exists(&fw, &g, &seeds(&[a.clone(), b, e.clone()])));
        assert!(!deduction_exists(&fw, &g, &seeds(&[a, e])));
    }

    #[test]
    fn test_target_in_seeds_short_circuits() {
        let a = asm("a");
        let fw = fw(&[a.clone()], &[]);
        assert!(deduction_exists(&fw, &a, &seeds(&[a.clone()])));
    }

    #[test]
    fn test_monotonicity() {
        let (a, b, c) = (asm("a"), asm("b"), asm("c"));
        let fw = fw(
            &[b.clone(), c.clone()],
            &[Rule::new([b.clone()], a.clone())],
        );
        assert!(deduction_exists(&fw, &a, &seeds(&[b.clone()])));
        assert!(deduction_exists(&fw, &a, &seeds(&[b, c])));
    }

    #[test]
    fn test_all_deductions_is_a_fixed_point() {
        let (a, b, c, x) = (asm("a"), asm("b"), asm("c"), asm("x"));
        let fw = fw(
            &[a.clone(), b.clone()],
            &[
                Rule::new([a.clone(), b.clone()], c.clone()),
                Rule::new([c.clone()], x.clone()),
            ],
        );
        let once = all_deductions(&fw, &seeds(&[a.clone(), b.clone()]));
        assert_eq!(once, seeds(&[a, b, c, x]));

        let twice = all_deductions(&fw, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_all_deductions_with_rule_cycle_terminates() {
        let (s, x, y) = (asm("s"), asm("x"), asm("y"));
        let fw = fw(
            &[s.clone()],
            &[
                Rule::new([s.clone()], x.clone()),
                Rule::new([x.clone()], y.clone()),
                Rule::new([y.clone()], x.clone()),
            ],
        );
        assert_eq!(all_deductions(&fw, &seeds(&[s.clone()])), seeds(&[s, x, y]));
    }
}

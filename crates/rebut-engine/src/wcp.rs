//! Weak contraposition.
//!
//! Weak contraposition (WCP) ties attacks to the preference order: whenever
//! `X ⊢ ā` and some `c ∈ X` is strictly weaker than `a`, the framework must
//! also be able to derive `c̄` from `(X ∪ {a}) \ {c}` for at least one
//! `<`-minimal such `c`. A framework violating WCP is rejected, unless the
//! caller opts into repair, which synthesizes exactly the missing
//! contrapositive rules.

use std::collections::BTreeSet;

use rebut_core::{Framework, FrameworkError, Rule, Sentence};

use crate::arguments::{supports, Support};
use crate::deduce::deduction_exists;

/// Check WCP over the whole framework.
///
/// For every assumption `a` and every support `X` of `ā`: if `X` contains
/// culprits (members strictly weaker than `a`), at least one `<`-minimal
/// culprit must have a contraposition witness.
pub fn check(framework: &Framework) -> bool {
    for assumption in framework.assumptions() {
        for attacker_set in supports(framework, &assumption.contrary()) {
            let culprits: Support = attacker_set
                .iter()
                .filter(|member| framework.is_preferred(assumption, member))
                .cloned()
                .collect();
            let minimal = minimal_elements(framework, &culprits);
            if !minimal.is_empty()
                && !minimal
                    .iter()
                    .any(|culprit| witnessed(framework, culprit, assumption, &attacker_set))
            {
                return false;
            }
        }
    }

    true
}

/// Repair the framework so WCP holds, returning the rules added.
///
/// For each attacking support lacking a witness, one contrapositive rule is
/// synthesized against the minimally preferred culprit. A single sweep
/// suffices: repair adds rules but never touches preferences, so it cannot
/// invalidate an attack that already satisfied WCP.
pub fn enforce(framework: &mut Framework) -> BTreeSet<Rule> {
    let mut added = BTreeSet::new();
    let assumptions: Vec<Sentence> = framework.assumptions().iter().cloned().collect();

    for assumption in &assumptions {
        for attacker_set in supports(framework, &assumption.contrary()) {
            for culprit in &attacker_set {
                if framework.is_preferred(assumption, culprit)
                    && !witnessed(framework, culprit, assumption, &attacker_set)
                {
                    let Some(weakest) = minimally_preferred(framework, assumption, &attacker_set)
                    else {
                        break;
                    };
                    let mut antecedent = attacker_set.clone();
                    antecedent.insert(assumption.clone());
                    antecedent.remove(&weakest);
                    let rule = Rule::new(antecedent, weakest.contrary());
                    framework.add_rule(rule.clone());
                    added.insert(rule);
                    break;
                }
            }
        }
    }

    added
}

/// Check WCP, or repair it when `auto` is set.
///
/// # Errors
///
/// [`FrameworkError::WcpViolation`] when the check fails and repair was not
/// requested.
pub fn check_or_enforce(
    framework: &mut Framework,
    auto: bool,
) -> Result<BTreeSet<Rule>, FrameworkError> {
    if auto {
        Ok(enforce(framework))
    } else if check(framework) {
        Ok(BTreeSet::new())
    } else {
        Err(FrameworkError::WcpViolation)
    }
}

/// Whether the contraposition witness for `culprit` exists: a deduction of
/// the culprit's contrary from the support with `assumption` swapped in for
/// the culprit.
fn witnessed(
    framework: &Framework,
    culprit: &Sentence,
    assumption: &Sentence,
    support: &Support,
) -> bool {
    let mut deduce_from = support.clone();
    deduce_from.insert(assumption.clone());
    deduce_from.remove(culprit);
    deduction_exists(framework, &culprit.contrary(), &deduce_from)
}

/// The `<`-minimal elements of a set: those with no strictly weaker peer.
fn minimal_elements(framework: &Framework, set: &Support) -> Support {
    set.iter()
        .filter(|candidate| minimally_preferred(framework, candidate, set).is_none())
        .cloned()
        .collect()
}

/// The weakest element of `among` strictly below `compare_against`, if any.
fn minimally_preferred(
    framework: &Framework,
    compare_against: &Sentence,
    among: &Support,
) -> Option<Sentence> {
    let mut weakest: Option<&Sentence> = None;
    for candidate in among {
        if !framework.is_preferred(compare_against, candidate) {
            continue;
        }
        match weakest {
            Some(current) if !framework.is_preferred(current, candidate) => {}
            _ => weakest = Some(candidate),
        }
    }
    weakest.cloned()
}

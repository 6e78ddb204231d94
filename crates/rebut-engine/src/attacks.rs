//! Attack derivation.
//!
//! Whether a derivation `X ⊢ ā` actually defeats the assumption `a` depends
//! on the preference order: the attack succeeds only if no member of `X` is
//! strictly less preferred than `a`. When it fails, the attack flips into a
//! *reverse* attack from the trivial deduction `{a} ⊢ {a}` back onto the
//! derivation. Direct attacks are then propagated to every deduction that
//! leans on the attacked assumptions.

use std::collections::{BTreeMap, BTreeSet};

use rebut_core::{Attack, AttackKind, Deduction, Framework, Sentence};

use crate::arguments::{supports, Support};

/// The argumentation structure derived for a set of target sentences.
#[derive(Clone, Debug, Default)]
pub struct Derivation {
    /// Deductions grouped by the sentence they conclude.
    pub by_conclusion: BTreeMap<Sentence, BTreeSet<Deduction>>,
    /// Every attack between the generated deductions.
    pub attacks: BTreeSet<Attack>,
    /// All generated deductions.
    pub deductions: BTreeSet<Deduction>,
}

/// Whether the set `attacker` successfully attacks the assumption `attackee`.
///
/// Only strict preference blocks an attack; `≤` never flips direction.
pub fn attack_successful(
    framework: &Framework,
    attacker: &Support,
    attackee: &Sentence,
) -> bool {
    attacker
        .iter()
        .all(|member| !framework.is_preferred(attackee, member))
}

/// The members of `attacker` strictly less preferred than `attackee`.
pub fn culprits(framework: &Framework, attacker: &Support, attackee: &Sentence) -> Support {
    attacker
        .iter()
        .filter(|member| framework.is_preferred(attackee, member))
        .cloned()
        .collect()
}

/// Derive deductions and attacks for every contrary of an assumption.
pub fn derive_for_contraries(framework: &Framework) -> Derivation {
    let targets: BTreeSet<Sentence> = framework
        .assumptions()
        .iter()
        .map(|a| a.contrary())
        .collect();
    derive(framework, &targets)
}

/// Derive all deductions concluding the `targets` and the attacks between
/// them.
///
/// Emits a trivial deduction per assumption, one deduction per support of
/// each target, direct normal/reverse attacks where a target is the contrary
/// of an assumption, and the propagated attacks onto every deduction whose
/// premise contains (normal) or includes (reverse) the attacked material.
pub fn derive(framework: &Framework, targets: &BTreeSet<Sentence>) -> Derivation {
    let mut derivation = Derivation::default();
    // Normal attacks: attacked assumption -> attacking supports.
    let mut normal_map: BTreeMap<Sentence, BTreeSet<Support>> = BTreeMap::new();
    // Reverse attacks: attacked support -> preferred assumptions striking back.
    let mut reverse_map: BTreeMap<Support, BTreeSet<Sentence>> = BTreeMap::new();

    for assumption in framework.assumptions() {
        derivation
            .by_conclusion
            .entry(assumption.clone())
            .or_default()
            .insert(Deduction::trivial(assumption.clone()));
    }

    for target in targets {
        let target_supports = supports(framework, target);
        if target_supports.is_empty() {
            continue;
        }

        for support in target_supports {
            let deduction = Deduction::new(support.clone(), [target.clone()]);
            derivation
                .by_conclusion
                .entry(target.clone())
                .or_default()
                .insert(deduction.clone());

            let attacked = target.contrary();
            if !target.negated || !framework.is_assumption(&attacked) {
                continue;
            }
            let trivial = Deduction::trivial(attacked.clone());

            if attack_successful(framework, &support, &attacked) {
                derivation
                    .attacks
                    .insert(Attack::new(deduction, trivial, AttackKind::Normal));
                normal_map
                    .entry(attacked)
                    .or_default()
                    .insert(support.clone());
            } else {
                derivation
                    .attacks
                    .insert(Attack::new(trivial, deduction, AttackKind::Reverse));
                reverse_map
                    .entry(support.clone())
                    .or_default()
                    .insert(attacked);
            }
        }
    }

    derivation.deductions = derivation
        .by_conclusion
        .values()
        .flatten()
        .cloned()
        .collect();

    // A normal attack on `a` lands on every deduction built on `a`, from
    // every deduction whose premise covers the attacking support.
    for (attacked, attacker_sets) in &normal_map {
        let attackees: Vec<&Deduction> = derivation
            .deductions
            .iter()
            .filter(|ded| ded.premise.contains(attacked))
            .collect();
        for attacker_set in attacker_sets {
            for attacker in derivation
                .deductions
                .iter()
                .filter(|ded| attacker_set.is_subset(&ded.premise))
            {
                for attackee in &attackees {
                    derivation.attacks.insert(Attack::new(
                        attacker.clone(),
                        (*attackee).clone(),
                        AttackKind::Normal,
                    ));
                }
            }
        }
    }

    // A reverse attack on the support X lands on every deduction whose
    // premise covers X, from every deduction built on the preferred
    // assumption.
    for (attacked_support, attacker_assumptions) in &reverse_map {
        let attackees: Vec<&Deduction> = derivation
            .deductions
            .iter()
            .filter(|ded| attacked_support.is_subset(&ded.premise))
            .collect();
        for attacker_assumption in attacker_assumptions {
            for attacker in derivation
                .deductions
                .iter()
                .filter(|ded| ded.premise.contains(attacker_assumption))
            {
                for attackee in &attackees {
                    derivation.attacks.insert(Attack::new(
                        attacker.clone(),
                        (*attackee).clone(),
                        AttackKind::Reverse,
                    ));
                }
            }
        }
    }

    derivation
}

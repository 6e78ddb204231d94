//! # rebut-core
//!
//! Core data structures for the Rebut ABA+ workbench.
//!
//! Assumption-based argumentation with preferences (ABA+) describes defeasible
//! reasoning through a set of *assumptions*, inference *rules* over sentences,
//! and a *preference* order over assumptions. This crate provides the
//! fundamental types shared by the rest of the workbench:
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`Sentence`] | an atom or the contrary of an atom |
//! | [`Rule`] | `antecedent ⊢ consequent`, used for forward chaining |
//! | [`Preference`] | `a < b` or `a ≤ b` between assumptions |
//! | [`Deduction`] | a witnessed derivation `premise ⊢ conclusion` |
//! | [`Attack`] | a directed, typed attack between deductions |
//! | [`Framework`] | a validated ABA+ framework with closed preferences |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod deduction;
pub mod error;
pub mod framework;
pub mod preference;
pub mod rule;
pub mod sentence;

pub use deduction::{Attack, AttackKind, Deduction};
pub use error::FrameworkError;
pub use framework::Framework;
pub use preference::{Preference, Relation};
pub use rule::Rule;
pub use sentence::{sentence_set, Sentence};

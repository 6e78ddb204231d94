//! # rebut-engine
//!
//! The reasoning core of the Rebut ABA+ workbench.
//!
//! Four subsystems share the [`rebut_core`] data model:
//!
//! - [`deduce`]: forward-chaining fixed-point closure over the rules
//! - [`arguments`]: enumeration of the minimal assumption sets (supports)
//!   deducing a sentence, with cycle guards over the rule graph
//! - [`attacks`]: derivation of the normal/reverse attack relation from
//!   supports and the preference order
//! - [`wcp`]: the weak contraposition check and its rule-synthesizing repair
//!
//! All operations are pure queries over an immutable framework, except
//! [`wcp::enforce`] which grows the rule set.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arguments;
pub mod attacks;
pub mod deduce;
pub mod wcp;

pub use arguments::{combinations, supports};
pub use attacks::{attack_successful, culprits, derive, derive_for_contraries, Derivation};
pub use deduce::{all_deductions, deduction_exists};

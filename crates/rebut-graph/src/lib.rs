//! # rebut-graph
//!
//! Argument-graph export for the Rebut ABA+ workbench.
//!
//! The abstract argumentation graph has one node per *distinct support* (two
//! deductions sharing a premise collapse into one node) and a directed,
//! typed edge per attack between the underlying deductions. The graph is
//! what the external Dung-style solver consumes, as an ASP fact file, and
//! what extension indices are translated back through.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod graph;

pub use graph::{ArgumentGraph, EdgeKind};

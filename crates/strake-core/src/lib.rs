//! Core syntax-tree model and violation types for strake.
//!
//! This crate provides the foundational data structures used by the rule crates:
//! - [`types`] — Node kinds, violation records, and error types
//! - [`tree`] — Arena-backed syntax tree with parent/sibling/child navigation
//! - [`messages`] — Fixed message catalog keyed by violation message keys

pub mod messages;
pub mod tree;
pub mod types;

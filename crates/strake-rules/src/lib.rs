//! Rule seam and tree-walking driver for strake.
//!
//! Rules consume depth-first enter/leave events over a syntax tree and
//! report violations through a [`rule::RuleContext`]:
//! - one_statement_per_line: flags source lines carrying more than one
//!   independent statement

pub mod one_statement_per_line;
pub mod rule;
pub mod walker;

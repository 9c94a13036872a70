//! Flags source lines that carry more than one independent statement.
//!
//! Tree producers reuse the terminator kind for three roles: a real
//! statement end, the separators inside a `for (init; cond; iter)` header,
//! and the closer of a `do { ... } while (cond);`. Only the first role is
//! checked for a same-line collision. A lambda literal passed as a call
//! argument also exempts its own line, so a short inline body like
//! `cb.on_click(|e| { good(); });` does not read as two squeezed statements.

use strake_core::messages::MSG_MULTIPLE_STATEMENTS;
use strake_core::tree::{NodeId, SyntaxTree};
use strake_core::types::SyntaxKind;

use crate::rule::{Rule, RuleContext};

/// Rule name stamped into violations.
pub const RULE_NAME: &str = "one-statement-per-line";

const INTEREST: &[SyntaxKind] = &[
    SyntaxKind::StatementTerminator,
    SyntaxKind::EmptyStatement,
    SyntaxKind::ArgumentList,
];

/// Streaming statement-adjacency analysis over enter/leave events.
///
/// Carries two pieces of per-traversal state; `begin_tree` resets both, so
/// one instance can process independent trees back to back but never two
/// traversals at once.
#[derive(Debug, Default)]
pub struct OneStatementPerLine {
    /// Line where the most recently closed statement ended.
    last_statement_end: Option<u32>,
    /// Lambda currently in scope for the same-line exemption. Cleared when
    /// the enclosing statement's terminator is left.
    lambda: Option<NodeId>,
}

impl OneStatementPerLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting node for a statement, handling multi-line statements: a
    /// terminator pushed to its own line stands in for the sibling where
    /// the statement's content actually ends.
    fn multiline_statement(&self, tree: &SyntaxTree, node: NodeId) -> NodeId {
        match tree.prev_sibling(node) {
            Some(prev) if tree.line(prev) != tree.line(node) && tree.parent(node).is_some() => {
                prev
            }
            _ => node,
        }
    }

    /// Whether `node` begins on the same line the previous statement ended,
    /// outside the lambda exemption.
    fn is_on_same_line(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        self.last_statement_end == Some(tree.line(node))
            && self
                .lambda
                .map_or(true, |lambda| tree.line(node) != tree.line(lambda))
    }

    /// Whether this terminator is exempt from the collision check: the
    /// separators of a `for (;;)` header, the closer of a do-while, or the
    /// first statement inside a for-loop body.
    fn should_skip(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        // Terminators in 'for (;;) EXPR;', 'do EXPR; while ();', and
        // 'do { EXPR; } while ();'
        let mut skip = false;
        for sibling in tree.prev_siblings(node) {
            if tree.kind(sibling).is_statement_boundary() {
                break;
            }
            if matches!(
                tree.kind(sibling),
                SyntaxKind::ForCondition | SyntaxKind::ForIterator | SyntaxKind::DoWhileTrailer
            ) {
                skip = true;
                break;
            }
        }

        if let Some(parent) = tree.parent(node) {
            if tree.kind(parent) == SyntaxKind::StatementBlock {
                // EXPR in 'for (;;) { EXPR; }': the header clauses precede
                // the block itself, not the statement.
                let mut body_skip = false;
                for sibling in tree.prev_siblings(parent) {
                    if tree.kind(sibling).is_statement_boundary() {
                        break;
                    }
                    if tree.kind(sibling) == SyntaxKind::ForIterator {
                        body_skip = true;
                        break;
                    }
                }

                // But not EXPR2 in 'for (;;) { EXPR1; EXPR2; }': only the
                // first statement of the body stays exempt.
                if body_skip {
                    for sibling in tree.prev_siblings(node) {
                        if tree.kind(sibling).is_statement_boundary() {
                            body_skip = false;
                            break;
                        }
                    }
                }
                skip = skip || body_skip;
            }
        }

        skip
    }
}

impl Rule for OneStatementPerLine {
    fn name(&self) -> &'static str {
        RULE_NAME
    }

    fn interest(&self) -> &'static [SyntaxKind] {
        INTEREST
    }

    fn begin_tree(&mut self) {
        self.last_statement_end = None;
        self.lambda = None;
    }

    fn enter(&mut self, tree: &SyntaxTree, node: NodeId, ctx: &mut RuleContext) {
        match tree.kind(node) {
            SyntaxKind::StatementTerminator | SyntaxKind::EmptyStatement => {
                let current = self.multiline_statement(tree, node);
                if !self.should_skip(tree, node) && self.is_on_same_line(tree, current) {
                    ctx.report(RULE_NAME, tree.line(node), MSG_MULTIPLE_STATEMENTS);
                }
            }
            _ => {}
        }
    }

    fn leave(&mut self, tree: &SyntaxTree, node: NodeId, _ctx: &mut RuleContext) {
        match tree.kind(node) {
            SyntaxKind::StatementTerminator | SyntaxKind::EmptyStatement => {
                // The first clause separator of a for-header does not end an
                // independent statement.
                if let Some(prev) = tree.prev_sibling(node) {
                    if tree.kind(prev) != SyntaxKind::ForInitializer {
                        self.last_statement_end = Some(tree.line(node));
                    }
                }
                self.lambda = None;
            }
            SyntaxKind::ArgumentList => {
                if let Some(first) = tree.first_child(node) {
                    if tree.kind(first) == SyntaxKind::Lambda {
                        self.lambda = Some(first);
                    }
                }
            }
            _ => {}
        }
    }
}

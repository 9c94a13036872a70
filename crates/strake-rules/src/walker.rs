use strake_core::tree::{NodeId, SyntaxTree};
use strake_core::types::Violation;

use crate::rule::{Rule, RuleContext};

/// Depth-first driver. Owns the registered rules and replays each tree to
/// them as enter/leave events: enter before any descendant, leave after all
/// of them.
pub struct TreeWalker {
    rules: Vec<Box<dyn Rule>>,
}

impl TreeWalker {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule. Registration is the whole configuration surface:
    /// an unregistered rule never runs.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Walk one tree and return the violations in emission order.
    ///
    /// Every registered rule is reset via `begin_tree` first, so the same
    /// walker can process independent trees back to back.
    pub fn walk(&mut self, tree: &SyntaxTree) -> Vec<Violation> {
        let mut ctx = RuleContext::new();
        for rule in &mut self.rules {
            rule.begin_tree();
        }
        self.visit(tree, tree.root(), &mut ctx);
        ctx.into_violations()
    }

    fn visit(&mut self, tree: &SyntaxTree, node: NodeId, ctx: &mut RuleContext) {
        let kind = tree.kind(node);
        for rule in &mut self.rules {
            if rule.interest().contains(&kind) {
                rule.enter(tree, node, ctx);
            }
        }
        for child in tree.children(node) {
            self.visit(tree, child, ctx);
        }
        for rule in &mut self.rules {
            if rule.interest().contains(&kind) {
                rule.leave(tree, node, ctx);
            }
        }
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new()
    }
}

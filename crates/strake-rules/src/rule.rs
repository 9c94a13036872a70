use strake_core::tree::{NodeId, SyntaxTree};
use strake_core::types::{SyntaxKind, Violation};

/// A streaming analysis over one depth-first traversal of a syntax tree.
///
/// The walker calls [`Rule::begin_tree`] once per tree, then
/// [`Rule::enter`]/[`Rule::leave`] for every node whose kind appears in the
/// declared interest set. Rules keep per-traversal state in their own
/// fields; one rule instance serves one traversal at a time.
pub trait Rule {
    /// Stable identifier stamped into every violation this rule reports.
    fn name(&self) -> &'static str;

    /// Node kinds this rule must see. The walker delivers every occurrence
    /// of these kinds and nothing else; it must not filter them.
    fn interest(&self) -> &'static [SyntaxKind];

    /// Reset per-traversal state. Called before each tree.
    fn begin_tree(&mut self) {}

    /// Node entered, before any of its descendants.
    fn enter(&mut self, tree: &SyntaxTree, node: NodeId, ctx: &mut RuleContext) {
        let _ = (tree, node, ctx);
    }

    /// Node left, after all of its descendants.
    fn leave(&mut self, tree: &SyntaxTree, node: NodeId, ctx: &mut RuleContext) {
        let _ = (tree, node, ctx);
    }
}

/// Collects violations for one walk. The only output channel rules have.
#[derive(Debug, Default)]
pub struct RuleContext {
    violations: Vec<Violation>,
}

impl RuleContext {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Record one violation at `line` with the given message key.
    pub fn report(&mut self, rule: &'static str, line: u32, message_key: &'static str) {
        self.violations.push(Violation {
            rule: rule.to_string(),
            message_key: message_key.to_string(),
            line,
        });
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

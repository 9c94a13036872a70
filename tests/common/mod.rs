/// Shared test helpers for strake integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
///
/// The builders append the node shapes the statement-line analysis is
/// defined over: expression statements, for-headers, do-while statements,
/// and lambda-bearing call statements.
use strake_core::tree::{NodeId, SyntaxTree};
use strake_core::types::{SyntaxKind, Violation};
use strake_rules::one_statement_per_line::OneStatementPerLine;
use strake_rules::walker::TreeWalker;

/// Fresh tree holding just a compilation-unit root.
#[allow(dead_code)]
pub fn unit() -> SyntaxTree {
    SyntaxTree::new(SyntaxKind::CompilationUnit, 1)
}

/// Append an expression statement and its terminator (`expr;`). Returns the
/// terminator.
#[allow(dead_code)]
pub fn expr_statement(tree: &mut SyntaxTree, parent: NodeId, line: u32) -> NodeId {
    tree.add_child(parent, SyntaxKind::Expression, line);
    tree.add_child(parent, SyntaxKind::StatementTerminator, line)
}

/// Append a `for (init; cond; iter)` header. Returns the for node; the body
/// is whatever the caller appends next.
#[allow(dead_code)]
pub fn for_header(tree: &mut SyntaxTree, parent: NodeId, line: u32) -> NodeId {
    let for_stmt = tree.add_child(parent, SyntaxKind::ForStatement, line);
    tree.add_child(for_stmt, SyntaxKind::ForInitializer, line);
    tree.add_child(for_stmt, SyntaxKind::StatementTerminator, line);
    tree.add_child(for_stmt, SyntaxKind::ForCondition, line);
    tree.add_child(for_stmt, SyntaxKind::StatementTerminator, line);
    tree.add_child(for_stmt, SyntaxKind::ForIterator, line);
    for_stmt
}

/// Append `for (init; cond; iter) { }`. Returns the body block.
#[allow(dead_code)]
pub fn for_with_block(tree: &mut SyntaxTree, parent: NodeId, line: u32) -> NodeId {
    let for_stmt = for_header(tree, parent, line);
    tree.add_child(for_stmt, SyntaxKind::StatementBlock, line)
}

/// Append `do { } while (cond);`. Returns the body block.
#[allow(dead_code)]
pub fn do_while(tree: &mut SyntaxTree, parent: NodeId, line: u32) -> NodeId {
    let do_stmt = tree.add_child(parent, SyntaxKind::DoWhileStatement, line);
    let block = tree.add_child(do_stmt, SyntaxKind::StatementBlock, line);
    tree.add_child(do_stmt, SyntaxKind::DoWhileTrailer, line);
    tree.add_child(do_stmt, SyntaxKind::Expression, line);
    tree.add_child(do_stmt, SyntaxKind::StatementTerminator, line);
    block
}

/// Append `recv.call((args) -> { ... });`, a call statement whose sole
/// argument is a lambda. The statement's own terminator sits on
/// `terminator_line`; the lambda and its body block sit on `line`. Returns
/// the body block for the caller to fill.
#[allow(dead_code)]
pub fn lambda_call_statement(
    tree: &mut SyntaxTree,
    parent: NodeId,
    line: u32,
    terminator_line: u32,
) -> NodeId {
    let expr = tree.add_child(parent, SyntaxKind::Expression, line);
    let call = tree.add_child(expr, SyntaxKind::MethodCall, line);
    let args = tree.add_child(call, SyntaxKind::ArgumentList, line);
    let lambda = tree.add_child(args, SyntaxKind::Lambda, line);
    let block = tree.add_child(lambda, SyntaxKind::StatementBlock, line);
    tree.add_child(parent, SyntaxKind::StatementTerminator, terminator_line);
    block
}

/// Walk `tree` with the one-statement-per-line rule registered.
#[allow(dead_code)]
pub fn analyze(tree: &SyntaxTree) -> Vec<Violation> {
    let mut walker = TreeWalker::new();
    walker.register(Box::new(OneStatementPerLine::new()));
    walker.walk(tree)
}

/// Just the violation lines, in emission order.
#[allow(dead_code)]
pub fn lines(violations: &[Violation]) -> Vec<u32> {
    violations.iter().map(|v| v.line).collect()
}

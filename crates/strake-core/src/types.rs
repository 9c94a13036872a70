use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Node kinds in the language-neutral syntax tree.
///
/// Tree producers reuse the terminator kind for three roles: a real
/// statement end, the separators inside a `for (init; cond; iter)` header,
/// and the closer of a `do { ... } while (cond);`. The clause kinds exist
/// to let rules tell those roles apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxKind {
    // Markers the statement-line analysis inspects
    StatementTerminator,
    EmptyStatement,
    ArgumentList,

    // Control clauses that legitimately carry terminators
    ForInitializer,
    ForCondition,
    ForIterator,
    DoWhileTrailer,

    // Surrounding structure
    StatementBlock,
    Lambda,
    CompilationUnit,
    Expression,
    VariableDefinition,
    MethodCall,
    ForStatement,
    DoWhileStatement,
}

impl SyntaxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntaxKind::StatementTerminator => "statement_terminator",
            SyntaxKind::EmptyStatement => "empty_statement",
            SyntaxKind::ArgumentList => "argument_list",
            SyntaxKind::ForInitializer => "for_initializer",
            SyntaxKind::ForCondition => "for_condition",
            SyntaxKind::ForIterator => "for_iterator",
            SyntaxKind::DoWhileTrailer => "do_while_trailer",
            SyntaxKind::StatementBlock => "statement_block",
            SyntaxKind::Lambda => "lambda",
            SyntaxKind::CompilationUnit => "compilation_unit",
            SyntaxKind::Expression => "expression",
            SyntaxKind::VariableDefinition => "variable_definition",
            SyntaxKind::MethodCall => "method_call",
            SyntaxKind::ForStatement => "for_statement",
            SyntaxKind::DoWhileStatement => "do_while_statement",
        }
    }

    /// True for the two kinds that close an individual statement.
    pub fn is_statement_boundary(&self) -> bool {
        matches!(
            self,
            SyntaxKind::StatementTerminator | SyntaxKind::EmptyStatement
        )
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyntaxKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "statement_terminator" => Ok(SyntaxKind::StatementTerminator),
            "empty_statement" => Ok(SyntaxKind::EmptyStatement),
            "argument_list" => Ok(SyntaxKind::ArgumentList),
            "for_initializer" => Ok(SyntaxKind::ForInitializer),
            "for_condition" => Ok(SyntaxKind::ForCondition),
            "for_iterator" => Ok(SyntaxKind::ForIterator),
            "do_while_trailer" => Ok(SyntaxKind::DoWhileTrailer),
            "statement_block" => Ok(SyntaxKind::StatementBlock),
            "lambda" => Ok(SyntaxKind::Lambda),
            "compilation_unit" => Ok(SyntaxKind::CompilationUnit),
            "expression" => Ok(SyntaxKind::Expression),
            "variable_definition" => Ok(SyntaxKind::VariableDefinition),
            "method_call" => Ok(SyntaxKind::MethodCall),
            "for_statement" => Ok(SyntaxKind::ForStatement),
            "do_while_statement" => Ok(SyntaxKind::DoWhileStatement),
            other => Err(KindError::UnknownKind(other.to_string())),
        }
    }
}

/// Errors at the adapter seam where external kind tags enter the model.
#[derive(Debug, thiserror::Error)]
pub enum KindError {
    #[error("Unknown syntax kind: {0}")]
    UnknownKind(String),
}

/// A single rule finding: which rule fired, which message it carries, and
/// the 1-based source line it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: String,
    pub message_key: String,
    pub line: u32,
}

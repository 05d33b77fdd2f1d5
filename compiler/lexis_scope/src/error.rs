//! Structural errors that abort an analysis.
//!
//! Questionable but well-formed programs never produce an error: duplicate
//! declarations, early references, and undeclared names are recorded as
//! data on the scope tree. Only input the builder cannot interpret does.

use lexis_ir::{InternError, NodeId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("expected a Program root, found {found} at {node:?}")]
    RootNotProgram { node: NodeId, found: &'static str },

    #[error("unexpected {found} at {node:?} in {context}")]
    UnexpectedNode {
        node: NodeId,
        found: &'static str,
        context: &'static str,
    },

    #[error("import declaration at {node:?} is only valid in a module")]
    ImportInScript { node: NodeId },

    #[error("JSX at {node:?} while JSX is disabled")]
    JsxDisabled { node: NodeId },

    #[error("node {node:?} is outside the AST arena")]
    NodeOutOfRange { node: NodeId },

    #[error(transparent)]
    Intern(#[from] InternError),
}

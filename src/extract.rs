//! Declaration tree flattening.
//!
//! Walks a declaration tree and flattens every reachable function into a
//! dataset row, depth-first in source order. This is a pure transformation:
//! no I/O, no parser types, deterministic output for a given tree.

use crate::node::{DeclarationNode, FunctionDeclaration};

/// One extracted dataset row destined for persistent storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRow {
    /// Function signature text.
    pub signature: String,

    /// Function body text.
    pub body: String,

    /// KDoc text, empty for undocumented functions.
    pub docstring: String,

    /// Row identifier, `f<file_index>:m<line>`. Unique within a run as
    /// long as each declaration in a file starts on its own line.
    pub id: String,
}

impl DatasetRow {
    /// Format a row from a function declaration.
    ///
    /// Only functions reach this constructor. The tree walk never builds a
    /// row from any other declaration kind, so there is no fallback row
    /// shape to emit.
    pub fn from_function(
        file_index: usize,
        docstring: Option<&str>,
        function: &FunctionDeclaration,
    ) -> Self {
        DatasetRow {
            signature: function.signature.clone(),
            body: function.body.clone(),
            docstring: docstring.unwrap_or("").to_string(),
            id: format!("f{}:m{}", file_index, function.position.line),
        }
    }
}

/// Flatten one declaration tree into dataset rows.
///
/// Traversal rules:
/// - A docstringed function emits exactly one row carrying the docstring.
/// - A docstringed non-function emits no row for the wrapper itself but is
///   recursed into, so functions nested below it are still found.
/// - A bare function emits exactly one row with an empty docstring.
/// - A container with a body is recursed into member by member; a
///   container without a body contributes nothing.
/// - Every other node kind contributes nothing and is not descended into.
///
/// Rows come out depth-first, pre-order: rows from an earlier member
/// always precede rows from a later member of the same container.
pub fn extract(node: &DeclarationNode, file_index: usize) -> Vec<DatasetRow> {
    let mut rows = Vec::new();
    collect_rows(node, file_index, &mut rows);
    rows
}

/// Recursive worker for [`extract`].
fn collect_rows(node: &DeclarationNode, file_index: usize, rows: &mut Vec<DatasetRow>) {
    match node {
        DeclarationNode::Docstringed(doc) => match doc.wrapped.as_ref() {
            DeclarationNode::Function(function) => {
                rows.push(DatasetRow::from_function(
                    file_index,
                    Some(&doc.docstring),
                    function,
                ));
            }
            wrapped => collect_rows(wrapped, file_index, rows),
        },
        DeclarationNode::Function(function) => {
            rows.push(DatasetRow::from_function(file_index, None, function));
        }
        DeclarationNode::Container(container) => {
            if let Some(members) = &container.members {
                for member in members {
                    collect_rows(member, file_index, rows);
                }
            }
        }
        DeclarationNode::Other => {}
    }
}

//! Kotlin-specific tree-sitter parsing logic.
//!
//! This module contains tree-sitter-kotlin integration for lowering a
//! source file into declaration nodes: functions split into signature and
//! body, class-like containers with their members, and KDoc comments
//! attached to the declaration they precede.

use crate::deadline::Deadline;
use crate::error::{MineError, Result};
use crate::node::{
    ContainerDeclaration, ContainerKind, DeclarationNode, DocstringedDeclaration,
    FunctionDeclaration, Position,
};
use std::path::Path;

/// Parse a Kotlin source file into its top-level declarations.
///
/// The parse is bounded by the deadline's remaining budget via
/// tree-sitter's parser timeout, so a pathological input is cancelled
/// instead of hanging the batch. A tree containing syntax errors is
/// rejected as a parse failure.
pub fn parse_kotlin(path: &Path, source: &str, deadline: &Deadline) -> Result<Vec<DeclarationNode>> {
    deadline.check(path)?;

    let mut parser = tree_sitter::Parser::new();
    let language = tree_sitter_kotlin_ng::LANGUAGE.into();
    parser
        .set_language(&language)
        .map_err(|e| MineError::Parse {
            file: path.to_path_buf(),
            message: format!("Failed to set Kotlin language: {:?}", e),
        })?;

    // Arm tree-sitter's own timeout with whatever budget is left. The
    // value must stay nonzero: zero disables the timeout entirely.
    let micros = deadline.remaining().as_micros().max(1) as u64;
    parser.set_timeout_micros(micros);

    let tree = match parser.parse(source, None) {
        Some(tree) => tree,
        None if deadline.expired() => {
            return Err(MineError::DeadlineExceeded {
                file: path.to_path_buf(),
            })
        }
        None => {
            return Err(MineError::Parse {
                file: path.to_path_buf(),
                message: "Parse failed - no tree returned".to_string(),
            })
        }
    };

    let root = tree.root_node();
    if root.has_error() {
        return Err(MineError::Parse {
            file: path.to_path_buf(),
            message: "Source contains syntax errors".to_string(),
        });
    }

    lower_children(root, source)
}

/// Lower every named child of a node into declaration nodes, in order.
///
/// Used both for the file root and for container bodies. KDoc comments
/// appear here as ordinary named children; they lower to `Other` at their
/// own position and are picked up again as the docstring of the
/// declaration that follows them.
fn lower_children(node: tree_sitter::Node, source: &str) -> Result<Vec<DeclarationNode>> {
    let mut declarations = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        declarations.push(lower_declaration(child, source)?);
    }
    Ok(declarations)
}

/// Lower one declaration, wrapping it when a KDoc comment precedes it.
fn lower_declaration(node: tree_sitter::Node, source: &str) -> Result<DeclarationNode> {
    let lowered = lower_node(node, source)?;

    // Only recognized declarations can carry a docstring.
    if matches!(lowered, DeclarationNode::Other) {
        return Ok(lowered);
    }

    if let Some(comment) = kdoc_before(node, source)? {
        let line = comment.start_position().row + 1;
        let docstring = comment.utf8_text(source.as_bytes())?.to_string();
        return Ok(DeclarationNode::Docstringed(DocstringedDeclaration {
            docstring,
            wrapped: Box::new(lowered),
            position: Position { line },
        }));
    }

    Ok(lowered)
}

/// Classify a single node and lower it to its declaration shape.
fn lower_node(node: tree_sitter::Node, source: &str) -> Result<DeclarationNode> {
    match node.kind() {
        "function_declaration" => Ok(DeclarationNode::Function(lower_function(node, source)?)),
        "class_declaration" | "enum_declaration" => {
            lower_container(node, source, ContainerKind::Class)
        }
        "interface_declaration" => lower_container(node, source, ContainerKind::Interface),
        "object_declaration" | "companion_object" => {
            lower_container(node, source, ContainerKind::Object)
        }
        _ => Ok(DeclarationNode::Other),
    }
}

/// Lower a function declaration, splitting signature from body.
fn lower_function(node: tree_sitter::Node, source: &str) -> Result<FunctionDeclaration> {
    let body = find_child_of_kind(node, "function_body");

    let signature = match body {
        // Everything before the body is the signature: modifiers,
        // keyword, name, parameters, return type.
        Some(body) => source[node.start_byte()..body.start_byte()].trim_end(),
        // Abstract or interface functions have no body at all.
        None => node.utf8_text(source.as_bytes())?,
    }
    .to_string();

    let body_text = match body {
        Some(body) => body.utf8_text(source.as_bytes())?.to_string(),
        None => String::new(),
    };

    Ok(FunctionDeclaration {
        signature,
        body: body_text,
        position: Position {
            line: node.start_position().row + 1,
        },
    })
}

/// Lower a class-like declaration, descending into its body if present.
fn lower_container(
    node: tree_sitter::Node,
    source: &str,
    kind: ContainerKind,
) -> Result<DeclarationNode> {
    // Covers class_body and enum_class_body alike.
    let mut cursor = node.walk();
    let body = node
        .named_children(&mut cursor)
        .find(|c| c.kind().ends_with("_body"));

    let members = match body {
        Some(body) => Some(lower_children(body, source)?),
        None => None,
    };

    Ok(DeclarationNode::Container(ContainerDeclaration {
        kind,
        members,
    }))
}

/// Find the first named child with the given kind.
fn find_child_of_kind<'a>(node: tree_sitter::Node<'a>, kind: &str) -> Option<tree_sitter::Node<'a>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}

/// Return the KDoc comment immediately preceding a declaration, if any.
///
/// KDoc comments are sibling nodes in the tree; only `/** ... */`
/// comments count, ordinary `//` and `/* ... */` comments do not.
fn kdoc_before<'a>(
    node: tree_sitter::Node<'a>,
    source: &str,
) -> Result<Option<tree_sitter::Node<'a>>> {
    let Some(sibling) = node.prev_named_sibling() else {
        return Ok(None);
    };
    if !sibling.kind().contains("comment") {
        return Ok(None);
    }
    let text = sibling.utf8_text(source.as_bytes())?;
    if text.trim_start().starts_with("/**") {
        Ok(Some(sibling))
    } else {
        Ok(None)
    }
}

//! Source text to declaration tree lowering.
//!
//! This module owns the tree-sitter integration. It parses raw Kotlin
//! source and lowers the concrete syntax tree into the typed
//! [`crate::node::DeclarationNode`] shapes the extraction core consumes.

pub mod kotlin;

pub use kotlin::parse_kotlin;

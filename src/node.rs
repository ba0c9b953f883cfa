//! Declaration tree model for one parsed source file.
//!
//! The parser lowers the raw tree-sitter tree into this closed set of
//! shapes; the extraction core consumes only these types and never sees
//! tree-sitter nodes. Node kinds that extraction does not care about
//! (properties, type aliases, imports, stray comments) all collapse into
//! [`DeclarationNode::Other`].

/// A single declaration within a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationNode {
    /// A function declaration, documented or not.
    Function(FunctionDeclaration),

    /// A declaration immediately preceded by a KDoc comment.
    Docstringed(DocstringedDeclaration),

    /// A class-like declaration that may hold nested members.
    Container(ContainerDeclaration),

    /// Any other declaration kind. Skipped by extraction; traversal does
    /// not descend into it.
    Other,
}

/// A function declaration with its signature and body split apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    /// Declaration text up to (not including) the body.
    pub signature: String,

    /// Body text, including braces or the `= expression` form. Empty for
    /// abstract functions declared without a body.
    pub body: String,

    /// Source position of the declaration.
    pub position: Position,
}

/// A declaration paired with the KDoc comment that precedes it.
///
/// The wrapped declaration may itself be any kind; the docstring is
/// attributed only at the level it directly annotates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocstringedDeclaration {
    /// The raw KDoc comment text, `/** ... */` delimiters included.
    pub docstring: String,

    /// The declaration the comment annotates.
    pub wrapped: Box<DeclarationNode>,

    /// Source position of the comment.
    pub position: Position,
}

/// A class-like declaration holding nested member declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerDeclaration {
    /// What kind of container this is.
    pub kind: ContainerKind,

    /// Member declarations in source order. `None` for containers
    /// declared without a body (forward or abstract declarations).
    pub members: Option<Vec<DeclarationNode>>,
}

/// Kinds of containers that can hold nested declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// A class or enum class.
    Class,
    /// An interface.
    Interface,
    /// An object or companion object.
    Object,
}

impl ContainerKind {
    /// Convert to string for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Class => "class",
            ContainerKind::Interface => "interface",
            ContainerKind::Object => "object",
        }
    }
}

/// Source position of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number (1-based).
    pub line: usize,
}

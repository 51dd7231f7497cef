//! Declaration model for top-level Bicep statements.
//!
//! The model is deliberately shallow: lint rules only look at the kind of
//! each top-level statement, its decorators, and its literal string value.
//! Statement bodies are never represented.

/// A decorator attached to a declaration, such as `@description('...')`.
///
/// Arguments are not modelled; the presence of any decorator is what the
/// rules check for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator {
    /// Dotted decorator name, e.g. `sys.description`.
    pub name: String,
}

/// A `metadata <name> = <value>` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataDeclaration {
    /// The metadata key, e.g. `name` or `description`.
    pub name: String,
    /// The literal string value, when the right-hand side is a string literal.
    pub value: Option<String>,
    /// Decorators preceding the statement.
    pub decorators: Vec<Decorator>,
}

impl MetadataDeclaration {
    /// Returns the literal string value, if one was parsed.
    #[must_use]
    pub fn literal_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns `true` if any decorator precedes the statement.
    #[must_use]
    pub fn has_decorators(&self) -> bool {
        !self.decorators.is_empty()
    }
}

/// A `targetScope = <value>` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetScopeDeclaration {
    /// The literal string value, when the right-hand side is a string literal.
    pub value: Option<String>,
    /// Decorators preceding the statement.
    pub decorators: Vec<Decorator>,
}

impl TargetScopeDeclaration {
    /// Returns the literal string value, if one was parsed.
    #[must_use]
    pub fn literal_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns `true` if any decorator precedes the statement.
    #[must_use]
    pub fn has_decorators(&self) -> bool {
        !self.decorators.is_empty()
    }
}

/// Any other top-level statement, kept only for positional checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherDeclaration {
    /// The leading keyword, e.g. `param` or `resource`.
    pub keyword: String,
}

/// A top-level declaration. The sequence order is the source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// A metadata statement.
    Metadata(MetadataDeclaration),
    /// A target-scope statement.
    TargetScope(TargetScopeDeclaration),
    /// Anything else.
    Other(OtherDeclaration),
}

impl Declaration {
    /// Returns the metadata declaration, if this is one.
    #[must_use]
    pub fn as_metadata(&self) -> Option<&MetadataDeclaration> {
        match self {
            Self::Metadata(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the target-scope declaration, if this is one.
    #[must_use]
    pub fn as_target_scope(&self) -> Option<&TargetScopeDeclaration> {
        match self {
            Self::TargetScope(t) => Some(t),
            _ => None,
        }
    }

    /// Returns `true` for metadata statements.
    #[must_use]
    pub fn is_metadata(&self) -> bool {
        matches!(self, Self::Metadata(_))
    }

    /// Returns `true` for target-scope statements.
    #[must_use]
    pub fn is_target_scope(&self) -> bool {
        matches!(self, Self::TargetScope(_))
    }
}

/// A parsed source file: the ordered sequence of top-level declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    declarations: Vec<Declaration>,
}

impl Program {
    /// Creates a program from an ordered declaration sequence.
    #[must_use]
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// The top-level declarations, in source order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Consumes the program, yielding the declaration sequence.
    #[must_use]
    pub fn into_declarations(self) -> Vec<Declaration> {
        self.declarations
    }
}

//! Error types for registry construction

use tl_syntax::ParseError;

/// Fatal problems that prevent a registry from being built
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
    /// Two object types share a (case-insensitive) name
    #[error("object type '{name}' is declared more than once")]
    DuplicateObjectType {
        /// The repeated name
        name: String,
    },

    /// A type extends a type that was never declared
    #[error("object type '{ty}' extends unknown type '{base}'")]
    UnknownBaseType {
        /// The declaring type
        ty: String,
        /// The missing base type
        base: String,
    },

    /// A type implements a type that was never declared
    #[error("object type '{ty}' implements unknown type '{implemented}'")]
    UnknownImplementedType {
        /// The declaring type
        ty: String,
        /// The missing implemented type
        implemented: String,
    },

    /// A type reaches itself through its base chain or implemented types
    #[error("object type '{ty}' inherits from itself")]
    InheritanceCycle {
        /// A type on the cycle
        ty: String,
    },

    /// The universal or generic element type is missing
    #[error("the {role} type '{name}' is not declared")]
    MissingCoreType {
        /// Which singleton is missing
        role: &'static str,
        /// The name it was expected under
        name: String,
    },

    /// Two tags share a canonical name
    #[error("tag '{name}' is declared more than once")]
    DuplicateTag {
        /// The repeated canonical name
        name: String,
    },

    /// Declared tag syntax could not be split
    #[error("tag syntax '{syntax}' is malformed")]
    InvalidTagSyntax {
        /// The offending syntax
        syntax: String,
        /// Why splitting failed
        #[source]
        source: ParseError,
    },
}

/// Non-fatal findings recorded while building a registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadIssue {
    /// A tag's return type names no declared object type
    #[error("Tag '{tag}' specifies return type '{returns}' which does not appear to be a valid object type.")]
    UnknownReturnType {
        /// Canonical tag name
        tag: String,
        /// Declared return type text
        returns: String,
    },

    /// Declared tag syntax contains whitespace
    #[error("Tag '{syntax}' contains spaces.")]
    SyntaxContainsSpaces {
        /// The declared syntax
        syntax: String,
    },
}

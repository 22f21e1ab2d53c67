//! Declaration records handed to the registry builder by a loader

use serde::{Deserialize, Serialize};

/// An object type as declared in documentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTypeDecl {
    /// Type name, e.g. `PlayerTag`
    pub name: String,
    /// Identity prefix; `none` marks a pseudo-type
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Name of the directly extended type
    #[serde(default)]
    pub base: Option<String>,
    /// Names of directly implemented capability types
    #[serde(default)]
    pub implements: Vec<String>,
}

fn default_prefix() -> String {
    "none".to_string()
}

impl ObjectTypeDecl {
    /// Declare a type with a prefix and nothing else
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            base: None,
            implements: Vec::new(),
        }
    }

    /// Set the directly extended type
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Add a directly implemented capability type
    #[must_use]
    pub fn implementing(mut self, implemented: impl Into<String>) -> Self {
        self.implements.push(implemented.into());
        self
    }
}

/// A tag as declared in documentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDecl {
    /// Full declared syntax, e.g. `<PlayerTag.flag[<name>]>`
    pub syntax: String,
    /// Return type text, e.g. `ElementTag(Number)`
    pub returns: String,
    /// Deprecation notice
    #[serde(default)]
    pub deprecated: Option<String>,
}

impl TagDecl {
    /// Declare a tag with its return type
    pub fn new(syntax: impl Into<String>, returns: impl Into<String>) -> Self {
        Self {
            syntax: syntax.into(),
            returns: returns.into(),
            deprecated: None,
        }
    }

    /// Mark the tag deprecated
    #[must_use]
    pub fn deprecated(mut self, notice: impl Into<String>) -> Self {
        self.deprecated = Some(notice.into());
        self
    }
}

/// A batch of declarations, e.g. one documentation source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSource {
    /// Declared object types
    #[serde(default, rename = "object_type")]
    pub object_types: Vec<ObjectTypeDecl>,
    /// Declared tags
    #[serde(default, rename = "tag")]
    pub tags: Vec<TagDecl>,
}

//! The written tag under analysis

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use tl_meta::TagId;
use tl_syntax::{ParseError, Segment, Span, split_tag};

/// One `.`-separated part of a written tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    text: String,
    canonical: String,
    parameter: Option<String>,
    span: Option<Span>,
    possible_definitions: IndexSet<TagId, FxBuildHasher>,
}

impl Part {
    /// Create a part from its literal text and optional `[parameter]`
    pub fn new(text: impl Into<String>, parameter: Option<String>) -> Self {
        let text = text.into();
        Self {
            canonical: text.to_lowercase(),
            text,
            parameter,
            span: None,
            possible_definitions: IndexSet::default(),
        }
    }

    /// Literal text as written
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased text used for lookups
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The attached parameter, without brackets
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// Whether a parameter is attached
    pub fn has_parameter(&self) -> bool {
        self.parameter.is_some()
    }

    /// Location in the source text, when the part was parsed from one
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Every definition that could apply to this part, in discovery order
    pub fn possible_definitions(&self) -> &IndexSet<TagId, FxBuildHasher> {
        &self.possible_definitions
    }

    pub(crate) fn add_possible(&mut self, tag: TagId) {
        self.possible_definitions.insert(tag);
    }
}

impl From<Segment> for Part {
    fn from(segment: Segment) -> Self {
        let mut part = Self::new(segment.text, segment.parameter);
        part.span = Some(segment.span);
        part
    }
}

/// A tag expression as written, traced once per analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTag {
    source: Option<String>,
    parts: Vec<Part>,
}

impl WrittenTag {
    /// Split tag text into parts
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] from splitting malformed text.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let parts = split_tag(source)?.into_iter().map(Part::from).collect();
        Ok(Self {
            source: Some(source.to_string()),
            parts,
        })
    }

    /// Build a tag from parts split elsewhere
    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self {
            source: None,
            parts,
        }
    }

    /// The text this tag was parsed from
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// All parts in order
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the tag has no parts
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Lowercased dot-join of `len` parts starting at `start`
    pub(crate) fn joined_key(&self, start: usize, len: usize) -> String {
        self.parts[start..start + len]
            .iter()
            .map(Part::canonical)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Record `tag` as a possible definition of `len` parts from `start`
    pub(crate) fn attach(&mut self, tag: TagId, start: usize, len: usize) {
        for part in &mut self.parts[start..start + len] {
            part.add_possible(tag);
        }
    }
}

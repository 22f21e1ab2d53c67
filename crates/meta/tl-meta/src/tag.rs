//! Documented tag definitions

use crate::ty::TypeId;
use la_arena::Idx;
use tl_syntax::Segment;

/// Index of a tag definition in the registry
pub type TagId = Idx<TagDefinition>;

/// Whether the first resolvable part of a tag takes a `[parameter]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParameterPolicy {
    /// A parameter may be written
    pub allows: bool,
    /// A parameter must be written
    pub requires: bool,
}

impl ParameterPolicy {
    /// Derive the policy from the segments of declared tag syntax.
    ///
    /// The first resolvable part is the second segment of a multi-segment tag
    /// (the first names the owning type or base) and the only segment
    /// otherwise. A parameter wrapped in `( )` is optional.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let first = usize::from(segments.len() > 1);
        match segments.get(first).and_then(|segment| segment.parameter.as_deref()) {
            Some(parameter) => Self {
                allows: true,
                requires: !parameter.ends_with(')'),
            },
            None => Self::default(),
        }
    }

    /// Whether a part written with or without a parameter satisfies this policy
    pub fn accepts(self, has_parameter: bool) -> bool {
        if has_parameter {
            self.allows
        } else {
            !self.requires
        }
    }
}

/// A documented tag, immutable once the registry is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDefinition {
    /// Declared syntax, e.g. `<PlayerTag.flag[<name>]>`
    pub syntax: String,
    /// Canonical lowercased dotted name, e.g. `playertag.flag`
    pub name: String,
    /// Object type named before the first dot, when it is one
    pub owner: Option<TypeId>,
    /// Declared return type text
    pub returns: String,
    /// Resolved return type; `None` when `returns` names no known type
    pub return_type: Option<TypeId>,
    /// Parameter policy of the first resolvable part
    pub parameter: ParameterPolicy,
    /// Deprecation notice; present only when non-blank
    pub deprecated: Option<String>,
}

impl TagDefinition {
    /// Whether a parameter may be written on the first resolvable part
    pub fn allows_parameter(&self) -> bool {
        self.parameter.allows
    }

    /// Whether a parameter must be written on the first resolvable part
    pub fn requires_parameter(&self) -> bool {
        self.parameter.requires
    }

    /// Whether using this tag should raise a deprecation warning
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }
}

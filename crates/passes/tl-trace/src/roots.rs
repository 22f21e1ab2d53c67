//! Root resolution
//!
//! The first part of a tag decides where tracing starts. Strategies are
//! tried in [`RootStrategy::ORDER`]; the first one that applies wins.

use crate::diagnostics::TraceError;
use crate::tracer::Tracer;
use tl_meta::TypeSet;

/// Longest catalog key tried for a compound root, in segments
pub const MAX_ROOT_SEGMENTS: usize = 4;

/// Ways a tag root can resolve, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootStrategy {
    /// `context` and friends; members are looked up on every type
    PseudoRoot,
    /// Free-floating roots valid anywhere, typed as the element type
    PerpetualRoot,
    /// A catalog tag whose name spans several leading parts
    CompoundTag,
    /// A catalog tag named by the first part alone
    TagBase,
    /// An object type used directly as the root
    ObjectTypeBase,
    /// Nothing matched
    Unknown,
}

impl RootStrategy {
    /// Evaluation order
    pub const ORDER: [Self; 6] = [
        Self::PseudoRoot,
        Self::PerpetualRoot,
        Self::CompoundTag,
        Self::TagBase,
        Self::ObjectTypeBase,
        Self::Unknown,
    ];

    /// Short name for logs
    pub fn name(self) -> &'static str {
        match self {
            Self::PseudoRoot => "pseudo-root",
            Self::PerpetualRoot => "perpetual-root",
            Self::CompoundTag => "compound-tag",
            Self::TagBase => "tag-base",
            Self::ObjectTypeBase => "object-type",
            Self::Unknown => "unknown",
        }
    }
}

/// Result of trying one strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RootStep {
    /// Try the next strategy
    NotApplicable,
    /// Trace members from `index` on, starting at `roots`
    Continue { roots: TypeSet, index: usize },
    /// An error was reported; stop
    Halt,
}

impl Tracer<'_> {
    pub(crate) fn resolve_root(&mut self, strategy: RootStrategy, root: &str) -> RootStep {
        match strategy {
            RootStrategy::PseudoRoot => self.pseudo_root(root),
            RootStrategy::PerpetualRoot => self.perpetual_root(root),
            RootStrategy::CompoundTag => self.compound_tag(root),
            RootStrategy::TagBase => self.tag_base(root),
            RootStrategy::ObjectTypeBase => self.object_type_base(root),
            RootStrategy::Unknown => self.unknown_base(),
        }
    }

    fn pseudo_root(&self, root: &str) -> RootStep {
        if !self.config.is_pseudo_root(root) {
            return RootStep::NotApplicable;
        }
        RootStep::Continue {
            roots: self.registry.all_types(),
            index: self.config.pseudo_root_skip,
        }
    }

    fn perpetual_root(&self, root: &str) -> RootStep {
        if !self.config.is_perpetual_root(root) {
            return RootStep::NotApplicable;
        }
        let mut roots = TypeSet::default();
        roots.insert(self.registry.element_type());
        RootStep::Continue { roots, index: 1 }
    }

    /// Parameters are not checked here
    fn compound_tag(&mut self, root: &str) -> RootStep {
        let registry = self.registry;
        for len in (2..=MAX_ROOT_SEGMENTS).rev() {
            if self.tag.len() < len {
                continue;
            }
            let key = format!("{root}.{}", self.tag.joined_key(1, len - 1));
            let Some(tag) = registry.lookup_tag(&key) else {
                continue;
            };
            self.mark(tag, 0, len);
            return match self.return_types(tag) {
                Some(roots) => RootStep::Continue { roots, index: len },
                None => RootStep::Halt,
            };
        }
        RootStep::NotApplicable
    }

    fn tag_base(&mut self, root: &str) -> RootStep {
        let registry = self.registry;
        let Some(tag) = registry.lookup_tag(root) else {
            return RootStep::NotApplicable;
        };
        self.tag.attach(tag, 0, 1);

        let has_parameter = self.tag.parts()[0].has_parameter();
        if !registry.tag(tag).parameter.accepts(has_parameter) {
            let base = root.to_string();
            self.report(if has_parameter {
                TraceError::BaseDisallowsParameter { base }
            } else {
                TraceError::BaseRequiresParameter { base }
            });
            return RootStep::Halt;
        }

        self.check_deprecated(tag, 0);
        match self.return_types(tag) {
            Some(roots) => RootStep::Continue { roots, index: 1 },
            None => RootStep::Halt,
        }
    }

    fn object_type_base(&mut self, root: &str) -> RootStep {
        let registry = self.registry;
        let Some(ty) = registry.lookup_object_type(root) else {
            return RootStep::NotApplicable;
        };
        if registry.object_type(ty).is_pseudo_type() {
            self.report(TraceError::PseudoTypeBase {
                base: self.tag.parts()[0].text().to_string(),
            });
        }
        let mut roots = TypeSet::default();
        roots.insert(ty);
        RootStep::Continue { roots, index: 1 }
    }

    fn unknown_base(&mut self) -> RootStep {
        self.report(TraceError::UnknownBase {
            base: self.tag.parts()[0].text().to_string(),
        });
        RootStep::Halt
    }
}

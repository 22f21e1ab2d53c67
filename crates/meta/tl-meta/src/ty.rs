//! Object types and the sets the tracer passes around

use crate::tag::TagId;
use indexmap::IndexSet;
use la_arena::Idx;
use rustc_hash::{FxBuildHasher, FxHashMap};

/// Index of an object type in the registry
pub type TypeId = Idx<ObjectType>;

/// Insertion-ordered set of object types
///
/// Ordering keeps diagnostics that list type names stable from run to run.
pub type TypeSet = IndexSet<TypeId, FxBuildHasher>;

/// A documented object type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    /// Name as declared, e.g. `PlayerTag`
    pub name: String,
    /// Lowercased name used for lookups
    pub canonical: String,
    /// Identity prefix, e.g. `p` (`none` marks a pseudo-type)
    pub prefix: String,
    /// Type this one directly extends
    pub base: Option<TypeId>,
    /// Capability types this one directly implements
    pub implements: TypeSet,
    /// Every type whose base chain or implemented capabilities reach this one
    pub extended_by: TypeSet,
    /// Members keyed by their 1-3 segment lowercased local name
    pub sub_tags: FxHashMap<String, TagId>,
}

impl ObjectType {
    pub(crate) fn new(name: &str, prefix: &str) -> Self {
        Self {
            name: name.to_string(),
            canonical: name.to_lowercase(),
            prefix: prefix.to_string(),
            base: None,
            implements: TypeSet::default(),
            extended_by: TypeSet::default(),
            sub_tags: FxHashMap::default(),
        }
    }

    /// Whether the prefix marks a pseudo-type that is not a valid free tag base
    pub fn is_pseudo_type(&self) -> bool {
        self.prefix.eq_ignore_ascii_case("none")
    }

    /// Look up a member by its lowercased key
    pub fn sub_tag(&self, key: &str) -> Option<TagId> {
        self.sub_tags.get(key).copied()
    }
}

//! The read-only tag catalog and type graph

use crate::error::LoadIssue;
use crate::tag::{TagDefinition, TagId};
use crate::ty::{ObjectType, TypeId, TypeSet};
use la_arena::Arena;
use rustc_hash::FxHashMap;
use std::borrow::Cow;

/// Lowercase a name for lookup, borrowing when it already is lowercase
pub fn canonical_name(name: &str) -> Cow<'_, str> {
    if name.chars().any(char::is_uppercase) {
        Cow::Owned(name.to_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// Documented object types and tags, built once by [`crate::RegistryBuilder`]
///
/// Nothing hands out mutable access after construction, so a registry can be
/// shared freely between threads tracing different tags.
#[derive(Debug, Clone)]
pub struct Registry {
    pub(crate) types: Arena<ObjectType>,
    pub(crate) tags: Arena<TagDefinition>,
    pub(crate) type_names: FxHashMap<String, TypeId>,
    pub(crate) tag_names: FxHashMap<String, TagId>,
    pub(crate) universal: TypeId,
    pub(crate) element: TypeId,
    pub(crate) load_issues: Vec<LoadIssue>,
}

impl Registry {
    /// Find a tag by its full dotted name (case-insensitive)
    pub fn lookup_tag(&self, name: &str) -> Option<TagId> {
        self.tag_names.get(canonical_name(name).as_ref()).copied()
    }

    /// Find an object type by name (case-insensitive)
    pub fn lookup_object_type(&self, name: &str) -> Option<TypeId> {
        self.type_names.get(canonical_name(name).as_ref()).copied()
    }

    /// Get a tag definition
    #[must_use]
    pub fn tag(&self, id: TagId) -> &TagDefinition {
        &self.tags[id]
    }

    /// Get an object type
    #[must_use]
    pub fn object_type(&self, id: TypeId) -> &ObjectType {
        &self.types[id]
    }

    /// Iterate all object types in declaration order
    pub fn object_types(&self) -> impl Iterator<Item = (TypeId, &ObjectType)> {
        self.types.iter()
    }

    /// Every declared object type
    pub fn all_types(&self) -> TypeSet {
        self.types.iter().map(|(id, _)| id).collect()
    }

    /// The type every object is (`ObjectTag` by default)
    pub fn universal_type(&self) -> TypeId {
        self.universal
    }

    /// The generic element/primitive type (`ElementTag` by default)
    pub fn element_type(&self) -> TypeId {
        self.element
    }

    /// Problems found while building that did not stop the build
    pub fn load_issues(&self) -> &[LoadIssue] {
        &self.load_issues
    }

    /// Display names of a set of types, in set order
    pub fn type_names(&self, types: &TypeSet) -> Vec<String> {
        types.iter().map(|&id| self.types[id].name.clone()).collect()
    }

    /// All types a value of the given type(s) may expose members from.
    ///
    /// For each input type this adds the type, every supertype reachable
    /// through base chains and implemented capabilities, and every type that
    /// extends or implements the input type itself (not its supertypes). The
    /// universal type is always present but never expanded.
    pub fn closure(&self, types: &TypeSet) -> TypeSet {
        let mut result = TypeSet::with_capacity_and_hasher(types.len() * 2, Default::default());
        for &id in types {
            result.insert(id);
            for supertype in self.supertypes(id) {
                result.insert(supertype);
            }
            result.extend(self.types[id].extended_by.iter().copied());
        }
        result.insert(self.universal);
        result
    }

    /// Every type reachable upward from `id` through base chains and
    /// implemented capabilities, excluding `id`
    pub fn supertypes(&self, id: TypeId) -> TypeSet {
        let mut found = TypeSet::default();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let ty = &self.types[current];
            for next in ty.base.iter().chain(ty.implements.iter()) {
                if *next != id && found.insert(*next) {
                    pending.push(*next);
                }
            }
        }
        found
    }

    /// The types a value returned by `tag` may hold.
    ///
    /// A tag returning the universal type may return anything; otherwise the
    /// declared type and every type extending it. `None` when the declared
    /// return type never resolved.
    pub fn return_types(&self, tag: TagId) -> Option<TypeSet> {
        let ty = self.tags[tag].return_type?;
        if ty == self.universal {
            return Some(self.all_types());
        }
        let mut result = TypeSet::default();
        result.insert(ty);
        result.extend(self.types[ty].extended_by.iter().copied());
        Some(result)
    }
}

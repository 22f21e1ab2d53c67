//! Registry construction
//!
//! The builder collects declarations in any order, then resolves names,
//! checks the type graph, precomputes the reverse extension index and files
//! every tag into the catalog and, when it belongs to a type, into that
//! type's subtag table.

use crate::decl::{CatalogSource, ObjectTypeDecl, TagDecl};
use crate::error::{LoadIssue, RegistryError};
use crate::registry::{Registry, canonical_name};
use crate::tag::{ParameterPolicy, TagDefinition};
use crate::ty::{ObjectType, TypeId, TypeSet};
use la_arena::Arena;
use rustc_hash::FxHashMap;
use tl_syntax::{clean_tag_syntax, split_tag};

/// Collects declarations and builds a [`Registry`]
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    universal_name: String,
    element_name: String,
    object_types: Vec<ObjectTypeDecl>,
    tags: Vec<TagDecl>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Create a builder expecting `ObjectTag` and `ElementTag` as the core types
    pub fn new() -> Self {
        Self {
            universal_name: "ObjectTag".to_string(),
            element_name: "ElementTag".to_string(),
            object_types: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Name the universal object type
    #[must_use]
    pub fn universal_type(mut self, name: impl Into<String>) -> Self {
        self.universal_name = name.into();
        self
    }

    /// Name the generic element type
    #[must_use]
    pub fn element_type(mut self, name: impl Into<String>) -> Self {
        self.element_name = name.into();
        self
    }

    /// Add an object type declaration
    pub fn object_type(&mut self, decl: ObjectTypeDecl) -> &mut Self {
        self.object_types.push(decl);
        self
    }

    /// Add a tag declaration
    pub fn tag(&mut self, decl: TagDecl) -> &mut Self {
        self.tags.push(decl);
        self
    }

    /// Add every declaration from a source
    pub fn extend(&mut self, source: CatalogSource) -> &mut Self {
        self.object_types.extend(source.object_types);
        self.tags.extend(source.tags);
        self
    }

    /// Resolve all declarations into a registry
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] for duplicate names, references to
    /// undeclared types, inheritance cycles, missing core types, or tag
    /// syntax that cannot be split. Unknown return types and similar
    /// softer problems are kept as [`Registry::load_issues`] instead.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut types = Arena::new();
        let mut type_names = FxHashMap::default();
        for decl in &self.object_types {
            let ty = ObjectType::new(&decl.name, &decl.prefix);
            if type_names.contains_key(&ty.canonical) {
                return Err(RegistryError::DuplicateObjectType {
                    name: decl.name.clone(),
                });
            }
            let canonical = ty.canonical.clone();
            type_names.insert(canonical, types.alloc(ty));
        }

        let lookup = |name: &str| type_names.get(canonical_name(name).as_ref()).copied();
        let mut relations = Vec::with_capacity(self.object_types.len());
        for decl in &self.object_types {
            let base = match &decl.base {
                Some(base) => Some(lookup(base).ok_or_else(|| RegistryError::UnknownBaseType {
                    ty: decl.name.clone(),
                    base: base.clone(),
                })?),
                None => None,
            };
            let mut implements = TypeSet::default();
            for implemented in &decl.implements {
                let id = lookup(implemented).ok_or_else(|| {
                    RegistryError::UnknownImplementedType {
                        ty: decl.name.clone(),
                        implemented: implemented.clone(),
                    }
                })?;
                implements.insert(id);
            }
            relations.push((base, implements));
        }
        let universal = lookup(&self.universal_name).ok_or_else(|| RegistryError::MissingCoreType {
            role: "universal",
            name: self.universal_name.clone(),
        })?;
        let element = lookup(&self.element_name).ok_or_else(|| RegistryError::MissingCoreType {
            role: "element",
            name: self.element_name.clone(),
        })?;

        let ids: Vec<TypeId> = types.iter().map(|(id, _)| id).collect();
        for (&id, (base, implements)) in ids.iter().zip(relations) {
            types[id].base = base;
            types[id].implements = implements;
        }

        let mut registry = Registry {
            types,
            tags: Arena::new(),
            type_names,
            tag_names: FxHashMap::default(),
            universal,
            element,
            load_issues: Vec::new(),
        };
        index_extensions(&mut registry, &ids)?;

        for decl in self.tags {
            file_tag(&mut registry, decl)?;
        }

        tracing::debug!(
            types = registry.types.len(),
            tags = registry.tags.len(),
            issues = registry.load_issues.len(),
            "built tag registry"
        );
        Ok(registry)
    }
}

/// Reject inheritance cycles and fill every type's `extended_by`
fn index_extensions(registry: &mut Registry, ids: &[TypeId]) -> Result<(), RegistryError> {
    for &id in ids {
        if reaches_itself(registry, id) {
            return Err(RegistryError::InheritanceCycle {
                ty: registry.types[id].name.clone(),
            });
        }
        for supertype in registry.supertypes(id) {
            registry.types[supertype].extended_by.insert(id);
        }
    }
    Ok(())
}

fn reaches_itself(registry: &Registry, id: TypeId) -> bool {
    let ty = &registry.types[id];
    ty.base == Some(id)
        || ty.implements.contains(&id)
        || registry.supertypes(id).iter().any(|&supertype| {
            let other = &registry.types[supertype];
            other.base == Some(id) || other.implements.contains(&id)
        })
}

fn file_tag(registry: &mut Registry, decl: TagDecl) -> Result<(), RegistryError> {
    let segments = split_tag(&decl.syntax).map_err(|source| RegistryError::InvalidTagSyntax {
        syntax: decl.syntax.clone(),
        source,
    })?;
    let cleaned = clean_tag_syntax(&decl.syntax);
    let name = cleaned.to_lowercase();
    if registry.tag_names.contains_key(&name) {
        return Err(RegistryError::DuplicateTag { name });
    }

    if decl.syntax.contains(' ') {
        registry.load_issues.push(LoadIssue::SyntaxContainsSpaces {
            syntax: decl.syntax.clone(),
        });
    }

    // Text before the first dot names the owning type: `PlayerTag.name`
    let owner = match cleaned.split_once('.') {
        Some((before, _)) if !cleaned.starts_with('&') => registry.lookup_object_type(before),
        _ => None,
    };
    let member_key = name.split_once('.').map(|(_, after)| after.to_string());

    let return_name = decl.returns.split('(').next().unwrap_or_default().trim();
    let return_type = registry.lookup_object_type(return_name);
    if return_type.is_none() {
        registry.load_issues.push(LoadIssue::UnknownReturnType {
            tag: name.clone(),
            returns: decl.returns.clone(),
        });
    }

    let deprecated = decl.deprecated.filter(|notice| !notice.trim().is_empty());
    let definition = TagDefinition {
        parameter: ParameterPolicy::from_segments(&segments),
        syntax: decl.syntax,
        name: name.clone(),
        owner,
        returns: decl.returns,
        return_type,
        deprecated,
    };
    let id = registry.tags.alloc(definition);
    registry.tag_names.insert(name, id);
    if let (Some(owner), Some(key)) = (owner, member_key) {
        registry.types[owner].sub_tags.insert(key, id);
    }
    Ok(())
}

//! Tag catalog and object type graph
//!
//! This crate holds the documentation-derived data the tracer resolves
//! against. It is built once and then only read.
//!
//! # Architecture
//!
//! - **Object types** live in an arena and refer to each other by [`TypeId`].
//!   Each records its base type, implemented capabilities, the precomputed
//!   reverse index of types extending it, and its subtag table.
//! - **Tag definitions** live in a second arena, reachable by full dotted
//!   name from the catalog and by local member key from their owning type.
//! - **[`RegistryBuilder`]** turns loader declarations into a [`Registry`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use tl_meta::{ObjectTypeDecl, RegistryBuilder, TagDecl};
//!
//! let mut builder = RegistryBuilder::new();
//! builder
//!     .object_type(ObjectTypeDecl::new("ObjectTag", "none"))
//!     .object_type(ObjectTypeDecl::new("ElementTag", "el").with_base("ObjectTag"))
//!     .tag(TagDecl::new("<ElementTag.length>", "ElementTag"));
//! let registry = builder.build()?;
//! ```

pub mod builder;
pub mod decl;
pub mod error;
pub mod registry;
pub mod tag;
pub mod ty;

pub use builder::RegistryBuilder;
pub use decl::{CatalogSource, ObjectTypeDecl, TagDecl};
pub use error::{LoadIssue, RegistryError};
pub use registry::{Registry, canonical_name};
pub use tag::{ParameterPolicy, TagDefinition, TagId};
pub use ty::{ObjectType, TypeId, TypeSet};

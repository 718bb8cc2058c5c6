//! relmap core - model-building context, catalog and schema finalization.
//!
//! This crate provides the schema builder that relationship configuration is
//! applied to. Configuration calls record intent on a [`ModelBuilder`];
//! [`ModelBuilder::finalize`] resolves implicit keys, validates everything and
//! returns an immutable [`Model`].

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;

pub use builder::{
    CollectionNavigationBuilder, EntityTypeBuilder, ModelBuilder, NavigationBuilder,
    ReferenceNavigationBuilder, RelationshipBuilder,
};
pub use catalog::{
    Cardinality, Collection, DeleteBehavior, Entity, EntityDef, FieldDef, FieldType, Model,
    NavigationDef, NavigationRef, PrincipalKey, Property, Reference, RelationshipDef, ScalarType,
};
pub use config::BuilderConfig;
pub use error::{Error, Result};

//! Schema catalog for relmap.
//!
//! The catalog holds the definitions a model is made of: entities with their
//! properties, relationships with their foreign keys, and the navigations
//! exposing them, plus the typed selectors used to name these from code.

mod entity;
mod field;
mod model;
mod relation;
mod selector;
mod types;

pub use entity::{Entity, EntityDef};
pub use field::FieldDef;
pub use model::Model;
pub use relation::{Cardinality, DeleteBehavior, NavigationDef, PrincipalKey, RelationshipDef};
pub use selector::{Collection, NavigationRef, Property, Reference};
pub use types::{FieldType, ScalarType};

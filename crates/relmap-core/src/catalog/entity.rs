//! Entity definitions.

use super::field::FieldDef;
use serde::{Deserialize, Serialize};

/// A data model type that can take part in a model.
///
/// The name is the entity's identity within a model; two types reporting the
/// same name are treated as the same entity.
pub trait Entity: 'static {
    /// Entity name (unique within a model).
    const NAME: &'static str;

    /// Describe the entity's scalar properties and primary key.
    fn definition() -> EntityDef;
}

/// The schema of one entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDef {
    /// Entity name (unique within a model).
    pub name: String,
    /// Name of the primary key property.
    pub primary_key: String,
    /// Property definitions.
    pub fields: Vec<FieldDef>,
}

impl EntityDef {
    /// Create a new entity definition.
    pub fn new(name: impl Into<String>, primary_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_key: primary_key.into(),
            fields: Vec::new(),
        }
    }

    /// Add a property to the entity.
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Add multiple properties.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Get a property by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get the primary key property, if it was declared.
    pub fn get_primary_key(&self) -> Option<&FieldDef> {
        self.get_field(&self.primary_key)
    }
}

//! Property definitions for entities.

use super::types::{FieldType, ScalarType};
use serde::{Deserialize, Serialize};

/// A scalar property declared on an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Property name.
    pub name: String,
    /// Property data type.
    pub field_type: FieldType,
}

impl FieldDef {
    /// Create a non-nullable property.
    pub fn new(name: impl Into<String>, scalar: ScalarType) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::scalar(scalar),
        }
    }

    /// Create a nullable property.
    pub fn optional(name: impl Into<String>, scalar: ScalarType) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::optional_scalar(scalar),
        }
    }

    /// Check if the property accepts null.
    pub fn is_nullable(&self) -> bool {
        self.field_type.is_nullable()
    }
}

//! The finalized model: a read-only snapshot of every entity, relationship and
//! navigation configured during one model-building pass.

use super::{EntityDef, NavigationDef, RelationshipDef};
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// A finalized model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Entity definitions in declaration order.
    pub entities: Vec<EntityDef>,
    /// Relationships in declaration order.
    pub relationships: Vec<RelationshipDef>,
    /// Navigations in declaration order.
    pub navigations: Vec<NavigationDef>,
}

impl Model {
    /// Get an entity by name.
    pub fn entity(&self, name: &str) -> Option<&EntityDef> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// List all entity names.
    pub fn entity_names(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.name.as_str()).collect()
    }

    /// Get a relationship by name.
    pub fn relationship(&self, name: &str) -> Option<&RelationshipDef> {
        self.relationships.iter().find(|r| r.name == name)
    }

    /// Get all relationships where the entity holds the foreign key.
    pub fn relationships_from(&self, entity: &str) -> Vec<&RelationshipDef> {
        self.relationships
            .iter()
            .filter(|r| r.dependent == entity)
            .collect()
    }

    /// Get all relationships where the entity is the principal.
    pub fn relationships_to(&self, entity: &str) -> Vec<&RelationshipDef> {
        self.relationships
            .iter()
            .filter(|r| r.principal == entity)
            .collect()
    }

    /// Get the relationship whose foreign key is `entity.property`.
    pub fn foreign_key(&self, entity: &str, property: &str) -> Option<&RelationshipDef> {
        self.relationships
            .iter()
            .find(|r| r.dependent == entity && r.foreign_key == property)
    }

    /// Get a navigation by its declaring entity and name.
    pub fn navigation(&self, entity: &str, name: &str) -> Option<&NavigationDef> {
        self.navigations
            .iter()
            .find(|n| n.entity == entity && n.name == name)
    }

    /// Get all navigations declared on an entity.
    pub fn navigations_of(&self, entity: &str) -> Vec<&NavigationDef> {
        self.navigations
            .iter()
            .filter(|n| n.entity == entity)
            .collect()
    }

    /// Get the navigations loaded automatically for queries against `entity`.
    pub fn auto_included(&self, entity: &str) -> Vec<&NavigationDef> {
        self.navigations
            .iter()
            .filter(|n| n.entity == entity && n.auto_include)
            .collect()
    }

    /// Render the model as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

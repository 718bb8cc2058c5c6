//! Relationship and navigation definitions between entities.

use serde::{Deserialize, Serialize};

/// Shape of a relationship as seen from the principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinality {
    /// One principal, at most one dependent (unique foreign key).
    OneToOne,
    /// One principal, any number of dependents.
    OneToMany,
}

/// Behavior applied to dependents when their principal is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeleteBehavior {
    /// Delete dependents in the store.
    Cascade,
    /// Refuse the delete in the store while dependents exist.
    Restrict,
    /// Null out the foreign key in the store.
    SetNull,
    /// Leave it to the store's default referential action.
    NoAction,
    /// Delete tracked dependents client-side; the store does nothing.
    ClientCascade,
    /// Null out the foreign key of tracked dependents client-side.
    ClientSetNull,
    /// Nothing happens automatically: the client must clear the reference
    /// before deleting the principal.
    ClientNoAction,
}

impl DeleteBehavior {
    /// Whether this behavior writes null into the foreign key.
    pub fn sets_null(&self) -> bool {
        matches!(
            self,
            DeleteBehavior::SetNull | DeleteBehavior::ClientSetNull
        )
    }

    /// Whether this behavior is applied by the client rather than the store.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            DeleteBehavior::ClientCascade
                | DeleteBehavior::ClientSetNull
                | DeleteBehavior::ClientNoAction
        )
    }

    /// The behavior used when none was configured.
    pub fn default_for(required: bool) -> Self {
        if required {
            DeleteBehavior::Cascade
        } else {
            DeleteBehavior::ClientSetNull
        }
    }
}

/// The principal-side key a foreign key references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrincipalKey {
    /// The principal's primary key, resolved at finalization.
    Primary(String),
    /// A property configured explicitly as the principal key.
    Alternate(String),
}

impl PrincipalKey {
    /// Name of the referenced property.
    pub fn field(&self) -> &str {
        match self {
            PrincipalKey::Primary(field) | PrincipalKey::Alternate(field) => field,
        }
    }

    /// Whether the key was configured explicitly.
    pub fn is_explicit(&self) -> bool {
        matches!(self, PrincipalKey::Alternate(_))
    }
}

/// A finalized relationship: one foreign key constraint plus the navigations
/// that expose it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipDef {
    /// Relationship name (unique within a model).
    pub name: String,
    /// Entity holding the referenced key.
    pub principal: String,
    /// Entity holding the foreign key.
    pub dependent: String,
    /// Relationship cardinality.
    pub cardinality: Cardinality,
    /// Foreign key property on the dependent.
    pub foreign_key: String,
    /// Referenced key on the principal.
    pub principal_key: PrincipalKey,
    /// Whether every dependent must reference a principal.
    pub required: bool,
    /// Delete behavior.
    pub on_delete: DeleteBehavior,
    /// Navigation on the principal pointing at the dependent(s).
    pub principal_navigation: Option<String>,
    /// Navigation on the dependent pointing at the principal.
    pub dependent_navigation: Option<String>,
}

impl RelationshipDef {
    /// Check if both ends are the same entity.
    pub fn is_self_referencing(&self) -> bool {
        self.principal == self.dependent
    }

    /// Check if this relationship references the principal's primary key.
    pub fn references_primary_key(&self) -> bool {
        !self.principal_key.is_explicit()
    }
}

/// A navigation property after finalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationDef {
    /// Entity declaring the navigation.
    pub entity: String,
    /// Navigation name.
    pub name: String,
    /// Entity the navigation points at.
    pub target: String,
    /// Whether the navigation holds a collection.
    pub is_collection: bool,
    /// Whether queries against `entity` load this navigation automatically.
    pub auto_include: bool,
    /// Name of the relationship backing the navigation.
    pub relationship: String,
}

//! Model finalization errors.

use crate::catalog::{DeleteBehavior, ScalarType};
use thiserror::Error;

/// Errors reported when a model is finalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A relationship names an entity that was never declared.
    #[error("unknown entity {0}")]
    UnknownEntity(String),

    /// A relationship was declared without a foreign key.
    #[error("relationship between {principal} and {dependent} has no foreign key")]
    MissingForeignKey {
        /// Principal entity.
        principal: String,
        /// Dependent entity.
        dependent: String,
    },

    /// A selector names a property the entity does not declare.
    #[error("unknown property {entity}.{property}")]
    UnknownProperty {
        /// Entity the property was looked up on.
        entity: String,
        /// Property name.
        property: String,
    },

    /// The principal's primary key property is not declared.
    #[error("entity {entity} has no primary key property {property}")]
    MissingPrimaryKey {
        /// Principal entity.
        entity: String,
        /// Declared primary key name.
        property: String,
    },

    /// Foreign key and principal key hold different scalar types.
    #[error(
        "foreign key {dependent}.{foreign_key} ({foreign_type:?}) does not match \
         principal key {principal}.{principal_key} ({principal_type:?})"
    )]
    KeyTypeMismatch {
        /// Dependent entity.
        dependent: String,
        /// Foreign key property.
        foreign_key: String,
        /// Foreign key type.
        foreign_type: ScalarType,
        /// Principal entity.
        principal: String,
        /// Principal key property.
        principal_key: String,
        /// Principal key type.
        principal_type: ScalarType,
    },

    /// An optional relationship uses a foreign key that cannot hold null.
    #[error("relationship is optional but foreign key {entity}.{property} is not nullable")]
    OptionalForeignKeyNotNullable {
        /// Dependent entity.
        entity: String,
        /// Foreign key property.
        property: String,
    },

    /// The delete behavior cannot be applied to the relationship.
    #[error("delete behavior {behavior:?} is invalid for required foreign key {entity}.{property}")]
    InvalidDeleteBehavior {
        /// Dependent entity.
        entity: String,
        /// Foreign key property.
        property: String,
        /// The configured behavior.
        behavior: DeleteBehavior,
    },

    /// Two relationships declare the same navigation.
    #[error("navigation {entity}.{navigation} is configured by more than one relationship")]
    DuplicateNavigation {
        /// Entity declaring the navigation.
        entity: String,
        /// Navigation name.
        navigation: String,
    },

    /// Two relationships share one foreign key property.
    #[error("foreign key {entity}.{property} is used by more than one relationship")]
    SharedForeignKey {
        /// Dependent entity.
        entity: String,
        /// Foreign key property.
        property: String,
    },

    /// A navigation was referenced but never configured by a relationship.
    #[error("navigation {entity}.{navigation} is not part of any relationship")]
    NavigationNotFound {
        /// Entity the navigation was looked up on.
        entity: String,
        /// Navigation name.
        navigation: String,
    },

    /// A navigation selector disagrees with the configured navigation's
    /// target entity or multiplicity.
    #[error("navigation {entity}.{navigation} leads to {found}, not {expected}")]
    NavigationShapeMismatch {
        /// Entity declaring the navigation.
        entity: String,
        /// Navigation name.
        navigation: String,
        /// Shape the selector describes, `Target` or `[Target]`.
        expected: String,
        /// Shape of the configured navigation.
        found: String,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A Result type alias that uses relmap's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::UnknownProperty {
            entity: "Payment".into(),
            property: "order_id".into(),
        };
        assert_eq!(err.to_string(), "unknown property Payment.order_id");

        let err = Error::KeyTypeMismatch {
            dependent: "Book".into(),
            foreign_key: "author_id".into(),
            foreign_type: ScalarType::Int64,
            principal: "Author".into(),
            principal_key: "isbn".into(),
            principal_type: ScalarType::String,
        };
        assert_eq!(
            err.to_string(),
            "foreign key Book.author_id (Int64) does not match principal key Author.isbn (String)"
        );

        let err = Error::NavigationShapeMismatch {
            entity: "Customer".into(),
            navigation: "invoices".into(),
            expected: "Profile".into(),
            found: "[Invoice]".into(),
        };
        assert_eq!(
            err.to_string(),
            "navigation Customer.invoices leads to [Invoice], not Profile"
        );
    }
}

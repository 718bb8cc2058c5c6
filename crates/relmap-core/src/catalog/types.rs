//! Property type definitions for the catalog.

use serde::{Deserialize, Serialize};

/// Scalar data types a property can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    /// Boolean value.
    Bool,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point.
    Float64,
    /// Fixed-precision decimal.
    Decimal {
        /// Total number of digits.
        precision: u8,
        /// Number of digits after decimal point.
        scale: u8,
    },
    /// UTF-8 string.
    String,
    /// Binary data.
    Bytes,
    /// Timestamp (microseconds since Unix epoch).
    Timestamp,
    /// UUID (128-bit identifier).
    Uuid,
}

/// Property types.
///
/// Only scalar shapes are modelled; navigations are not properties and are
/// declared through the model builder instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// A non-nullable scalar value.
    Scalar(ScalarType),
    /// A nullable scalar value.
    OptionalScalar(ScalarType),
}

impl FieldType {
    /// Create a scalar field type.
    pub fn scalar(scalar: ScalarType) -> Self {
        FieldType::Scalar(scalar)
    }

    /// Create an optional scalar field type.
    pub fn optional_scalar(scalar: ScalarType) -> Self {
        FieldType::OptionalScalar(scalar)
    }

    /// Check if this type is nullable.
    pub fn is_nullable(&self) -> bool {
        matches!(self, FieldType::OptionalScalar(_))
    }

    /// The scalar type regardless of nullability.
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            FieldType::Scalar(s) | FieldType::OptionalScalar(s) => *s,
        }
    }

    /// Whether a foreign key of this type can reference a key of `other`.
    ///
    /// Nullability is ignored: an optional `Uuid` may reference a `Uuid` key.
    pub fn is_key_compatible(&self, other: &FieldType) -> bool {
        self.scalar_type() == other.scalar_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullability() {
        assert!(!FieldType::scalar(ScalarType::Int64).is_nullable());
        assert!(FieldType::optional_scalar(ScalarType::Int64).is_nullable());
        assert_eq!(
            FieldType::optional_scalar(ScalarType::Int64).scalar_type(),
            ScalarType::Int64
        );
    }

    #[test]
    fn test_key_compatibility_ignores_nullability() {
        let key = FieldType::scalar(ScalarType::Uuid);

        assert!(
            FieldType::optional_scalar(ScalarType::Uuid).is_key_compatible(&key)
        );
        assert!(FieldType::scalar(ScalarType::Uuid).is_key_compatible(&key));
        assert!(
            !FieldType::scalar(ScalarType::Int64).is_key_compatible(&key)
        );
    }
}

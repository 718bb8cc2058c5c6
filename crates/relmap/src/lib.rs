//! relmap - typed one-call relationship configuration.
//!
//! Instead of chaining navigation, foreign key, principal key, delete behavior
//! and required-ness calls on a [`ModelBuilder`] by hand, describe the
//! relationship once:
//!
//! ```
//! use relmap::prelude::*;
//!
//! struct Order;
//! struct Payment;
//!
//! impl Entity for Order {
//!     const NAME: &'static str = "Order";
//!
//!     fn definition() -> EntityDef {
//!         EntityDef::new(Self::NAME, "id").with_field(FieldDef::new("id", ScalarType::Int64))
//!     }
//! }
//!
//! impl Entity for Payment {
//!     const NAME: &'static str = "Payment";
//!
//!     fn definition() -> EntityDef {
//!         EntityDef::new(Self::NAME, "id")
//!             .with_field(FieldDef::new("id", ScalarType::Int64))
//!             .with_field(FieldDef::new("order_id", ScalarType::Int64))
//!     }
//! }
//!
//! let mut builder = ModelBuilder::new();
//! builder.configure_one_to_one(
//!     Reference::<Order, Payment>::new("payment"),
//!     Property::new("order_id"),
//!     RelationshipOptions::new(),
//! );
//!
//! let model = builder.finalize().unwrap();
//! assert!(model.foreign_key("Payment", "order_id").unwrap().required);
//! ```
//!
//! The configurator never validates; problems surface from
//! [`ModelBuilder::finalize`].

mod configure;

pub use configure::{
    ConfigureRelationships, RelationshipOptions, DEFAULT_DELETE_BEHAVIOR,
    ONE_TO_MANY_REQUIRED_BY_DEFAULT, ONE_TO_ONE_REQUIRED_BY_DEFAULT,
};

pub use relmap_core::{
    BuilderConfig, Cardinality, Collection, DeleteBehavior, Entity, EntityDef, Error, FieldDef,
    Model, ModelBuilder, NavigationDef, NavigationRef, PrincipalKey, Property, Reference,
    RelationshipDef, Result, ScalarType,
};

/// Everything needed to declare entities and configure relationships.
pub mod prelude {
    pub use crate::{
        Collection, ConfigureRelationships, DeleteBehavior, Entity, EntityDef, FieldDef,
        ModelBuilder, Property, Reference, RelationshipOptions, ScalarType,
    };
}

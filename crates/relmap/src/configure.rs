//! One-call relationship configuration.
//!
//! Each operation opens the owning entity's scope, declares the navigation and
//! its cardinality, then hands the rest to [`apply_options`]: foreign key,
//! delete behavior, required flag and, only when one was given, the explicit
//! principal key. Nothing is validated here; the model builder reports
//! problems when it is finalized.

use relmap_core::{
    Collection, DeleteBehavior, Entity, ModelBuilder, NavigationRef, Property, Reference,
    RelationshipBuilder,
};
use std::fmt;
use tracing::debug;

/// Delete behavior used when the caller does not choose one.
pub const DEFAULT_DELETE_BEHAVIOR: DeleteBehavior = DeleteBehavior::ClientNoAction;

/// Whether a one-to-one relationship is required unless stated otherwise.
pub const ONE_TO_ONE_REQUIRED_BY_DEFAULT: bool = true;

/// Whether one-to-many and many-to-one relationships are required unless
/// stated otherwise.
pub const ONE_TO_MANY_REQUIRED_BY_DEFAULT: bool = false;

/// Optional parts of a relationship description.
///
/// Unset values fall back to the defaults of the operation they are passed
/// to.
pub struct RelationshipOptions<P: Entity> {
    principal_key: Option<Property<P>>,
    required: Option<bool>,
    on_delete: Option<DeleteBehavior>,
}

impl<P: Entity> RelationshipOptions<P> {
    pub fn new() -> Self {
        Self {
            principal_key: None,
            required: None,
            on_delete: None,
        }
    }

    /// Reference this principal property instead of the primary key.
    pub fn principal_key(mut self, key: Property<P>) -> Self {
        self.principal_key = Some(key);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn on_delete(mut self, behavior: DeleteBehavior) -> Self {
        self.on_delete = Some(behavior);
        self
    }
}

impl<P: Entity> Default for RelationshipOptions<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Entity> Clone for RelationshipOptions<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Entity> Copy for RelationshipOptions<P> {}

impl<P: Entity> fmt::Debug for RelationshipOptions<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationshipOptions")
            .field("principal_key", &self.principal_key)
            .field("required", &self.required)
            .field("on_delete", &self.on_delete)
            .finish()
    }
}

/// Relationship shortcuts for a model-building context.
pub trait ConfigureRelationships {
    /// `P` has one `D` through `navigation`; `D` holds `foreign_key` and has no
    /// navigation back. Required unless `options` says otherwise.
    fn configure_one_to_one<P: Entity, D: Entity>(
        &mut self,
        navigation: Reference<P, D>,
        foreign_key: Property<D>,
        options: RelationshipOptions<P>,
    ) -> &mut Self;

    /// `P` has many `D` through `navigation`; each `D` holds `foreign_key` and
    /// has no navigation back. Optional unless `options` says otherwise.
    fn configure_one_to_many<P: Entity, D: Entity>(
        &mut self,
        navigation: Collection<P, D>,
        foreign_key: Property<D>,
        options: RelationshipOptions<P>,
    ) -> &mut Self;

    /// Many `D` reference one `P` through `navigation`, declared on `D`; `P`
    /// has no navigation back. Optional unless `options` says otherwise.
    fn configure_many_to_one<P: Entity, D: Entity>(
        &mut self,
        navigation: Reference<D, P>,
        foreign_key: Property<D>,
        options: RelationshipOptions<P>,
    ) -> &mut Self;

    /// Load `navigation` on every query against `E`.
    fn configure_auto_include<E: Entity>(
        &mut self,
        navigation: impl Into<NavigationRef<E>>,
    ) -> &mut Self;
}

impl ConfigureRelationships for ModelBuilder {
    fn configure_one_to_one<P: Entity, D: Entity>(
        &mut self,
        navigation: Reference<P, D>,
        foreign_key: Property<D>,
        options: RelationshipOptions<P>,
    ) -> &mut Self {
        debug!(
            principal = P::NAME,
            dependent = D::NAME,
            navigation = navigation.name(),
            foreign_key = foreign_key.name(),
            "configuring one-to-one relationship"
        );

        apply_options(
            self.entity::<P>().has_one(navigation).with_one(),
            foreign_key,
            options,
            ONE_TO_ONE_REQUIRED_BY_DEFAULT,
        );
        self
    }

    fn configure_one_to_many<P: Entity, D: Entity>(
        &mut self,
        navigation: Collection<P, D>,
        foreign_key: Property<D>,
        options: RelationshipOptions<P>,
    ) -> &mut Self {
        debug!(
            principal = P::NAME,
            dependent = D::NAME,
            navigation = navigation.name(),
            foreign_key = foreign_key.name(),
            "configuring one-to-many relationship"
        );

        apply_options(
            self.entity::<P>().has_many(navigation).with_one(),
            foreign_key,
            options,
            ONE_TO_MANY_REQUIRED_BY_DEFAULT,
        );
        self
    }

    fn configure_many_to_one<P: Entity, D: Entity>(
        &mut self,
        navigation: Reference<D, P>,
        foreign_key: Property<D>,
        options: RelationshipOptions<P>,
    ) -> &mut Self {
        debug!(
            principal = P::NAME,
            dependent = D::NAME,
            navigation = navigation.name(),
            foreign_key = foreign_key.name(),
            "configuring many-to-one relationship"
        );

        apply_options(
            self.entity::<D>().has_one(navigation).with_many(),
            foreign_key,
            options,
            ONE_TO_MANY_REQUIRED_BY_DEFAULT,
        );
        self
    }

    fn configure_auto_include<E: Entity>(
        &mut self,
        navigation: impl Into<NavigationRef<E>>,
    ) -> &mut Self {
        let navigation = navigation.into();
        debug!(
            entity = E::NAME,
            navigation = navigation.name(),
            "configuring auto-include"
        );

        self.entity::<E>().navigation(navigation).auto_include(true);
        self
    }
}

/// Bind the foreign key, delete behavior and required flag, then the explicit
/// principal key if there is one.
fn apply_options<P: Entity, D: Entity>(
    relationship: RelationshipBuilder<'_, P, D>,
    foreign_key: Property<D>,
    options: RelationshipOptions<P>,
    required_by_default: bool,
) {
    let relationship = relationship
        .has_foreign_key(foreign_key)
        .on_delete(options.on_delete.unwrap_or(DEFAULT_DELETE_BEHAVIOR))
        .is_required(options.required.unwrap_or(required_by_default));

    if let Some(principal_key) = options.principal_key {
        relationship.has_principal_key(principal_key);
    }
}

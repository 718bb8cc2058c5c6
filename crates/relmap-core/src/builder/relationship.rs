//! Builders for navigations and the relationships behind them.

use super::{AutoInclude, ModelBuilder, RelationshipDraft};
use crate::catalog::{
    Cardinality, Collection, DeleteBehavior, Entity, NavigationRef, Property, Reference,
};
use std::marker::PhantomData;

/// A single-valued navigation awaiting its inverse side.
pub struct ReferenceNavigationBuilder<'a, E: Entity, T: Entity> {
    model: &'a mut ModelBuilder,
    navigation: Reference<E, T>,
}

/// A collection navigation awaiting its inverse side.
pub struct CollectionNavigationBuilder<'a, E: Entity, T: Entity> {
    model: &'a mut ModelBuilder,
    navigation: Collection<E, T>,
}

/// Configures one relationship between principal `P` and dependent `D`.
///
/// Every call writes through to the model builder, so the builder can be
/// dropped at any point of a chain.
pub struct RelationshipBuilder<'a, P: Entity, D: Entity> {
    model: &'a mut ModelBuilder,
    index: usize,
    _marker: PhantomData<fn() -> (P, D)>,
}

/// Configures a navigation independently of its relationship.
pub struct NavigationBuilder<'a, E: Entity> {
    model: &'a mut ModelBuilder,
    navigation: NavigationRef<E>,
}

impl<'a, E: Entity, T: Entity> ReferenceNavigationBuilder<'a, E, T> {
    pub(crate) fn new(model: &'a mut ModelBuilder, navigation: Reference<E, T>) -> Self {
        Self { model, navigation }
    }

    /// One-to-one with `E` as principal and no navigation back from `T`.
    pub fn with_one(self) -> RelationshipBuilder<'a, E, T> {
        let mut draft = RelationshipDraft::new(E::NAME, T::NAME, Cardinality::OneToOne);
        draft.principal_navigation = Some(self.navigation.name());
        RelationshipBuilder::declare(self.model, draft)
    }

    /// One-to-one with `E` as principal and `inverse` navigating back.
    pub fn with_one_navigation(self, inverse: Reference<T, E>) -> RelationshipBuilder<'a, E, T> {
        let mut draft = RelationshipDraft::new(E::NAME, T::NAME, Cardinality::OneToOne);
        draft.principal_navigation = Some(self.navigation.name());
        draft.dependent_navigation = Some(inverse.name());
        RelationshipBuilder::declare(self.model, draft)
    }

    /// Many `E` reference one `T`; no collection navigation on `T`.
    pub fn with_many(self) -> RelationshipBuilder<'a, T, E> {
        let mut draft = RelationshipDraft::new(T::NAME, E::NAME, Cardinality::OneToMany);
        draft.dependent_navigation = Some(self.navigation.name());
        RelationshipBuilder::declare(self.model, draft)
    }

    /// Many `E` reference one `T`, which lists them through `inverse`.
    pub fn with_many_navigation(self, inverse: Collection<T, E>) -> RelationshipBuilder<'a, T, E> {
        let mut draft = RelationshipDraft::new(T::NAME, E::NAME, Cardinality::OneToMany);
        draft.principal_navigation = Some(inverse.name());
        draft.dependent_navigation = Some(self.navigation.name());
        RelationshipBuilder::declare(self.model, draft)
    }
}

impl<'a, E: Entity, T: Entity> CollectionNavigationBuilder<'a, E, T> {
    pub(crate) fn new(model: &'a mut ModelBuilder, navigation: Collection<E, T>) -> Self {
        Self { model, navigation }
    }

    /// One `E` has many `T`; no navigation back from `T`.
    pub fn with_one(self) -> RelationshipBuilder<'a, E, T> {
        let mut draft = RelationshipDraft::new(E::NAME, T::NAME, Cardinality::OneToMany);
        draft.principal_navigation = Some(self.navigation.name());
        RelationshipBuilder::declare(self.model, draft)
    }

    /// One `E` has many `T`, each navigating back through `inverse`.
    pub fn with_one_navigation(self, inverse: Reference<T, E>) -> RelationshipBuilder<'a, E, T> {
        let mut draft = RelationshipDraft::new(E::NAME, T::NAME, Cardinality::OneToMany);
        draft.principal_navigation = Some(self.navigation.name());
        draft.dependent_navigation = Some(inverse.name());
        RelationshipBuilder::declare(self.model, draft)
    }
}

impl<'a, P: Entity, D: Entity> RelationshipBuilder<'a, P, D> {
    fn declare(model: &'a mut ModelBuilder, draft: RelationshipDraft) -> Self {
        let index = model.declare(draft);
        Self {
            model,
            index,
            _marker: PhantomData,
        }
    }

    /// Bind the dependent property holding the foreign key.
    pub fn has_foreign_key(self, foreign_key: Property<D>) -> Self {
        self.model.draft_mut(self.index).foreign_key = Some(foreign_key.name());
        self
    }

    /// Reference `principal_key` instead of the principal's primary key.
    pub fn has_principal_key(self, principal_key: Property<P>) -> Self {
        self.model.draft_mut(self.index).principal_key = Some(principal_key.name());
        self
    }

    /// Set what happens to dependents when the principal is deleted.
    pub fn on_delete(self, behavior: DeleteBehavior) -> Self {
        self.model.draft_mut(self.index).on_delete = Some(behavior);
        self
    }

    /// Set whether every dependent must reference a principal.
    pub fn is_required(self, required: bool) -> Self {
        self.model.draft_mut(self.index).required = Some(required);
        self
    }
}

impl<'a, E: Entity> NavigationBuilder<'a, E> {
    pub(crate) fn new(model: &'a mut ModelBuilder, navigation: NavigationRef<E>) -> Self {
        Self { model, navigation }
    }

    /// Load this navigation on every query against `E`.
    pub fn auto_include(self, enabled: bool) -> Self {
        self.model.set_auto_include(AutoInclude {
            entity: E::NAME,
            navigation: self.navigation.name(),
            target: self.navigation.target(),
            is_collection: self.navigation.is_collection(),
            enabled,
        });
        self
    }
}

//! The model-building context.
//!
//! A [`ModelBuilder`] accumulates entity and relationship configuration during
//! a single model-building pass. Configuration calls only record intent; the
//! recorded drafts are checked and resolved into a [`Model`](crate::Model) by
//! [`ModelBuilder::finalize`].

mod finalize;
mod relationship;

pub use relationship::{
    CollectionNavigationBuilder, NavigationBuilder, ReferenceNavigationBuilder,
    RelationshipBuilder,
};

use crate::catalog::{
    Cardinality, Collection, DeleteBehavior, Entity, EntityDef, NavigationRef, Reference,
};
use crate::config::BuilderConfig;
use std::marker::PhantomData;
use tracing::debug;

/// Mutable context collecting model configuration.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    config: BuilderConfig,
    entities: Vec<EntityDef>,
    relationships: Vec<RelationshipDraft>,
    auto_includes: Vec<AutoInclude>,
}

/// A relationship as recorded by configuration calls, before finalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RelationshipDraft {
    pub(crate) principal: &'static str,
    pub(crate) dependent: &'static str,
    pub(crate) cardinality: Cardinality,
    pub(crate) principal_navigation: Option<&'static str>,
    pub(crate) dependent_navigation: Option<&'static str>,
    pub(crate) foreign_key: Option<&'static str>,
    pub(crate) principal_key: Option<&'static str>,
    pub(crate) required: Option<bool>,
    pub(crate) on_delete: Option<DeleteBehavior>,
}

/// An auto-include request, with the navigation shape its selector expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AutoInclude {
    pub(crate) entity: &'static str,
    pub(crate) navigation: &'static str,
    pub(crate) target: &'static str,
    pub(crate) is_collection: bool,
    pub(crate) enabled: bool,
}

/// Configuration scope for one entity type.
pub struct EntityTypeBuilder<'a, E: Entity> {
    model: &'a mut ModelBuilder,
    _marker: PhantomData<fn() -> E>,
}

impl ModelBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Create a builder with the given settings.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            config,
            entities: Vec::new(),
            relationships: Vec::new(),
            auto_includes: Vec::new(),
        }
    }

    /// The settings this builder finalizes with.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Open the configuration scope of `E`, declaring it on first use.
    pub fn entity<E: Entity>(&mut self) -> EntityTypeBuilder<'_, E> {
        self.ensure_entity::<E>();

        EntityTypeBuilder {
            model: self,
            _marker: PhantomData,
        }
    }

    /// Check if an entity has been declared.
    pub fn has_entity(&self, name: &str) -> bool {
        self.entities.iter().any(|e| e.name == name)
    }

    /// Number of relationships recorded so far.
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    fn ensure_entity<E: Entity>(&mut self) {
        if self.has_entity(E::NAME) {
            return;
        }

        let mut def = E::definition();
        def.name = E::NAME.to_string();
        debug!(entity = E::NAME, fields = def.fields.len(), "declared entity");
        self.entities.push(def);
    }

    /// Record a relationship, reusing an existing draft when the new one only
    /// restates or extends it. Returns the draft's index.
    pub(crate) fn declare(&mut self, draft: RelationshipDraft) -> usize {
        if let Some(index) = self
            .relationships
            .iter()
            .position(|existing| draft.refines(existing))
        {
            let existing = &mut self.relationships[index];
            existing.principal_navigation =
                existing.principal_navigation.or(draft.principal_navigation);
            existing.dependent_navigation =
                existing.dependent_navigation.or(draft.dependent_navigation);

            debug!(
                principal = draft.principal,
                dependent = draft.dependent,
                index,
                "refining relationship"
            );
            return index;
        }

        debug!(
            principal = draft.principal,
            dependent = draft.dependent,
            cardinality = ?draft.cardinality,
            principal_navigation = draft.principal_navigation,
            dependent_navigation = draft.dependent_navigation,
            "declared relationship"
        );
        self.relationships.push(draft);
        self.relationships.len() - 1
    }

    pub(crate) fn draft_mut(&mut self, index: usize) -> &mut RelationshipDraft {
        &mut self.relationships[index]
    }

    /// Record an auto-include request, replacing any earlier one for the same
    /// navigation.
    pub(crate) fn set_auto_include(&mut self, include: AutoInclude) {
        match self
            .auto_includes
            .iter_mut()
            .find(|a| a.entity == include.entity && a.navigation == include.navigation)
        {
            Some(existing) => *existing = include,
            None => self.auto_includes.push(include),
        }
    }
}

impl RelationshipDraft {
    pub(crate) fn new(
        principal: &'static str,
        dependent: &'static str,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            principal,
            dependent,
            cardinality,
            principal_navigation: None,
            dependent_navigation: None,
            foreign_key: None,
            principal_key: None,
            required: None,
            on_delete: None,
        }
    }

    /// A draft refines an existing one when both describe the same ends and
    /// shape, share at least one navigation, and disagree on none.
    fn refines(&self, existing: &RelationshipDraft) -> bool {
        fn agrees(a: Option<&str>, b: Option<&str>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            }
        }

        let shares_navigation = (self.principal_navigation.is_some()
            && self.principal_navigation == existing.principal_navigation)
            || (self.dependent_navigation.is_some()
                && self.dependent_navigation == existing.dependent_navigation);

        self.principal == existing.principal
            && self.dependent == existing.dependent
            && self.cardinality == existing.cardinality
            && shares_navigation
            && agrees(self.principal_navigation, existing.principal_navigation)
            && agrees(self.dependent_navigation, existing.dependent_navigation)
    }
}

impl<E: Entity> EntityTypeBuilder<'_, E> {
    /// Declare a single-valued navigation from `E` to `T`.
    pub fn has_one<T: Entity>(
        &mut self,
        navigation: Reference<E, T>,
    ) -> ReferenceNavigationBuilder<'_, E, T> {
        self.model.ensure_entity::<T>();
        ReferenceNavigationBuilder::new(self.model, navigation)
    }

    /// Declare a collection navigation from `E` to `T`.
    pub fn has_many<T: Entity>(
        &mut self,
        navigation: Collection<E, T>,
    ) -> CollectionNavigationBuilder<'_, E, T> {
        self.model.ensure_entity::<T>();
        CollectionNavigationBuilder::new(self.model, navigation)
    }

    /// Configure an already-declared navigation of `E`.
    pub fn navigation(
        &mut self,
        navigation: impl Into<NavigationRef<E>>,
    ) -> NavigationBuilder<'_, E> {
        NavigationBuilder::new(self.model, navigation.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FieldDef, Property, ScalarType};

    struct Author;
    struct Book;

    impl Entity for Author {
        const NAME: &'static str = "Author";

        fn definition() -> EntityDef {
            EntityDef::new(Self::NAME, "id").with_field(FieldDef::new("id", ScalarType::Int64))
        }
    }

    impl Entity for Book {
        const NAME: &'static str = "Book";

        fn definition() -> EntityDef {
            EntityDef::new(Self::NAME, "id")
                .with_field(FieldDef::new("id", ScalarType::Int64))
                .with_field(FieldDef::optional("author_id", ScalarType::Int64))
        }
    }

    const BOOKS: Collection<Author, Book> = Collection::new("books");
    const AUTHOR: Reference<Book, Author> = Reference::new("author");

    #[test]
    fn test_entity_declared_once() {
        let mut builder = ModelBuilder::new();
        builder.entity::<Author>();
        builder.entity::<Author>();

        assert!(builder.has_entity("Author"));
        assert_eq!(builder.entities.len(), 1);
    }

    #[test]
    fn test_navigation_declares_target_entity() {
        let mut builder = ModelBuilder::new();
        builder.entity::<Author>().has_many(BOOKS).with_one();

        assert!(builder.has_entity("Book"));
        assert_eq!(builder.relationship_count(), 1);
    }

    #[test]
    fn test_same_navigation_refines_relationship() {
        let mut builder = ModelBuilder::new();
        builder
            .entity::<Author>()
            .has_many(BOOKS)
            .with_one()
            .has_foreign_key(Property::new("author_id"));
        builder
            .entity::<Author>()
            .has_many(BOOKS)
            .with_one_navigation(AUTHOR)
            .is_required(false);

        assert_eq!(builder.relationship_count(), 1);
        let draft = &builder.relationships[0];
        assert_eq!(draft.foreign_key, Some("author_id"));
        assert_eq!(draft.required, Some(false));
        assert_eq!(draft.dependent_navigation, Some("author"));
    }

    #[test]
    fn test_other_side_records_new_relationship() {
        let mut builder = ModelBuilder::new();
        builder.entity::<Author>().has_many(BOOKS).with_one();
        builder.entity::<Book>().has_one(AUTHOR).with_many();

        assert_eq!(builder.relationship_count(), 2);
    }

    #[test]
    fn test_auto_include_is_updated_in_place() {
        let mut builder = ModelBuilder::new();
        builder
            .entity::<Author>()
            .navigation(BOOKS)
            .auto_include(true);
        builder
            .entity::<Author>()
            .navigation(BOOKS)
            .auto_include(false);

        assert_eq!(
            builder.auto_includes,
            vec![AutoInclude {
                entity: "Author",
                navigation: "books",
                target: "Book",
                is_collection: true,
                enabled: false,
            }]
        );
    }
}

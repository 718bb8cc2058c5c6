//! Typed selectors naming properties and navigations of an entity.
//!
//! Selectors carry only a name; the type parameters pin down which entity the
//! name belongs to and, for navigations, which entity it points at. Names are
//! resolved against [`EntityDef`](super::EntityDef) when the model is
//! finalized.

use super::Entity;
use std::fmt;
use std::marker::PhantomData;

///
/// Property
///
/// A scalar property of `E`, used as a foreign key or principal key.
///
pub struct Property<E: Entity> {
    name: &'static str,
    _marker: PhantomData<fn() -> E>,
}

///
/// Reference
///
/// A single-valued navigation on `E` pointing at `T`.
///
pub struct Reference<E: Entity, T: Entity> {
    name: &'static str,
    _marker: PhantomData<fn() -> (E, T)>,
}

///
/// Collection
///
/// A collection-valued navigation on `E` holding any number of `T`.
///
pub struct Collection<E: Entity, T: Entity> {
    name: &'static str,
    _marker: PhantomData<fn() -> (E, T)>,
}

/// A navigation on `E` of either shape.
pub struct NavigationRef<E: Entity> {
    name: &'static str,
    target: &'static str,
    is_collection: bool,
    _marker: PhantomData<fn() -> E>,
}

impl<E: Entity> Property<E> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<E: Entity, T: Entity> Reference<E, T> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<E: Entity, T: Entity> Collection<E, T> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<E: Entity> NavigationRef<E> {
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the entity the navigation points at.
    pub const fn target(&self) -> &'static str {
        self.target
    }

    pub const fn is_collection(&self) -> bool {
        self.is_collection
    }
}

impl<E: Entity, T: Entity> From<Reference<E, T>> for NavigationRef<E> {
    fn from(nav: Reference<E, T>) -> Self {
        Self {
            name: nav.name,
            target: T::NAME,
            is_collection: false,
            _marker: PhantomData,
        }
    }
}

impl<E: Entity, T: Entity> From<Collection<E, T>> for NavigationRef<E> {
    fn from(nav: Collection<E, T>) -> Self {
        Self {
            name: nav.name,
            target: T::NAME,
            is_collection: true,
            _marker: PhantomData,
        }
    }
}

// Derives would put `Clone`/`Copy` bounds on the entity types, so these are
// implemented by hand.

impl<E: Entity> Clone for Property<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for Property<E> {}

impl<E: Entity, T: Entity> Clone for Reference<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity, T: Entity> Copy for Reference<E, T> {}

impl<E: Entity, T: Entity> Clone for Collection<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity, T: Entity> Copy for Collection<E, T> {}

impl<E: Entity> Clone for NavigationRef<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for NavigationRef<E> {}

impl<E: Entity> fmt::Debug for Property<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", E::NAME, self.name)
    }
}

impl<E: Entity, T: Entity> fmt::Debug for Reference<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} -> {}", E::NAME, self.name, T::NAME)
    }
}

impl<E: Entity, T: Entity> fmt::Debug for Collection<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} -> [{}]", E::NAME, self.name, T::NAME)
    }
}

impl<E: Entity> fmt::Debug for NavigationRef<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_collection {
            write!(f, "{}.{} -> [{}]", E::NAME, self.name, self.target)
        } else {
            write!(f, "{}.{} -> {}", E::NAME, self.name, self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntityDef;

    struct Author;
    struct Book;

    impl Entity for Author {
        const NAME: &'static str = "Author";

        fn definition() -> EntityDef {
            EntityDef::new(Self::NAME, "id")
        }
    }

    impl Entity for Book {
        const NAME: &'static str = "Book";

        fn definition() -> EntityDef {
            EntityDef::new(Self::NAME, "id")
        }
    }

    #[test]
    fn test_selectors_are_copy() {
        let fk = Property::<Book>::new("author_id");
        let copy = fk;

        assert_eq!(fk.name(), copy.name());
        assert_eq!(format!("{fk:?}"), "Book.author_id");
    }

    #[test]
    fn test_navigation_ref_from_reference() {
        let nav: NavigationRef<Book> = Reference::<Book, Author>::new("author").into();

        assert_eq!(nav.name(), "author");
        assert_eq!(nav.target(), "Author");
        assert!(!nav.is_collection());
    }

    #[test]
    fn test_navigation_ref_from_collection() {
        let nav: NavigationRef<Author> = Collection::<Author, Book>::new("books").into();

        assert_eq!(nav.target(), "Book");
        assert!(nav.is_collection());
        assert_eq!(format!("{nav:?}"), "Author.books -> [Book]");
    }
}

//! Integration tests for the model builder.

use relmap_core::{
    BuilderConfig, Cardinality, Collection, DeleteBehavior, Entity, EntityDef, Error, FieldDef,
    ModelBuilder, PrincipalKey, Property, Reference, ScalarType,
};

struct Blog;
struct Post;
struct Header;

impl Entity for Blog {
    const NAME: &'static str = "Blog";

    fn definition() -> EntityDef {
        EntityDef::new(Self::NAME, "id")
            .with_field(FieldDef::new("id", ScalarType::Uuid))
            .with_field(FieldDef::new("slug", ScalarType::String))
    }
}

impl Entity for Post {
    const NAME: &'static str = "Post";

    fn definition() -> EntityDef {
        EntityDef::new(Self::NAME, "id")
            .with_field(FieldDef::new("id", ScalarType::Uuid))
            .with_field(FieldDef::new("blog_id", ScalarType::Uuid))
            .with_field(FieldDef::new("title", ScalarType::String))
    }
}

impl Entity for Header {
    const NAME: &'static str = "Header";

    fn definition() -> EntityDef {
        EntityDef::new(Self::NAME, "key")
            .with_field(FieldDef::new("id", ScalarType::Uuid))
            .with_field(FieldDef::optional("blog_id", ScalarType::Uuid))
    }
}

const BLOG_POSTS: Collection<Blog, Post> = Collection::new("posts");
const POST_BLOG: Reference<Post, Blog> = Reference::new("blog");
const BLOG_HEADER: Reference<Blog, Header> = Reference::new("header");
const HEADER_BLOG: Reference<Header, Blog> = Reference::new("blog");

#[test]
fn test_bidirectional_one_to_many() {
    let mut builder = ModelBuilder::new();
    builder
        .entity::<Blog>()
        .has_many(BLOG_POSTS)
        .with_one_navigation(POST_BLOG)
        .has_foreign_key(Property::new("blog_id"))
        .on_delete(DeleteBehavior::Cascade);

    let model = builder.finalize().unwrap();
    let rel = model.foreign_key("Post", "blog_id").unwrap();

    assert_eq!(rel.cardinality, Cardinality::OneToMany);
    assert!(rel.required);
    assert_eq!(rel.principal_navigation.as_deref(), Some("posts"));
    assert_eq!(rel.dependent_navigation.as_deref(), Some("blog"));

    let posts = model.navigation("Blog", "posts").unwrap();
    let blog = model.navigation("Post", "blog").unwrap();
    assert!(posts.is_collection);
    assert!(!blog.is_collection);
    assert_eq!(posts.relationship, blog.relationship);
}

#[test]
fn test_inverse_declared_later_refines_relationship() {
    let mut builder = ModelBuilder::new();
    builder
        .entity::<Post>()
        .has_one(POST_BLOG)
        .with_many()
        .has_foreign_key(Property::new("blog_id"));
    builder
        .entity::<Post>()
        .has_one(POST_BLOG)
        .with_many_navigation(BLOG_POSTS);

    assert_eq!(builder.relationship_count(), 1);

    let model = builder.finalize().unwrap();
    assert_eq!(model.navigations.len(), 2);
}

#[test]
fn test_bidirectional_one_to_one() {
    let mut builder = ModelBuilder::new();
    builder
        .entity::<Blog>()
        .has_one(BLOG_HEADER)
        .with_one_navigation(HEADER_BLOG)
        .has_foreign_key(Property::new("blog_id"));
    builder
        .entity::<Header>()
        .navigation(HEADER_BLOG)
        .auto_include(true);

    let model = builder.finalize().unwrap();
    let rel = model.foreign_key("Header", "blog_id").unwrap();

    assert_eq!(rel.cardinality, Cardinality::OneToOne);
    assert!(!rel.required);
    assert_eq!(model.auto_included("Header").len(), 1);
    assert!(model.auto_included("Blog").is_empty());
}

#[test]
fn test_missing_primary_key_on_principal() {
    let mut builder = ModelBuilder::new();
    builder
        .entity::<Header>()
        .has_one(Reference::<Header, Header>::new("parent"))
        .with_many()
        .has_foreign_key(Property::new("blog_id"));

    assert_eq!(
        builder.finalize().unwrap_err(),
        Error::MissingPrimaryKey {
            entity: "Header".into(),
            property: "key".into(),
        }
    );
}

#[test]
fn test_explicit_key_avoids_missing_primary_key() {
    let mut builder = ModelBuilder::new();
    builder
        .entity::<Header>()
        .has_one(Reference::<Header, Header>::new("parent"))
        .with_many()
        .has_foreign_key(Property::new("blog_id"))
        .has_principal_key(Property::new("id"));

    let model = builder.finalize().unwrap();
    let rel = model.foreign_key("Header", "blog_id").unwrap();
    assert_eq!(rel.principal_key, PrincipalKey::Alternate("id".into()));
}

#[test]
fn test_entity_scope_can_be_reused() {
    let mut builder = ModelBuilder::new();
    let mut blog = builder.entity::<Blog>();
    blog.has_many(BLOG_POSTS)
        .with_one()
        .has_foreign_key(Property::new("blog_id"));
    blog.navigation(BLOG_POSTS).auto_include(true);

    let model = builder.finalize().unwrap();
    let posts = model.navigation("Blog", "posts").unwrap();
    assert!(posts.auto_include);
    assert_eq!(model.entity_names(), vec!["Blog", "Post"]);
}

#[test]
fn test_config_from_json_keeps_unset_defaults() {
    let config = BuilderConfig::from_json(r#"{"reject_shared_foreign_keys": false}"#).unwrap();

    assert!(config.check_key_types);
    assert!(!config.reject_shared_foreign_keys);

    let mut builder = ModelBuilder::with_config(config);
    builder
        .entity::<Blog>()
        .has_many(BLOG_POSTS)
        .with_one()
        .has_foreign_key(Property::new("blog_id"));
    builder
        .entity::<Post>()
        .has_one(POST_BLOG)
        .with_many()
        .has_foreign_key(Property::new("blog_id"));

    let model = builder.finalize().unwrap();
    assert_eq!(model.relationships_from("Post").len(), 2);
    assert_eq!(model.relationships_to("Blog").len(), 2);
}

#[test]
fn test_model_json_names_relationships() {
    let mut builder = ModelBuilder::new();
    builder
        .entity::<Blog>()
        .has_many(BLOG_POSTS)
        .with_one()
        .has_foreign_key(Property::new("blog_id"));

    let json = builder.finalize().unwrap().to_json().unwrap();
    assert!(json.contains("\"fk_post_blog_blog_id\""));
    assert!(json.contains("\"posts\""));
}

//! Resolution and validation of a model builder into a [`Model`].
//!
//! Checks run in a fixed order and the first failure is returned:
//! foreign key presence, property resolution, principal key resolution, key
//! types, nullability, delete behavior, navigation ownership, shared foreign
//! keys and finally auto-include targets, which must match the selector's
//! target entity and multiplicity.

use super::{ModelBuilder, RelationshipDraft};
use crate::catalog::{
    Cardinality, DeleteBehavior, EntityDef, Model, NavigationDef, PrincipalKey, RelationshipDef,
};
use crate::error::{Error, Result};
use std::collections::HashSet;
use tracing::{debug, warn};

impl ModelBuilder {
    /// Resolve implicit keys, validate all recorded configuration and produce
    /// the finalized model.
    pub fn finalize(self) -> Result<Model> {
        match self.resolve() {
            Ok(model) => {
                debug!(
                    entities = model.entities.len(),
                    relationships = model.relationships.len(),
                    navigations = model.navigations.len(),
                    "model finalized"
                );
                Ok(model)
            }
            Err(err) => {
                warn!(error = %err, "model finalization failed");
                Err(err)
            }
        }
    }

    fn resolve(self) -> Result<Model> {
        let mut relationships = Vec::with_capacity(self.relationships.len());
        for draft in &self.relationships {
            let relationship = self.resolve_relationship(draft, &relationships)?;
            relationships.push(relationship);
        }

        let mut navigations = build_navigations(&relationships)?;

        if self.config.reject_shared_foreign_keys {
            check_shared_foreign_keys(&relationships)?;
        }

        for include in &self.auto_includes {
            let navigation = navigations
                .iter_mut()
                .find(|n| n.entity == include.entity && n.name == include.navigation)
                .ok_or_else(|| Error::NavigationNotFound {
                    entity: include.entity.to_string(),
                    navigation: include.navigation.to_string(),
                })?;
            if navigation.target != include.target
                || navigation.is_collection != include.is_collection
            {
                return Err(Error::NavigationShapeMismatch {
                    entity: include.entity.to_string(),
                    navigation: include.navigation.to_string(),
                    expected: describe_target(include.target, include.is_collection),
                    found: describe_target(&navigation.target, navigation.is_collection),
                });
            }
            navigation.auto_include = include.enabled;
        }

        Ok(Model {
            entities: self.entities,
            relationships,
            navigations,
        })
    }

    fn entity_def(&self, name: &str) -> Result<&EntityDef> {
        self.entities
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| Error::UnknownEntity(name.to_string()))
    }

    fn resolve_relationship(
        &self,
        draft: &RelationshipDraft,
        resolved: &[RelationshipDef],
    ) -> Result<RelationshipDef> {
        let principal = self.entity_def(draft.principal)?;
        let dependent = self.entity_def(draft.dependent)?;

        let foreign_key = draft.foreign_key.ok_or_else(|| Error::MissingForeignKey {
            principal: draft.principal.to_string(),
            dependent: draft.dependent.to_string(),
        })?;
        let fk_field = dependent
            .get_field(foreign_key)
            .ok_or_else(|| Error::UnknownProperty {
                entity: dependent.name.clone(),
                property: foreign_key.to_string(),
            })?;

        let (principal_key, key_field) = match draft.principal_key {
            Some(key) => {
                let field = principal
                    .get_field(key)
                    .ok_or_else(|| Error::UnknownProperty {
                        entity: principal.name.clone(),
                        property: key.to_string(),
                    })?;
                (PrincipalKey::Alternate(key.to_string()), field)
            }
            None => {
                let field = principal
                    .get_primary_key()
                    .ok_or_else(|| Error::MissingPrimaryKey {
                        entity: principal.name.clone(),
                        property: principal.primary_key.clone(),
                    })?;
                (PrincipalKey::Primary(field.name.clone()), field)
            }
        };

        if self.config.check_key_types
            && !fk_field.field_type.is_key_compatible(&key_field.field_type)
        {
            return Err(Error::KeyTypeMismatch {
                dependent: dependent.name.clone(),
                foreign_key: fk_field.name.clone(),
                foreign_type: fk_field.field_type.scalar_type(),
                principal: principal.name.clone(),
                principal_key: key_field.name.clone(),
                principal_type: key_field.field_type.scalar_type(),
            });
        }

        // Required-ness follows the foreign key's nullability unless configured.
        let required = draft.required.unwrap_or(!fk_field.is_nullable());
        if !required && !fk_field.is_nullable() {
            return Err(Error::OptionalForeignKeyNotNullable {
                entity: dependent.name.clone(),
                property: fk_field.name.clone(),
            });
        }

        let on_delete = draft
            .on_delete
            .unwrap_or_else(|| DeleteBehavior::default_for(required));
        if required && on_delete.sets_null() {
            return Err(Error::InvalidDeleteBehavior {
                entity: dependent.name.clone(),
                property: fk_field.name.clone(),
                behavior: on_delete,
            });
        }

        let name = relationship_name(draft, foreign_key, resolved);
        debug!(
            relationship = %name,
            required,
            on_delete = ?on_delete,
            client_side = on_delete.is_client_side(),
            "resolved relationship"
        );

        Ok(RelationshipDef {
            name,
            principal: principal.name.clone(),
            dependent: dependent.name.clone(),
            cardinality: draft.cardinality,
            foreign_key: foreign_key.to_string(),
            principal_key,
            required,
            on_delete,
            principal_navigation: draft.principal_navigation.map(String::from),
            dependent_navigation: draft.dependent_navigation.map(String::from),
        })
    }
}

fn relationship_name(
    draft: &RelationshipDraft,
    foreign_key: &str,
    resolved: &[RelationshipDef],
) -> String {
    let base = format!(
        "fk_{}_{}_{}",
        draft.dependent.to_lowercase(),
        draft.principal.to_lowercase(),
        foreign_key
    );

    let mut name = base.clone();
    let mut suffix = 1;
    while resolved.iter().any(|r| r.name == name) {
        suffix += 1;
        name = format!("{base}_{suffix}");
    }
    name
}

fn describe_target(target: &str, is_collection: bool) -> String {
    if is_collection {
        format!("[{target}]")
    } else {
        target.to_string()
    }
}

fn build_navigations(relationships: &[RelationshipDef]) -> Result<Vec<NavigationDef>> {
    let mut navigations: Vec<NavigationDef> = Vec::new();
    let mut seen = HashSet::new();

    for rel in relationships {
        let sides = [
            (
                &rel.principal_navigation,
                &rel.principal,
                &rel.dependent,
                rel.cardinality == Cardinality::OneToMany,
            ),
            (
                &rel.dependent_navigation,
                &rel.dependent,
                &rel.principal,
                false,
            ),
        ];

        for (name, entity, target, is_collection) in sides {
            let Some(name) = name else { continue };

            if !seen.insert((entity.clone(), name.clone())) {
                return Err(Error::DuplicateNavigation {
                    entity: entity.clone(),
                    navigation: name.clone(),
                });
            }

            navigations.push(NavigationDef {
                entity: entity.clone(),
                name: name.clone(),
                target: target.clone(),
                is_collection,
                auto_include: false,
                relationship: rel.name.clone(),
            });
        }
    }

    Ok(navigations)
}

fn check_shared_foreign_keys(relationships: &[RelationshipDef]) -> Result<()> {
    let mut seen = HashSet::new();

    for rel in relationships {
        if !seen.insert((rel.dependent.as_str(), rel.foreign_key.as_str())) {
            return Err(Error::SharedForeignKey {
                entity: rel.dependent.clone(),
                property: rel.foreign_key.clone(),
            });
        }
    }

    Ok(())
}

//! The generic builder and the cardinality validator every typed builder
//! delegates to.
//!
//! Validation first walks the entity's own predicates in catalog order and
//! rejects any the class's rule table does not list, or whose values are the
//! wrong kind for the predicate. It then makes two passes over the table: the
//! first rejects optional predicates that are present with no values, the
//! second rejects mandatory predicates that were never set. Within a pass,
//! rules are checked in table order and the first failure is returned.

use tracing::debug;

use crate::entity::{Entity, Object, Reference};
use crate::error::BuildError;
use crate::iri::Iri;
use crate::model::Rule;
use crate::vocabulary::{ClassId, Predicate, PredicateKind};
use crate::Schema;

/// Checks `entity` against `rules`.
///
/// # Errors
///
/// Returns [`BuildError::PropertyNotAllowed`] or [`BuildError::WrongValueKind`]
/// for the first predicate outside `rules` or holding the wrong kind of value,
/// otherwise [`BuildError::PropertyNotSet`] naming the first predicate that
/// violates its rule.
pub fn validate(entity: &Entity, rules: &[Rule]) -> Result<(), BuildError> {
    check_boundary(entity, rules)?;

    let empty_optional = rules
        .iter()
        .filter(|r| !r.cardinality.is_mandatory())
        .find(|r| entity.has_value(r.predicate) && entity.value(r.predicate).is_empty());
    let missing_mandatory = || {
        rules
            .iter()
            .filter(|r| r.cardinality.is_mandatory())
            .find(|r| !entity.has_value(r.predicate))
    };

    match empty_optional.or_else(missing_mandatory) {
        Some(rule) => Err(BuildError::PropertyNotSet {
            property: rule.predicate.label(),
        }),
        None => Ok(()),
    }
}

fn check_boundary(entity: &Entity, rules: &[Rule]) -> Result<(), BuildError> {
    for predicate in entity.predicates() {
        if !rules.iter().any(|r| r.predicate == predicate) {
            return Err(BuildError::PropertyNotAllowed {
                property: predicate.label(),
                class: entity.class().label(),
            });
        }
        let well_kinded = entity.value(predicate).iter().all(|o| match o {
            Object::Iri(_) => predicate.kind() == PredicateKind::Object,
            Object::Literal(_) => predicate.kind() == PredicateKind::Datatype,
        });
        if !well_kinded {
            return Err(BuildError::WrongValueKind {
                property: predicate.label(),
            });
        }
    }
    Ok(())
}

/// A builder for any HQDM class, driven by the class's rule table.
///
/// The typed builders in [`crate::builders`] wrap this one; use it directly
/// when the class is only known at runtime. Setters accept any predicate,
/// but `build()` refuses predicates outside the class's table and values of
/// the wrong kind, so the typed builders and this one accept the same
/// entities.
///
/// ```
/// use hqdm_ontology::{ClassId, EntityBuilder, Iri, Predicate};
///
/// let world = Iri::new("http://example.com/ns#world").unwrap();
/// let event = EntityBuilder::new(ClassId::Event, Iri::new("http://example.com/ns#e1").unwrap())
///     .with(Predicate::PartOfPossibleWorld, &world)
///     .build()
///     .unwrap();
/// assert!(event.has_value(Predicate::PartOfPossibleWorld));
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct EntityBuilder {
    entity: Entity,
}

impl EntityBuilder {
    /// Starts building a fresh entity of `class`.
    pub fn new(class: ClassId, iri: Iri) -> Self {
        Self {
            entity: Entity::new(class, iri),
        }
    }

    /// Adds a reference to `value` under `predicate`.
    pub fn with(mut self, predicate: Predicate, value: &impl Reference) -> Self {
        self.entity
            .add_value(predicate, Object::Iri(value.iri().clone()));
        self
    }

    /// Adds a string literal under `predicate`.
    pub fn with_literal(mut self, predicate: Predicate, value: impl Into<String>) -> Self {
        self.entity
            .add_value(predicate, Object::Literal(value.into()));
        self
    }

    /// The class being built.
    #[must_use]
    pub fn class(&self) -> ClassId {
        self.entity.class()
    }

    /// The entity as built so far.
    #[must_use]
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Validates against the class's rule table and returns the entity.
    ///
    /// # Errors
    ///
    /// See [`validate`].
    pub fn build(self) -> Result<Entity, BuildError> {
        let class = self.entity.class();
        let rules = Schema::hqdm().rules(class);
        match validate(&self.entity, rules) {
            Ok(()) => {
                debug!(
                    class = class.label(),
                    subject = %self.entity.iri(),
                    triples = self.entity.triple_count(),
                    "built entity"
                );
                Ok(self.entity)
            }
            Err(err) => {
                debug!(
                    class = class.label(),
                    subject = %self.entity.iri(),
                    property = err.property(),
                    "build rejected"
                );
                Err(err)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

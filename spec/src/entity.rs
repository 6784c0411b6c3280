//! The in-memory entity: one RDF subject and every (predicate, object) pair
//! asserted about it.
//!
//! An [`Entity`] is a key/multi-value map from [`Predicate`] to a set of
//! [`Object`]s. Values are only ever added; there is no removal.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::iri::Iri;
use crate::vocabulary::{ClassId, Predicate};

/// The object position of a triple.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Object {
    /// A reference to another resource.
    Iri(Iri),
    /// An `xsd:string` literal.
    Literal(String),
}

impl Object {
    /// Returns the IRI if this object is a reference.
    #[must_use]
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Object::Iri(iri) => Some(iri),
            Object::Literal(_) => None,
        }
    }

    /// Returns the text if this object is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Object::Iri(_) => None,
            Object::Literal(s) => Some(s),
        }
    }
}

impl From<Iri> for Object {
    fn from(iri: Iri) -> Self {
        Object::Iri(iri)
    }
}

/// Anything that names a resource and can be used as a setter argument.
pub trait Reference {
    /// The IRI of the referenced resource.
    fn iri(&self) -> &Iri;
}

impl Reference for Iri {
    fn iri(&self) -> &Iri {
        self
    }
}

impl Reference for Entity {
    fn iri(&self) -> &Iri {
        &self.iri
    }
}

impl<T: Reference + ?Sized> Reference for &T {
    fn iri(&self) -> &Iri {
        (**self).iri()
    }
}

static NO_VALUES: BTreeSet<Object> = BTreeSet::new();

/// One RDF subject of a known HQDM class, with its predicate values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    iri: Iri,
    class: ClassId,
    values: BTreeMap<Predicate, BTreeSet<Object>>,
}

impl Entity {
    /// Creates an entity of `class` with no predicate values.
    #[must_use]
    pub fn new(class: ClassId, iri: Iri) -> Self {
        Self {
            iri,
            class,
            values: BTreeMap::new(),
        }
    }

    /// The subject IRI.
    #[must_use]
    pub fn iri(&self) -> &Iri {
        &self.iri
    }

    /// The HQDM class this entity was created as.
    #[must_use]
    pub fn class(&self) -> ClassId {
        self.class
    }

    /// Adds `object` to the values of `predicate`. Adding a value that is
    /// already present is a no-op.
    pub fn add_value(&mut self, predicate: Predicate, object: impl Into<Object>) {
        let object = object.into();
        trace!(
            subject = %self.iri,
            predicate = predicate.label(),
            ?object,
            "add_value"
        );
        self.values.entry(predicate).or_default().insert(object);
    }

    /// Returns true if `predicate` has been set on this entity, whether or
    /// not it currently holds any values.
    #[must_use]
    pub fn has_value(&self, predicate: Predicate) -> bool {
        self.values.contains_key(&predicate)
    }

    /// Returns the values of `predicate`; empty if it was never set.
    #[must_use]
    pub fn value(&self, predicate: Predicate) -> &BTreeSet<Object> {
        self.values.get(&predicate).unwrap_or(&NO_VALUES)
    }

    /// Iterates over the predicates that have been set, in catalog order.
    pub fn predicates(&self) -> impl Iterator<Item = Predicate> + '_ {
        self.values.keys().copied()
    }

    /// Iterates over every (predicate, object) pair, in catalog order.
    pub fn pairs(&self) -> impl Iterator<Item = (Predicate, &Object)> + '_ {
        self.values
            .iter()
            .flat_map(|(p, objects)| objects.iter().map(move |o| (*p, o)))
    }

    /// Number of (predicate, object) pairs, not counting `rdf:type`.
    #[must_use]
    pub fn triple_count(&self) -> usize {
        self.values.values().map(BTreeSet::len).sum()
    }

    #[cfg(test)]
    pub(crate) fn declare(&mut self, predicate: Predicate) {
        self.values.entry(predicate).or_default();
    }
}

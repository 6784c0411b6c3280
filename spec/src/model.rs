//! Core schema model types.
//!
//! These types describe the HQDM builder schema as typed Rust data: which
//! classes exist, which classes they specialise, and the ordered cardinality
//! rules a builder checks before it hands back an entity. The top-level entry
//! point is [`Schema::hqdm()`](crate::Schema::hqdm).

use crate::vocabulary::{ClassId, Predicate};

/// How many values a predicate must carry on a built entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Cardinality {
    /// May be absent; if present it must hold at least one value.
    Optional,
    /// Must hold at least one value.
    Mandatory,
    /// Must be present. Treated like [`Cardinality::Mandatory`]: only
    /// presence is checked, not that there is exactly one value.
    MandatorySingular,
}

impl Cardinality {
    /// Returns true for [`Cardinality::Mandatory`] and
    /// [`Cardinality::MandatorySingular`].
    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        !matches!(self, Cardinality::Optional)
    }
}

/// One row of a class's validation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// The predicate being constrained.
    pub predicate: Predicate,
    /// The constraint.
    pub cardinality: Cardinality,
}

/// An optional rule: absent is fine, present-but-empty is not.
#[must_use]
pub const fn opt(predicate: Predicate) -> Rule {
    Rule {
        predicate,
        cardinality: Cardinality::Optional,
    }
}

/// A mandatory rule: at least one value.
#[must_use]
pub const fn req(predicate: Predicate) -> Rule {
    Rule {
        predicate,
        cardinality: Cardinality::Mandatory,
    }
}

/// A mandatory-singular rule.
#[must_use]
pub const fn one(predicate: Predicate) -> Rule {
    Rule {
        predicate,
        cardinality: Cardinality::MandatorySingular,
    }
}

/// A class definition together with its builder rules.
#[derive(Debug, Clone)]
pub struct EntityClass {
    /// The class.
    pub id: ClassId,
    /// Description.
    pub comment: &'static str,
    /// Direct superclasses (`rdfs:subClassOf`).
    pub subclass_of: &'static [ClassId],
    /// Validation rules, in the order `build()` checks them.
    pub rules: &'static [Rule],
}

impl EntityClass {
    /// The HQDM local name of this class.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    /// Iterates over the mandatory rules, in table order.
    pub fn mandatory(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|r| r.cardinality.is_mandatory())
    }

    /// Iterates over the optional rules, in table order.
    pub fn optional(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|r| !r.cardinality.is_mandatory())
    }
}

/// A group of related classes (e.g. states and individuals, activities).
#[derive(Debug, Clone)]
pub struct SchemaModule {
    /// Short name used in logs and summaries (e.g. `"extent"`).
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description of the group.
    pub comment: &'static str,
    /// All classes defined in this group.
    pub classes: Vec<EntityClass>,
}

/// The complete HQDM builder schema.
#[derive(Debug)]
pub struct Schema {
    /// Schema version.
    pub version: &'static str,
    /// HQDM namespace IRI.
    pub namespace: &'static str,
    /// All modules in declaration order.
    pub modules: Vec<SchemaModule>,
}

impl Schema {
    /// Iterates over every class in every module.
    pub fn classes(&self) -> impl Iterator<Item = &EntityClass> {
        self.modules.iter().flat_map(|m| m.classes.iter())
    }

    /// Looks up a class definition. Returns `None` if the class has no table.
    #[must_use]
    pub fn find_class(&self, id: ClassId) -> Option<&EntityClass> {
        self.classes().find(|c| c.id == id)
    }

    /// Returns the validation rules for a class; empty if it has no table.
    #[must_use]
    pub fn rules(&self, id: ClassId) -> &'static [Rule] {
        self.find_class(id).map_or(&[], |c| c.rules)
    }

    /// Returns the predicates a class's builder may set, in table order.
    #[must_use]
    pub fn predicates_of(&self, id: ClassId) -> Vec<Predicate> {
        self.rules(id).iter().map(|r| r.predicate).collect()
    }

    /// Returns true if `sub` is `sup` or transitively declares it as a superclass.
    #[must_use]
    pub fn is_subclass_of(&self, sub: ClassId, sup: ClassId) -> bool {
        if sub == sup {
            return true;
        }
        self.find_class(sub).is_some_and(|c| {
            c.subclass_of
                .iter()
                .any(|parent| self.is_subclass_of(*parent, sup))
        })
    }

    /// Returns the total number of classes across all modules.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.modules.iter().map(|m| m.classes.len()).sum()
    }

    /// Returns the total number of rules across all classes.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.classes().map(|c| c.rules.len()).sum()
    }
}

/// Standard IRI constants.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// HQDM namespace.
    pub const NS_HQDM: &str = "https://hqdmtop.github.io/hqdm#";

    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `owl:Thing`.
    pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
}

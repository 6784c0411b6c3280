//! HQDM ontology builders encoded as typed Rust data.
//!
//! The `hqdm-ontology` crate provides the HQDM builder schema (52 classes,
//! 32 predicates, and the cardinality rules each class's builder enforces)
//! as static Rust data, along with one typed builder per class and
//! serializers that produce JSON-LD, Turtle, and N-Triples output.
//!
//! # Entry Point
//!
//! ```
//! let schema = hqdm_ontology::Schema::hqdm();
//! assert_eq!(schema.class_count(), 52);
//! ```
//!
//! # Building
//!
//! ```
//! use hqdm_ontology::builders::AssetBuilder;
//! use hqdm_ontology::Iri;
//!
//! let iri = |s: &str| Iri::new(format!("http://example.com/ns#{s}")).unwrap();
//! let err = AssetBuilder::new(iri("a1"))
//!     .member_of_kind_m(&iri("assetRole"))
//!     .part_of_possible_world_m(&iri("world"))
//!     .build()
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "Property Not Set: participant_in");
//! ```
//!
//! # Serialization
//!
//! ```
//! let schema = hqdm_ontology::Schema::hqdm();
//! let json_ld = hqdm_ontology::serializer::jsonld::to_json_ld(schema);
//! let turtle  = hqdm_ontology::serializer::turtle::to_turtle(schema);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod builders;
pub mod entity;
pub mod error;
pub mod iri;
pub mod model;
pub mod schema;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod vocabulary;

pub use builder::{validate, EntityBuilder};
pub use entity::{Entity, Object, Reference};
pub use error::BuildError;
pub use iri::{Iri, IriBase, IriError};
pub use model::{Cardinality, EntityClass, Rule, Schema, SchemaModule};
pub use vocabulary::{ClassId, Predicate, PredicateKind};

impl Schema {
    /// Returns the complete HQDM builder schema.
    ///
    /// Assembly order runs from the extensional root outwards:
    /// `extent → activity → representation → class`
    #[must_use]
    pub fn hqdm() -> &'static Schema {
        static SCHEMA: std::sync::OnceLock<Schema> = std::sync::OnceLock::new();
        SCHEMA.get_or_init(|| Schema {
            version: "1.0.0",
            namespace: model::iris::NS_HQDM,
            modules: vec![
                schema::extent::module(),
                schema::activity::module(),
                schema::representation::module(),
                schema::class::module(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn module_count() {
        assert_eq!(Schema::hqdm().modules.len(), 4);
    }

    #[test]
    fn class_count() {
        // One table per catalog entry.
        assert_eq!(Schema::hqdm().class_count(), ClassId::ALL.len());
    }

    #[test]
    fn every_class_has_exactly_one_table() {
        let schema = Schema::hqdm();
        let mut seen = HashSet::new();
        for class in schema.classes() {
            assert!(seen.insert(class.id), "Duplicate class table: {}", class.label());
        }
        for id in ClassId::ALL {
            assert!(schema.find_class(*id).is_some(), "No table for {}", id.label());
        }
    }

    #[test]
    fn no_predicate_repeats_within_a_table() {
        for class in Schema::hqdm().classes() {
            let mut seen = HashSet::new();
            for rule in class.rules {
                assert!(
                    seen.insert(rule.predicate),
                    "{} lists {} twice",
                    class.label(),
                    rule.predicate.label()
                );
            }
        }
    }

    #[test]
    fn only_roots_lack_superclasses() {
        for class in Schema::hqdm().classes() {
            let is_root = matches!(class.id, ClassId::SpatioTemporalExtent | ClassId::Class);
            assert_eq!(
                class.subclass_of.is_empty(),
                is_root,
                "Unexpected superclass list on {}",
                class.label()
            );
        }
    }

    #[test]
    fn every_extent_belongs_to_a_possible_world() {
        let schema = Schema::hqdm();
        for class in schema.classes() {
            if !schema.is_subclass_of(class.id, ClassId::SpatioTemporalExtent) {
                continue;
            }
            let rule = class
                .rules
                .iter()
                .find(|r| r.predicate == Predicate::PartOfPossibleWorld);
            assert!(
                rule.is_some_and(|r| r.cardinality.is_mandatory()),
                "{} must require part_of_possible_world",
                class.label()
            );
        }
    }

    #[test]
    fn classes_are_not_extents() {
        let schema = Schema::hqdm();
        assert!(schema.is_subclass_of(ClassId::Role, ClassId::Class));
        assert!(!schema.is_subclass_of(ClassId::Role, ClassId::SpatioTemporalExtent));
        assert!(schema.is_subclass_of(ClassId::Asset, ClassId::SpatioTemporalExtent));
        assert!(schema.is_subclass_of(ClassId::FunctionalSystem, ClassId::PhysicalObject));
    }

    #[test]
    fn asset_table_matches_hqdm() {
        let schema = Schema::hqdm();
        let asset = schema.find_class(ClassId::Asset).map(|c| {
            c.mandatory()
                .map(|r| r.predicate.label())
                .collect::<Vec<_>>()
        });
        assert_eq!(
            asset,
            Some(vec!["member_of_kind", "part_of_possible_world", "participant_in"])
        );
    }

    #[test]
    fn datatype_rules_are_optional() {
        for class in Schema::hqdm().classes() {
            for rule in class.rules {
                if rule.predicate.kind() == PredicateKind::Datatype {
                    assert!(!rule.cardinality.is_mandatory());
                }
            }
        }
    }
}

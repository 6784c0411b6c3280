//! Validation properties that hold for every class in the HQDM schema.
//!
//! These drive the untyped [`EntityBuilder`] straight from the rule tables, so
//! adding a class to the schema extends the coverage automatically.

use hqdm_ontology::{
    BuildError, Cardinality, ClassId, EntityBuilder, Iri, IriBase, Object, Predicate,
    PredicateKind, Schema,
};

fn ex() -> IriBase {
    IriBase::new("ex", "http://example.com/ns#")
}

fn ex_iri(local: &str) -> Iri {
    ex().iri(local).expect("valid IRI")
}

/// Sets `predicate` on `builder` with a placeholder value of the right kind.
fn set(builder: EntityBuilder, predicate: Predicate) -> EntityBuilder {
    match predicate.kind() {
        PredicateKind::Object => builder.with(predicate, &ex_iri(predicate.label())),
        PredicateKind::Datatype => builder.with_literal(predicate, "text"),
    }
}

fn fully_mandatory(class: ClassId, except: Option<Predicate>) -> EntityBuilder {
    Schema::hqdm()
        .rules(class)
        .iter()
        .filter(|r| r.cardinality.is_mandatory())
        .map(|r| r.predicate)
        .filter(|p| Some(*p) != except)
        .fold(EntityBuilder::new(class, ex_iri("subject")), set)
}

// =============================================================================
// Mandatory coverage
// =============================================================================

#[test]
fn every_class_builds_with_only_mandatory_values() {
    for class in ClassId::ALL {
        let entity = fully_mandatory(*class, None)
            .build()
            .unwrap_or_else(|e| panic!("{} should build: {e}", class.label()));
        let expected = Schema::hqdm()
            .rules(*class)
            .iter()
            .filter(|r| r.cardinality.is_mandatory())
            .count();
        assert_eq!(entity.triple_count(), expected, "class {}", class.label());
    }
}

#[test]
fn omitting_any_mandatory_value_names_it() {
    for class in ClassId::ALL {
        for rule in Schema::hqdm().rules(*class) {
            if !rule.cardinality.is_mandatory() {
                continue;
            }
            let err = fully_mandatory(*class, Some(rule.predicate))
                .build()
                .expect_err("missing mandatory value must fail");
            assert_eq!(
                err,
                BuildError::PropertyNotSet {
                    property: rule.predicate.label()
                },
                "class {}",
                class.label()
            );
            assert_eq!(
                err.to_string(),
                format!("Property Not Set: {}", rule.predicate.label())
            );
        }
    }
}

#[test]
fn empty_builders_fail_on_first_mandatory_in_table_order() {
    for class in ClassId::ALL {
        let first = Schema::hqdm()
            .rules(*class)
            .iter()
            .find(|r| r.cardinality.is_mandatory())
            .map(|r| r.predicate.label());
        let result = EntityBuilder::new(*class, ex_iri("bare")).build();
        match first {
            Some(label) => assert_eq!(result.expect_err("must fail").property(), label),
            None => assert!(result.is_ok(), "class {} has no mandatory rules", class.label()),
        }
    }
}

#[test]
fn singular_predicates_are_checked_for_presence() {
    let singular: Vec<_> = Schema::hqdm()
        .classes()
        .flat_map(|c| c.rules.iter().map(move |r| (c.id, *r)))
        .filter(|(_, r)| r.cardinality == Cardinality::MandatorySingular)
        .collect();
    assert!(!singular.is_empty());
    for (class, rule) in singular {
        let err = fully_mandatory(class, Some(rule.predicate))
            .build()
            .expect_err("missing singular value must fail");
        assert_eq!(err.property(), rule.predicate.label());
    }
}

// =============================================================================
// Optional coverage and round trips
// =============================================================================

#[test]
fn optional_values_round_trip() {
    for class in ClassId::ALL {
        let rules = Schema::hqdm().rules(*class);
        let builder = rules
            .iter()
            .map(|r| r.predicate)
            .fold(EntityBuilder::new(*class, ex_iri("full")), set);
        let entity = builder
            .build()
            .unwrap_or_else(|e| panic!("{} should build: {e}", class.label()));
        for rule in rules {
            assert!(entity.has_value(rule.predicate));
            let expected = match rule.predicate.kind() {
                PredicateKind::Object => Object::Iri(ex_iri(rule.predicate.label())),
                PredicateKind::Datatype => Object::Literal("text".to_owned()),
            };
            assert!(entity.value(rule.predicate).contains(&expected));
        }
        assert_eq!(entity.triple_count(), rules.len());
    }
}

#[test]
fn unset_predicates_read_back_empty() {
    let entity = fully_mandatory(ClassId::Asset, None)
        .build()
        .expect("asset builds");
    assert!(!entity.has_value(Predicate::Beginning));
    assert!(entity.value(Predicate::Beginning).is_empty());
}

#[test]
fn chained_and_sequential_calls_agree() {
    let world = ex_iri("world");
    let role = ex_iri("role");

    let chained = EntityBuilder::new(ClassId::Asset, ex_iri("a1"))
        .with(Predicate::MemberOfKind, &role)
        .with(Predicate::PartOfPossibleWorld, &world)
        .with(Predicate::ParticipantIn, &ex_iri("o1"))
        .build()
        .expect("asset builds");

    let mut builder = EntityBuilder::new(ClassId::Asset, ex_iri("a1"));
    builder = builder.with(Predicate::MemberOfKind, &role);
    builder = builder.with(Predicate::PartOfPossibleWorld, &world);
    builder = builder.with(Predicate::ParticipantIn, &ex_iri("o1"));
    let sequential = builder.build().expect("asset builds");

    assert_eq!(chained, sequential);
}

#[test]
fn rdf_type_is_carried_by_the_class() {
    for class in ClassId::ALL {
        let entity = fully_mandatory(*class, None).build().expect("builds");
        assert_eq!(entity.class(), *class);
        assert_eq!(entity.iri(), &ex_iri("subject"));
    }
}

// =============================================================================
// Table boundary
// =============================================================================

#[test]
fn predicates_outside_every_table_are_refused() {
    for class in ClassId::ALL {
        let allowed = Schema::hqdm().predicates_of(*class);
        for predicate in Predicate::ALL {
            if allowed.contains(predicate) {
                continue;
            }
            let err = set(fully_mandatory(*class, None), *predicate)
                .build()
                .expect_err("predicate outside the table must fail");
            assert_eq!(
                err,
                BuildError::PropertyNotAllowed {
                    property: predicate.label(),
                    class: class.label()
                }
            );
        }
    }
}

#[test]
fn values_of_the_wrong_kind_are_refused() {
    for class in ClassId::ALL {
        for predicate in Schema::hqdm().predicates_of(*class) {
            let builder = fully_mandatory(*class, None);
            let builder = match predicate.kind() {
                PredicateKind::Object => builder.with_literal(predicate, "not an iri"),
                PredicateKind::Datatype => builder.with(predicate, &ex_iri("thing")),
            };
            let err = builder.build().expect_err("ill-kinded value must fail");
            assert_eq!(
                err,
                BuildError::WrongValueKind {
                    property: predicate.label()
                },
                "class {}",
                class.label()
            );
        }
    }
}

#[test]
fn class_refuses_participation_and_literal_kinds() {
    let err = EntityBuilder::new(ClassId::Class, ex_iri("c"))
        .with(Predicate::ParticipantIn, &ex_iri("o"))
        .with_literal(Predicate::MemberOfKind, "not an iri")
        .build()
        .expect_err("neither predicate belongs to class");
    assert_eq!(err.to_string(), "Property Not Allowed: member_of_kind on class");
}

//! Property-based tests for the builders.

use hqdm_ontology::builders::AssetBuilder;
use hqdm_ontology::{ClassId, EntityBuilder, IriBase, Object, Predicate};
use proptest::prelude::*;

fn ex() -> IriBase {
    IriBase::new("ex", "http://example.com/ns#")
}

proptest! {
    /// Every value added through a multi-valued setter is kept.
    #[test]
    fn prop_multi_valued_setter_keeps_all(
        locals in proptest::collection::btree_set("[a-z][a-z0-9]{0,8}", 1..6)
    ) {
        let ex = ex();
        let builder = AssetBuilder::new(ex.iri("a1").unwrap())
            .member_of_kind_m(&ex.iri("assetRole").unwrap())
            .part_of_possible_world_m(&ex.iri("world").unwrap());
        let asset = locals
            .iter()
            .fold(builder, |b, l| b.participant_in_m(&ex.iri(l).unwrap()))
            .build()
            .unwrap();
        let values = asset.value(Predicate::ParticipantIn);
        prop_assert_eq!(values.len(), locals.len());
        for l in &locals {
            prop_assert!(values.contains(&Object::from(ex.iri(l).unwrap())));
        }
    }

    /// Setter order never changes the built entity.
    #[test]
    fn prop_setter_order_is_irrelevant(a in "[a-z]{1,6}", b in "[a-z]{1,6}") {
        let ex = ex();
        let (a, b) = (ex.iri(&a).unwrap(), ex.iri(&b).unwrap());
        let world = ex.iri("world").unwrap();
        let role = ex.iri("role").unwrap();

        let forward = EntityBuilder::new(ClassId::Asset, ex.iri("x").unwrap())
            .with(Predicate::MemberOfKind, &role)
            .with(Predicate::ParticipantIn, &a)
            .with(Predicate::ParticipantIn, &b)
            .with(Predicate::PartOfPossibleWorld, &world)
            .build()
            .unwrap();
        let backward = EntityBuilder::new(ClassId::Asset, ex.iri("x").unwrap())
            .with(Predicate::PartOfPossibleWorld, &world)
            .with(Predicate::ParticipantIn, &b)
            .with(Predicate::ParticipantIn, &a)
            .with(Predicate::MemberOfKind, &role)
            .build()
            .unwrap();
        prop_assert_eq!(forward, backward);
    }

    /// The error always names the first missing mandatory predicate.
    #[test]
    fn prop_missing_participation_is_reported(local in "[a-z]{1,6}") {
        let ex = ex();
        let err = AssetBuilder::new(ex.iri(&local).unwrap())
            .member_of_kind_m(&ex.iri("role").unwrap())
            .part_of_possible_world_m(&ex.iri("world").unwrap())
            .build()
            .unwrap_err();
        prop_assert_eq!(err.property(), "participant_in");
    }
}

//! Spatio-temporal extents: states, individuals, events, and physical objects.
//!
//! Every class here is a `spatio_temporal_extent`, so every table carries
//! `part_of_possible_world` as its one mandatory-singular rule. The other
//! whole-life relationships (`beginning`, `ending`, the `part__of` family)
//! are optional.

use crate::model::{one, opt, req, EntityClass, Rule, SchemaModule};
use crate::vocabulary::ClassId;
use crate::vocabulary::Predicate::*;

/// Returns the extent module.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        name: "extent",
        label: "Spatio-temporal extents",
        comment: "States, individuals, events, periods, and the physical object \
                  hierarchy down to people, organizations, and systems.",
        classes: classes(),
    }
}

const EXTENT: &[Rule] = &[
    opt(AggregatedInto),
    opt(Beginning),
    opt(ConsistsOfAny),
    opt(Ending),
    opt(MemberOfAny),
    opt(MemberOf),
    opt(PartOfAny),
    one(PartOfPossibleWorld),
    opt(TemporalPartOfAny),
    opt(TemporalPartOf),
];

const INDIVIDUAL: &[Rule] = &[
    opt(AggregatedInto),
    opt(Beginning),
    opt(ConsistsOfAny),
    opt(Ending),
    opt(MemberOfAny),
    opt(MemberOf),
    opt(MemberOfKind),
    opt(PartOfAny),
    one(PartOfPossibleWorld),
    opt(TemporalPartOfAny),
    opt(TemporalPartOf),
];

const EVENT: &[Rule] = &[
    opt(AggregatedInto),
    opt(ConsistsOfAny),
    opt(EntityName),
    opt(MemberOfAny),
    opt(MemberOf),
    opt(PartOfAny),
    one(PartOfPossibleWorld),
    opt(TemporalPartOfAny),
];

const SYSTEM_COMPONENT: &[Rule] = &[
    opt(AggregatedInto),
    opt(Beginning),
    one(ComponentOf),
    opt(ConsistsOfAny),
    opt(Ending),
    opt(MemberOfAny),
    opt(MemberOf),
    opt(MemberOfKind),
    opt(PartOfAny),
    one(PartOfPossibleWorld),
    opt(TemporalPartOfAny),
    opt(TemporalPartOf),
];

const FUNCTIONAL: &[Rule] = &[
    opt(AggregatedInto),
    opt(Beginning),
    opt(ConsistsOfAny),
    opt(Ending),
    req(IntendedRole),
    opt(MemberOfAny),
    opt(MemberOf),
    opt(MemberOfKind),
    opt(PartOfAny),
    one(PartOfPossibleWorld),
    opt(TemporalPartOfAny),
    opt(TemporalPartOf),
];

fn classes() -> Vec<EntityClass> {
    vec![
        EntityClass {
            id: ClassId::SpatioTemporalExtent,
            comment: "The root of the extensional hierarchy: a thing that occupies \
                      space and time.",
            subclass_of: &[],
            rules: EXTENT,
        },
        EntityClass {
            id: ClassId::State,
            comment: "A spatio-temporal extent that is an individual or a temporal \
                      part of one.",
            subclass_of: &[ClassId::SpatioTemporalExtent],
            rules: EXTENT,
        },
        EntityClass {
            id: ClassId::Individual,
            comment: "A state that is a whole life: it is not a temporal part of a \
                      larger state of the same kind.",
            subclass_of: &[ClassId::State],
            rules: INDIVIDUAL,
        },
        EntityClass {
            id: ClassId::PeriodOfTime,
            comment: "A state that is all of space for a part of time.",
            subclass_of: &[ClassId::State],
            rules: EXTENT,
        },
        EntityClass {
            id: ClassId::PossibleWorld,
            comment: "An individual that is all of space and all of time; everything \
                      else is part of some possible world.",
            subclass_of: &[ClassId::Individual, ClassId::PeriodOfTime],
            rules: INDIVIDUAL,
        },
        EntityClass {
            id: ClassId::Event,
            comment: "A spatio-temporal extent with zero temporal thickness.",
            subclass_of: &[ClassId::SpatioTemporalExtent],
            rules: EVENT,
        },
        EntityClass {
            id: ClassId::PointInTime,
            comment: "An event that is all of space at an instant.",
            subclass_of: &[ClassId::Event],
            rules: EVENT,
        },
        EntityClass {
            id: ClassId::StateOfPhysicalObject,
            comment: "A state that is a temporal part of a physical object.",
            subclass_of: &[ClassId::State],
            rules: EXTENT,
        },
        EntityClass {
            id: ClassId::PhysicalObject,
            comment: "An individual that consists of a distribution of matter and \
                      energy.",
            subclass_of: &[ClassId::Individual, ClassId::StateOfPhysicalObject],
            rules: INDIVIDUAL,
        },
        EntityClass {
            id: ClassId::StateOfOrdinaryPhysicalObject,
            comment: "A state of a physical object that does not survive the loss \
                      of most of its parts.",
            subclass_of: &[ClassId::StateOfPhysicalObject],
            rules: EXTENT,
        },
        EntityClass {
            id: ClassId::OrdinaryPhysicalObject,
            comment: "A physical object with continuity of its parts over time.",
            subclass_of: &[
                ClassId::PhysicalObject,
                ClassId::StateOfOrdinaryPhysicalObject,
            ],
            rules: INDIVIDUAL,
        },
        EntityClass {
            id: ClassId::StateOfBiologicalObject,
            comment: "A state of a physical object that sustains itself.",
            subclass_of: &[ClassId::StateOfPhysicalObject],
            rules: EXTENT,
        },
        EntityClass {
            id: ClassId::BiologicalObject,
            comment: "A physical object that sustains itself and reproduces.",
            subclass_of: &[ClassId::PhysicalObject, ClassId::StateOfBiologicalObject],
            rules: INDIVIDUAL,
        },
        EntityClass {
            id: ClassId::StateOfPerson,
            comment: "A state of a biological object that is a person.",
            subclass_of: &[ClassId::StateOfBiologicalObject],
            rules: EXTENT,
        },
        EntityClass {
            id: ClassId::Person,
            comment: "A biological object that is a human being.",
            subclass_of: &[ClassId::BiologicalObject, ClassId::StateOfPerson],
            rules: INDIVIDUAL,
        },
        EntityClass {
            id: ClassId::StateOfOrganization,
            comment: "A state of a socially constructed group with a purpose.",
            subclass_of: &[ClassId::StateOfPhysicalObject],
            rules: EXTENT,
        },
        EntityClass {
            id: ClassId::Organization,
            comment: "An organized body of people with a particular purpose.",
            subclass_of: &[ClassId::Individual, ClassId::StateOfOrganization],
            rules: INDIVIDUAL,
        },
        EntityClass {
            id: ClassId::StateOfSystem,
            comment: "A state of an ordinary physical object that is a system.",
            subclass_of: &[ClassId::StateOfOrdinaryPhysicalObject],
            rules: EXTENT,
        },
        EntityClass {
            id: ClassId::System,
            comment: "An ordinary physical object with components that work \
                      together.",
            subclass_of: &[ClassId::OrdinaryPhysicalObject, ClassId::StateOfSystem],
            rules: INDIVIDUAL,
        },
        EntityClass {
            id: ClassId::StateOfSystemComponent,
            comment: "A state of a physical object that is a component of a system.",
            subclass_of: &[ClassId::StateOfPhysicalObject],
            rules: EXTENT,
        },
        EntityClass {
            id: ClassId::SystemComponent,
            comment: "A physical object that is a replaceable component of exactly \
                      one system.",
            subclass_of: &[ClassId::PhysicalObject, ClassId::StateOfSystemComponent],
            rules: SYSTEM_COMPONENT,
        },
        EntityClass {
            id: ClassId::FunctionalObject,
            comment: "A physical object with one or more intended roles.",
            subclass_of: &[ClassId::PhysicalObject],
            rules: FUNCTIONAL,
        },
        EntityClass {
            id: ClassId::FunctionalSystem,
            comment: "A system that is also a functional object.",
            subclass_of: &[ClassId::System, ClassId::FunctionalObject],
            rules: FUNCTIONAL,
        },
    ]
}

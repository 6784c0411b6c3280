//! Classes, kinds, and roles.
//!
//! Nothing is mandatory for a class: an empty class is still a class.

use crate::model::{opt, EntityClass, Rule, SchemaModule};
use crate::vocabulary::ClassId;
use crate::vocabulary::Predicate::*;

/// Returns the class module.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        name: "class",
        label: "Classes and kinds",
        comment: "Abstract objects that have members: classes of extents, kinds \
                  of physical object and activity, and the roles participants play.",
        classes: classes(),
    }
}

const CLASS: &[Rule] = &[opt(HasSuperclass), opt(MemberOfAny), opt(MemberOf)];

const CLASS_OF_EXTENT: &[Rule] = &[
    opt(ConsistsOfAnyByClass),
    opt(HasSuperclass),
    opt(MemberOfAny),
    opt(MemberOf),
    opt(PartOfAnyByClass),
];

const ROLE: &[Rule] = &[
    opt(HasSuperclass),
    opt(MemberOfAny),
    opt(MemberOf),
    opt(PartOfByClass),
];

const KIND_OF_ACTIVITY: &[Rule] = &[
    opt(CausesByClass),
    opt(ConsistsOfByClass),
    opt(HasSuperclass),
    opt(MemberOfAny),
    opt(MemberOf),
];

const KIND_OF_ASSOCIATION: &[Rule] = &[
    opt(ConsistsOfByClass),
    opt(HasSuperclass),
    opt(MemberOfAny),
    opt(MemberOf),
];

const KIND_OF_SYSTEM: &[Rule] = &[
    opt(ConsistsOfAnyByClass),
    opt(HasComponentByClass),
    opt(HasSuperclass),
    opt(MemberOfAny),
    opt(MemberOf),
    opt(PartOfAnyByClass),
];

fn classes() -> Vec<EntityClass> {
    vec![
        EntityClass {
            id: ClassId::Class,
            comment: "An abstract object that has members and whose identity is \
                      defined by its membership.",
            subclass_of: &[],
            rules: CLASS,
        },
        EntityClass {
            id: ClassId::ClassOfSpatioTemporalExtent,
            comment: "A class whose members are spatio-temporal extents.",
            subclass_of: &[ClassId::Class],
            rules: CLASS_OF_EXTENT,
        },
        EntityClass {
            id: ClassId::ClassOfEvent,
            comment: "A class of spatio-temporal extent whose members are events.",
            subclass_of: &[ClassId::ClassOfSpatioTemporalExtent],
            rules: CLASS,
        },
        EntityClass {
            id: ClassId::Role,
            comment: "A class whose members are participants playing the same part \
                      in an activity or association.",
            subclass_of: &[ClassId::ClassOfSpatioTemporalExtent],
            rules: ROLE,
        },
        EntityClass {
            id: ClassId::KindOfActivity,
            comment: "A class of activity whose members share a common structure \
                      of roles and causes.",
            subclass_of: &[ClassId::ClassOfSpatioTemporalExtent],
            rules: KIND_OF_ACTIVITY,
        },
        EntityClass {
            id: ClassId::KindOfAssociation,
            comment: "A class of association whose members share a common \
                      structure of roles.",
            subclass_of: &[ClassId::ClassOfSpatioTemporalExtent],
            rules: KIND_OF_ASSOCIATION,
        },
        EntityClass {
            id: ClassId::KindOfPhysicalObject,
            comment: "A class of physical object whose members share a common \
                      structure.",
            subclass_of: &[ClassId::ClassOfSpatioTemporalExtent],
            rules: CLASS_OF_EXTENT,
        },
        EntityClass {
            id: ClassId::KindOfOrdinaryPhysicalObject,
            comment: "A kind of physical object whose members are ordinary \
                      physical objects.",
            subclass_of: &[ClassId::KindOfPhysicalObject],
            rules: CLASS_OF_EXTENT,
        },
        EntityClass {
            id: ClassId::KindOfPerson,
            comment: "A kind of physical object whose members are people.",
            subclass_of: &[ClassId::KindOfPhysicalObject],
            rules: CLASS_OF_EXTENT,
        },
        EntityClass {
            id: ClassId::KindOfOrganization,
            comment: "A class of organization whose members share a common \
                      structure.",
            subclass_of: &[ClassId::ClassOfSpatioTemporalExtent],
            rules: CLASS_OF_EXTENT,
        },
        EntityClass {
            id: ClassId::KindOfSystem,
            comment: "A kind of ordinary physical object whose members are systems \
                      with components of given kinds.",
            subclass_of: &[ClassId::KindOfOrdinaryPhysicalObject],
            rules: KIND_OF_SYSTEM,
        },
        EntityClass {
            id: ClassId::KindOfSystemComponent,
            comment: "A kind of physical object whose members are system \
                      components.",
            subclass_of: &[ClassId::KindOfPhysicalObject],
            rules: CLASS_OF_EXTENT,
        },
        EntityClass {
            id: ClassId::Pattern,
            comment: "A class whose members are signs of the same shape.",
            subclass_of: &[ClassId::Class],
            rules: CLASS,
        },
        EntityClass {
            id: ClassId::RequirementSpecification,
            comment: "A class of spatio-temporal extent that is the intersection \
                      of the classes a requirement must satisfy.",
            subclass_of: &[ClassId::ClassOfSpatioTemporalExtent],
            rules: CLASS,
        },
    ]
}

//! Participants, activities, associations, and plans.
//!
//! Participants and associations are where HQDM demands the most: a
//! participant must be a member of some role and take part in something, and
//! an association must consist of participants.

use crate::model::{one, opt, req, EntityClass, Rule, SchemaModule};
use crate::vocabulary::ClassId;
use crate::vocabulary::Predicate::*;

/// Returns the activity module.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        name: "activity",
        label: "Participants, activities and associations",
        comment: "The roles individuals play, the activities that change things, \
                  and the associations that bind participants together.",
        classes: classes(),
    }
}

const PARTICIPANT: &[Rule] = &[
    opt(AggregatedInto),
    opt(Beginning),
    opt(ConsistsOfAny),
    opt(Ending),
    opt(MemberOfAny),
    opt(MemberOf),
    req(MemberOfKind),
    opt(PartOfAny),
    one(PartOfPossibleWorld),
    req(ParticipantIn),
    opt(TemporalPartOfAny),
    opt(TemporalPartOf),
];

const ACTIVITY: &[Rule] = &[
    opt(AggregatedInto),
    opt(Beginning),
    opt(Causes),
    opt(ConsistsOfAny),
    opt(ConsistsOf),
    opt(Determines),
    opt(Ending),
    opt(MemberOfAny),
    opt(MemberOf),
    req(MemberOfKind),
    opt(PartOfAny),
    one(PartOfPossibleWorld),
    opt(References),
    opt(TemporalPartOfAny),
    opt(TemporalPartOf),
];

const TRANSFER_OF_OWNERSHIP: &[Rule] = &[
    opt(AggregatedInto),
    opt(Beginning),
    req(Causes),
    opt(ConsistsOfAny),
    opt(ConsistsOf),
    opt(Determines),
    opt(Ending),
    opt(MemberOfAny),
    opt(MemberOf),
    req(MemberOfKind),
    opt(PartOfAny),
    one(PartOfPossibleWorld),
    opt(References),
    opt(TemporalPartOfAny),
    opt(TemporalPartOf),
];

const ASSOCIATION: &[Rule] = &[
    opt(AggregatedInto),
    opt(Beginning),
    opt(ConsistsOfAny),
    req(ConsistsOfParticipant),
    opt(Ending),
    opt(MemberOfAny),
    opt(MemberOf),
    req(MemberOfKind),
    opt(PartOfAny),
    one(PartOfPossibleWorld),
    opt(TemporalPartOfAny),
    opt(TemporalPartOf),
];

const PLAN: &[Rule] = &[
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

const REQUIREMENT: &[Rule] = &[
    opt(AggregatedInto),
    opt(Beginning),
    opt(ConsistsOfAny),
    one(DefinedBy),
    opt(Ending),
    opt(MemberOfAny),
    opt(MemberOf),
    opt(PartOfAny),
    one(PartOfPlan),
    one(PartOfPossibleWorld),
    opt(TemporalPartOfAny),
    opt(TemporalPartOf),
];

fn classes() -> Vec<EntityClass> {
    vec![
        EntityClass {
            id: ClassId::Participant,
            comment: "A state of a physical object that plays a role in an activity \
                      or association.",
            subclass_of: &[ClassId::StateOfPhysicalObject],
            rules: PARTICIPANT,
        },
        EntityClass {
            id: ClassId::Asset,
            comment: "A participant that is the owned thing in an ownership.",
            subclass_of: &[ClassId::Participant],
            rules: PARTICIPANT,
        },
        EntityClass {
            id: ClassId::Owner,
            comment: "A participant that is the owning party in an ownership.",
            subclass_of: &[ClassId::Participant],
            rules: PARTICIPANT,
        },
        EntityClass {
            id: ClassId::Employee,
            comment: "A state of a person that participates in an employment as \
                      the employee.",
            subclass_of: &[ClassId::Participant, ClassId::StateOfPerson],
            rules: PARTICIPANT,
        },
        EntityClass {
            id: ClassId::Employer,
            comment: "A participant that is the employing party in an employment.",
            subclass_of: &[ClassId::Participant],
            rules: PARTICIPANT,
        },
        EntityClass {
            id: ClassId::Activity,
            comment: "An individual that consists of its participants and causes \
                      some event.",
            subclass_of: &[ClassId::Individual],
            rules: ACTIVITY,
        },
        EntityClass {
            id: ClassId::TransferOfOwnership,
            comment: "An activity that causes the ending of one ownership and the \
                      beginning of another.",
            subclass_of: &[ClassId::Activity],
            rules: TRANSFER_OF_OWNERSHIP,
        },
        EntityClass {
            id: ClassId::Association,
            comment: "An individual that consists of the participants that are \
                      associated, and where the participants are parts of the \
                      individuals associated.",
            subclass_of: &[ClassId::Individual],
            rules: ASSOCIATION,
        },
        EntityClass {
            id: ClassId::Ownership,
            comment: "An association that consists of an owner and an asset.",
            subclass_of: &[ClassId::Association],
            rules: ASSOCIATION,
        },
        EntityClass {
            id: ClassId::Employment,
            comment: "An association that consists of an employer and an employee.",
            subclass_of: &[ClassId::Association],
            rules: ASSOCIATION,
        },
        EntityClass {
            id: ClassId::Plan,
            comment: "A possible world that some party would like to bring about.",
            subclass_of: &[ClassId::PossibleWorld],
            rules: PLAN,
        },
        EntityClass {
            id: ClassId::Requirement,
            comment: "A spatio-temporal extent that is part of a plan and defined \
                      by a requirement specification.",
            subclass_of: &[ClassId::SpatioTemporalExtent],
            rules: REQUIREMENT,
        },
    ]
}

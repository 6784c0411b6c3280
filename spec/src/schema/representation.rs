//! Signs and the communities that recognise them.

use crate::model::{one, opt, req, EntityClass, Rule, SchemaModule};
use crate::vocabulary::ClassId;
use crate::vocabulary::Predicate::*;

/// Returns the representation module.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        name: "representation",
        label: "Representation",
        comment: "Signs, what they represent, and the language communities that \
                  recognise them.",
        classes: classes(),
    }
}

const SIGN: &[Rule] = &[
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
    opt(Value),
];

const REPRESENTATION_BY_SIGN: &[Rule] = &[
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
    one(Represents),
    opt(TemporalPartOfAny),
    opt(TemporalPartOf),
    req(Uses),
];

const RECOGNIZING_LANGUAGE_COMMUNITY: &[Rule] = &[
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

fn classes() -> Vec<EntityClass> {
    vec![
        EntityClass {
            id: ClassId::Sign,
            comment: "A participant that is a mark or token standing for something \
                      in a representation by sign.",
            subclass_of: &[ClassId::Participant],
            rules: SIGN,
        },
        EntityClass {
            id: ClassId::RepresentationBySign,
            comment: "An association of signs and a recognizing language community \
                      that represents some thing.",
            subclass_of: &[ClassId::Association],
            rules: REPRESENTATION_BY_SIGN,
        },
        EntityClass {
            id: ClassId::RecognizingLanguageCommunity,
            comment: "A state of an organization that participates in a \
                      representation by sign by recognising its signs.",
            subclass_of: &[ClassId::StateOfOrganization, ClassId::Participant],
            rules: RECOGNIZING_LANGUAGE_COMMUNITY,
        },
    ]
}

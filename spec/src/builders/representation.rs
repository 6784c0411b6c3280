//! Builders for signs and language communities.

use crate::{BuildError, ClassId, Entity, EntityBuilder, Iri, Predicate, Reference};

extent_builder! {
    /// A built `hqdm:sign`.
    Sign, SignBuilder => Sign {
        member_of_kind_m => MemberOfKind,
        participant_in_m => ParticipantIn,
    }
    literals {
        value => Value,
    }
}

extent_builder! {
    /// A built `hqdm:representation_by_sign`.
    RepresentationBySign, RepresentationBySignBuilder => RepresentationBySign {
        consists_of_participant_m => ConsistsOfParticipant,
        member_of_kind_m => MemberOfKind,
        represents_m => Represents,
        uses_m => Uses,
    }
}

extent_builder! {
    /// A built `hqdm:recognizing_language_community`.
    RecognizingLanguageCommunity,
    RecognizingLanguageCommunityBuilder => RecognizingLanguageCommunity {
        member_of_kind_m => MemberOfKind,
        participant_in_m => ParticipantIn,
    }
}

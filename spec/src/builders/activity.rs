//! Builders for participants, activities, associations, and plans.

use crate::{BuildError, ClassId, Entity, EntityBuilder, Iri, Predicate, Reference};

extent_builder! {
    /// A built `hqdm:participant`.
    Participant, ParticipantBuilder => Participant {
        member_of_kind_m => MemberOfKind,
        participant_in_m => ParticipantIn,
    }
}

extent_builder! {
    /// A built `hqdm:asset`.
    Asset, AssetBuilder => Asset {
        member_of_kind_m => MemberOfKind,
        participant_in_m => ParticipantIn,
    }
}

extent_builder! {
    /// A built `hqdm:owner`.
    Owner, OwnerBuilder => Owner {
        member_of_kind_m => MemberOfKind,
        participant_in_m => ParticipantIn,
    }
}

extent_builder! {
    /// A built `hqdm:employee`.
    Employee, EmployeeBuilder => Employee {
        member_of_kind_m => MemberOfKind,
        participant_in_m => ParticipantIn,
    }
}

extent_builder! {
    /// A built `hqdm:employer`.
    Employer, EmployerBuilder => Employer {
        member_of_kind_m => MemberOfKind,
        participant_in_m => ParticipantIn,
    }
}

extent_builder! {
    /// A built `hqdm:activity`.
    Activity, ActivityBuilder => Activity {
        causes => Causes,
        consists_of => ConsistsOf,
        determines => Determines,
        member_of_kind_m => MemberOfKind,
        references => References,
    }
}

extent_builder! {
    /// A built `hqdm:transfer_of_ownership`.
    TransferOfOwnership, TransferOfOwnershipBuilder => TransferOfOwnership {
        causes_m => Causes,
        consists_of => ConsistsOf,
        determines => Determines,
        member_of_kind_m => MemberOfKind,
        references => References,
    }
}

extent_builder! {
    /// A built `hqdm:association`.
    Association, AssociationBuilder => Association {
        consists_of_participant_m => ConsistsOfParticipant,
        member_of_kind_m => MemberOfKind,
    }
}

extent_builder! {
    /// A built `hqdm:ownership`.
    Ownership, OwnershipBuilder => Ownership {
        consists_of_participant_m => ConsistsOfParticipant,
        member_of_kind_m => MemberOfKind,
    }
}

extent_builder! {
    /// A built `hqdm:employment`.
    Employment, EmploymentBuilder => Employment {
        consists_of_participant_m => ConsistsOfParticipant,
        member_of_kind_m => MemberOfKind,
    }
}

extent_builder! {
    /// A built `hqdm:plan`.
    Plan, PlanBuilder => Plan {
        member_of_kind => MemberOfKind,
    }
}

extent_builder! {
    /// A built `hqdm:requirement`.
    Requirement, RequirementBuilder => Requirement {
        defined_by_m => DefinedBy,
        part_of_plan_m => PartOfPlan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(s: &str) -> Iri {
        Iri::new(format!("http://example.com/ns#{s}")).expect("valid IRI")
    }

    #[test]
    fn asset_needs_its_ownership() {
        let err = AssetBuilder::new(iri("a1"))
            .member_of_kind_m(&iri("assetRole"))
            .part_of_possible_world_m(&iri("world"))
            .build()
            .expect_err("participant_in missing");
        assert_eq!(err.to_string(), "Property Not Set: participant_in");
    }

    #[test]
    fn typed_entities_are_references() {
        let world = iri("world");
        let kind = iri("ownershipKind");
        let owner_role = iri("ownerRole");

        let ownership = OwnershipBuilder::new(iri("o1"))
            .member_of_kind_m(&kind)
            .part_of_possible_world_m(&world)
            .consists_of_participant_m(&iri("owner1"))
            .build()
            .expect("valid ownership");
        let owner = OwnerBuilder::new(iri("owner1"))
            .member_of_kind_m(&owner_role)
            .part_of_possible_world_m(&world)
            .participant_in_m(&ownership)
            .build()
            .expect("valid owner");

        let values = owner.value(Predicate::ParticipantIn);
        assert!(values.contains(&crate::Object::Iri(iri("o1"))));
        assert_eq!(Owner::CLASS, ClassId::Owner);
        assert_eq!(owner.class(), ClassId::Owner);
    }

    #[test]
    fn transfer_must_cause_something() {
        let err = TransferOfOwnershipBuilder::new(iri("t1"))
            .member_of_kind_m(&iri("transferKind"))
            .part_of_possible_world_m(&iri("world"))
            .build()
            .expect_err("causes missing");
        assert_eq!(err.property(), "causes");
    }

    #[test]
    fn requirement_reports_first_missing_in_table_order() {
        let err = RequirementBuilder::new(iri("r1"))
            .build()
            .expect_err("everything missing");
        assert_eq!(err.property(), "defined_by");
    }
}

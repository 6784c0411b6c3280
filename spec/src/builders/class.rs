//! Builders for classes, kinds, and roles.

use crate::{BuildError, ClassId, Entity, EntityBuilder, Iri, Predicate, Reference};

class_builder! {
    /// A built `hqdm:class`.
    Class, ClassBuilder => Class {}
}

class_builder! {
    /// A built `hqdm:class_of_spatio_temporal_extent`.
    ClassOfSpatioTemporalExtent,
    ClassOfSpatioTemporalExtentBuilder => ClassOfSpatioTemporalExtent {
        consists_of_any_by_class => ConsistsOfAnyByClass,
        part_of_any_by_class => PartOfAnyByClass,
    }
}

class_builder! {
    /// A built `hqdm:class_of_event`.
    ClassOfEvent, ClassOfEventBuilder => ClassOfEvent {}
}

class_builder! {
    /// A built `hqdm:role`.
    Role, RoleBuilder => Role {
        part_of_by_class => PartOfByClass,
    }
}

class_builder! {
    /// A built `hqdm:kind_of_activity`.
    KindOfActivity, KindOfActivityBuilder => KindOfActivity {
        causes_by_class => CausesByClass,
        consists_of_by_class => ConsistsOfByClass,
    }
}

class_builder! {
    /// A built `hqdm:kind_of_association`.
    KindOfAssociation, KindOfAssociationBuilder => KindOfAssociation {
        consists_of_by_class => ConsistsOfByClass,
    }
}

class_builder! {
    /// A built `hqdm:kind_of_physical_object`.
    KindOfPhysicalObject, KindOfPhysicalObjectBuilder => KindOfPhysicalObject {
        consists_of_any_by_class => ConsistsOfAnyByClass,
        part_of_any_by_class => PartOfAnyByClass,
    }
}

class_builder! {
    /// A built `hqdm:kind_of_ordinary_physical_object`.
    KindOfOrdinaryPhysicalObject,
    KindOfOrdinaryPhysicalObjectBuilder => KindOfOrdinaryPhysicalObject {
        consists_of_any_by_class => ConsistsOfAnyByClass,
        part_of_any_by_class => PartOfAnyByClass,
    }
}

class_builder! {
    /// A built `hqdm:kind_of_person`.
    KindOfPerson, KindOfPersonBuilder => KindOfPerson {
        consists_of_any_by_class => ConsistsOfAnyByClass,
        part_of_any_by_class => PartOfAnyByClass,
    }
}

class_builder! {
    /// A built `hqdm:kind_of_organization`.
    KindOfOrganization, KindOfOrganizationBuilder => KindOfOrganization {
        consists_of_any_by_class => ConsistsOfAnyByClass,
        part_of_any_by_class => PartOfAnyByClass,
    }
}

class_builder! {
    /// A built `hqdm:kind_of_system`.
    KindOfSystem, KindOfSystemBuilder => KindOfSystem {
        consists_of_any_by_class => ConsistsOfAnyByClass,
        has_component_by_class => HasComponentByClass,
        part_of_any_by_class => PartOfAnyByClass,
    }
}

class_builder! {
    /// A built `hqdm:kind_of_system_component`.
    KindOfSystemComponent, KindOfSystemComponentBuilder => KindOfSystemComponent {
        consists_of_any_by_class => ConsistsOfAnyByClass,
        part_of_any_by_class => PartOfAnyByClass,
    }
}

class_builder! {
    /// A built `hqdm:pattern`.
    Pattern, PatternBuilder => Pattern {}
}

class_builder! {
    /// A built `hqdm:requirement_specification`.
    RequirementSpecification, RequirementSpecificationBuilder => RequirementSpecification {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_class_builds() {
        let iri = Iri::new("http://example.com/ns#c1").expect("valid IRI");
        let class = ClassBuilder::new(iri).build().expect("nothing is mandatory");
        assert_eq!(class.triple_count(), 0);
    }

    #[test]
    fn role_can_have_several_superclasses() {
        let role = RoleBuilder::new(Iri::new("http://example.com/ns#r").expect("valid IRI"))
            .has_superclass(&Iri::new("http://example.com/ns#s1").expect("valid IRI"))
            .has_superclass(&Iri::new("http://example.com/ns#s2").expect("valid IRI"))
            .build()
            .expect("valid role");
        assert_eq!(role.value(Predicate::HasSuperclass).len(), 2);
    }
}

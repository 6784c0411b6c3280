//! Builders for spatio-temporal extents, states, events, and physical objects.

use crate::{BuildError, ClassId, Entity, EntityBuilder, Iri, Predicate, Reference};

extent_builder! {
    /// A built `hqdm:spatio_temporal_extent`.
    SpatioTemporalExtent, SpatioTemporalExtentBuilder => SpatioTemporalExtent {}
}

extent_builder! {
    /// A built `hqdm:state`.
    State, StateBuilder => State {}
}

extent_builder! {
    /// A built `hqdm:individual`.
    Individual, IndividualBuilder => Individual {
        member_of_kind => MemberOfKind,
    }
}

extent_builder! {
    /// A built `hqdm:period_of_time`.
    PeriodOfTime, PeriodOfTimeBuilder => PeriodOfTime {}
}

extent_builder! {
    /// A built `hqdm:possible_world`.
    PossibleWorld, PossibleWorldBuilder => PossibleWorld {
        member_of_kind => MemberOfKind,
    }
}

hqdm_builder! {
    /// A built `hqdm:event`.
    Event, EventBuilder => Event {
        aggregated_into => AggregatedInto,
        consists_of_any => ConsistsOfAny,
        member_of_any => MemberOfAny,
        member_of => MemberOf,
        part_of_any => PartOfAny,
        part_of_possible_world_m => PartOfPossibleWorld,
        temporal_part_of_any => TemporalPartOfAny,
    }
    literals {
        entity_name => EntityName,
    }
}

hqdm_builder! {
    /// A built `hqdm:point_in_time`.
    PointInTime, PointInTimeBuilder => PointInTime {
        aggregated_into => AggregatedInto,
        consists_of_any => ConsistsOfAny,
        member_of_any => MemberOfAny,
        member_of => MemberOf,
        part_of_any => PartOfAny,
        part_of_possible_world_m => PartOfPossibleWorld,
        temporal_part_of_any => TemporalPartOfAny,
    }
    literals {
        entity_name => EntityName,
    }
}

extent_builder! {
    /// A built `hqdm:state_of_physical_object`.
    StateOfPhysicalObject, StateOfPhysicalObjectBuilder => StateOfPhysicalObject {}
}

extent_builder! {
    /// A built `hqdm:physical_object`.
    PhysicalObject, PhysicalObjectBuilder => PhysicalObject {
        member_of_kind => MemberOfKind,
    }
}

extent_builder! {
    /// A built `hqdm:state_of_ordinary_physical_object`.
    StateOfOrdinaryPhysicalObject,
    StateOfOrdinaryPhysicalObjectBuilder => StateOfOrdinaryPhysicalObject {}
}

extent_builder! {
    /// A built `hqdm:ordinary_physical_object`.
    OrdinaryPhysicalObject, OrdinaryPhysicalObjectBuilder => OrdinaryPhysicalObject {
        member_of_kind => MemberOfKind,
    }
}

extent_builder! {
    /// A built `hqdm:state_of_biological_object`.
    StateOfBiologicalObject, StateOfBiologicalObjectBuilder => StateOfBiologicalObject {}
}

extent_builder! {
    /// A built `hqdm:biological_object`.
    BiologicalObject, BiologicalObjectBuilder => BiologicalObject {
        member_of_kind => MemberOfKind,
    }
}

extent_builder! {
    /// A built `hqdm:state_of_person`.
    StateOfPerson, StateOfPersonBuilder => StateOfPerson {}
}

extent_builder! {
    /// A built `hqdm:person`.
    Person, PersonBuilder => Person {
        member_of_kind => MemberOfKind,
    }
}

extent_builder! {
    /// A built `hqdm:state_of_organization`.
    StateOfOrganization, StateOfOrganizationBuilder => StateOfOrganization {}
}

extent_builder! {
    /// A built `hqdm:organization`.
    Organization, OrganizationBuilder => Organization {
        member_of_kind => MemberOfKind,
    }
}

extent_builder! {
    /// A built `hqdm:state_of_system`.
    StateOfSystem, StateOfSystemBuilder => StateOfSystem {}
}

extent_builder! {
    /// A built `hqdm:system`.
    System, SystemBuilder => System {
        member_of_kind => MemberOfKind,
    }
}

extent_builder! {
    /// A built `hqdm:state_of_system_component`.
    StateOfSystemComponent, StateOfSystemComponentBuilder => StateOfSystemComponent {}
}

extent_builder! {
    /// A built `hqdm:system_component`.
    SystemComponent, SystemComponentBuilder => SystemComponent {
        component_of_m => ComponentOf,
        member_of_kind => MemberOfKind,
    }
}

extent_builder! {
    /// A built `hqdm:functional_object`.
    FunctionalObject, FunctionalObjectBuilder => FunctionalObject {
        intended_role_m => IntendedRole,
        member_of_kind => MemberOfKind,
    }
}

extent_builder! {
    /// A built `hqdm:functional_system`.
    FunctionalSystem, FunctionalSystemBuilder => FunctionalSystem {
        intended_role_m => IntendedRole,
        member_of_kind => MemberOfKind,
    }
}

//! The HQDM predicate and class catalogs.
//!
//! Both catalogs are closed enums: every relationship a builder can set is a
//! [`Predicate`] variant, and every class a builder can produce is a
//! [`ClassId`] variant. Labels are the HQDM local names, so `label()` is what
//! appears in RDF output and in `Property Not Set` errors.

use crate::model::iris::NS_HQDM;

/// Whether a predicate relates an entity to another resource or to a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PredicateKind {
    /// `owl:ObjectProperty`: the object is an IRI.
    Object,
    /// `owl:DatatypeProperty`: the object is an `xsd:string` literal.
    Datatype,
}

macro_rules! predicate_catalog {
    ($($(#[$doc:meta])* $variant:ident => $label:literal, $kind:ident, $comment:literal;)+) => {
        /// An HQDM relationship, usable as the predicate of a triple.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Predicate {
            $($(#[$doc])* $variant,)+
        }

        impl Predicate {
            /// Every predicate in the catalog, in declaration order.
            pub const ALL: &'static [Predicate] = &[$(Predicate::$variant,)+];

            /// The HQDM local name (e.g. `"member_of_kind"`).
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Predicate::$variant => $label,)+
                }
            }

            /// Whether the predicate takes an IRI or a literal object.
            #[must_use]
            pub const fn kind(self) -> PredicateKind {
                match self {
                    $(Predicate::$variant => PredicateKind::$kind,)+
                }
            }

            /// One-line HQDM definition.
            #[must_use]
            pub const fn comment(self) -> &'static str {
                match self {
                    $(Predicate::$variant => $comment,)+
                }
            }
        }
    };
}

predicate_catalog! {
    /// `aggregated_into`
    AggregatedInto => "aggregated_into", Object,
        "A part_of relationship where the whole is the arithmetic sum of its parts.";
    /// `beginning`
    Beginning => "beginning", Object,
        "The event that is the start of a spatio-temporal extent.";
    /// `causes`
    Causes => "causes", Object,
        "An activity causes the beginning or ending of an event.";
    /// `causes_by_class`
    CausesByClass => "causes_by_class", Object,
        "Members of a kind of activity cause members of a class of event.";
    /// `component_of`
    ComponentOf => "component_of", Object,
        "A system component is a component of exactly one system.";
    /// `consists__of`
    ConsistsOfAny => "consists__of", Object,
        "The inverse of part__of.";
    /// `consists_of`
    ConsistsOf => "consists_of", Object,
        "An activity consists of its sub-activities.";
    /// `consists__of_by_class`
    ConsistsOfAnyByClass => "consists__of_by_class", Object,
        "Members of a class consist of members of another class.";
    /// `consists_of_by_class`
    ConsistsOfByClass => "consists_of_by_class", Object,
        "Members of a kind of activity or association consist of members of a role.";
    /// `consists_of_participant`
    ConsistsOfParticipant => "consists_of_participant", Object,
        "An association consists of the participants that play its roles.";
    /// `data_EntityName`
    EntityName => "data_EntityName", Datatype,
        "A literal naming the entity, such as a point in time's timestamp.";
    /// `defined_by`
    DefinedBy => "defined_by", Object,
        "A requirement is defined by exactly one requirement specification.";
    /// `determines`
    Determines => "determines", Object,
        "An activity determines the thing it brings about.";
    /// `ending`
    Ending => "ending", Object,
        "The event that is the end of a spatio-temporal extent.";
    /// `has_component_by_class`
    HasComponentByClass => "has_component_by_class", Object,
        "Members of a kind of system have members of a kind of system component.";
    /// `has_superclass`
    HasSuperclass => "has_superclass", Object,
        "Every member of the subclass is a member of the superclass.";
    /// `intended_role`
    IntendedRole => "intended_role", Object,
        "A role a functional object is intended to play.";
    /// `member__of`
    MemberOfAny => "member__of", Object,
        "The thing is a member of the class, without further specialisation.";
    /// `member_of`
    MemberOf => "member_of", Object,
        "The thing is a member of the specialised class for its type.";
    /// `member_of_kind`
    MemberOfKind => "member_of_kind", Object,
        "The thing is a member of the kind or role.";
    /// `part__of`
    PartOfAny => "part__of", Object,
        "The spatio-temporal extent is part of another.";
    /// `part__of_by_class`
    PartOfAnyByClass => "part__of_by_class", Object,
        "Members of a class are part of members of another class.";
    /// `part_of_by_class`
    PartOfByClass => "part_of_by_class", Object,
        "Members of a role are part of members of a kind of activity or association.";
    /// `part_of_plan`
    PartOfPlan => "part_of_plan", Object,
        "A requirement is part of exactly one plan.";
    /// `part_of_possible_world`
    PartOfPossibleWorld => "part_of_possible_world", Object,
        "The possible world the spatio-temporal extent belongs to.";
    /// `participant_in`
    ParticipantIn => "participant_in", Object,
        "The activity or association a participant takes part in.";
    /// `references`
    References => "references", Object,
        "A thing an activity refers to without changing it.";
    /// `represents`
    Represents => "represents", Object,
        "The thing a representation by sign stands for.";
    /// `temporal__part_of`
    TemporalPartOfAny => "temporal__part_of", Object,
        "The spatio-temporal extent is a temporal part of another.";
    /// `temporal_part_of`
    TemporalPartOf => "temporal_part_of", Object,
        "A state is a temporal part of the individual it is a state of.";
    /// `uses`
    Uses => "uses", Object,
        "The recognizing language community that uses a representation.";
    /// `value_`
    Value => "value_", Datatype,
        "The literal content of a sign.";
}

impl Predicate {
    /// Full IRI in the HQDM namespace.
    #[must_use]
    pub fn iri(self) -> String {
        format!("{NS_HQDM}{}", self.label())
    }
}

macro_rules! class_catalog {
    ($($variant:ident => $label:literal;)+) => {
        /// An HQDM class with a builder.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ClassId {
            $(
                #[doc = concat!("`hqdm:", $label, "`")]
                $variant,
            )+
        }

        impl ClassId {
            /// Every class in the catalog, in declaration order.
            pub const ALL: &'static [ClassId] = &[$(ClassId::$variant,)+];

            /// The HQDM local name (e.g. `"asset"`).
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(ClassId::$variant => $label,)+
                }
            }
        }
    };
}

class_catalog! {
    SpatioTemporalExtent => "spatio_temporal_extent";
    State => "state";
    Individual => "individual";
    PossibleWorld => "possible_world";
    PeriodOfTime => "period_of_time";
    Event => "event";
    PointInTime => "point_in_time";
    PhysicalObject => "physical_object";
    StateOfPhysicalObject => "state_of_physical_object";
    OrdinaryPhysicalObject => "ordinary_physical_object";
    StateOfOrdinaryPhysicalObject => "state_of_ordinary_physical_object";
    BiologicalObject => "biological_object";
    StateOfBiologicalObject => "state_of_biological_object";
    Person => "person";
    StateOfPerson => "state_of_person";
    Organization => "organization";
    StateOfOrganization => "state_of_organization";
    System => "system";
    StateOfSystem => "state_of_system";
    SystemComponent => "system_component";
    StateOfSystemComponent => "state_of_system_component";
    FunctionalObject => "functional_object";
    FunctionalSystem => "functional_system";
    Participant => "participant";
    Asset => "asset";
    Owner => "owner";
    Employee => "employee";
    Employer => "employer";
    Activity => "activity";
    Association => "association";
    Ownership => "ownership";
    Employment => "employment";
    TransferOfOwnership => "transfer_of_ownership";
    Plan => "plan";
    Requirement => "requirement";
    Sign => "sign";
    RepresentationBySign => "representation_by_sign";
    RecognizingLanguageCommunity => "recognizing_language_community";
    Class => "class";
    ClassOfSpatioTemporalExtent => "class_of_spatio_temporal_extent";
    ClassOfEvent => "class_of_event";
    Role => "role";
    KindOfActivity => "kind_of_activity";
    KindOfAssociation => "kind_of_association";
    KindOfPhysicalObject => "kind_of_physical_object";
    KindOfOrdinaryPhysicalObject => "kind_of_ordinary_physical_object";
    KindOfPerson => "kind_of_person";
    KindOfOrganization => "kind_of_organization";
    KindOfSystem => "kind_of_system";
    KindOfSystemComponent => "kind_of_system_component";
    Pattern => "pattern";
    RequirementSpecification => "requirement_specification";
}

impl ClassId {
    /// Full IRI in the HQDM namespace.
    #[must_use]
    pub fn iri(self) -> String {
        format!("{NS_HQDM}{}", self.label())
    }
}

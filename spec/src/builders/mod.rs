//! Typed builders, one per HQDM class.
//!
//! Each builder wraps an [`EntityBuilder`] for its class and exposes one
//! fluent setter per predicate in the class's rule table. Setters for
//! mandatory predicates carry an `_m` suffix. `build()` validates against the
//! schema and returns the typed entity:
//!
//! ```
//! use hqdm_ontology::builders::AssetBuilder;
//! use hqdm_ontology::IriBase;
//!
//! let ex = IriBase::new("ex", "http://example.com/ns#");
//! let asset = AssetBuilder::new(ex.iri("a1").unwrap())
//!     .member_of_kind_m(&ex.iri("assetRole").unwrap())
//!     .part_of_possible_world_m(&ex.iri("world").unwrap())
//!     .participant_in_m(&ex.iri("ownership1").unwrap())
//!     .build()
//!     .unwrap();
//! assert_eq!(asset.triple_count(), 3);
//! ```

macro_rules! hqdm_builder {
    (
        $(#[$doc:meta])*
        $entity:ident, $builder:ident => $class:ident {
            $($setter:ident => $pred:ident),* $(,)?
        }
        $(literals { $($lsetter:ident => $lpred:ident),* $(,)? })?
    ) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $entity(Entity);

        impl $entity {
            /// The class every value of this type was built as.
            pub const CLASS: ClassId = ClassId::$class;

            /// Borrows the underlying entity.
            #[must_use]
            pub fn entity(&self) -> &Entity {
                &self.0
            }

            /// Unwraps the underlying entity.
            #[must_use]
            pub fn into_entity(self) -> Entity {
                self.0
            }
        }

        impl std::ops::Deref for $entity {
            type Target = Entity;

            fn deref(&self) -> &Entity {
                &self.0
            }
        }

        impl Reference for $entity {
            fn iri(&self) -> &Iri {
                self.0.iri()
            }
        }

        impl From<$entity> for Entity {
            fn from(value: $entity) -> Entity {
                value.0
            }
        }

        #[doc = concat!("Builder for [`", stringify!($entity), "`].")]
        #[derive(Clone, Debug)]
        #[must_use]
        pub struct $builder {
            inner: EntityBuilder,
        }

        impl $builder {
            /// The class this builder produces.
            pub const CLASS: ClassId = ClassId::$class;

            /// The predicates this builder has setters for.
            pub const SETTERS: &'static [Predicate] =
                &[$(Predicate::$pred,)* $($(Predicate::$lpred,)*)?];

            /// Starts building a fresh entity with the given IRI.
            pub fn new(iri: Iri) -> Self {
                Self {
                    inner: EntityBuilder::new(ClassId::$class, iri),
                }
            }

            $(
                #[doc = concat!("Adds a value for [`Predicate::", stringify!($pred), "`].")]
                pub fn $setter(self, value: &impl Reference) -> Self {
                    Self {
                        inner: self.inner.with(Predicate::$pred, value),
                    }
                }
            )*

            $($(
                #[doc = concat!("Adds a literal for [`Predicate::", stringify!($lpred), "`].")]
                pub fn $lsetter(self, value: impl Into<String>) -> Self {
                    Self {
                        inner: self.inner.with_literal(Predicate::$lpred, value),
                    }
                }
            )*)?

            /// Validates and returns the entity.
            ///
            /// # Errors
            ///
            /// Returns [`BuildError::PropertyNotSet`] for the first predicate
            /// that violates the class's rule table.
            pub fn build(self) -> Result<$entity, BuildError> {
                self.inner.build().map($entity)
            }
        }
    };
}

/// Classes whose table is the bare spatio-temporal extent set, plus extras.
macro_rules! extent_builder {
    (
        $(#[$doc:meta])*
        $entity:ident, $builder:ident => $class:ident {
            $($setter:ident => $pred:ident),* $(,)?
        }
        $(literals { $($lsetter:ident => $lpred:ident),* $(,)? })?
    ) => {
        hqdm_builder! {
            $(#[$doc])*
            $entity, $builder => $class {
                aggregated_into => AggregatedInto,
                beginning => Beginning,
                consists_of_any => ConsistsOfAny,
                ending => Ending,
                member_of_any => MemberOfAny,
                member_of => MemberOf,
                part_of_any => PartOfAny,
                part_of_possible_world_m => PartOfPossibleWorld,
                temporal_part_of_any => TemporalPartOfAny,
                temporal_part_of => TemporalPartOf,
                $($setter => $pred,)*
            }
            $(literals { $($lsetter => $lpred),* })?
        }
    };
}

/// Classes whose table is the bare class set, plus extras.
macro_rules! class_builder {
    (
        $(#[$doc:meta])*
        $entity:ident, $builder:ident => $class:ident {
            $($setter:ident => $pred:ident),* $(,)?
        }
    ) => {
        hqdm_builder! {
            $(#[$doc])*
            $entity, $builder => $class {
                has_superclass => HasSuperclass,
                member_of_any => MemberOfAny,
                member_of => MemberOf,
                $($setter => $pred,)*
            }
        }
    };
}

pub mod activity;
pub mod class;
pub mod extent;
pub mod representation;

pub use activity::*;
pub use class::*;
pub use extent::*;
pub use representation::*;

pub use crate::builder::EntityBuilder;

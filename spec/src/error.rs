//! Build errors.

use thiserror::Error;

/// Why `build()` refused to hand back an entity.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A mandatory predicate has no value, or an optional predicate is
    /// present with no values.
    #[error("Property Not Set: {property}")]
    PropertyNotSet {
        /// HQDM label of the offending predicate.
        property: &'static str,
    },
    /// The predicate is not in the class's rule table.
    #[error("Property Not Allowed: {property} on {class}")]
    PropertyNotAllowed {
        /// HQDM label of the offending predicate.
        property: &'static str,
        /// HQDM label of the class being built.
        class: &'static str,
    },
    /// An IRI was stored under a datatype predicate, or a literal under an
    /// object predicate.
    #[error("Wrong Value Kind: {property}")]
    WrongValueKind {
        /// HQDM label of the offending predicate.
        property: &'static str,
    },
}

impl BuildError {
    /// The HQDM label of the predicate that failed validation.
    #[must_use]
    pub fn property(&self) -> &'static str {
        match self {
            BuildError::PropertyNotSet { property }
            | BuildError::PropertyNotAllowed { property, .. }
            | BuildError::WrongValueKind { property } => property,
        }
    }
}

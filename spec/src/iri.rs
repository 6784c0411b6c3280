//! Subject and object identifiers.
//!
//! Every entity and every reference a builder stores is an [`Iri`]. Syntax is
//! checked once, at construction, by `oxrdf`; nothing downstream re-validates.

use std::fmt;
use std::str::FromStr;

use oxrdf::NamedNode;
use thiserror::Error;

/// An absolute IRI naming an HQDM thing.
///
/// Ordering is plain string ordering, which keeps entity value sets and
/// serializer output stable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(String);

impl Iri {
    /// Parses `text` as an absolute IRI.
    ///
    /// # Errors
    ///
    /// [`IriError::Invalid`] carries the rejected text and the parser's reason.
    pub fn new(text: impl Into<String>) -> Result<Self, IriError> {
        let text = text.into();
        match NamedNode::new(text.as_str()) {
            Ok(_) => Ok(Self(text)),
            Err(e) => Err(IriError::Invalid {
                reason: e.to_string(),
                value: text,
            }),
        }
    }

    /// The IRI text, without angle brackets.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Iri {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self, IriError> {
        Iri::new(s)
    }
}

impl TryFrom<String> for Iri {
    type Error = IriError;

    fn try_from(text: String) -> Result<Self, IriError> {
        Iri::new(text)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Iri> for NamedNode {
    fn from(iri: Iri) -> NamedNode {
        NamedNode::new_unchecked(iri.0)
    }
}

/// Rejected IRI text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IriError {
    /// `value` is not an absolute IRI.
    #[error("invalid IRI `{value}`: {reason}")]
    Invalid {
        /// The text as given.
        value: String,
        /// What the parser objected to.
        reason: String,
    },
}

/// A prefix bound to a namespace IRI, used to mint and compact IRIs.
///
/// ```
/// use hqdm_ontology::IriBase;
///
/// let ex = IriBase::new("ex", "http://example.com/ns#");
/// let a1 = ex.iri("a1").unwrap();
/// assert_eq!(a1.as_str(), "http://example.com/ns#a1");
/// assert_eq!(ex.compact(&a1).as_deref(), Some("ex:a1"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IriBase {
    prefix: String,
    namespace: String,
}

impl IriBase {
    /// Creates a base from a prefix and the namespace it abbreviates.
    #[must_use]
    pub fn new(prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            namespace: namespace.into(),
        }
    }

    /// The HQDM namespace, bound to `hqdm`.
    #[must_use]
    pub fn hqdm() -> Self {
        Self::new("hqdm", crate::model::iris::NS_HQDM)
    }

    /// The prefix (e.g. `"ex"`).
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The namespace IRI text.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Mints `namespace + local`.
    ///
    /// # Errors
    ///
    /// Returns [`IriError::Invalid`] if the concatenation is not a valid IRI.
    pub fn iri(&self, local: &str) -> Result<Iri, IriError> {
        Iri::new(format!("{}{}", self.namespace, local))
    }

    /// Returns `prefix:local` if `iri` lives in this namespace and the local
    /// part is usable as a Turtle local name.
    #[must_use]
    pub fn compact(&self, iri: &Iri) -> Option<String> {
        let local = iri.as_str().strip_prefix(self.namespace.as_str())?;
        let simple = local
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        simple.then(|| format!("{}:{}", self.prefix, local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hqdm_iris_parse() {
        let iri = Iri::new("https://hqdmtop.github.io/hqdm#asset").expect("valid IRI");
        assert_eq!(iri.as_str(), "https://hqdmtop.github.io/hqdm#asset");
        assert_eq!(iri.to_string(), iri.as_str());
    }

    #[test]
    fn relative_and_spaced_text_is_rejected() {
        for text in ["asset", "not an iri", "http://example.com/a b", ""] {
            match Iri::new(text) {
                Err(IriError::Invalid { value, reason }) => {
                    assert_eq!(value, text);
                    assert!(!reason.is_empty());
                }
                Ok(iri) => panic!("{iri} should have been rejected"),
            }
        }
    }

    #[test]
    fn error_message_quotes_the_text() {
        let err = Iri::new("has space").expect_err("invalid IRI");
        assert!(err.to_string().starts_with("invalid IRI `has space`: "));
    }

    #[test]
    fn urns_are_accepted() {
        let iri: Iri = "urn:uuid:6f1c2a4e-0000-4000-8000-000000000001"
            .parse()
            .expect("valid IRI");
        assert!(iri.as_str().starts_with("urn:uuid:"));
        assert_eq!(Iri::try_from(iri.to_string()), Ok(iri));
    }

    #[test]
    fn converts_to_oxrdf_named_node() {
        let iri = IriBase::hqdm().iri("participant_in").expect("valid IRI");
        let node: NamedNode = iri.clone().into();
        assert_eq!(node.as_str(), iri.as_str());
    }

    #[test]
    fn base_mints_in_namespace() {
        let base = IriBase::new("ex", "http://example.com/ns#");
        let iri = base.iri("world").expect("valid IRI");
        assert_eq!(iri.as_str(), "http://example.com/ns#world");
    }

    #[test]
    fn base_rejects_bad_local_part() {
        let base = IriBase::new("ex", "http://example.com/ns#");
        assert!(base.iri("has space").is_err());
    }

    #[test]
    fn compact_only_inside_namespace() {
        let base = IriBase::hqdm();
        let inside = Iri::new("https://hqdmtop.github.io/hqdm#asset").expect("valid IRI");
        let outside = Iri::new("http://example.com/asset").expect("valid IRI");
        assert_eq!(base.compact(&inside).as_deref(), Some("hqdm:asset"));
        assert_eq!(base.compact(&outside), None);
    }

    #[test]
    fn compact_refuses_awkward_local_names() {
        let base = IriBase::new("ex", "http://example.com/");
        for local in ["a/b", "-lead", ""] {
            let iri = Iri::new(format!("http://example.com/{local}")).expect("valid IRI");
            assert_eq!(base.compact(&iri), None, "local part {local:?}");
        }
    }
}

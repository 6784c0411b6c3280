//! N-Triples serializer.
//!
//! Produces a valid N-Triples document (one triple per line, absolute IRIs).
//! Cardinality restrictions need blank nodes and are left to the Turtle and
//! JSON-LD serializers.

use crate::entity::{Entity, Object};
use crate::model::iris::{OWL_THING, RDF_TYPE, XSD_STRING};
use crate::model::Schema;
use crate::vocabulary::PredicateKind;

const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
const OWL_VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

/// Serializes the HQDM schema to an N-Triples string.
#[must_use]
pub fn to_ntriples(schema: &Schema) -> String {
    let mut out = String::with_capacity(64 * 1024);

    triple(&mut out, schema.namespace, RDF_TYPE, &iri(OWL_ONTOLOGY));
    triple(&mut out, schema.namespace, OWL_VERSION_INFO, &lit(schema.version));

    for class in schema.classes() {
        let id = class.id.iri();
        triple(&mut out, &id, RDF_TYPE, &iri(OWL_CLASS));
        triple(&mut out, &id, RDFS_LABEL, &lit(class.label()));
        triple(&mut out, &id, RDFS_COMMENT, &lit(class.comment));
        if class.subclass_of.is_empty() {
            triple(&mut out, &id, RDFS_SUBCLASS_OF, &iri(OWL_THING));
        }
        for parent in class.subclass_of {
            triple(&mut out, &id, RDFS_SUBCLASS_OF, &iri(&parent.iri()));
        }
    }

    for predicate in crate::Predicate::ALL {
        let id = predicate.iri();
        let type_iri = match predicate.kind() {
            PredicateKind::Datatype => OWL_DATATYPE_PROPERTY,
            PredicateKind::Object => OWL_OBJECT_PROPERTY,
        };
        triple(&mut out, &id, RDF_TYPE, &iri(type_iri));
        triple(&mut out, &id, RDFS_LABEL, &lit(predicate.label()));
        triple(&mut out, &id, RDFS_COMMENT, &lit(predicate.comment()));
        if predicate.kind() == PredicateKind::Datatype {
            triple(&mut out, &id, RDFS_RANGE, &iri(XSD_STRING));
        }
    }

    out
}

/// Serializes built entities to an N-Triples string: one `rdf:type` triple
/// per entity, then one triple per value.
#[must_use]
pub fn dataset_to_ntriples(entities: &[Entity]) -> String {
    let mut out = String::new();
    for entity in entities {
        let subject = entity.iri().as_str();
        triple(&mut out, subject, RDF_TYPE, &iri(&entity.class().iri()));
        for (predicate, object) in entity.pairs() {
            triple(&mut out, subject, &predicate.iri(), &object_term(object));
        }
    }
    out
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push('<');
    out.push_str(subj);
    out.push_str("> <");
    out.push_str(pred);
    out.push_str("> ");
    out.push_str(obj);
    out.push_str(" .\n");
}

fn iri(s: &str) -> String {
    format!("<{}>", s)
}

fn lit(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("\"{}\"^^<{}>", escaped, XSD_STRING)
}

fn object_term(object: &Object) -> String {
    match object {
        Object::Iri(target) => iri(target.as_str()),
        Object::Literal(text) => lit(text),
    }
}

//! Turtle 1.1 serializer.
//!
//! The schema document declares every class and predicate, and encodes each
//! mandatory rule as an `owl:Restriction` superclass. Dataset documents
//! compact IRIs against the caller's prefixes where the local part allows it.

use crate::entity::{Entity, Object};
use crate::iri::{Iri, IriBase};
use crate::model::{Cardinality, Schema};
use crate::vocabulary::PredicateKind;

/// Serializes the HQDM schema to a Turtle string.
#[must_use]
pub fn to_turtle(schema: &Schema) -> String {
    let mut out = String::with_capacity(64 * 1024);

    out.push_str("@prefix owl:  <http://www.w3.org/2002/07/owl#> .\n");
    out.push_str("@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n");
    out.push_str("@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n");
    out.push_str("@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .\n");
    out.push_str(&format!("@prefix hqdm: <{}> .\n\n", schema.namespace));

    out.push_str(&format!(
        "<{}>\n  a owl:Ontology ;\n  rdfs:label \"HQDM\" ;\n  owl:versionInfo \"{}\" .\n\n",
        schema.namespace, schema.version
    ));

    for module in &schema.modules {
        out.push_str(&format!("# Module: {}\n", module.name));

        for class in &module.classes {
            let mut parents: Vec<String> = class
                .subclass_of
                .iter()
                .map(|p| format!("hqdm:{}", p.label()))
                .collect();
            if parents.is_empty() {
                parents.push("owl:Thing".to_owned());
            }
            for rule in class.mandatory() {
                let restriction = match rule.cardinality {
                    Cardinality::MandatorySingular => "owl:cardinality",
                    _ => "owl:minCardinality",
                };
                parents.push(format!(
                    "[ a owl:Restriction ; owl:onProperty hqdm:{} ; {} \"1\"^^xsd:nonNegativeInteger ]",
                    rule.predicate.label(),
                    restriction
                ));
            }
            let subclasses: String = parents
                .iter()
                .map(|p| format!("  rdfs:subClassOf {} ;\n", p))
                .collect();
            out.push_str(&format!(
                "hqdm:{}\n  a owl:Class ;\n  rdfs:label {} ;\n{}  rdfs:comment {} .\n\n",
                class.label(),
                turtle_string(class.label()),
                subclasses,
                turtle_string(class.comment)
            ));
        }
    }

    out.push_str("# Predicates\n");
    for predicate in crate::Predicate::ALL {
        let (type_str, range) = match predicate.kind() {
            PredicateKind::Datatype => ("owl:DatatypeProperty", "  rdfs:range xsd:string ;\n"),
            PredicateKind::Object => ("owl:ObjectProperty", ""),
        };
        out.push_str(&format!(
            "hqdm:{}\n  a {} ;\n  rdfs:label {} ;\n{}  rdfs:comment {} .\n\n",
            predicate.label(),
            type_str,
            turtle_string(predicate.label()),
            range,
            turtle_string(predicate.comment())
        ));
    }

    out
}

/// Serializes built entities to a Turtle string, one subject block each.
///
/// IRIs inside any of `bases` are written in prefixed form; the HQDM prefix
/// is always declared.
#[must_use]
pub fn dataset_to_turtle(entities: &[Entity], bases: &[IriBase]) -> String {
    let hqdm = IriBase::hqdm();
    let mut prefixes: Vec<&IriBase> = vec![&hqdm];
    prefixes.extend(bases.iter().filter(|b| b.prefix() != hqdm.prefix()));

    let mut out = String::new();
    out.push_str("@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .\n");
    for base in &prefixes {
        out.push_str(&format!("@prefix {}: <{}> .\n", base.prefix(), base.namespace()));
    }

    for entity in entities {
        out.push('\n');
        out.push_str(&term(entity.iri(), &prefixes));
        out.push_str(&format!("\n  a hqdm:{}", entity.class().label()));
        for predicate in entity.predicates() {
            let objects: Vec<String> = entity
                .value(predicate)
                .iter()
                .map(|o| match o {
                    Object::Iri(target) => term(target, &prefixes),
                    Object::Literal(text) => turtle_string(text),
                })
                .collect();
            if objects.is_empty() {
                continue;
            }
            out.push_str(&format!(
                " ;\n  hqdm:{} {}",
                predicate.label(),
                objects.join(" , ")
            ));
        }
        out.push_str(" .\n");
    }
    out
}

fn term(iri: &Iri, prefixes: &[&IriBase]) -> String {
    prefixes
        .iter()
        .find_map(|base| base.compact(iri))
        .unwrap_or_else(|| format!("<{}>", iri))
}

fn turtle_string(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("\"{}\"", escaped)
}

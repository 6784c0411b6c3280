//! JSON-LD 1.1 serializer.
//!
//! Produces a single JSON-LD document with a `@context` and a `@graph`
//! array. The schema graph lists modules, classes (with their mandatory rules
//! as `owl:Restriction` superclasses) and predicates. Dataset graphs hold one
//! node per built entity.

use serde_json::{json, Map, Value};

use crate::entity::{Entity, Object};
use crate::model::{Cardinality, EntityClass, Schema};
use crate::vocabulary::{Predicate, PredicateKind};

/// Serializes the HQDM schema to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(schema: &Schema) -> Value {
    json!({
        "@context": build_context(schema),
        "@graph": build_graph(schema)
    })
}

/// Serializes built entities to a JSON-LD `Value`.
#[must_use]
pub fn dataset_to_json_ld(entities: &[Entity]) -> Value {
    let graph: Vec<Value> = entities.iter().map(entity_to_json).collect();
    json!({
        "@context": build_context(Schema::hqdm()),
        "@graph": graph
    })
}

/// Returns the rule tables as plain JSON: one object per class, keyed by
/// class label, listing each rule's predicate, kind, and cardinality.
#[must_use]
pub fn rule_tables(schema: &Schema) -> Value {
    let mut tables = Map::new();
    for class in schema.classes() {
        let rules: Vec<Value> = class
            .rules
            .iter()
            .map(|r| {
                json!({
                    "predicate": r.predicate.label(),
                    "kind": r.predicate.kind(),
                    "cardinality": r.cardinality
                })
            })
            .collect();
        tables.insert(class.label().to_owned(), Value::Array(rules));
    }
    Value::Object(tables)
}

fn build_context(schema: &Schema) -> Value {
    let mut ctx = Map::new();
    ctx.insert("owl".to_owned(), json!("http://www.w3.org/2002/07/owl#"));
    ctx.insert("rdf".to_owned(), json!("http://www.w3.org/1999/02/22-rdf-syntax-ns#"));
    ctx.insert("rdfs".to_owned(), json!("http://www.w3.org/2000/01/rdf-schema#"));
    ctx.insert("xsd".to_owned(), json!("http://www.w3.org/2001/XMLSchema#"));
    ctx.insert("hqdm".to_owned(), json!(schema.namespace));
    Value::Object(ctx)
}

fn build_graph(schema: &Schema) -> Value {
    let mut nodes: Vec<Value> = Vec::new();

    nodes.push(json!({
        "@id": schema.namespace,
        "@type": "owl:Ontology",
        "rdfs:label": "HQDM",
        "owl:versionInfo": schema.version
    }));

    for module in &schema.modules {
        for class in &module.classes {
            nodes.push(class_to_json(class));
        }
    }

    for predicate in Predicate::ALL {
        nodes.push(predicate_to_json(*predicate));
    }

    Value::Array(nodes)
}

fn class_to_json(class: &EntityClass) -> Value {
    let mut subclass_of: Vec<Value> = class
        .subclass_of
        .iter()
        .map(|p| json!({ "@id": format!("hqdm:{}", p.label()) }))
        .collect();
    if subclass_of.is_empty() {
        subclass_of.push(json!({ "@id": "owl:Thing" }));
    }
    for rule in class.mandatory() {
        let key = match rule.cardinality {
            Cardinality::MandatorySingular => "owl:cardinality",
            _ => "owl:minCardinality",
        };
        let mut restriction = json!({
            "@type": "owl:Restriction",
            "owl:onProperty": { "@id": format!("hqdm:{}", rule.predicate.label()) }
        });
        restriction[key] = json!({ "@value": "1", "@type": "xsd:nonNegativeInteger" });
        subclass_of.push(restriction);
    }

    json!({
        "@id": format!("hqdm:{}", class.label()),
        "@type": "owl:Class",
        "rdfs:label": class.label(),
        "rdfs:comment": class.comment,
        "rdfs:subClassOf": subclass_of
    })
}

fn predicate_to_json(predicate: Predicate) -> Value {
    let mut node = json!({
        "@id": format!("hqdm:{}", predicate.label()),
        "rdfs:label": predicate.label(),
        "rdfs:comment": predicate.comment()
    });
    match predicate.kind() {
        PredicateKind::Datatype => {
            node["@type"] = json!("owl:DatatypeProperty");
            node["rdfs:range"] = json!({ "@id": "xsd:string" });
        }
        PredicateKind::Object => {
            node["@type"] = json!("owl:ObjectProperty");
        }
    }
    node
}

fn entity_to_json(entity: &Entity) -> Value {
    let mut node = Map::new();
    node.insert("@id".to_owned(), json!(entity.iri().as_str()));
    node.insert(
        "@type".to_owned(),
        json!(format!("hqdm:{}", entity.class().label())),
    );
    for predicate in entity.predicates() {
        let values: Vec<Value> = entity
            .value(predicate)
            .iter()
            .map(|o| match o {
                Object::Iri(target) => json!({ "@id": target.as_str() }),
                Object::Literal(text) => json!(text),
            })
            .collect();
        node.insert(format!("hqdm:{}", predicate.label()), Value::Array(values));
    }
    Value::Object(node)
}

//! Serializers for the HQDM schema and for built entities.
//!
//! Each format covers both the schema (OWL classes and properties) and
//! datasets of built [`Entity`](crate::Entity) values:
//! - **JSON-LD** ([`jsonld`]): schema output to `public/hqdm.schema.json`
//! - **Turtle** ([`turtle`]): schema output to `public/hqdm.schema.ttl`
//! - **N-Triples** ([`ntriples`]): schema output to `public/hqdm.schema.nt`
//!
//! [`jsonld::rule_tables`] additionally dumps the plain per-class rule tables
//! to `public/hqdm.rules.json`.

pub mod jsonld;
pub mod ntriples;
pub mod turtle;

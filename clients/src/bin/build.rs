//! `hqdm-build` writes the HQDM schema artifacts, and optionally a small sample
//! dataset assembled with the typed builders, to the output directory.
//!
//! **Outputs:**
//! - `<out>/hqdm.schema.json`: JSON-LD 1.1
//! - `<out>/hqdm.schema.ttl`: Turtle 1.1
//! - `<out>/hqdm.schema.nt`: N-Triples
//! - `<out>/hqdm.rules.json`: per-class rule tables
//! - `<out>/sample.{jsonld,ttl,nt}` with `--sample`
//!
//! **Usage:**
//! ```text
//! hqdm-build [--out <path>] [--sample] [--base <iri>]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use hqdm_ontology::builders::{
    AssetBuilder, KindOfAssociationBuilder, OwnerBuilder, OwnershipBuilder, PersonBuilder,
    PossibleWorldBuilder, RoleBuilder,
};
use hqdm_ontology::serializer::{jsonld, ntriples, turtle};
use hqdm_ontology::{Entity, IriBase, Schema};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build the HQDM schema artifacts.
#[derive(Parser)]
#[command(name = "hqdm-build", about = "Build HQDM schema artifacts")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Also build and write a sample ownership dataset.
    #[arg(long)]
    sample: bool,

    /// Namespace the sample dataset's IRIs are minted in.
    #[arg(long, default_value = "http://example.com/ns#")]
    base: String,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let schema = Schema::hqdm();
    info!(
        version = schema.version,
        modules = schema.modules.len(),
        classes = schema.class_count(),
        rules = schema.rule_count(),
        "loaded HQDM schema"
    );

    let json_value = jsonld::to_json_ld(schema);
    let json_str = serde_json::to_string_pretty(&json_value)
        .context("Failed to serialize schema to JSON-LD")?;
    write(out, "hqdm.schema.json", &json_str)?;
    write(out, "hqdm.schema.ttl", &turtle::to_turtle(schema))?;
    write(out, "hqdm.schema.nt", &ntriples::to_ntriples(schema))?;

    let rules_str = serde_json::to_string_pretty(&jsonld::rule_tables(schema))
        .context("Failed to serialize rule tables")?;
    write(out, "hqdm.rules.json", &rules_str)?;

    if args.sample {
        let ex = IriBase::new("ex", args.base.as_str());
        let entities = sample(&ex)?;
        info!(entities = entities.len(), "built sample dataset");

        let json_str = serde_json::to_string_pretty(&jsonld::dataset_to_json_ld(&entities))
            .context("Failed to serialize sample to JSON-LD")?;
        write(out, "sample.jsonld", &json_str)?;
        write(out, "sample.ttl", &turtle::dataset_to_turtle(&entities, &[ex]))?;
        write(out, "sample.nt", &ntriples::dataset_to_ntriples(&entities))?;
    }

    info!("build complete");
    Ok(())
}

fn write(out: &Path, name: &str, contents: &str) -> Result<()> {
    let path = out.join(name);
    fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "written");
    Ok(())
}

/// An asset owned by a person, within one possible world.
fn sample(ex: &IriBase) -> Result<Vec<Entity>> {
    let iri = |local: &str| {
        ex.iri(local)
            .with_context(|| format!("Invalid sample IRI for '{local}' under {}", ex.namespace()))
    };

    let world = PossibleWorldBuilder::new(iri("world")?)
        .part_of_possible_world_m(&iri("world")?)
        .build()?;
    let asset_role = RoleBuilder::new(iri("assetRole")?).build()?;
    let owner_role = RoleBuilder::new(iri("ownerRole")?).build()?;
    let ownership_kind = KindOfAssociationBuilder::new(iri("ownershipKind")?)
        .consists_of_by_class(&asset_role)
        .consists_of_by_class(&owner_role)
        .build()?;

    let ownership_iri = iri("ownership1")?;
    let asset = AssetBuilder::new(iri("a1")?)
        .member_of_kind_m(&asset_role)
        .part_of_possible_world_m(&world)
        .participant_in_m(&ownership_iri)
        .build()?;
    let owner = OwnerBuilder::new(iri("o1")?)
        .member_of_kind_m(&owner_role)
        .part_of_possible_world_m(&world)
        .participant_in_m(&ownership_iri)
        .temporal_part_of(&iri("alice")?)
        .build()?;
    let person = PersonBuilder::new(iri("alice")?)
        .part_of_possible_world_m(&world)
        .build()?;
    let ownership = OwnershipBuilder::new(ownership_iri)
        .consists_of_participant_m(&asset)
        .consists_of_participant_m(&owner)
        .member_of_kind_m(&ownership_kind)
        .part_of_possible_world_m(&world)
        .build()?;

    Ok(vec![
        world.into(),
        asset_role.into(),
        owner_role.into(),
        ownership_kind.into(),
        asset.into(),
        owner.into(),
        person.into(),
        ownership.into(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use hqdm_ontology::{ClassId, Predicate};

    fn ex() -> IriBase {
        IriBase::new("ex", "http://example.com/ns#")
    }

    #[test]
    fn sample_builds_every_entity() {
        let entities = sample(&ex()).expect("sample builds");
        let classes: Vec<ClassId> = entities.iter().map(Entity::class).collect();
        assert_eq!(
            classes,
            vec![
                ClassId::PossibleWorld,
                ClassId::Role,
                ClassId::Role,
                ClassId::KindOfAssociation,
                ClassId::Asset,
                ClassId::Owner,
                ClassId::Person,
                ClassId::Ownership,
            ]
        );
    }

    #[test]
    fn sample_ownership_links_both_participants() {
        let entities = sample(&ex()).expect("sample builds");
        let ownership = entities
            .iter()
            .find(|e| e.class() == ClassId::Ownership)
            .expect("ownership present");
        assert_eq!(ownership.value(Predicate::ConsistsOfParticipant).len(), 2);
    }

    #[test]
    fn sample_rejects_unusable_base() {
        let bad = IriBase::new("ex", "not a namespace ");
        assert!(sample(&bad).is_err());
    }

    #[test]
    fn sample_serializes_in_every_format() {
        let ex = ex();
        let entities = sample(&ex).expect("sample builds");
        let nt = ntriples::dataset_to_ntriples(&entities);
        let triples: usize = entities.iter().map(|e| e.triple_count() + 1).sum();
        assert_eq!(nt.lines().count(), triples);
        assert!(turtle::dataset_to_turtle(&entities, &[ex]).contains("ex:a1\n  a hqdm:asset"));
        let json = jsonld::dataset_to_json_ld(&entities);
        assert_eq!(json["@graph"].as_array().map(Vec::len), Some(entities.len()));
    }
}
